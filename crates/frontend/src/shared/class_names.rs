/// Joins the present, non-blank class names with single spaces.
///
/// ```
/// use form_fields::shared::class_names::class_names;
///
/// let has_error = true;
/// assert_eq!(
///     class_names([Some("form__input"), has_error.then_some("border-red-500"), None]),
///     "form__input border-red-500"
/// );
/// ```
pub fn class_names<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
