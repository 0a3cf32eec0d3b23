use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the date picker popup opens relative to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum DatePickerPosition {
    Left,
    #[default]
    Right,
    Center,
    LeftCenter,
    RightCenter,
    TopLeft,
    TopRight,
}

impl DatePickerPosition {
    pub const ALL: [DatePickerPosition; 7] = [
        Self::Left,
        Self::Right,
        Self::Center,
        Self::LeftCenter,
        Self::RightCenter,
        Self::TopLeft,
        Self::TopRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Center => "CENTER",
            Self::LeftCenter => "LEFT-CENTER",
            Self::RightCenter => "RIGHT-CENTER",
            Self::TopLeft => "TOP-LEFT",
            Self::TopRight => "TOP-RIGHT",
        }
    }

    /// Lower-case suffix for BEM modifier classes, e.g. `date-input--left-center`.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::LeftCenter => "left-center",
            Self::RightCenter => "right-center",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
        }
    }
}

impl fmt::Display for DatePickerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePickerPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown date picker position: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_right() {
        assert_eq!(DatePickerPosition::default(), DatePickerPosition::Right);
    }

    #[test]
    fn parses_display_form() {
        for position in DatePickerPosition::ALL {
            assert_eq!(position.to_string().parse::<DatePickerPosition>(), Ok(position));
        }
        assert_eq!("left-center".parse::<DatePickerPosition>(), Ok(DatePickerPosition::LeftCenter));
        assert!("BOTTOM".parse::<DatePickerPosition>().is_err());
    }

    #[test]
    fn serializes_as_screaming_kebab() {
        let json = serde_json::to_string(&DatePickerPosition::TopRight).unwrap();
        assert_eq!(json, "\"TOP-RIGHT\"");
        let back: DatePickerPosition = serde_json::from_str("\"LEFT\"").unwrap();
        assert_eq!(back, DatePickerPosition::Left);
    }

    #[test]
    fn css_modifier_is_lower_kebab() {
        assert_eq!(DatePickerPosition::RightCenter.css_modifier(), "right-center");
        assert_eq!(DatePickerPosition::Right.css_modifier(), "right");
    }
}
