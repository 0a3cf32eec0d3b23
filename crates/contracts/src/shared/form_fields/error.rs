use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateValueError {
    #[error("invalid date '{input}', expected yyyy-mm-dd")]
    InvalidFormat { input: String },
}
