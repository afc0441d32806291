use thiserror::Error;

/// Errors from parsing user-supplied item and io descriptions.
///
/// The rate helpers themselves never fail; bad numbers come out as `inf`/`NaN`.
#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("unknown item type '{0}' (expected unknown, solid, liquid, gas or special)")]
    UnknownItemType(String),

    #[error("unknown extended type '{0}'")]
    UnknownExType(String),

    #[error("invalid io spec '{0}', expected NAME=COUNT[:ITEM_TYPE[:EX_TYPE]]")]
    InvalidIoSpec(String),

    #[error("invalid count '{value}' in '{spec}'")]
    InvalidCount { spec: String, value: String },

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
