use thiserror::Error;

/// Errors reported when parsing color representations.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ColorError {
    #[error("Invalid hexadecimal color {0:?}.")]
    InvalidHex(String),
    #[error("Invalid HSL color {0:?}.")]
    InvalidHsl(String),
    #[error("Unknown color name {0:?}.")]
    UnknownName(String),
}
