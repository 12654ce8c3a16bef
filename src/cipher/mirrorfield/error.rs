use std::fmt;

/// Errors surfaced by the mirror-field key loader and engine.
///
/// None of these are recovered internally; a [`MirrorField`](super::MirrorField)
/// that returns one of these from [`set`](super::MirrorField::set) or
/// [`validate`](super::MirrorField::validate) is left in a terminal invalid
/// state, and a failing [`crypt`](super::MirrorField::crypt) call leaves all
/// engine state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorFieldError {
    /// A grid byte fed to `set` during loading was not one of `/`, `\`, `-`,
    /// or ` `.
    InvalidKeyGlyph { byte: u8 },
    /// `validate` found two perimeter slots holding the same byte.
    DuplicatePerimeter { byte: u8 },
    /// More bytes were fed to `set` than the field expects (`N*N + 4*N`), or
    /// a whole-buffer key didn't match that length.
    OverflowingKey,
    /// `crypt` was called with a byte that isn't on the perimeter.
    UnknownInput { byte: u8 },
    /// `crypt` was called before a successful `validate`.
    NotReady,
}

impl fmt::Display for MirrorFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorFieldError::InvalidKeyGlyph { byte } => {
                write!(f, "invalid mirror glyph in key: {byte:#04x}")
            }
            MirrorFieldError::DuplicatePerimeter { byte } => {
                write!(f, "duplicate perimeter character: {byte:#04x}")
            }
            MirrorFieldError::OverflowingKey => {
                f.write_str("key does not have exactly N*N + 4*N bytes")
            }
            MirrorFieldError::UnknownInput { byte } => {
                write!(f, "input byte is not present on the perimeter: {byte:#04x}")
            }
            MirrorFieldError::NotReady => f.write_str("mirror field has not been validated yet"),
        }
    }
}

impl std::error::Error for MirrorFieldError {}
