//! Crate-level error types.

use std::fmt;

/// Errors produced by the fringe-lightbox crate.
///
/// The animator itself never returns these to its caller: surface failures
/// are logged and replaced by a terminal style assignment. They surface only
/// from [`Surface`](crate::surface::Surface) implementations and from options
/// file I/O.
#[derive(Debug)]
pub enum LightboxError {
    /// A DOM call or animation primitive failed.
    Dom(String),
    /// The platform lacks a capability the call needs.
    Unsupported(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LightboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::Unsupported(what) => {
                write!(f, "unsupported by this surface: {what}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LightboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LightboxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
