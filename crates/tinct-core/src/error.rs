//! Error types for the tinct domain layer.
//!
//! Model-level "failures" (missing selection, stale stop ids, the
//! minimum-stop floor) are enumerated outcomes on the operations themselves,
//! not errors. Only the parse boundary can actually fail.

/// Failure to parse a textual color representation.
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("hex color contains non-ASCII characters")]
    NonAscii,
    #[error("expected 6 or 8 hex digits, got {0}")]
    HexLength(usize),
    #[error("invalid hex digit in {component} component: {source}")]
    HexDigit {
        component: &'static str,
        source: std::num::ParseIntError,
    },
}
