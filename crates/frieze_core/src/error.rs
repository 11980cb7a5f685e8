//! Border error types

use thiserror::Error;

/// Errors raised while configuring or painting a border
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BorderError {
    /// Geometry that cannot be drawn: negative bounds, non-finite coordinates
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A required option was never set
    #[error("{border} border requires `{field}` to be set")]
    MissingConfiguration {
        border: &'static str,
        field: &'static str,
    },

    /// An option holds a value the border cannot work with
    #[error("Invalid {border} configuration: {reason}")]
    InvalidConfiguration { border: &'static str, reason: String },

    /// Curve flattening did not converge
    #[error("Bezier subdivision exceeded {depth} levels")]
    SubdivisionLimit { depth: u32 },

    /// A color string that is not `#rrggbb` or `#rrggbbaa`
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Border catalog could not be read or resolved
    #[error("Border catalog error: {0}")]
    Catalog(String),
}

/// Result type for border operations
pub type Result<T> = std::result::Result<T, BorderError>;
