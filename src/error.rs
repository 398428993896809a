use thiserror::Error;

/// Top-level error type for the planar geometry library.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Errors raised while encoding or decoding the JSON interchange format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} components while decoding {target}, but got {actual}")]
    Arity {
        target: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} while decoding {target}, found {found}")]
    TypeMismatch {
        target: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field `{field}` while decoding {target}")]
    MissingField {
        target: &'static str,
        field: &'static str,
    },
}

/// Count mismatch between a numeric sequence and the shape it should fill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("expected {expected} floats while parsing geometry, but got {actual} instead")]
    Exact { expected: usize, actual: usize },

    #[error(
        "expected a positive multiple of {multiple} floats while parsing geometry, but got {actual} instead"
    )]
    Multiple { multiple: usize, actual: usize },
}

/// Errors related to the PostgreSQL geometric text format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WireError {
    #[error(transparent)]
    Arity(#[from] ArityError),

    #[error("expected a sequence of floats from the driver, got {found} instead")]
    TypeMismatch { found: &'static str },

    #[error("{0} encoding not yet implemented")]
    Unimplemented(&'static str),

    #[error("invalid number `{token}` in geometric text")]
    Syntax { token: String },

    #[error("error while parsing data for {target}: {source}")]
    Scan {
        target: &'static str,
        source: Box<WireError>,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
