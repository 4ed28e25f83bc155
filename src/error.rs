/// Convenience result type used across the crate.
pub type ChromaShiftResult<T> = Result<T, ChromaShiftError>;

/// Top-level error taxonomy used by buffer and adapter APIs.
///
/// All failures are detected at a boundary (buffer construction, direct
/// coordinate access, byte unpacking, parameter parsing) and surfaced to the
/// caller immediately. The shift engine itself never fails on a constructed
/// [`PixelBuffer`](crate::PixelBuffer): its sample coordinates are clamped
/// into range before any access.
#[derive(thiserror::Error, Debug)]
pub enum ChromaShiftError {
    /// A width or height of zero (or a pixel count that overflows).
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Supplied pixel or byte data inconsistent with the declared geometry.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Direct coordinate access outside `[0, width) x [0, height)`.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Invalid adapter-level input (offset parameters, threading options,
    /// unsupported bitmap layouts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromaShiftError {
    /// Build a [`ChromaShiftError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`ChromaShiftError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`ChromaShiftError::OutOfBounds`] value.
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build a [`ChromaShiftError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ChromaShiftError::invalid_dimension("x")
                .to_string()
                .contains("invalid dimension:")
        );
        assert!(
            ChromaShiftError::dimension_mismatch("x")
                .to_string()
                .contains("dimension mismatch:")
        );
        assert!(
            ChromaShiftError::out_of_bounds("x")
                .to_string()
                .contains("out of bounds:")
        );
        assert!(
            ChromaShiftError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ChromaShiftError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
