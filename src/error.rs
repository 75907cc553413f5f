//! Error type for the blending filters.

/// Result alias used by the fallible entry points of this crate.
pub type Result<T> = std::result::Result<T, AntialiasError>;

/// Precondition failures detected before any pixel is filtered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AntialiasError {
    /// A grid that must match the colour image has a different size.
    #[error("{grid} is {}x{}, expected {}x{}", found.0, found.1, expected.0, expected.1)]
    DimensionMismatch {
        grid: &'static str,
        expected: (u32, u32),
        found: (u32, u32),
    },
    /// The colour image has no pixels.
    #[error("image has zero width or height")]
    EmptyImage,
}

/// Checks that `found` has the same size as the reference colour image.
pub(crate) fn ensure_dimensions(
    grid: &'static str,
    expected: (u32, u32),
    found: (u32, u32),
) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(AntialiasError::DimensionMismatch {
            grid,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_grid() {
        let err = ensure_dimensions("edge strength", (4, 3), (3, 4)).unwrap_err();
        assert_eq!(err.to_string(), "edge strength is 3x4, expected 4x3");
    }

    #[test]
    fn matching_dimensions_pass() {
        assert!(ensure_dimensions("gx", (7, 2), (7, 2)).is_ok());
    }
}
