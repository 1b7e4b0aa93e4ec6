/// Convenience result type used across ctm2d.
pub type CtmResult<T> = Result<T, CtmError>;

/// Top-level error taxonomy used by the CTM APIs.
#[derive(thiserror::Error, Debug)]
pub enum CtmError {
    /// Matrix input rejected before touching the surface: fewer than six
    /// values, or the all-zero (degenerate) matrix.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CtmError {
    /// Build a [`CtmError::InvalidMatrix`] value.
    pub fn invalid_matrix(msg: impl Into<String>) -> Self {
        Self::InvalidMatrix(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
