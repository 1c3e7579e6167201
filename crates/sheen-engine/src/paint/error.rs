use thiserror::Error;

/// Errors produced while resolving a brush into a paint description.
///
/// Every error is terminal for the `resolve` call that produced it. The brush
/// itself is never modified, so retrying with corrected input is safe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// The brush declaration cannot be resolved as configured
    /// (bad stop stream length, missing user-space rect, too few operands).
    #[error("invalid gradient spec: {0}")]
    InvalidSpec(String),

    /// A radial gradient radius resolved to zero, so the elliptical
    /// correction `ry / rx` is undefined.
    #[error("degenerate radial gradient radius (rx = {rx}, ry = {ry})")]
    DegenerateRadius { rx: f32, ry: f32 },

    /// A length/percentage operand is not numeric.
    #[error("malformed gradient operand: {0:?}")]
    MalformedOperand(String),
}

impl GradientError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }
}
