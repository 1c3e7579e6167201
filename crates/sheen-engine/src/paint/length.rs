//! Length / percentage operands.
//!
//! Gradient control points arrive as text tokens: either a bare number in
//! user units (`"25"`, `"-3.5"`) or a percentage of the reference rectangle
//! (`"50%"`).

use std::str::FromStr;

use super::GradientError;

/// A parsed control-point operand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Length {
    /// Absolute user units; the render scale applies.
    Number(f32),
    /// Percentage of the reference extent (`50%` is stored as `50.0`).
    Percent(f32),
}

impl Length {
    /// Resolves against one axis of the reference rectangle.
    ///
    /// `offset` is added in both forms. `scale` only applies to bare numbers;
    /// percentages are taken of `extent`, which is already in device units.
    #[inline]
    pub fn resolve(self, extent: f32, offset: f32, scale: f32) -> f32 {
        match self {
            Length::Percent(p) => p / 100.0 * extent + offset,
            Length::Number(v) => v * scale + offset,
        }
    }
}

impl FromStr for Length {
    type Err = GradientError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        let (digits, percent) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        let value = digits
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GradientError::MalformedOperand(token.to_owned()))?;

        Ok(if percent { Length::Percent(value) } else { Length::Number(value) })
    }
}

/// Parses `token` and resolves it against one axis.
///
/// See [`Length::resolve`] for the offset/scale rules.
pub fn from_percentage_to_float(
    token: &str,
    extent: f32,
    offset: f32,
    scale: f32,
) -> Result<f32, GradientError> {
    Ok(token.parse::<Length>()?.resolve(extent, offset, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(token: &str) {
        assert_eq!(
            token.parse::<Length>(),
            Err(GradientError::MalformedOperand(token.to_owned())),
            "token {token:?} should be rejected"
        );
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_bare_number() {
        assert_eq!("25".parse::<Length>(), Ok(Length::Number(25.0)));
        assert_eq!("-3.5".parse::<Length>(), Ok(Length::Number(-3.5)));
    }

    #[test]
    fn parses_percentage() {
        assert_eq!("50%".parse::<Length>(), Ok(Length::Percent(50.0)));
        assert_eq!("-12.5%".parse::<Length>(), Ok(Length::Percent(-12.5)));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(" 10% ".parse::<Length>(), Ok(Length::Percent(10.0)));
    }

    #[test]
    fn rejects_garbage() {
        malformed("");
        malformed("%");
        malformed("abc");
        malformed("50%%");
        malformed("10px");
        malformed("inf");
        malformed("NaN%");
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn percent_ignores_scale() {
        let v = from_percentage_to_float("50%", 200.0, 10.0, 3.0).unwrap();
        assert_eq!(v, 110.0);
    }

    #[test]
    fn number_applies_scale_and_offset() {
        let v = from_percentage_to_float("20", 200.0, 10.0, 3.0).unwrap();
        assert_eq!(v, 70.0);
    }

    #[test]
    fn zero_extent_percentage_is_offset() {
        assert_eq!(from_percentage_to_float("100%", 0.0, 7.0, 1.0).unwrap(), 7.0);
    }

    #[test]
    fn malformed_token_propagates() {
        assert_eq!(
            from_percentage_to_float("wide", 100.0, 0.0, 1.0),
            Err(GradientError::MalformedOperand("wide".into()))
        );
    }
}
