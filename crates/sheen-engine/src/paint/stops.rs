//! Stop-table decoding.
//!
//! Stops arrive as one flat `f32` stream. For `n` stops the stream holds all
//! color quads first, then all positions:
//!
//! ```text
//! [ r0 g0 b0 a0  r1 g1 b1 a1 ... r(n-1) g(n-1) b(n-1) a(n-1)  t0 t1 ... t(n-1) ]
//!   └──────────────────── 4n color channels ───────────────┘ └── n positions ┘
//! ```
//!
//! Stop `i` reads its color from `4i..4i + 4` and its position from `4n + i`.

use super::{ColorStop, GradientError, Rgba8};

/// Number of stream values per stop (four color channels, one position).
pub const VALUES_PER_STOP: usize = 5;

/// Decoded stops as parallel arrays.
///
/// Invariant: `positions.len() == colors.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopTable {
    positions: Vec<f32>,
    colors: Vec<Rgba8>,
}

impl StopTable {
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorStop> + '_ {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(&t, &color)| ColorStop::new(t, color))
    }

    pub fn into_stops(self) -> Vec<ColorStop> {
        self.iter().collect()
    }
}

/// Decodes a flat stop stream, multiplying each stop's alpha by `opacity`.
///
/// Positions are copied through unchanged (no sorting or clamping). Fails with
/// [`GradientError::InvalidSpec`] unless the stream length is a positive
/// multiple of [`VALUES_PER_STOP`].
pub fn build_stop_table(stream: &[f32], opacity: f32) -> Result<StopTable, GradientError> {
    if stream.is_empty() || stream.len() % VALUES_PER_STOP != 0 {
        return Err(GradientError::invalid(format!(
            "stop stream length {} is not a positive multiple of {VALUES_PER_STOP}",
            stream.len()
        )));
    }

    let count = stream.len() / VALUES_PER_STOP;
    let (quads, positions) = stream.split_at(count * 4);

    let colors = quads
        .chunks_exact(4)
        .map(|q| Rgba8::from_unit(q[0], q[1], q[2], q[3] * opacity))
        .collect();

    Ok(StopTable { positions: positions.to_vec(), colors })
}
