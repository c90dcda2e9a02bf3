/// Distances below this are treated as zero: the term that would divide by
/// them is skipped instead of producing a non-finite value.
pub const NEAR_ZERO: f32 = 1e-3;

/// Length of the offset `(dx, dy)`.
#[inline]
pub fn dist(dx: f32, dy: f32) -> f32 {
    dx.hypot(dy)
}
