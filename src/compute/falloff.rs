//! Falloff window construction for localized curve deformation.
//!
//! A push or pull affects a contiguous, odd-sized window of profile points
//! centered on the point nearest the contact height. Each slot in the window
//! carries a weight that scales how strongly that point deforms.
//!
//! The weight curve has two long-standing quirks that sculpting feel is
//! calibrated against:
//!
//! - The `max_deform` spike is written to slot `window/2 + 1`, one past the
//!   true center, and is then overwritten by the mirrored sine half for every
//!   window of 3 or more. The surviving weights are `sin(i / window)` rising
//!   toward the window edges, with the exact center slot left at 0.
//! - The mutation loop visits `start..end` half-open while `end` is the
//!   rightmost intended index, so that index is never touched.
//!
//! Do not "fix" either of these; doing so changes how every stroke lands.

/// Number of window slots for a curve of `curve_len` points and an affected
/// fraction `threshold` in (0, 1]. Always odd so the window has a center.
#[inline]
pub fn window_len(curve_len: usize, threshold: f32) -> usize {
    let mut len = (curve_len as f32 * threshold).floor() as usize;
    if len % 2 == 0 {
        len += 1;
    }
    len
}

/// A deformation window: the index range it spans and the per-slot weights.
///
/// `start` and `end` are signed because a window centered near either end of
/// the curve legitimately extends past it; out-of-range indices are simply
/// skipped by the mutation loop.
#[derive(Debug, Clone)]
pub struct DeformWindow {
    /// First curve index in the window (may be negative).
    pub start: isize,
    /// One-past-rightmost bound of the mutation loop (may exceed the curve).
    pub end: isize,
    /// Per-slot weights, indexed by `curve_index - start`.
    pub weights: Vec<f32>,
}

impl DeformWindow {
    /// Build the window around `center` for a curve of `curve_len` points.
    ///
    /// `max_deform` is the per-call deformation bound written to the spike
    /// slot (see the module docs for why it rarely survives).
    pub fn around(center: usize, curve_len: usize, threshold: f32, max_deform: f32) -> Self {
        let len = window_len(curve_len, threshold);
        let half = (len as isize - 1) / 2;
        let start = center as isize - half;
        let end = center as isize + half;

        let mut weights = vec![0.0f32; len];

        // Spike one past the true center; out of bounds only when len == 1,
        // in which case the window mutates nothing anyway.
        let spike = len / 2 + 1;
        if spike < len {
            weights[spike] = max_deform;
        }

        // Sine ramp over the left half, mirrored onto the right half. The
        // mirror lands on the spike slot and overwrites it for len >= 3.
        for i in 0..(len - 1) / 2 {
            let w = (i as f32 / len as f32).sin();
            weights[i] = w;
            weights[len - 1 - i] = w;
        }

        Self {
            start,
            end,
            weights,
        }
    }

    /// Weight for the curve index `index`, which must lie in
    /// `start..start + weights.len()`.
    #[inline]
    pub fn weight(&self, index: isize) -> f32 {
        self.weights[(index - self.start) as usize]
    }
}
