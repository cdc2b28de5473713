//! The profile curve: an ordered point sequence describing the silhouette of
//! a lathed surface of revolution, with localized push/pull deformation.

use log::trace;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::schema::ProfileConfig;

use super::falloff::DeformWindow;
use super::vec3::Vec3;

/// Hard ceiling on per-call deformation for a push.
const PUSH_DEFORM_MAX: f32 = 0.01;
/// Floor that keeps a push from degenerating to a no-op at tiny strengths.
const PUSH_DEFORM_MIN: f32 = 0.0001;
/// Divisor mapping raw contact strength to a deformation magnitude.
const PUSH_STRENGTH_SCALE: f32 = 20.0;
/// Fixed per-call deformation magnitude for a pull.
const PULL_DEFORM: f32 = 0.005;

/// Errors from curve operations.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// Smoothing is part of the sculpting contract but has no implementation.
    #[error("Smoothing is not supported")]
    SmoothingUnsupported,
}

/// The radial profile of a surface of revolution.
///
/// Points are ordered bottom-to-top: x is always 0, y is height along the
/// revolution axis (non-decreasing across the sequence), z is the signed
/// radial offset from the axis at that height. z may cross zero under
/// deformation; the radius inverting is allowed, not an error.
///
/// A curve has exactly one owner and is mutated in place; push and pull are
/// never called concurrently on the same curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCurve {
    points: Vec<Vec3>,
}

impl ProfileCurve {
    /// Build a vertical curve procedurally from `config`, drawing radius
    /// jitter from `rng`.
    ///
    /// The curve gets `subdivisions + 2` points: both ends pinned to the axis
    /// at y = 0 and y = `height`, interior point i at height
    /// `i * height / subdivisions` with radius `radius + u`,
    /// u uniform in `[-variance, +variance)`. One independent draw per
    /// interior point, so a seeded `rng` reproduces the curve exactly.
    pub fn generate<R: Rng + ?Sized>(config: &ProfileConfig, rng: &mut R) -> Self {
        let step = config.height / config.subdivisions as f32;

        let mut points = Vec::with_capacity(config.subdivisions + 2);
        points.push(Vec3::ZERO);
        for i in 1..=config.subdivisions {
            let jitter = if config.variance > 0.0 {
                rng.gen_range(0.0..config.variance * 2.0) - config.variance
            } else {
                0.0
            };
            points.push(Vec3::new(0.0, i as f32 * step, config.radius + jitter));
        }
        points.push(Vec3::new(0.0, config.height, 0.0));

        Self { points }
    }

    /// Build a curve from `config` with jitter drawn from entropy.
    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::generate(config, &mut StdRng::from_entropy())
    }

    /// Wrap an explicit point sequence verbatim.
    ///
    /// No validation is performed; the caller is responsible for the
    /// non-decreasing-y ordering that the height lookup depends on.
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// The full point sequence.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// A fresh copy of the point sequence, independent of the curve.
    pub fn to_vec(&self) -> Vec<Vec3> {
        self.points.clone()
    }

    /// The point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Asking for a point the curve does
    /// not have is a caller bug, never answered with a default.
    #[inline]
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// Number of points in the curve.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the curve point nearest `height` from below: the first point
    /// with y >= `height`, or the last index if every point is lower.
    ///
    /// Forward linear scan; correct because y is non-decreasing. Called once
    /// per deformation or distance query, so O(n) is fine.
    pub fn vertex_index_at_height(&self, height: f32) -> usize {
        let mut index = 0;
        for (i, p) in self.points.iter().enumerate() {
            index = i;
            if p.y >= height {
                break;
            }
        }
        index
    }

    /// Push into the clay at `point`, reducing nearby radii.
    ///
    /// `strength` is the raw contact magnitude; its sign is ignored and it is
    /// scaled and clamped into `[0.0001, 0.01]` per call. `_falloff` is
    /// accepted for contract compatibility but currently inert. `threshold`
    /// is the fraction of the curve affected.
    ///
    /// Each affected point loses `z * max_deform * weight`, a proportional
    /// reduction: a point already on the axis stays there.
    pub fn push_at(&mut self, point: Vec3, strength: f32, _falloff: f32, threshold: f32) {
        let max_deform = (strength.abs() / PUSH_STRENGTH_SCALE)
            .min(PUSH_DEFORM_MAX)
            .max(PUSH_DEFORM_MIN);
        self.deform(point, threshold, max_deform, -1.0);
    }

    /// Pull the clay outward at `point`, increasing nearby radii.
    ///
    /// Pull has no strength input; the magnitude is fixed at 0.005 per call.
    pub fn pull_at(&mut self, point: Vec3, threshold: f32) {
        self.deform(point, threshold, PULL_DEFORM, 1.0);
    }

    /// Shared push/pull body: build the falloff window around the point
    /// nearest the contact height and apply the weighted proportional radius
    /// change, `direction` -1 for push and +1 for pull.
    fn deform(&mut self, point: Vec3, threshold: f32, max_deform: f32, direction: f32) {
        let center = self.vertex_index_at_height(point.y);
        let window = DeformWindow::around(center, self.points.len(), threshold, max_deform);

        trace!(
            "deform center={} window=[{}, {}) max_deform={}",
            center, window.start, window.end, max_deform
        );

        for i in window.start..window.end {
            // Windows near the curve ends extend past it; skip, don't fail.
            if i < 0 || i >= self.points.len() as isize {
                continue;
            }
            let p = &mut self.points[i as usize];
            p.z += direction * p.z * max_deform * window.weight(i);
        }
    }

    /// Signed distance from `point` to the surface at its height.
    ///
    /// Compares the point's distance from the revolution axis against the
    /// radius of the single nearest-by-height profile point (no
    /// interpolation, so the result is a staircase approximation).
    /// Negative means inside the surface, zero on it, positive outside.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        let index = self.vertex_index_at_height(point.y);
        let axis = Vec3::new(0.0, point.y, 0.0);
        axis.distance(point) - axis.distance(self.points[index])
    }

    /// Smooth the curve around `point`.
    ///
    /// Declared for the sculpting contract but deliberately unimplemented;
    /// always fails with [`CurveError::SmoothingUnsupported`] and never
    /// touches the curve. Permanent, not retryable.
    pub fn smooth_at(&mut self, _point: Vec3) -> Result<(), CurveError> {
        Err(CurveError::SmoothingUnsupported)
    }
}
