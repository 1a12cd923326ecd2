//! Constrained random placement of targets and objects.
//!
//! A placement draws a direction with every coordinate uniform in `[-1, 1]`,
//! normalizes it and scales it by a radius drawn uniformly from a [`RadiusBand`].
//! The distance to the anchor is uniform in the band, so points are denser close
//! to the inner radius than a uniform-in-annulus draw would be.
use crate::{geometry::norm, rng::UniformSource, TaskError};
use log::debug;

/// Closed interval of admissible distances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusBand {
    /// Smallest distance.
    pub min: f64,
    /// Largest distance.
    pub max: f64,
}

impl RadiusBand {
    /// Creates a band.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `r` lies in the band, up to `tol`.
    pub fn contains(&self, r: f64, tol: f64) -> bool {
        r >= self.min - tol && r <= self.max + tol
    }
}

fn draw_direction<R, const N: usize>(rng: &mut R) -> [f64; N]
where
    R: UniformSource + ?Sized,
{
    let mut v = [0.0; N];
    for x in v.iter_mut() {
        *x = rng.uniform(-1.0, 1.0);
    }
    v
}

fn scale_to<const N: usize>(v: [f64; N], radius: f64) -> Result<[f64; N], TaskError> {
    let len = norm(&v);
    if len == 0.0 {
        return Err(TaskError::DegeneratePlacement);
    }
    Ok(v.map(|x| x / len * radius))
}

/// Samples a point whose distance from the origin lies in `band`.
pub fn sample_radial<R, const N: usize>(rng: &mut R, band: RadiusBand) -> Result<[f64; N], TaskError>
where
    R: UniformSource + ?Sized,
{
    let v = draw_direction::<R, N>(rng);
    let radius = rng.uniform(band.min, band.max);
    let p = scale_to(v, radius)?;
    debug!("radial placement {:?} at radius {}", p, radius);
    Ok(p)
}

/// Samples a point whose distance from `anchor` lies in `band`.
///
/// The direction is the offset of a fresh `[-1, 1]` draw from `anchor`.
pub fn sample_relative<R, const N: usize>(
    rng: &mut R,
    anchor: &[f64; N],
    band: RadiusBand,
) -> Result<[f64; N], TaskError>
where
    R: UniformSource + ?Sized,
{
    let mut v = draw_direction::<R, N>(rng);
    for (x, a) in v.iter_mut().zip(anchor) {
        *x -= a;
    }
    let radius = rng.uniform(band.min, band.max);
    let offset = scale_to(v, radius)?;

    let mut p = *anchor;
    for (x, o) in p.iter_mut().zip(offset) {
        *x += o;
    }
    debug!("relative placement {:?} at distance {}", p, radius);
    Ok(p)
}

/// Samples a point with every coordinate uniform in `[-limit, limit]`.
pub fn sample_box<R, const N: usize>(rng: &mut R, limit: f64) -> [f64; N]
where
    R: UniformSource + ?Sized,
{
    let mut p = [0.0; N];
    for x in p.iter_mut() {
        *x = rng.uniform(-limit, limit);
    }
    p
}
