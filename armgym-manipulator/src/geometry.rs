//! Small fixed-size vector helpers.

/// A position in world coordinates.
pub type Vec3 = [f64; 3];

/// An orientation quaternion in `(x, y, z, w)` order.
pub type Quat = [f64; 4];

/// The identity orientation.
pub const IDENTITY_QUAT: Quat = [0.0, 0.0, 0.0, 1.0];

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Componentwise `a - b`.
pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Euclidean distance between two points.
pub fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    norm(&sub(a, b))
}
