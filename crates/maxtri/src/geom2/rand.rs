//! Random point sets in 2D (uniform box, integer-abscissa circle).
//!
//! Purpose
//! - Feed the hull builder and the timing driver with reproducible inputs.
//! - Randomness is always injected: pass an `Rng`, or derive one from a
//!   `ReplayToken` `(seed, index)` so a single draw can be replayed later.
//!
//! Model
//! - `random_points`: coordinates uniform in `[-radius, radius)`.
//! - `circle_points`: distinct integer abscissae sampled without replacement
//!   from `[-radius, radius)`, lifted onto the circle, alternating upper and
//!   lower half so the hull keeps every point.
//!
//! Code cross-refs: `hull::convex_hull`

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Errors raised by the samplers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// `circle_points` cannot place `n` distinct integer abscissae on a circle of this radius.
    TooManyPoints { n: usize, radius: u32 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::TooManyPoints { n, radius } => write!(
                f,
                "cannot sample {n} circle points with radius {radius} (need n <= 2*radius - 1)"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` points with both coordinates uniform in `[-radius, radius)`.
pub fn random_points<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Vec<Point> {
    if radius <= 0.0 {
        return vec![Vector2::zeros(); n];
    }
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-radius..radius), rng.gen_range(-radius..radius)))
        .collect()
}

/// `n` points on the circle of radius `radius` around the origin.
///
/// Abscissae are distinct integers; points at odd positions are mirrored to
/// the lower half-plane.
pub fn circle_points<R: Rng>(n: usize, radius: u32, rng: &mut R) -> Result<Vec<Point>, SampleError> {
    let width = 2 * radius as usize;
    if n + 1 > width {
        return Err(SampleError::TooManyPoints { n, radius });
    }
    let r = radius as f64;
    let pts = sample(rng, width, n)
        .into_iter()
        .enumerate()
        .map(|(k, off)| {
            let x = off as f64 - r;
            let y = (r * r - x * x).sqrt();
            if k % 2 == 1 {
                Vector2::new(x, -y)
            } else {
                Vector2::new(x, y)
            }
        })
        .collect();
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::convex_hull;

    #[test]
    fn replay_token_is_reproducible() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = random_points(16, 10.0, &mut tok.to_std_rng());
        let b = random_points(16, 10.0, &mut tok.to_std_rng());
        assert_eq!(a, b);
        let other = ReplayToken { seed: 42, index: 8 };
        let c = random_points(16, 10.0, &mut other.to_std_rng());
        assert_ne!(a, c);
    }

    #[test]
    fn random_points_stay_in_box() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts = random_points(500, 10.0, &mut rng);
        assert_eq!(pts.len(), 500);
        assert!(pts
            .iter()
            .all(|p| (-10.0..10.0).contains(&p.x) && (-10.0..10.0).contains(&p.y)));
    }

    #[test]
    fn circle_points_lie_on_circle_with_distinct_abscissae() {
        let mut rng = StdRng::seed_from_u64(11);
        let pts = circle_points(50, 100, &mut rng).unwrap();
        assert_eq!(pts.len(), 50);
        for (k, p) in pts.iter().enumerate() {
            assert!((p.norm() - 100.0).abs() < 1e-9);
            assert_eq!(p.x, p.x.round());
            if k % 2 == 1 {
                assert!(p.y <= 0.0);
            } else {
                assert!(p.y >= 0.0);
            }
        }
        let mut xs: Vec<i64> = pts.iter().map(|p| p.x as i64).collect();
        xs.sort_unstable();
        xs.dedup();
        assert_eq!(xs.len(), 50);
    }

    #[test]
    fn circle_points_are_all_hull_vertices() {
        let mut rng = StdRng::seed_from_u64(5);
        let pts = circle_points(40, 10_000, &mut rng).unwrap();
        assert_eq!(convex_hull(&pts).len(), 40);
    }

    #[test]
    fn circle_points_reject_too_many() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(circle_points(19, 10, &mut rng).is_ok());
        let err = circle_points(20, 10, &mut rng).unwrap_err();
        assert_eq!(err, SampleError::TooManyPoints { n: 20, radius: 10 });
    }
}
