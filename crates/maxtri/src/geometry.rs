//! Triangle area primitives shared by the hull builder and the triangle search.

use nalgebra::Vector2;

/// Twice the signed area of the triangle (o, a, b).
/// Positive when o→a→b turns counterclockwise, zero when collinear.
#[inline]
pub fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Pre: none (degenerate triangles are legal).
/// Post: returns `|(a − c) × (b − c)| / 2`, i.e. the unsigned area of (a, b, c).
#[inline]
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let u = a - c;
    let v = b - c;
    (u.x * v.y - u.y * v.x).abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![0.0, 3.0];
        assert!((triangle_area(a, b, c) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_have_zero_area() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        let c = vector![2.0, 2.0];
        assert_eq!(triangle_area(a, b, c), 0.0);
        assert_eq!(cross(a, b, c), 0.0);
    }

    #[test]
    fn cross_sign_follows_orientation() {
        let o = vector![0.0, 0.0];
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 1.0];
        assert!(cross(o, a, b) > 0.0);
        assert!(cross(o, b, a) < 0.0);
    }

    #[test]
    fn area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let c = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            // unsigned area is half the magnitude of the orientation determinant
            assert!((triangle_area(a, b, c) - cross(c, a, b).abs() / 2.0).abs() < 1e-12);
        }
    }

    proptest! {
        #[test]
        fn area_is_rotation_symmetric(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
            cx in -1e3f64..1e3, cy in -1e3f64..1e3,
        ) {
            let (a, b, c) = (vector![ax, ay], vector![bx, by], vector![cx, cy]);
            let abc = triangle_area(a, b, c);
            let tol = 1e-6 * (1.0 + abc);
            prop_assert!(abc >= 0.0);
            prop_assert!((abc - triangle_area(b, c, a)).abs() <= tol);
            prop_assert!((abc - triangle_area(c, a, b)).abs() <= tol);
        }
    }
}
