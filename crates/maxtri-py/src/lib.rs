//! PyO3 bindings for the `maxtri` entry points.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples.
//! - Precondition violations surface as `ValueError` instead of panics.

use maxtri::api::{convex_hull_from_points as hull_rs, try_largest_triangle, Point, SolveCfg};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_points(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

/// Unsigned area of the triangle (a, b, c).
#[pyfunction]
fn triangle_area(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    maxtri::triangle_area(
        Vector2::new(a.0, a.1),
        Vector2::new(b.0, b.1),
        Vector2::new(c.0, c.1),
    )
}

/// Convex hull in CCW order, without a repeated closing point.
#[pyfunction]
fn convex_hull_from_points(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    hull_rs(&to_points(&points))
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

/// Largest triangle on a convex polygon given in hull order.
#[pyfunction]
#[pyo3(signature = (polygon, start=0, max_depth=None))]
fn largest_triangle(
    polygon: Vec<(f64, f64)>,
    start: usize,
    max_depth: Option<usize>,
) -> PyResult<[(f64, f64); 3]> {
    let tri = try_largest_triangle(&to_points(&polygon), start, SolveCfg { max_depth })
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(tri.points().map(|p| (p.x, p.y)))
}

#[pymodule]
fn maxtri_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(triangle_area, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull_from_points, m)?)?;
    m.add_function(wrap_pyfunction!(largest_triangle, m)?)?;
    Ok(())
}
