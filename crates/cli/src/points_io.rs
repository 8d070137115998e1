//! CSV input/output for point sets and timing curves (polars).

use anyhow::{anyhow, Context, Result};
use maxtri::api::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    create_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Read points from a CSV file with `x` and `y` columns (integers are widened).
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {row} of {} has a missing coordinate", path.display())),
        })
        .collect()
}

/// Write points as a two-column CSV (`x`, `y`).
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    write_frame(path, &mut df)
}

/// Write the averaged timing curve (`n`, `mean_s`).
pub fn write_timings_csv(path: &Path, rows: &[(usize, f64)]) -> Result<()> {
    let ns: Vec<u64> = rows.iter().map(|&(n, _)| n as u64).collect();
    let means: Vec<f64> = rows.iter().map(|&(_, t)| t).collect();
    let mut df = df!("n" => ns, "mean_s" => means)?;
    write_frame(path, &mut df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.csv");
        let pts = vec![Point::new(0.5, -1.25), Point::new(3.0, 4.0), Point::new(-2.0, 0.0)];
        write_points_csv(&path, &pts).unwrap();
        assert_eq!(read_points_csv(&path).unwrap(), pts);
    }

    #[test]
    fn integer_columns_are_widened() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "x,y\n0,0\n4,0\n0,3\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)]);
    }

    #[test]
    fn timings_have_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        write_timings_csv(&path, &[(3, 0.5), (103, 0.25)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("n,mean_s"));
        assert_eq!(text.lines().count(), 3);
    }
}
