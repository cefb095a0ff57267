//! CSV point sets via polars: columns `x` and `y`, one point per row.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;

/// Read `x,y` columns (any numeric type, cast to f64). Nulls are rejected.
pub fn read_points_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Vector2::new(x, y))
        .collect())
}

/// Write points as an `x,y` CSV with header.
pub fn write_points_csv(path: &Path, points: &[Vector2<f64>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` at row {row}")))
        .collect()
}
