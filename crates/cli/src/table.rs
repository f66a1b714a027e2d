//! CSV in/out through polars.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read a CSV with a header row.
pub fn read_csv(path: &str) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .collect()
        .with_context(|| format!("reading {path}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), path, "input_csv_shape");
    Ok(df)
}

/// Column `name` as `f64`, casting integer columns; nulls are an error.
pub fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column {name:?} is not numeric"))?;
    let ca = col.f64()?;
    if ca.null_count() > 0 {
        bail!("column {name:?} has {} null values", ca.null_count());
    }
    Ok(ca.into_no_null_iter().collect())
}

/// Write `df` as CSV, creating parent directories.
pub fn write_csv(df: &mut DataFrame, out: &str) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {out}"))?;
    Ok(())
}
