//! Flat-file persistence for customer batches.
//!
//! A batch is written as CSV with the header
//! `Customer ID,Name,Age,Mobile No.,Rating` and read back by column name, so
//! files whose columns were reordered by hand still load.
//!
//! Saving is a plain truncate-and-write. There is no temp-file-and-rename step
//! and no locking; only one caller is expected to touch the file at a time.

use crate::error::{DeskError, Result};
use crate::records::{
    COL_AGE, COL_CUSTOMER_ID, COL_MOBILE, COL_NAME, COL_RATING, CustomerRecord, round_rating,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name used when no settings override it.
pub const DEFAULT_DATA_FILE: &str = "customer_data.csv";

/// Default data file, relative to the working directory.
pub fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Writes `records` to `path`, replacing whatever was there.
///
/// # Errors
///
/// Returns [`DeskError::Io`] if the file cannot be created or written.
pub fn save(records: &[CustomerRecord], path: &Path) -> Result<()> {
    let mut df = records_to_df(records)?;

    let file = std::fs::File::create(path)?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .with_float_precision(Some(1))
        .finish(&mut df)
        .map_err(write_error)?;

    tracing::info!(rows = records.len(), path = %path.display(), "Saved customer data");
    Ok(())
}

/// Reads every record stored at `path`.
///
/// # Errors
///
/// - [`DeskError::NotFound`] if nothing exists at `path`
/// - [`DeskError::Io`] if `path` is not a regular file or cannot be opened
/// - [`DeskError::Parse`] for a missing column or a malformed cell
pub fn load(path: &Path) -> Result<Vec<CustomerRecord>> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Customer data file not found");
            return Err(DeskError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(DeskError::Io(e)),
    };
    // Opening a directory succeeds on unix; polars would then report it as
    // an empty scan.
    if !file.metadata()?.is_file() {
        tracing::warn!(path = %path.display(), "Customer data path is not a file");
        return Err(DeskError::Io(std::io::Error::new(
            std::io::ErrorKind::IsADirectory,
            format!("{} is not a regular file", path.display()),
        )));
    }
    drop(file);

    // Schema inference is switched off: every column arrives as text and is
    // parsed below, so a bad cell is reported instead of nulled.
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .with_has_header(true)
        .finish()?
        .collect()?;

    let records = df_to_records(&df)?;
    tracing::info!(rows = records.len(), path = %path.display(), "Loaded customer data");
    Ok(records)
}

// Whatever goes wrong while writing is an I/O failure from the user's point of
// view. The original kind survives when polars has one.
fn write_error(err: PolarsError) -> DeskError {
    match DeskError::from(err) {
        DeskError::Parse(msg) => DeskError::Io(std::io::Error::other(msg)),
        other => other,
    }
}

fn records_to_df(records: &[CustomerRecord]) -> Result<DataFrame> {
    let ids: Vec<i64> = records.iter().map(|r| i64::from(r.customer_id)).collect();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let ages: Vec<i64> = records.iter().map(|r| i64::from(r.age)).collect();
    let mobiles: Vec<u64> = records.iter().map(|r| r.mobile_number).collect();
    let ratings: Vec<f64> = records.iter().map(|r| r.rating).collect();

    let df = df!(
        COL_CUSTOMER_ID => ids,
        COL_NAME => names,
        COL_AGE => ages,
        COL_MOBILE => mobiles,
        COL_RATING => ratings
    )?;
    Ok(df)
}

fn df_to_records(df: &DataFrame) -> Result<Vec<CustomerRecord>> {
    let ids = text_column(df, COL_CUSTOMER_ID)?;
    let names = text_column(df, COL_NAME)?;
    let ages = text_column(df, COL_AGE)?;
    let mobiles = text_column(df, COL_MOBILE)?;
    let ratings = text_column(df, COL_RATING)?;

    let mut records = Vec::with_capacity(df.height());
    for (idx, ((((id, name), age), mobile), rating)) in ids
        .into_iter()
        .zip(names)
        .zip(ages)
        .zip(mobiles)
        .zip(ratings)
        .enumerate()
    {
        // 1-based, counting the header as line 1
        let line = idx + 2;
        records.push(CustomerRecord {
            customer_id: parse_cell(id, line, COL_CUSTOMER_ID)?,
            name: name
                .map(str::to_owned)
                .ok_or_else(|| missing_cell(line, COL_NAME))?,
            age: parse_cell(age, line, COL_AGE)?,
            mobile_number: parse_cell(mobile, line, COL_MOBILE)?,
            rating: round_rating(parse_cell::<f64>(rating, line, COL_RATING)?),
        });
    }
    Ok(records)
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| DeskError::Parse(format!("missing column '{name}'")))?;
    column
        .as_materialized_series()
        .str()
        .map_err(|e| DeskError::Parse(format!("column '{name}' is not text: {e}")))
}

fn parse_cell<T>(cell: Option<&str>, line: usize, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = cell.ok_or_else(|| missing_cell(line, column))?;
    raw.trim().parse::<T>().map_err(|e| {
        DeskError::Parse(format!("line {line}, column '{column}': '{raw}' ({e})"))
    })
}

fn missing_cell(line: usize, column: &str) -> DeskError {
    DeskError::Parse(format!("line {line}, column '{column}': missing value"))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, clippy::indexing_slicing)]
    use super::*;
    use anyhow::Result;

    fn sample() -> Vec<CustomerRecord> {
        vec![
            CustomerRecord {
                customer_id: 1234,
                name: "QwErty".to_owned(),
                age: 18,
                mobile_number: 7_000_000_000,
                rating: 3.5,
            },
            CustomerRecord {
                customer_id: 9999,
                name: "QwE".to_owned(),
                age: 70,
                mobile_number: 9_999_999_999,
                rating: 5.0,
            },
        ]
    }

    #[test]
    fn test_save_writes_header_and_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("customers.csv");
        save(&sample(), &path)?;

        let text = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Customer ID,Name,Age,Mobile No.,Rating");
        assert_eq!(lines[1], "1234,QwErty,18,7000000000,3.5");
        assert_eq!(lines[2], "9999,QwE,70,9999999999,5.0");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("customers.csv");
        let records = sample();
        save(&records, &path)?;
        assert_eq!(load(&path)?, records);
        Ok(())
    }

    #[test]
    fn test_save_overwrites() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("customers.csv");
        save(&sample(), &path)?;
        save(&sample()[..1], &path)?;
        assert_eq!(load(&path)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.csv");
        let err = load(&path).unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err}");
    }

    #[test]
    fn test_directory_is_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, DeskError::Io(_)), "unexpected error: {err}");
        assert_eq!(err.title(), "I/O Error");
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory_keeps_kind() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("no_such_dir").join("customers.csv");
        match save(&sample(), &path).unwrap_err() {
            DeskError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_reordered_columns_load_by_name() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("reordered.csv");
        std::fs::write(
            &path,
            "Rating,Name,Mobile No.,Age,Customer ID\n4.2,Bob,8123456789,33,4321\n",
        )?;
        let records = load(&path)?;
        assert_eq!(
            records,
            vec![CustomerRecord {
                customer_id: 4321,
                name: "Bob".to_owned(),
                age: 33,
                mobile_number: 8_123_456_789,
                rating: 4.2,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_malformed_cell_is_parse_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "Customer ID,Name,Age,Mobile No.,Rating\n1000,Ann,forty,7000000000,2.0\n",
        )?;
        let err = load(&path).unwrap_err();
        assert!(matches!(err, DeskError::Parse(_)), "unexpected error: {err}");
        assert!(err.to_string().contains("Age"));
        assert!(err.to_string().contains("line 2"));
        Ok(())
    }

    #[test]
    fn test_missing_column_is_parse_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "Customer ID,Name,Age,Rating\n1000,Ann,40,2.0\n")?;
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("Mobile No."), "unexpected error: {err}");
        Ok(())
    }

    #[test]
    fn test_rating_rounded_on_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("precise.csv");
        std::fs::write(
            &path,
            "Customer ID,Name,Age,Mobile No.,Rating\n1000,Ann,40,7000000000,3.46\n",
        )?;
        let records = load(&path)?;
        assert_eq!(records[0].rating_label(), "3.5");
        Ok(())
    }

    #[test]
    fn test_empty_batch_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.csv");
        save(&[], &path)?;
        assert!(load(&path)?.is_empty());
        Ok(())
    }
}
