use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{DataPoint, Dataset, TrendData, Unit};

// ---------------------------------------------------------------------------
// Series descriptors – which files make up the narrative
// ---------------------------------------------------------------------------

/// How to find and parse one of the two source series.
pub struct SeriesSpec {
    /// File stem inside the data directory (extension decides the format).
    pub stem: &'static str,
    /// Human-readable series label used in legends and tooltips.
    pub label: &'static str,
    /// Name of the CSV value column.
    pub value_column: &'static str,
    pub unit: Unit,
}

pub const PRODUCTION: SeriesSpec = SeriesSpec {
    stem: "wine_production",
    label: "Wine production",
    value_column: "Wine Production tonnes",
    unit: Unit::Tonnes,
};

pub const CONSUMPTION: SeriesSpec = SeriesSpec {
    stem: "alcohol_consumption",
    label: "Alcohol consumption",
    value_column: "Alcohol Consumption",
    unit: Unit::LitresPerCapita,
};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both series from a data directory.  Both must parse before any
/// scene renders; a failure in either aborts the whole load.
pub fn load_dir(dir: &Path) -> Result<TrendData> {
    let production = load_series(dir, &PRODUCTION)?;
    let consumption = load_series(dir, &CONSUMPTION)?;
    Ok(TrendData {
        production,
        consumption,
    })
}

/// Load one series, preferring `<stem>.csv` over `<stem>.json`.
fn load_series(dir: &Path, spec: &SeriesSpec) -> Result<Dataset> {
    for ext in ["csv", "json"] {
        let path = dir.join(format!("{}.{ext}", spec.stem));
        if path.exists() {
            return load_file(&path, spec);
        }
    }
    bail!(
        "no {stem}.csv or {stem}.json in {dir}",
        stem = spec.stem,
        dir = dir.display()
    )
}

/// Load a series file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with a `Year` column and the series' value column
/// * `.json` – `[{ "year": 1961, "value": 123.0 }, ...]`
pub fn load_file(path: &Path, spec: &SeriesSpec) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    match ext.as_str() {
        "csv" => parse_csv(file, spec),
        "json" => parse_json(file, spec),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row naming a `Year` column and the value column from
/// the [`SeriesSpec`]; every data row carries one year and one number.
pub fn parse_csv(reader: impl Read, spec: &SeriesSpec) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let year_idx = headers
        .iter()
        .position(|h| h == "Year")
        .context("CSV missing 'Year' column")?;
    let value_idx = headers
        .iter()
        .position(|h| h == spec.value_column)
        .with_context(|| format!("CSV missing '{}' column", spec.value_column))?;

    let mut points = Vec::new();
    for (row_no, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let year_cell = record.get(year_idx).unwrap_or("").trim();
        let year: i32 = year_cell
            .parse()
            .with_context(|| format!("Row {row_no}: '{year_cell}' is not a year"))?;

        let value_cell = record.get(value_idx).unwrap_or("").trim();
        let value: f64 = value_cell
            .parse()
            .with_context(|| format!("Row {row_no}: '{value_cell}' is not a number"))?;

        points.push(DataPoint { year, value });
    }

    Ok(Dataset::from_points(spec.label, spec.unit, points)?)
}

// ---------------------------------------------------------------------------
// JSON parser
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct JsonPoint {
    year: i32,
    value: f64,
}

/// Records-oriented JSON: a top-level array of `{year, value}` objects.
pub fn parse_json(reader: impl Read, spec: &SeriesSpec) -> Result<Dataset> {
    let records: Vec<JsonPoint> =
        serde_json::from_reader(reader).context("parsing JSON")?;
    let points = records
        .into_iter()
        .map(|r| DataPoint {
            year: r.year,
            value: r.value,
        })
        .collect();
    Ok(Dataset::from_points(spec.label, spec.unit, points)?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn csv_rows_become_typed_points() {
        let csv = "Year,Wine Production tonnes\n1961,6000000\n1962,7340000\n";
        let ds = parse_csv(Cursor::new(csv), &PRODUCTION).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.points()[0], DataPoint { year: 1961, value: 6_000_000.0 });
        assert_eq!(ds.unit, Unit::Tonnes);
    }

    #[test]
    fn csv_value_column_is_selected_by_name() {
        // Extra columns are ignored; order does not matter.
        let csv = "Entity,Alcohol Consumption,Year\nFrance,17.3,1961\nFrance,17.6,1962\n";
        let ds = parse_csv(Cursor::new(csv), &CONSUMPTION).unwrap();
        assert_eq!(ds.points()[1], DataPoint { year: 1962, value: 17.6 });
    }

    #[test]
    fn csv_missing_value_column_is_an_error() {
        let csv = "Year,Something Else\n1961,1.0\n";
        let err = parse_csv(Cursor::new(csv), &PRODUCTION).unwrap_err();
        assert!(err.to_string().contains("Wine Production tonnes"));
    }

    #[test]
    fn csv_non_numeric_cell_is_an_error_with_row_context() {
        let csv = "Year,Wine Production tonnes\n1961,lots\n";
        let err = parse_csv(Cursor::new(csv), &PRODUCTION).unwrap_err();
        assert!(format!("{err:#}").contains("'lots' is not a number"));
    }

    #[test]
    fn csv_duplicate_year_is_an_error() {
        let csv = "Year,Wine Production tonnes\n1961,1\n1961,2\n";
        let err = parse_csv(Cursor::new(csv), &PRODUCTION).unwrap_err();
        assert!(err.to_string().contains("duplicate year 1961"));
    }

    #[test]
    fn csv_negative_value_is_an_error() {
        let csv = "Year,Alcohol Consumption\n1961,-3.5\n";
        let err = parse_csv(Cursor::new(csv), &CONSUMPTION).unwrap_err();
        assert!(err.to_string().contains("negative value"));
    }

    #[test]
    fn json_records_become_typed_points() {
        let json = r#"[{"year": 1961, "value": 17.3}, {"year": 1960, "value": 17.1}]"#;
        let ds = parse_json(Cursor::new(json), &CONSUMPTION).unwrap();
        // Sorted by year regardless of record order.
        assert_eq!(ds.points()[0].year, 1960);
        assert_eq!(ds.points()[1].year, 1961);
    }

    #[test]
    fn json_garbage_is_an_error() {
        let err = parse_json(Cursor::new("not json"), &CONSUMPTION).unwrap_err();
        assert!(err.to_string().contains("parsing JSON"));
    }
}
