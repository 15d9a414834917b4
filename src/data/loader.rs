use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};

// Required input columns. Extra columns (flight number, booster version,
// orbit, ...) are carried by the real export and silently ignored.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading a launch-records file. All
/// variants are fatal: either the whole table loads or nothing does.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("malformed input: {0}")]
    Parse(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: '{value}' is not a valid payload mass")]
    InvalidPayload { row: usize, value: String },
    #[error("row {row}: class must be 0 or 1, got '{value}'")]
    InvalidOutcome { row: usize, value: String },
    #[error("file contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the four required columns (the dash export)
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let category_idx = column(COL_CATEGORY)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Parse(format!("row {row}: {e}")))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        records.push(LaunchRecord {
            launch_site: field(site_idx).to_string(),
            payload_mass_kg: parse_payload(field(payload_idx), row)?,
            booster_version_category: field(category_idx).to_string(),
            outcome: parse_outcome(field(class_idx), row)?,
        });
    }

    build_dataset(records)
}

fn parse_payload(value: &str, row: usize) -> Result<f64, LoadError> {
    let invalid = || LoadError::InvalidPayload {
        row,
        value: value.to_string(),
    };
    let mass: f64 = value.parse().map_err(|_| invalid())?;
    if !mass.is_finite() || mass < 0.0 {
        return Err(invalid());
    }
    Ok(mass)
}

fn parse_outcome(value: &str, row: usize) -> Result<u8, LoadError> {
    match value {
        "0" => Ok(0),
        "1" => Ok(1),
        _ => Err(LoadError::InvalidOutcome {
            row,
            value: value.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue =
        serde_json::from_str(&text).map_err(|e| LoadError::Parse(e.to_string()))?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Parse("expected a top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::Parse(format!("row {row} is not a JSON object")))?;

        let text_field = |name: &'static str| -> Result<String, LoadError> {
            obj.get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or(LoadError::MissingColumn(name))
        };

        let payload = obj
            .get(COL_PAYLOAD)
            .ok_or(LoadError::MissingColumn(COL_PAYLOAD))?;
        let payload_mass_kg = match payload.as_f64() {
            Some(mass) if mass.is_finite() && mass >= 0.0 => mass,
            _ => {
                return Err(LoadError::InvalidPayload {
                    row,
                    value: payload.to_string(),
                })
            }
        };

        let class = obj
            .get(COL_CLASS)
            .ok_or(LoadError::MissingColumn(COL_CLASS))?;
        let outcome = match class.as_u64() {
            Some(c @ (0 | 1)) => c as u8,
            _ => {
                return Err(LoadError::InvalidOutcome {
                    row,
                    value: class.to_string(),
                })
            }
        };

        records.push(LaunchRecord {
            launch_site: text_field(COL_SITE)?,
            payload_mass_kg,
            booster_version_category: text_field(COL_CATEGORY)?,
            outcome,
        });
    }

    build_dataset(records)
}

/// Min/max payload are undefined for an empty table, so reject it here.
fn build_dataset(records: Vec<LaunchRecord>) -> Result<LaunchDataset, LoadError> {
    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class
1,CCAFS LC-40,2500,v1.0,0
2,CCAFS LC-40,525,v1.0,1
3,VAFB SLC-4E,500,v1.1,0
4,KSC LC-39A,5300,FT,1
";

    #[test]
    fn loads_csv_and_computes_bounds() {
        let file = temp_file(".csv", VALID_CSV);
        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.categories, vec!["v1.0", "v1.1", "FT"]);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 5300.0);
        assert_eq!(ds.records[3].outcome, 1);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = temp_file(
            ".csv",
            "Launch Site,Booster Version,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,F9 v1.0 B0003,100,v1.0,1\n",
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.records[0].booster_version_category, "v1.0");
    }

    #[test]
    fn missing_column_is_rejected() {
        let file = temp_file(
            ".csv",
            "Launch Site,Payload Mass (kg),class\nCCAFS LC-40,100,1\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(COL_CATEGORY)));
    }

    #[test]
    fn non_numeric_payload_is_rejected() {
        let file = temp_file(
            ".csv",
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,heavy,v1.0,1\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPayload { row: 0, .. }));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let file = temp_file(
            ".csv",
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,-5,v1.0,1\n",
        );
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            LoadError::InvalidPayload { .. }
        ));
    }

    #[test]
    fn out_of_range_class_is_rejected() {
        let file = temp_file(
            ".csv",
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             CCAFS LC-40,100,v1.0,2\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidOutcome { row: 0, .. }));
    }

    #[test]
    fn empty_table_is_rejected() {
        let file = temp_file(
            ".csv",
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n",
        );
        assert!(matches!(load_file(file.path()).unwrap_err(), LoadError::Empty));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_file(Path::new("no_such_launch_data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "parquet"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let file = temp_file(
            ".json",
            r#"[
                {"Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 2500.0,
                 "Booster Version Category": "v1.0", "class": 0},
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 5300.0,
                 "Booster Version Category": "FT", "class": 1}
            ]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.min_payload, 2500.0);
        assert_eq!(ds.max_payload, 5300.0);
    }

    #[test]
    fn json_bad_class_is_rejected() {
        let file = temp_file(
            ".json",
            r#"[{"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 100.0,
                 "Booster Version Category": "FT", "class": 7}]"#,
        );
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            LoadError::InvalidOutcome { row: 0, .. }
        ));
    }
}
