use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Listing, ListingTable};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A listings file could not be turned into a [`ListingTable`].
///
/// Fatal to the current render pass; callers surface the message to the user
/// and do not retry.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Columns the filter and view logic depend on. Checked up front so a schema
/// drift fails with a column name instead of a per-row parse error.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "state",
    "County",
    "homeType",
    "Section_8",
    "bedrooms",
    "latitude",
    "longitude",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listings table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited table with a header row (the canonical export)
/// * `.json` – records-oriented array, `[{"zpid": ..., "state": ...}, ...]`
pub fn load_file(path: &Path) -> Result<ListingTable, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let listings = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(DataError::UnsupportedExtension(other.to_string())),
    };
    validate(&listings, path)?;
    Ok(ListingTable::from_listings(listings))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Listing>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_owned(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| malformed(path, format!("reading header row: {e}")))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                path: path.to_owned(),
                column,
            });
        }
    }

    let mut listings = Vec::new();
    for (row_no, result) in reader.deserialize::<Listing>().enumerate() {
        let listing = result.map_err(|e| malformed(path, format!("row {}: {e}", row_no + 1)))?;
        listings.push(listing);
    }
    Ok(listings)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records orientation, the default `df.to_json(orient='records')` layout.
/// Field presence is enforced by the typed deserialization, so a renamed
/// column surfaces as a "missing field" parse error.
fn load_json(path: &Path) -> Result<Vec<Listing>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str::<Vec<Listing>>(&text)
        .map_err(|e| malformed(path, format!("parsing JSON records: {e}")))
}

// ---------------------------------------------------------------------------
// Shared validation
// ---------------------------------------------------------------------------

fn validate(listings: &[Listing], path: &Path) -> Result<(), DataError> {
    for (row_no, listing) in listings.iter().enumerate() {
        if let Some(bedrooms) = listing.bedrooms {
            // `!(x >= 0.0)` also rejects NaN.
            if !(bedrooms >= 0.0) {
                return Err(malformed(
                    path,
                    format!("row {}: invalid bedroom count {bedrooms}", row_no + 1),
                ));
            }
        }
    }
    Ok(())
}

fn malformed(path: &Path, message: String) -> DataError {
    DataError::Malformed {
        path: path.to_owned(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "zpid,state,County,homeType,Section_8,bedrooms,latitude,longitude,\
detailUrl_InfoTOD,price_sq_foot,FRM,yearBuilt,SCHOOLSMeandistance,\
price_to_rent_ratio_InfoTOD,livingArea,lastSoldPrice,description";

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn loads_valid_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            &dir,
            "listings.csv",
            &format!(
                "{HEADER}\n\
                 101,CA,Alpha,SINGLE_FAMILY,1,2,34.0,-118.0,https://example.com/101,300.5,2100,1985,1.2,17.0,1400,450000,Sunny bungalow\n\
                 102,CA,Alpha,CONDO,0,,34.1,-118.1,,,,,,,,,\n"
            ),
        );

        let table = load_file(&path).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.states, vec!["CA".to_string()]);
        assert_eq!(table.listings[0].section_8, 1);
        assert_eq!(table.listings[0].bedrooms, Some(2.0));
        assert_eq!(table.listings[1].bedrooms, None);
        assert_eq!(table.listings[1].price_sq_foot, None);
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let header_without_flag = HEADER.replace("Section_8", "section8");
        let path = write_fixture(&dir, "bad.csv", &format!("{header_without_flag}\n"));

        match load_file(&path) {
            Err(DataError::MissingColumn { column, .. }) => assert_eq!(column, "Section_8"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/listings.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn negative_bedroom_count_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            &dir,
            "neg.csv",
            &format!("{HEADER}\n101,CA,Alpha,CONDO,0,-1,34.0,-118.0,,,,,,,,,\n"),
        );
        assert!(matches!(load_file(&path), Err(DataError::Malformed { .. })));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("listings.parquet")).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedExtension(ext) if ext == "parquet"));
    }

    #[test]
    fn loads_json_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            &dir,
            "listings.json",
            r#"[{
                "zpid": 7, "state": "TX", "County": "Travis", "homeType": "TOWNHOUSE",
                "Section_8": 1, "bedrooms": 3, "latitude": 30.27, "longitude": -97.74,
                "detailUrl_InfoTOD": null, "price_sq_foot": 250.0, "FRM": 1900.0,
                "yearBuilt": 2001, "SCHOOLSMeandistance": 0.8,
                "price_to_rent_ratio_InfoTOD": 15.5, "livingArea": 1600,
                "lastSoldPrice": 390000, "description": "Corner lot"
            }]"#,
        );

        let table = load_file(&path).expect("load");
        assert_eq!(table.len(), 1);
        assert_eq!(table.listings[0].county, "Travis");
        assert_eq!(table.listings[0].bedrooms, Some(3.0));
    }
}
