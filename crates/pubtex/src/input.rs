//! Loading publication records from a JSON document.

use std::fs;
use std::path::Path;

use crate::error::{PubsError, Result};
use crate::models::PublicationRecord;

/// Read and parse the publication list at `path`.
///
/// The document must be a JSON array of objects. Record order is preserved.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<PublicationRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PubsError::read(path, e))?;
    let records = parse_records(&text).map_err(|e| PubsError::parse(path, e))?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Loaded publication list"
    );
    Ok(records)
}

/// Parse a publication list from JSON text.
pub fn parse_records(text: &str) -> serde_json::Result<Vec<PublicationRecord>> {
    serde_json::from_str(text)
}
