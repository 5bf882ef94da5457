//! Import of water supplies from GIS data (GeoJSON).
//!
//! A document that is not a FeatureCollection is rejected wholesale. Inside a
//! valid collection, features that are not usable points are skipped one at a
//! time and the rest of the batch proceeds.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{coords::format_coords, errors::WorksheetErr, registry::SupplyDraft};

/// Label for imported features that carry no name-like property.
pub const IMPORT_FALLBACK_LABEL: &str = "Imported Hydrant";

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "type")]
    kind: Option<String>,
    features: Option<Vec<Value>>,
}

// Features are held as raw JSON in the document and decoded one at a time, so
// a single malformed feature cannot fail the whole batch.
#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

/// Parse GeoJSON text into supply drafts.
///
/// Every Point feature with a numeric `[lon, lat]` pair becomes one draft with
/// its label taken from a `name`/`NAME` property (falling back to
/// [`IMPORT_FALLBACK_LABEL`]), its location formatted to five decimals, and an
/// empty turnaround so the log estimates one at add time. Returns an error,
/// and no drafts, if the document is not a FeatureCollection.
pub fn parse_feature_collection(text: &str) -> Result<Vec<SupplyDraft>, WorksheetErr> {
    let document: Document = serde_json::from_str(text)?;

    if document.kind.as_deref() != Some("FeatureCollection") {
        return Err(WorksheetErr::NotAFeatureCollection);
    }
    let features = document.features.ok_or(WorksheetErr::NotAFeatureCollection)?;

    let mut drafts = Vec::new();

    for raw in features {
        let feature: Feature = match serde_json::from_value(raw) {
            Ok(feature) => feature,
            Err(err) => {
                debug!("skipping malformed feature: {}", err);
                continue;
            }
        };

        let geometry = match feature.geometry {
            Some(ref geometry) if geometry.kind == "Point" => geometry,
            _ => continue,
        };

        let (lon, lat) = match point_pair(&geometry.coordinates) {
            Some(pair) => pair,
            None => {
                debug!("skipping point feature with unusable coordinates");
                continue;
            }
        };

        let name = feature
            .properties
            .as_ref()
            .and_then(|props| {
                props
                    .get("name")
                    .or_else(|| props.get("NAME"))
                    .and_then(Value::as_str)
            })
            .unwrap_or(IMPORT_FALLBACK_LABEL);

        drafts.push(SupplyDraft::new(name, format_coords(lat, lon), ""));
    }

    Ok(drafts)
}

/// Read a `.geojson` file and parse it into supply drafts.
pub fn read_geojson_file(path: &dyn AsRef<Path>) -> Result<Vec<SupplyDraft>, WorksheetErr> {
    let text = std::fs::read_to_string(path.as_ref())?;

    parse_feature_collection(&text)
}

// GeoJSON point coordinates are [longitude, latitude], possibly with extras
// like elevation after them.
fn point_pair(coordinates: &Value) -> Option<(f64, f64)> {
    let array = coordinates.as_array()?;

    let lon = array.get(0)?.as_f64()?;
    let lat = array.get(1)?.as_f64()?;

    Some((lon, lat))
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
