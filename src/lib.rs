#![deny(missing_docs)]
//! Calculation core for a fire department water supply officer's worksheet.
//!
//! Tracks tender capacities, computes GPM supply rates and turnaround times,
//! and estimates scene-to-supply distance and ETA from latitude/longitude
//! pairs. The presentation layer (forms, tables, map) lives elsewhere; this
//! crate supplies the numbers.

//
// Public API
//
pub use crate::cmd_line::CommonCmdLineArgs;
pub use crate::coords::{format_coords, parse_coords, Coords};
pub use crate::distance::{distance_between, distance_miles, EARTH_RADIUS_KM};
pub use crate::errors::WorksheetErr;
pub use crate::import::{parse_feature_collection, read_geojson_file, IMPORT_FALLBACK_LABEL};
pub use crate::metrics::{
    eta_minutes, resolve_turnaround, tender_gpm, tenders_needed, turnaround_estimate,
};
pub use crate::position::{PositionOutcome, PositionRequest, PositionSource};
pub use crate::registry::{
    SupplyDraft, SupplyLog, UnitDraft, UnitLog, WaterSupply, WaterSupplyUnit,
};
pub use crate::session::{SessionState, Worksheet};
pub use crate::tender::{
    lowest_tank_capacity, tender_by_id, QuickDump, Station, Tender, GPM_QUICK_GLANCE, KEY_POINTS,
    TENDER_ROSTER,
};
pub use crate::timer::TurnaroundTimer;

//
// Implementation only
//
mod cmd_line;
mod coords;
mod distance;
mod errors;
mod import;
mod metrics;
mod position;
mod registry;
mod session;
mod tender;
mod timer;
