//! Session state and the worksheet controller that owns it.

use std::path::Path;

use tracing::debug;
use uuid::Uuid;

use crate::{
    coords::parse_leading_f64,
    distance::distance_between,
    errors::WorksheetErr,
    import,
    metrics::eta_minutes,
    registry::{SupplyDraft, SupplyLog, UnitDraft, UnitLog, WaterSupply, WaterSupplyUnit},
    timer::TurnaroundTimer,
};

/// The shared inputs every calculation reads.
///
/// One struct instead of state scattered across the view tree; the formula
/// functions stay pure and take these values as explicit parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Scene location string, `"lat, lon"` free text, possibly mid-typing.
    pub scene_location: String,
    /// Average tender speed in mph.
    pub average_speed: f64,
    /// Fixed fill/setup time in minutes.
    pub fill_setup_time: f64,
    /// Working turnaround time in minutes, fed to the GPM calculators.
    pub turn_around_time: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            scene_location: String::new(),
            average_speed: 35.0,
            fill_setup_time: 5.0,
            turn_around_time: 10.0,
        }
    }
}

/// The worksheet: session state, both resource logs, and the stopwatch.
///
/// All mutation funnels through these methods, one user action at a time.
#[derive(Debug, Default)]
pub struct Worksheet {
    session: SessionState,
    supplies: SupplyLog,
    units: UnitLog,
    timer: TurnaroundTimer,
}

impl Worksheet {
    /// A fresh worksheet with default session values and empty logs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A worksheet starting from the given session values.
    pub fn with_session(session: SessionState) -> Self {
        Worksheet {
            session,
            ..Self::default()
        }
    }

    /// The current session values.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Set the scene location text.
    ///
    /// Stored supplies keep the turnaround they snapshotted when they were
    /// added; only entries added after this call see the new scene.
    pub fn set_scene_location(&mut self, location: impl Into<String>) {
        self.session.scene_location = location.into();
    }

    /// Set the average tender speed in mph.
    pub fn set_average_speed(&mut self, mph: f64) {
        self.session.average_speed = mph;
    }

    /// Set the fixed fill/setup time in minutes.
    pub fn set_fill_setup_time(&mut self, minutes: f64) {
        self.session.fill_setup_time = minutes;
    }

    /// Set the working turnaround time in minutes.
    pub fn set_turn_around_time(&mut self, minutes: f64) {
        self.session.turn_around_time = minutes;
    }

    /// Log a water supply, returning its id.
    pub fn add_supply(&mut self, draft: SupplyDraft) -> Uuid {
        self.supplies.add(draft, &self.session)
    }

    /// Log a supply pinned on the map.
    pub fn pin_supply(&mut self, lat: f64, lon: f64) -> Uuid {
        self.add_supply(SupplyDraft::pinned(lat, lon))
    }

    /// Remove a logged supply; a no-op for an unknown id.
    pub fn remove_supply(&mut self, id: Uuid) {
        self.supplies.remove(id);
    }

    /// Logged supplies in insertion order.
    pub fn supplies(&self) -> &[WaterSupply] {
        self.supplies.supplies()
    }

    /// Supplies whose location matches a search term, case-insensitively.
    pub fn search_supplies(&self, term: &str) -> Vec<&WaterSupply> {
        self.supplies.search_location(term)
    }

    /// Log a deployed unit assignment, returning its id.
    pub fn add_unit(&mut self, draft: UnitDraft) -> Uuid {
        self.units.add(draft)
    }

    /// Remove a logged unit; a no-op for an unknown id.
    pub fn remove_unit(&mut self, id: Uuid) {
        self.units.remove(id);
    }

    /// Logged unit assignments in insertion order.
    pub fn units(&self) -> &[WaterSupplyUnit] {
        self.units.units()
    }

    /// Import supplies from GeoJSON text, returning how many were added.
    pub fn import_geojson(&mut self, text: &str) -> Result<usize, WorksheetErr> {
        let drafts = import::parse_feature_collection(text)?;
        let added = self.supplies.add_batch(drafts, &self.session);

        debug!("imported {} supplies", added.len());
        Ok(added.len())
    }

    /// Import supplies from a `.geojson` file, returning how many were added.
    pub fn import_geojson_file(&mut self, path: &dyn AsRef<Path>) -> Result<usize, WorksheetErr> {
        let drafts = import::read_geojson_file(path)?;
        let added = self.supplies.add_batch(drafts, &self.session);

        debug!("imported {} supplies from file", added.len());
        Ok(added.len())
    }

    /// Distance in miles from the scene to a logged supply, when both parse.
    pub fn supply_distance(&self, supply: &WaterSupply) -> Option<f64> {
        distance_between(&self.session.scene_location, &supply.location)
    }

    /// One-way ETA in minutes from the scene to a logged supply.
    pub fn supply_eta(&self, supply: &WaterSupply) -> Option<f64> {
        let distance = self.supply_distance(supply)?;

        eta_minutes(distance, self.session.average_speed)
    }

    /// Adopt a logged supply's turnaround time as the session's working value.
    ///
    /// Returns false, changing nothing, when the id is unknown or the stored
    /// text does not lead with a number.
    pub fn use_supply_turnaround(&mut self, id: Uuid) -> bool {
        let minutes = self
            .supplies
            .get(id)
            .and_then(|supply| parse_leading_f64(&supply.turn_around_time));

        match minutes {
            Some(minutes) => {
                self.session.turn_around_time = minutes;
                true
            }
            None => false,
        }
    }

    /// The turnaround stopwatch.
    pub fn timer(&mut self) -> &mut TurnaroundTimer {
        &mut self.timer
    }

    /// Adopt the stopwatch reading as the session's working turnaround time.
    pub fn apply_timer(&mut self) {
        self.session.turn_around_time = self.timer.elapsed_minutes();
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = SessionState::default();

        assert_eq!(session.scene_location, "");
        assert_eq!(session.average_speed, 35.0);
        assert_eq!(session.fill_setup_time, 5.0);
        assert_eq!(session.turn_around_time, 10.0);
    }

    #[test]
    fn test_add_and_remove_through_worksheet() {
        let mut worksheet = Worksheet::new();
        worksheet.set_scene_location("47.6062, -122.3321");

        let id = worksheet.add_supply(SupplyDraft::new("Hydrant", "47.61, -122.33", ""));
        assert_eq!(worksheet.supplies().len(), 1);

        worksheet.remove_supply(id);
        assert!(worksheet.supplies().is_empty());
    }

    #[test]
    fn test_supply_rows_report_distance_and_eta() {
        let mut worksheet = Worksheet::new();
        worksheet.set_scene_location("47.6062, -122.3321");

        worksheet.add_supply(SupplyDraft::new("Hydrant", "47.6062, -121.3321", ""));
        worksheet.add_supply(SupplyDraft::new("Unknown", "still typing", ""));

        let supplies: Vec<WaterSupply> = worksheet.supplies().to_vec();

        let distance = worksheet
            .supply_distance(&supplies[0])
            .expect("both ends parse");
        assert!((distance - 46.6).abs() < 0.2);

        let eta = worksheet.supply_eta(&supplies[0]).expect("speed is positive");
        assert!((eta - distance / 35.0 * 60.0).abs() < 1e-9);

        assert_eq!(worksheet.supply_distance(&supplies[1]), None);
        assert_eq!(worksheet.supply_eta(&supplies[1]), None);
    }

    #[test]
    fn test_eta_unavailable_at_zero_speed() {
        let mut worksheet = Worksheet::new();
        worksheet.set_scene_location("47.6062, -122.3321");
        worksheet.set_average_speed(0.0);

        worksheet.add_supply(SupplyDraft::new("Hydrant", "47.6062, -121.3321", ""));
        let supply = worksheet.supplies()[0].clone();

        assert!(worksheet.supply_distance(&supply).is_some());
        assert_eq!(worksheet.supply_eta(&supply), None);
    }

    #[test]
    fn test_scene_change_leaves_snapshots_alone() {
        let mut worksheet = Worksheet::new();
        worksheet.set_scene_location("47.6062, -122.3321");

        let id = worksheet.add_supply(SupplyDraft::new("Hydrant", "47.6062, -122.3321", ""));
        let before = worksheet.supplies()[0].turn_around_time.clone();
        assert_eq!(before, "5.00");

        worksheet.set_scene_location("48.0, -123.0");
        worksheet.set_average_speed(10.0);

        let after = &worksheet.supplies()[0].turn_around_time;
        assert_eq!(*after, before);

        // Recomputation requires remove + re-add under the new session.
        worksheet.remove_supply(id);
        worksheet.add_supply(SupplyDraft::new("Hydrant", "47.6062, -122.3321", ""));
        assert_ne!(worksheet.supplies()[0].turn_around_time, before);
    }

    #[test]
    fn test_use_supply_turnaround() {
        let mut worksheet = Worksheet::new();

        let usable = worksheet.add_supply(SupplyDraft::new("A", "nowhere", "17.5"));
        let unusable = worksheet.add_supply(SupplyDraft::new("B", "nowhere", ""));

        assert!(!worksheet.use_supply_turnaround(unusable));
        assert_eq!(worksheet.session().turn_around_time, 10.0);

        assert!(worksheet.use_supply_turnaround(usable));
        assert_eq!(worksheet.session().turn_around_time, 17.5);

        assert!(!worksheet.use_supply_turnaround(Uuid::new_v4()));
    }

    #[test]
    fn test_pin_supply() {
        let mut worksheet = Worksheet::new();

        worksheet.pin_supply(47.606234, -122.332178);

        let supply = &worksheet.supplies()[0];
        assert_eq!(supply.kind, "Hydrant (Pinned)");
        assert_eq!(supply.location, "47.60623, -122.33218");
    }

    #[test]
    fn test_import_funnels_through_add() {
        let mut worksheet = Worksheet::new();
        worksheet.set_scene_location("47.6062, -122.3321");

        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "geometry": { "type": "Point", "coordinates": [-122.3321, 47.6062] },
                    "properties": { "name": "Scene hydrant" }
                }
            ]
        }"#;

        let added = worksheet.import_geojson(text).expect("valid collection");
        assert_eq!(added, 1);

        // Imported entries get the same snapshot treatment as manual ones.
        let supply = &worksheet.supplies()[0];
        assert_eq!(supply.turn_around_time, "5.00");

        let err = worksheet.import_geojson(r#"{"type": "Feature"}"#);
        assert!(err.is_err());
        assert_eq!(worksheet.supplies().len(), 1);
    }

    #[test]
    fn test_apply_timer_when_stopped_at_zero() {
        let mut worksheet = Worksheet::new();

        worksheet.apply_timer();
        assert_eq!(worksheet.session().turn_around_time, 0.0);
    }
}
