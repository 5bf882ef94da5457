//! In-memory logs of water supplies and deployed supply units.
//!
//! Each log assigns ids on add, preserves insertion order, and lives only for
//! the session. Nothing here is persisted.

use tracing::debug;
use uuid::Uuid;

use crate::{coords::format_coords, metrics, session::SessionState};

/// A logged water supply point.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSupply {
    pub id: Uuid,
    /// Free-text label, e.g. "Hydrant" or an imported feature name.
    pub kind: String,
    pub location: String,
    /// Empty, a manually entered value, or the estimate snapshotted at add
    /// time. Non-empty values take precedence over anything recalculated.
    pub turn_around_time: String,
}

/// A water supply entry as submitted, before the log assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDraft {
    /// Free-text label for the supply.
    pub kind: String,
    /// Location string, `"lat, lon"` free text.
    pub location: String,
    /// Manually entered turnaround time, or empty to let the log estimate one.
    pub turn_around_time: String,
}

impl SupplyDraft {
    /// A draft from form fields.
    pub fn new(
        kind: impl Into<String>,
        location: impl Into<String>,
        turn_around_time: impl Into<String>,
    ) -> Self {
        SupplyDraft {
            kind: kind.into(),
            location: location.into(),
            turn_around_time: turn_around_time.into(),
        }
    }

    /// A draft from a map pin drop.
    pub fn pinned(lat: f64, lon: f64) -> Self {
        SupplyDraft::new("Hydrant (Pinned)", format_coords(lat, lon), "")
    }
}

/// The ordered log of water supplies.
#[derive(Debug, Default)]
pub struct SupplyLog {
    entries: Vec<WaterSupply>,
}

impl SupplyLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a supply entry and return its id.
    ///
    /// The id is a fresh v4 UUID, unique within this log for its lifetime.
    /// The stored turnaround time is resolved here, once: a non-empty manual
    /// value wins, otherwise an estimate from the session's scene location,
    /// speed, and setup time when all three are usable. Later session changes
    /// never rewrite stored entries; to recompute, remove and re-add.
    pub fn add(&mut self, draft: SupplyDraft, session: &SessionState) -> Uuid {
        let turn_around_time = metrics::resolve_turnaround(
            &draft.turn_around_time,
            &session.scene_location,
            &draft.location,
            session.average_speed,
            session.fill_setup_time,
        );

        let id = Uuid::new_v4();
        debug!("adding water supply {} ({})", draft.kind, id);

        self.entries.push(WaterSupply {
            id,
            kind: draft.kind,
            location: draft.location,
            turn_around_time,
        });

        id
    }

    /// Feed a batch of drafts through the `add` path, so imported entries get
    /// ids and snapshot turnarounds exactly like manually entered ones.
    pub fn add_batch(&mut self, drafts: Vec<SupplyDraft>, session: &SessionState) -> Vec<Uuid> {
        drafts
            .into_iter()
            .map(|draft| self.add(draft, session))
            .collect()
    }

    /// Remove the entry with the matching id. Removing an id that is not
    /// present is a no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.entries.retain(|supply| supply.id != id);
    }

    /// All entries in insertion order.
    pub fn supplies(&self) -> &[WaterSupply] {
        &self.entries
    }

    /// Look up one entry by id.
    pub fn get(&self, id: Uuid) -> Option<&WaterSupply> {
        self.entries.iter().find(|supply| supply.id == id)
    }

    /// Entries whose location contains `term`, case-insensitively, in
    /// insertion order.
    pub fn search_location(&self, term: &str) -> Vec<&WaterSupply> {
        let needle = term.to_lowercase();

        self.entries
            .iter()
            .filter(|supply| supply.location.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of logged supplies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A deployed tender assignment.
///
/// The `unit` field is whatever the user selected or typed. It is not
/// validated against the tender roster.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSupplyUnit {
    pub id: Uuid,
    pub unit: String,
    pub location: String,
    pub assignment: String,
}

/// A unit assignment as submitted, before the log assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDraft {
    /// Tender identifier, free text.
    pub unit: String,
    /// Location string.
    pub location: String,
    /// Assignment note.
    pub assignment: String,
}

impl UnitDraft {
    /// A draft from form fields.
    pub fn new(
        unit: impl Into<String>,
        location: impl Into<String>,
        assignment: impl Into<String>,
    ) -> Self {
        UnitDraft {
            unit: unit.into(),
            location: location.into(),
            assignment: assignment.into(),
        }
    }
}

/// The ordered log of deployed supply units.
#[derive(Debug, Default)]
pub struct UnitLog {
    entries: Vec<WaterSupplyUnit>,
}

impl UnitLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit assignment and return its id.
    pub fn add(&mut self, draft: UnitDraft) -> Uuid {
        let id = Uuid::new_v4();
        debug!("adding supply unit {} ({})", draft.unit, id);

        self.entries.push(WaterSupplyUnit {
            id,
            unit: draft.unit,
            location: draft.location,
            assignment: draft.assignment,
        });

        id
    }

    /// Remove the entry with the matching id, a no-op if absent.
    pub fn remove(&mut self, id: Uuid) {
        self.entries.retain(|unit| unit.id != id);
    }

    /// All entries in insertion order.
    pub fn units(&self) -> &[WaterSupplyUnit] {
        &self.entries
    }

    /// Number of logged units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
