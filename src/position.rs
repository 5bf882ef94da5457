//! The geolocation boundary.
//!
//! Acquiring a device position is external and asynchronous. It is modeled as
//! a request with three states: pending, a fix, or a failure with a reason.
//! The caller keys its "get location" control's disabled state to the pending
//! flag and re-enables on either completion, so a second request cannot race
//! the first.

use crate::{
    coords::{format_coords, Coords},
    errors::WorksheetErr,
};

/// The end result of a position request.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionOutcome {
    /// A fix, formatted as the canonical `"lat, lon"` location string.
    Fix(String),
    /// The provider reported failure, with a human-readable reason.
    Unavailable(String),
}

impl PositionOutcome {
    /// Convert to a `Result` for callers that surface failures as errors.
    pub fn into_result(self) -> Result<String, WorksheetErr> {
        match self {
            PositionOutcome::Fix(location) => Ok(location),
            PositionOutcome::Unavailable(reason) => Err(WorksheetErr::PositionUnavailable(reason)),
        }
    }
}

/// Something that can produce the device's current position.
///
/// The crate ships no real device access; the presentation layer implements
/// this over whatever geolocation service it has. Failures are reported as a
/// human-readable reason string, not an error type, because they are surfaced
/// to the user verbatim.
pub trait PositionSource {
    /// Attempt to acquire the current position.
    fn current_position(&mut self) -> Result<Coords, String>;
}

/// Tracks one outstanding position request.
#[derive(Debug, Default)]
pub struct PositionRequest {
    pending: bool,
}

impl PositionRequest {
    /// A request tracker with nothing outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as issued.
    ///
    /// Refused while another request is outstanding; requests are not
    /// cancellable, so the only protection against racing duplicates is to
    /// not issue them.
    pub fn begin(&mut self) -> Result<(), WorksheetErr> {
        if self.pending {
            return Err(WorksheetErr::LogicError(
                "position request already outstanding",
            ));
        }

        self.pending = true;
        Ok(())
    }

    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Deliver the response, clearing the pending flag on success and failure
    /// alike.
    pub fn complete(&mut self, response: Result<Coords, String>) -> PositionOutcome {
        self.pending = false;

        match response {
            Ok(fix) => PositionOutcome::Fix(format_coords(fix.lat, fix.lon)),
            Err(reason) => PositionOutcome::Unavailable(reason),
        }
    }

    /// Issue a request against a source and deliver its response in one step.
    pub fn acquire(
        &mut self,
        source: &mut dyn PositionSource,
    ) -> Result<PositionOutcome, WorksheetErr> {
        self.begin()?;
        let response = source.current_position();

        Ok(self.complete(response))
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
