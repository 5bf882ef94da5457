//! The worksheet formulas: ETA, turnaround, tender GPM, and tenders needed.
//!
//! All pure functions of their arguments. Anything that cannot be computed
//! comes back as `None` or zero per the edge-case rules below, never an error.

use crate::distance::distance_between;

/// One-way travel time in minutes.
///
/// `None` when the average speed is not positive, so the caller displays "N/A"
/// rather than a nonsense number.
pub fn eta_minutes(distance_mi: f64, speed_mph: f64) -> Option<f64> {
    if speed_mph <= 0.0 {
        return None;
    }

    Some(distance_mi / speed_mph * 60.0)
}

/// Round-trip turnaround estimate in minutes: twice the one-way travel time
/// plus the fixed fill/setup time.
pub fn turnaround_estimate(distance_mi: f64, speed_mph: f64, setup_min: f64) -> Option<f64> {
    let one_way = eta_minutes(distance_mi, speed_mph)?;

    Some(one_way * 2.0 + setup_min)
}

/// Sustained flow a tender delivers: tank capacity over total turnaround time.
///
/// A turnaround of zero or less yields 0 GPM, the calculator never divides by
/// zero.
pub fn tender_gpm(capacity_gal: f64, turnaround_min: f64) -> u32 {
    if turnaround_min <= 0.0 {
        return 0;
    }

    (capacity_gal / turnaround_min).round() as u32
}

/// Number of tenders needed to sustain a required GPM.
///
/// `ceil((turnaround * gpm_need) / lowest_capacity)`, sized against the
/// smallest tank in the shuttle so the estimate is conservative. A lowest
/// capacity of zero or less yields 0.
pub fn tenders_needed(turnaround_min: f64, gpm_need: f64, lowest_capacity_gal: f64) -> u32 {
    if lowest_capacity_gal <= 0.0 {
        return 0;
    }

    ((turnaround_min * gpm_need) / lowest_capacity_gal).ceil() as u32
}

/// Resolve the turnaround-time text stored on a new supply entry.
///
/// A non-empty manually entered value wins verbatim. Otherwise, if the scene
/// and supply locations both parse and the speed is positive, the turnaround
/// estimate is formatted to two decimals. Otherwise the field is left empty.
///
/// This runs once, when the entry is created. The stored value is a snapshot:
/// later changes to the scene location or speed never rewrite it.
pub fn resolve_turnaround(
    manual: &str,
    scene: &str,
    supply_location: &str,
    speed_mph: f64,
    setup_min: f64,
) -> String {
    if !manual.is_empty() {
        return manual.to_owned();
    }

    distance_between(scene, supply_location)
        .and_then(|distance| turnaround_estimate(distance, speed_mph, setup_min))
        .map(|minutes| format!("{:.2}", minutes))
        .unwrap_or_default()
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_eta_minutes() {
        assert_eq!(eta_minutes(35.0, 35.0), Some(60.0));
        assert_eq!(eta_minutes(17.5, 35.0), Some(30.0));

        assert_eq!(eta_minutes(10.0, 0.0), None);
        assert_eq!(eta_minutes(10.0, -5.0), None);
    }

    #[test]
    fn test_turnaround_estimate() {
        // 30 minutes out, 30 back, 5 to fill.
        assert_eq!(turnaround_estimate(17.5, 35.0, 5.0), Some(65.0));

        assert_eq!(turnaround_estimate(17.5, 0.0, 5.0), None);
    }

    #[test]
    fn test_tender_gpm() {
        assert_eq!(tender_gpm(3000.0, 10.0), 300);
        assert_eq!(tender_gpm(2500.0, 15.0), 167);

        assert_eq!(tender_gpm(3000.0, 0.0), 0);
        assert_eq!(tender_gpm(3000.0, -1.0), 0);
    }

    #[test]
    fn test_tenders_needed() {
        // ceil(10 * 500 / 2500) = 2
        assert_eq!(tenders_needed(10.0, 500.0, 2500.0), 2);
        // ceil(15 * 500 / 2500) = 3
        assert_eq!(tenders_needed(15.0, 500.0, 2500.0), 3);

        assert_eq!(tenders_needed(10.0, 500.0, 0.0), 0);
    }

    #[test]
    fn test_resolve_manual_wins() {
        let resolved = resolve_turnaround("12.5", "47.6, -122.3", "47.7, -122.4", 35.0, 5.0);
        assert_eq!(resolved, "12.5");

        // Manual values are taken verbatim even when they are not numbers.
        let resolved = resolve_turnaround("unknown", "47.6, -122.3", "47.7, -122.4", 35.0, 5.0);
        assert_eq!(resolved, "unknown");
    }

    #[test]
    fn test_resolve_computed() {
        // Scene and supply at the same point: zero travel, only setup remains.
        let resolved = resolve_turnaround("", "47.6, -122.3", "47.6, -122.3", 35.0, 5.0);
        assert_eq!(resolved, "5.00");
    }

    #[test]
    fn test_resolve_empty_when_unavailable() {
        assert_eq!(resolve_turnaround("", "", "47.6, -122.3", 35.0, 5.0), "");
        assert_eq!(
            resolve_turnaround("", "47.6, -122.3", "mid-typing", 35.0, 5.0),
            ""
        );
        assert_eq!(
            resolve_turnaround("", "47.6, -122.3", "47.7, -122.4", 0.0, 5.0),
            ""
        );
    }
}
