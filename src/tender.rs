//! Static reference data for the tender fleet.

use std::fmt;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Home stations for the tender fleet.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[allow(missing_docs)]
pub enum Station {
    D15,
    D16,
    D17,
    D19,
    D21,
    D22,
    D24,
    D25,
    #[strum(to_string = "Marys.", serialize = "Marysville")]
    Marysville,
    NCRFA, // North County Regional Fire Authority
    Camano,
    Conway,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// Quick-dump capability of a tender.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
pub enum QuickDump {
    /// Rear dump valve
    #[strum(to_string = "YES - REAR")]
    Rear,
    /// Rear dump through a jet syphon
    #[strum(to_string = "REAR - JET SYPHON")]
    RearJetSyphon,
    /// Side and rear dump valves
    #[strum(to_string = "YES - S/R")]
    SideAndRear,
    /// Side dump valve only
    #[strum(to_string = "YES - SIDE")]
    Side,
}

impl fmt::Display for QuickDump {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

/// A water tender and its capabilities.
///
/// Loaded once, immutable for the life of the process. The worksheet never
/// edits this roster, it only reads capacities and pump rates out of it.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tender {
    pub id: &'static str,
    pub station: Station,
    pub tank_capacity: u32,
    pub pump_gpm: u32,
    pub quick_dump: QuickDump,
    /// Fold-a-tank size in gallons, when one is carried.
    pub fold_a_tank: Option<u32>,
}

/// The tender roster.
pub const TENDER_ROSTER: [Tender; 22] = [
    Tender {
        id: "T-37",
        station: Station::D25,
        tank_capacity: 3000,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(2500),
    },
    Tender {
        id: "T-37A",
        station: Station::D25,
        tank_capacity: 4500,
        pump_gpm: 750,
        quick_dump: QuickDump::Rear,
        fold_a_tank: None,
    },
    Tender {
        id: "T38",
        station: Station::D24,
        tank_capacity: 1500,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: None,
    },
    Tender {
        id: "T39",
        station: Station::D24,
        tank_capacity: 2500,
        pump_gpm: 500,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T49",
        station: Station::D21,
        tank_capacity: 3000,
        pump_gpm: 500,
        quick_dump: QuickDump::RearJetSyphon,
        fold_a_tank: None,
    },
    Tender {
        id: "TE50",
        station: Station::D21,
        tank_capacity: 2850,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T60",
        station: Station::D15,
        tank_capacity: 3000,
        pump_gpm: 1000,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3500),
    },
    Tender {
        id: "T65",
        station: Station::Marysville,
        tank_capacity: 3500,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: None,
    },
    Tender {
        id: "T68",
        station: Station::D22,
        tank_capacity: 2500,
        pump_gpm: 1000,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3500),
    },
    Tender {
        id: "T85",
        station: Station::D16,
        tank_capacity: 2800,
        pump_gpm: 500,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T87",
        station: Station::D17,
        tank_capacity: 3000,
        pump_gpm: 1250,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T90",
        station: Station::NCRFA,
        tank_capacity: 2850,
        pump_gpm: 500,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T94",
        station: Station::D19,
        tank_capacity: 3000,
        pump_gpm: 1250,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3500),
    },
    Tender {
        id: "T95",
        station: Station::D19,
        tank_capacity: 2500,
        pump_gpm: 500,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T96",
        station: Station::NCRFA,
        tank_capacity: 2800,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T97",
        station: Station::NCRFA,
        tank_capacity: 2800,
        pump_gpm: 1000,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T1-2",
        station: Station::Camano,
        tank_capacity: 2750,
        pump_gpm: 1250,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T1-3",
        station: Station::Camano,
        tank_capacity: 2800,
        pump_gpm: 750,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T1-4",
        station: Station::Camano,
        tank_capacity: 2800,
        pump_gpm: 750,
        quick_dump: QuickDump::Side,
        fold_a_tank: Some(2900),
    },
    Tender {
        id: "T1-5",
        station: Station::Camano,
        tank_capacity: 2750,
        pump_gpm: 1250,
        quick_dump: QuickDump::SideAndRear,
        fold_a_tank: Some(3000),
    },
    Tender {
        id: "T312",
        station: Station::Conway,
        tank_capacity: 2500,
        pump_gpm: 1250,
        quick_dump: QuickDump::Rear,
        fold_a_tank: None,
    },
    Tender {
        id: "T316",
        station: Station::Conway,
        tank_capacity: 3500,
        pump_gpm: 500,
        quick_dump: QuickDump::Rear,
        fold_a_tank: Some(3500),
    },
];

/// Quick-glance table of sustained GPM for a 3000 gallon tender by turnaround
/// time: `(minutes, gpm)`.
pub const GPM_QUICK_GLANCE: [(u32, u32); 10] = [
    (10, 300),
    (15, 200),
    (20, 150),
    (25, 120),
    (30, 100),
    (35, 85),
    (40, 75),
    (45, 65),
    (50, 60),
    (60, 50),
];

/// Key operational points for the water supply officer.
pub const KEY_POINTS: [&str; 5] = [
    "Flow rates above 500 GPM should consider a Folda-Tank operation.",
    "Attempt 2 Folda-Tanks during high GPM emergencies.",
    "Remember to time the first tender's Turnaround Time.",
    "Manifolds should be used at fill sites.",
    "Clearly mark supply corridors.",
];

/// Look up a tender by its identifier.
pub fn tender_by_id(id: &str) -> Option<&'static Tender> {
    TENDER_ROSTER.iter().find(|tender| tender.id == id)
}

/// The smallest tank capacity in the roster, the conservative sizing input for
/// the tenders-needed formula.
pub fn lowest_tank_capacity() -> u32 {
    TENDER_ROSTER
        .iter()
        .map(|tender| tender.tank_capacity)
        .min()
        .unwrap_or(0)
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_roster_size() {
        assert_eq!(TENDER_ROSTER.len(), 22);
    }

    #[test]
    fn test_roster_ids_are_unique() {
        for (i, tender) in TENDER_ROSTER.iter().enumerate() {
            assert!(
                TENDER_ROSTER[i + 1..].iter().all(|t| t.id != tender.id),
                "duplicate tender id: {}",
                tender.id
            );
        }
    }

    #[test]
    fn test_lowest_tank_capacity() {
        assert_eq!(lowest_tank_capacity(), 1500);
    }

    #[test]
    fn test_tender_by_id() {
        let t38 = tender_by_id("T38").expect("T38 is in the roster");
        assert_eq!(t38.station, Station::D24);
        assert_eq!(t38.tank_capacity, 1500);

        assert!(tender_by_id("T-999").is_none());
    }

    #[test]
    fn round_trip_strings_for_station() {
        for station in Station::iter() {
            let text: &'static str = station.into();
            assert_eq!(Station::from_str(text).unwrap(), station);
        }
    }

    #[test]
    fn round_trip_strings_for_quick_dump() {
        for quick_dump in QuickDump::iter() {
            let text: &'static str = quick_dump.into();
            assert_eq!(QuickDump::from_str(text).unwrap(), quick_dump);
        }
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(Station::Marysville.to_string(), "Marys.");
        assert_eq!(QuickDump::SideAndRear.to_string(), "YES - S/R");
    }

    #[test]
    fn test_quick_glance_matches_formula() {
        use crate::metrics::tender_gpm;

        // The published table is for a nominal 3000 gallon tender, rounded to
        // friendly numbers. Every row should be within 5% of the formula.
        for &(minutes, gpm) in GPM_QUICK_GLANCE.iter() {
            let computed = tender_gpm(3000.0, f64::from(minutes));
            let delta = (f64::from(computed) - f64::from(gpm)).abs();
            assert!(
                delta / f64::from(gpm) < 0.05,
                "{} min: table {} vs computed {}",
                minutes,
                gpm,
                computed
            );
        }
    }
}
