//! Water Supply Worksheet calculator.
//!
//! Prints the tender roster with sustained GPM at the working turnaround time,
//! the number of tenders needed for a required fire flow, and, when a scene
//! location and a GeoJSON file are given, the imported supply table with
//! distance and ETA columns.

use std::error::Error;

use chrono::Utc;
use clap::Arg;
use tracing_subscriber::EnvFilter;

use tender_ops::{
    lowest_tank_capacity, tender_gpm, tenders_needed, CommonCmdLineArgs, SupplyDraft, Worksheet,
    GPM_QUICK_GLANCE, KEY_POINTS, TENDER_ROSTER,
};

fn main() {
    if let Err(ref e) = run() {
        println!("error: {}", e);

        let mut err: &dyn Error = e.as_ref();

        while let Some(cause) = err.source() {
            println!("caused by: {}", cause);
            err = cause;
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = CommonCmdLineArgs::new_app("wsgpm", "Water supply worksheet calculations.")
        .arg(
            Arg::with_name("need")
                .short("n")
                .long("need")
                .takes_value(true)
                .default_value("500")
                .help("Required fire flow in GPM."),
        )
        .arg(
            Arg::with_name("supply")
                .long("supply")
                .multiple(true)
                .takes_value(true)
                .help("Add a water supply location (e.g. \"47.61, -122.33\")."),
        )
        .arg(
            Arg::with_name("reference")
                .long("reference")
                .help("Also print the GPM quick glance table and key points."),
        );

    let (common_args, matches) = CommonCmdLineArgs::matches(app)?;

    let gpm_need = matches
        .value_of("need")
        .and_then(|val| val.parse::<f64>().ok())
        .expect("Invalid need, not parseable as a number.");

    let mut worksheet = Worksheet::with_session(common_args.to_session());

    if let Some(path) = common_args.import_path() {
        let count = worksheet.import_geojson_file(path)?;
        println!("Imported {} supplies from {}.\n", count, path.display());
    }

    for location in matches
        .values_of("supply")
        .into_iter()
        .flat_map(|values| values)
    {
        worksheet.add_supply(SupplyDraft::new("Hydrant", location, ""));
    }

    let session = worksheet.session().clone();

    println!(
        "Water Supply Worksheet - {}",
        Utc::now().format("%Y-%m-%d %H%MZ")
    );
    println!(
        "Turnaround {:.1} min, speed {:.0} mph, fill/setup {:.1} min.\n",
        session.turn_around_time, session.average_speed, session.fill_setup_time
    );

    //
    // Tender roster with sustained GPM at the working turnaround time.
    //
    println!(
        "{:<6} {:<8} {:>10} {:>10} {:>18} {:>11} {:>9}",
        "Tender", "Station", "Tank(gal)", "Pump(GPM)", "Quick Dump", "Fold-A-Tank", "Sust.GPM"
    );
    for tender in TENDER_ROSTER.iter() {
        let sustained = tender_gpm(f64::from(tender.tank_capacity), session.turn_around_time);
        let fold_a_tank = tender
            .fold_a_tank
            .map(|size| size.to_string())
            .unwrap_or_else(|| "N/A".to_owned());

        println!(
            "{:<6} {:<8} {:>10} {:>10} {:>18} {:>11} {:>9}",
            tender.id,
            tender.station.to_string(),
            tender.tank_capacity,
            tender.pump_gpm,
            tender.quick_dump.to_string(),
            fold_a_tank,
            sustained
        );
    }

    let lowest = f64::from(lowest_tank_capacity());
    println!(
        "\nTenders needed for {:.0} GPM at {:.1} min turnaround (lowest tank {:.0} gal): {}",
        gpm_need,
        session.turn_around_time,
        lowest,
        tenders_needed(session.turn_around_time, gpm_need, lowest)
    );

    //
    // Logged supplies with distance and ETA from the scene.
    //
    if !worksheet.supplies().is_empty() {
        println!(
            "\n{:<24} {:<24} {:>10} {:>10} {:>12}",
            "Type", "Location", "Dist(mi)", "ETA(min)", "Turnaround"
        );

        for supply in worksheet.supplies() {
            let distance = worksheet
                .supply_distance(supply)
                .map(|miles| format!("{:.2}", miles))
                .unwrap_or_else(|| "N/A".to_owned());
            let eta = worksheet
                .supply_eta(supply)
                .map(|minutes| format!("{:.1}", minutes))
                .unwrap_or_else(|| "N/A".to_owned());
            let turnaround = if supply.turn_around_time.is_empty() {
                "N/A"
            } else {
                &supply.turn_around_time
            };

            println!(
                "{:<24} {:<24} {:>10} {:>10} {:>12}",
                supply.kind, supply.location, distance, eta, turnaround
            );
        }
    }

    if matches.is_present("reference") {
        println!("\nGPM Quick Glance (3000 gal tender)");
        for &(minutes, gpm) in GPM_QUICK_GLANCE.iter() {
            println!("{:>5} min {:>6} GPM", minutes, gpm);
        }

        println!("\nKey Points");
        for point in KEY_POINTS.iter() {
            println!("  * {}", point);
        }
    }

    Ok(())
}
