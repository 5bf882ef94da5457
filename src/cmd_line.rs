//! Command line options that are used across applications.

use std::path::PathBuf;

use clap::{crate_version, App, Arg, ArgMatches};

use crate::{errors::WorksheetErr, session::SessionState};

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CommonCmdLineArgs {
    // Scene location as "lat, lon" text, if one was given.
    scene: Option<String>,
    // Average tender speed in mph.
    average_speed: f64,
    // Fixed fill/setup time in minutes.
    fill_setup_time: f64,
    // Working turnaround time in minutes.
    turn_around_time: f64,
    // Optional GeoJSON file of water supplies to import.
    import_path: Option<PathBuf>,
}

impl<'a, 'b> CommonCmdLineArgs {
    const DEFAULT_SPEED: &'static str = "35";
    const DEFAULT_SETUP_TIME: &'static str = "5";
    const DEFAULT_TURN_AROUND: &'static str = "10";

    /// Create a new set of args.
    pub fn new_app(app_name: &'static str, about: &'static str) -> App<'a, 'b> {
        App::new(app_name)
            .author("Ryan Leach <clumsycodemonkey@gmail.com>")
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::with_name("scene")
                    .short("c")
                    .long("scene")
                    .takes_value(true)
                    .help("Scene location (e.g. \"47.6062, -122.3321\")."),
            )
            .arg(
                Arg::with_name("speed")
                    .short("s")
                    .long("speed")
                    .takes_value(true)
                    .default_value(Self::DEFAULT_SPEED)
                    .help("Average tender speed in mph."),
            )
            .arg(
                Arg::with_name("setup-time")
                    .long("setup-time")
                    .takes_value(true)
                    .default_value(Self::DEFAULT_SETUP_TIME)
                    .help("Fixed fill/setup time in minutes."),
            )
            .arg(
                Arg::with_name("turnaround")
                    .short("t")
                    .long("turnaround")
                    .takes_value(true)
                    .default_value(Self::DEFAULT_TURN_AROUND)
                    .help("Turnaround time in minutes for the GPM calculators."),
            )
            .arg(
                Arg::with_name("import")
                    .short("i")
                    .long("import")
                    .takes_value(true)
                    .help("GeoJSON file of water supplies to import."),
            )
            .after_help(concat!(
                "Distances and ETAs are only reported when the scene location and a ",
                "supply location both parse as \"lat, lon\" pairs.\n\n",
                "Supplies imported without a turnaround time get one estimated from the ",
                "scene location, speed, and setup time at import."
            ))
    }

    /// Process an `App` to get the parsed values out of it and the matches object so an
    /// application can continue with further argument parsing.
    pub fn matches(app: App<'a, 'b>) -> Result<(Self, ArgMatches<'a>), WorksheetErr> {
        let matches = app.get_matches();

        let cmd_line_opts = {
            let scene = matches.value_of("scene").map(str::to_owned);

            let average_speed = matches
                .value_of("speed")
                .and_then(|val| val.parse::<f64>().ok())
                .expect("Invalid speed, not parseable as a number.");

            let fill_setup_time = matches
                .value_of("setup-time")
                .and_then(|val| val.parse::<f64>().ok())
                .expect("Invalid setup-time, not parseable as a number.");

            let turn_around_time = matches
                .value_of("turnaround")
                .and_then(|val| val.parse::<f64>().ok())
                .expect("Invalid turnaround, not parseable as a number.");

            let import_path = matches.value_of("import").map(PathBuf::from);

            CommonCmdLineArgs {
                scene,
                average_speed,
                fill_setup_time,
                turn_around_time,
                import_path,
            }
        };

        let usage = matches.usage().to_owned();
        let print_usage_message = |msg: &str| -> ! {
            println!("\n{}\n\n{}\n", msg, usage);
            println!("Try the -h or --help option for more instructions.");
            ::std::process::exit(1);
        };

        if cmd_line_opts.average_speed < 0.0 {
            print_usage_message("Invalid speed, it must be 0 or a positive value!");
        }

        if cmd_line_opts.fill_setup_time < 0.0 {
            print_usage_message("Invalid setup-time, it must be 0 or a positive value!");
        }

        Ok((cmd_line_opts, matches))
    }

    /// Get the scene location, if one was given.
    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    /// Get the average tender speed in mph.
    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    /// Get the fill/setup time in minutes.
    pub fn fill_setup_time(&self) -> f64 {
        self.fill_setup_time
    }

    /// Get the turnaround time in minutes.
    pub fn turn_around_time(&self) -> f64 {
        self.turn_around_time
    }

    /// Get the GeoJSON import path, if one was given.
    pub fn import_path(&self) -> Option<&PathBuf> {
        self.import_path.as_ref()
    }

    /// Build the session state these arguments describe.
    pub fn to_session(&self) -> SessionState {
        SessionState {
            scene_location: self.scene.clone().unwrap_or_default(),
            average_speed: self.average_speed,
            fill_setup_time: self.fill_setup_time,
            turn_around_time: self.turn_around_time,
        }
    }
}
