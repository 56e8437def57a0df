// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tripline CLI entrypoint.
//!
//! Reads trips from the command line and/or a trip list file and prints the diagram, either as
//! Unicode text or as a JSON report.

use std::error::Error;
use std::io::Read as _;

use tracing_subscriber::EnvFilter;

use tripline::format::parse_trip_list;
use tripline::layout::BoxGeometry;
use tripline::model::{Trip, TripSequence};
use tripline::ops::TripBoard;
use tripline::query::diagram_report;
use tripline::render::render_trips_unicode;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--format text|json] [--trips-file <path>] [--geometry <path>] [TRIP ...]\n\nTRIP is FROM-TO (e.g. fra-jfk); codes are uppercased and cut to three characters.\n--trips-file reads one trip per line ('-' reads stdin); blank lines and '#' comments are skipped.\nFile trips come before command-line trips.\n--geometry loads box geometry (origin_x, origin_y, column_pitch, lane_pitch) as JSON for --format json.\n\nRUST_LOG controls diagnostics on stderr (default: warn)."
    );
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    format: Option<OutputFormat>,
    trips_file: Option<String>,
    geometry_file: Option<String>,
    trips: Vec<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.format = Some(match raw.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => return Err(()),
                });
            }
            "--trips-file" => {
                if options.trips_file.is_some() {
                    return Err(());
                }
                options.trips_file = Some(args.next().ok_or(())?);
            }
            "--geometry" => {
                if options.geometry_file.is_some() {
                    return Err(());
                }
                options.geometry_file = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with("--") => return Err(()),
            _ => options.trips.push(arg),
        }
    }

    if options.trips_file.is_none() && options.trips.is_empty() {
        return Err(());
    }

    if options.geometry_file.is_some() && options.format != Some(OutputFormat::Json) {
        return Err(());
    }

    Ok(options)
}

fn read_input(path: &str) -> Result<String, Box<dyn Error>> {
    if path == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).map_err(|err| format!("failed to read {path}: {err}").into())
}

fn load_trips(options: &CliOptions) -> Result<TripSequence, Box<dyn Error>> {
    let mut sequence = match &options.trips_file {
        Some(path) => parse_trip_list(&read_input(path)?)?,
        None => TripSequence::new(),
    };
    for raw in &options.trips {
        sequence.push(raw.parse::<Trip>()?);
    }
    Ok(sequence)
}

fn load_geometry(options: &CliOptions) -> Result<BoxGeometry, Box<dyn Error>> {
    match &options.geometry_file {
        Some(path) => {
            let geometry = serde_json::from_str(&read_input(path)?)
                .map_err(|err| format!("invalid geometry {path}: {err}"))?;
            Ok(geometry)
        }
        None => Ok(BoxGeometry::default()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    init_tracing();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tripline".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let sequence = load_trips(&options)?;
        let geometry = load_geometry(&options)?;
        tracing::debug!(trips = sequence.len(), "loaded trips");

        let mut board = TripBoard::new();
        board.load(sequence.iter().cloned());
        let connectors = board.connector_list();

        match options.format.unwrap_or_default() {
            OutputFormat::Text => {
                let text = render_trips_unicode(board.trips(), board.layout(), &connectors)?;
                println!("{text}");
            }
            OutputFormat::Json => {
                let report = diagram_report(board.trips(), board.layout(), &connectors, &geometry);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("tripline: {err}");
        std::process::exit(1);
    }
}
