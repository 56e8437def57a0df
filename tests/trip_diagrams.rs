// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use tripline::format::{export_trip_list, parse_trip_list};
use tripline::layout::{connectors, resolve_chains, BoxGeometry, ConnectionKind, SourceLink};
use tripline::model::TripSequence;
use tripline::ops::{apply_ops, Op, TripBoard};
use tripline::query::diagram_report;
use tripline::render::render_trips_unicode;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("trip_lists")
}

fn read_fixture(name: &str) -> TripSequence {
    let path = fixtures_dir().join(name);
    let text =
        fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    parse_trip_list(&text)
        .unwrap_or_else(|err| panic!("expected {name} to parse, got error: {err}"))
}

fn connector_triples(sequence: &TripSequence) -> Vec<(usize, usize, ConnectionKind)> {
    let trips = sequence.as_slice();
    connectors(trips, &resolve_chains(trips))
        .iter()
        .map(|c| (c.from_index(), c.to_index(), c.kind()))
        .collect()
}

#[test]
fn round_the_world_keeps_main_chain_on_first_lane() {
    let sequence = read_fixture("round_the_world.txt");
    let layout = resolve_chains(sequence.as_slice());

    let levels = layout.placements().iter().map(|p| p.level()).collect::<Vec<_>>();
    assert_eq!(levels, vec![1, 1, 1, 2, 1, 1, 1]);

    // HNL-SYD skips over the side trip and continues LAX-HNL.
    let source = layout.placement(4).source().expect("source");
    assert_eq!((source.index(), source.link()), (2, SourceLink::Continuation));

    assert_eq!(
        connector_triples(&sequence),
        vec![
            (0, 1, ConnectionKind::Continued),
            (1, 2, ConnectionKind::Continued),
            (2, 3, ConnectionKind::Disconnected),
            (2, 4, ConnectionKind::Continued),
            (4, 5, ConnectionKind::Continued),
            (5, 6, ConnectionKind::Continued),
        ]
    );
}

#[test]
fn commute_repeats_inherit_lane_and_new_activity_opens_one() {
    let sequence = read_fixture("commute.txt");
    let layout = resolve_chains(sequence.as_slice());

    let levels = layout.placements().iter().map(|p| p.level()).collect::<Vec<_>>();
    assert_eq!(levels, vec![1, 1, 1, 1, 2]);

    let sources = layout
        .placements()
        .iter()
        .map(|p| p.source().map(|s| (s.index(), s.link())))
        .collect::<Vec<_>>();
    assert_eq!(
        sources,
        vec![
            None,
            Some((0, SourceLink::Continuation)),
            Some((0, SourceLink::Repeat)),
            Some((1, SourceLink::Repeat)),
            None,
        ]
    );

    // Repeats that are not adjacent connect back to their earlier occurrence.
    assert_eq!(
        connector_triples(&sequence),
        vec![
            (0, 1, ConnectionKind::Continued),
            (0, 2, ConnectionKind::Disconnected),
            (1, 3, ConnectionKind::Disconnected),
            (3, 4, ConnectionKind::Disconnected),
        ]
    );
}

#[test]
fn fixtures_render_and_report() {
    for name in ["round_the_world.txt", "commute.txt"] {
        let sequence = read_fixture(name);
        let trips = sequence.as_slice();
        let layout = resolve_chains(trips);
        let connectors = connectors(trips, &layout);

        let rendered = render_trips_unicode(trips, &layout, &connectors)
            .unwrap_or_else(|err| panic!("expected {name} to render, got error: {err}"));
        for trip in trips {
            assert!(rendered.contains(&trip.to_string()), "{name}: missing box for {trip}");
        }

        let report = diagram_report(trips, &layout, &connectors, &BoxGeometry::default());
        assert_eq!(report.trips.len(), trips.len());
        assert_eq!(report.connectors.len(), trips.len() - 1);
        assert_eq!(report.lanes, layout.max_level());
    }
}

#[test]
fn bad_line_is_reported_with_its_number() {
    let text = fs::read_to_string(fixtures_dir().join("bad_line.txt")).expect("read fixture");
    let err = parse_trip_list(&text).unwrap_err();
    assert_eq!(err.line_no, 2);
    assert!(err.to_string().contains("FROM-TO"), "{err}");
}

#[test]
fn exported_fixtures_parse_back_unchanged() {
    for name in ["round_the_world.txt", "commute.txt"] {
        let sequence = read_fixture(name);
        let text = export_trip_list(&sequence)
            .unwrap_or_else(|err| panic!("expected {name} to export, got error: {err}"));
        assert_eq!(parse_trip_list(&text).expect("reparse"), sequence, "{name}");
    }
}

#[test]
fn board_replays_fixture_one_trip_at_a_time() {
    let sequence = read_fixture("round_the_world.txt");

    let mut board = TripBoard::new();
    for trip in sequence.iter() {
        let op = Op::AddTrip { from: trip.from().to_string(), to: trip.to().to_string() };
        let rev = board.rev();
        apply_ops(&mut board, rev, &[op]).expect("apply");
    }

    assert_eq!(board.sequence(), &sequence);
    assert_eq!(board.layout(), &resolve_chains(sequence.as_slice()));
    assert_eq!(board.connectors().len(), sequence.len() - 1);
}
