// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use tripline::model::{Trip, TripSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// 200 trips, each continuing the previous one.
    Chain200,
    /// 2 000 trips, each continuing the previous one.
    Chain2k,
    /// 500 trips sharing no codes: one new lane per trip.
    Disconnected500,
    /// 2 000 trips cycling over a small set of codes, so repeats and continuations mix.
    Mixed2k,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Chain200 => "chain_200",
            Self::Chain2k => "chain_2k",
            Self::Disconnected500 => "disconnected_500",
            Self::Mixed2k => "mixed_2k",
        }
    }

    pub fn all() -> [Case; 4] {
        [Self::Chain200, Self::Chain2k, Self::Disconnected500, Self::Mixed2k]
    }
}

fn code(n: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    [n / 1296 % 36, n / 36 % 36, n % 36].iter().map(|&d| DIGITS[d] as char).collect()
}

fn trip(from: usize, to: usize) -> Trip {
    Trip::parse(&code(from), &code(to)).expect("fixture trip")
}

pub fn fixture(case: Case) -> TripSequence {
    match case {
        Case::Chain200 => (0..200).map(|i| trip(i, i + 1)).collect(),
        Case::Chain2k => (0..2_000).map(|i| trip(i, i + 1)).collect(),
        Case::Disconnected500 => (0..500).map(|i| trip(2 * i, 2 * i + 1)).collect(),
        Case::Mixed2k => (0..2_000)
            .map(|i| {
                // A small multiplicative walk over 17 codes: frequent revisits, few dead ends.
                let from = (i * 7) % 17;
                let to = (i * 7 + 3 + i % 5) % 17;
                trip(from, to)
            })
            .collect(),
    }
}
