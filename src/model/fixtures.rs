// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::trip::Trip;

pub(crate) fn trip(from: &str, to: &str) -> Trip {
    Trip::parse(from, to).expect("trip")
}

pub(crate) fn trips(pairs: &[(&str, &str)]) -> Vec<Trip> {
    pairs.iter().map(|(from, to)| trip(from, to)).collect()
}

/// `(X0,X1), (X1,X2), ...`: every trip continues the previous one.
///
/// Codes are base-36 encoded so they stay within three characters for thousands of trips.
pub(crate) fn continuation_chain(len: usize) -> Vec<Trip> {
    (0..len).map(|i| trip(&code_for(i), &code_for(i + 1))).collect()
}

/// Trips that never share a code: each one opens a new lane.
pub(crate) fn disconnected_run(len: usize) -> Vec<Trip> {
    (0..len).map(|i| trip(&code_for(2 * i), &code_for(2 * i + 1))).collect()
}

fn code_for(n: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut out = [b'0'; 3];
    let mut rest = n;
    for slot in out.iter_mut().rev() {
        *slot = DIGITS[rest % 36];
        rest /= 36;
    }
    out.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::{code_for, continuation_chain};

    #[test]
    fn codes_are_distinct_and_three_chars() {
        assert_eq!(code_for(0), "000");
        assert_eq!(code_for(37), "011");
        assert_ne!(code_for(199), code_for(200));
    }

    #[test]
    fn continuation_chain_links_each_trip() {
        let chain = continuation_chain(4);
        for pair in chain.windows(2) {
            assert!(pair[1].continues(&pair[0]));
        }
    }
}
