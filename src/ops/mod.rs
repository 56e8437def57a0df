// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for a trip board.
//!
//! Operations are applied with optimistic concurrency (revision checks). After every successful
//! batch the chain layout and connectors are recomputed from scratch and the change to the
//! connector set is reported back so a front-end can redraw only what moved.

use std::fmt;

use crate::layout::{
    connectors, resolve_chains, ChainLayout, Connector, ConnectorDiff, ConnectorSet,
};
use crate::model::{Trip, TripParseError, TripSequence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Free-text origin and destination; normalized before they reach the sequence.
    AddTrip { from: String, to: String },
    RemoveTrip { index: usize },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: ConnectorDiff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    InvalidTrip { op_index: usize, source: TripParseError },
    NoSuchTrip { op_index: usize, index: usize, len: usize },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { base_rev, current_rev } => {
                write!(f, "stale base_rev (base_rev={base_rev}, current_rev={current_rev})")
            }
            Self::InvalidTrip { op_index, source } => {
                write!(f, "op {op_index}: invalid trip: {source}")
            }
            Self::NoSuchTrip { op_index, index, len } => {
                write!(f, "op {op_index}: no trip at index {index} (len={len})")
            }
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTrip { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A trip sequence together with its derived layout and the connectors last handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripBoard {
    sequence: TripSequence,
    rev: u64,
    layout: ChainLayout,
    connectors: ConnectorSet,
}

impl TripBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence at once.
    pub fn load(&mut self, trips: impl IntoIterator<Item = Trip>) -> ConnectorDiff {
        self.sequence = trips.into_iter().collect();
        self.rev += 1;
        self.recompute()
    }

    pub fn sequence(&self) -> &TripSequence {
        &self.sequence
    }

    pub fn trips(&self) -> &[Trip] {
        self.sequence.as_slice()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn layout(&self) -> &ChainLayout {
        &self.layout
    }

    pub fn connectors(&self) -> &ConnectorSet {
        &self.connectors
    }

    /// Connectors in target order, as produced by the last recomputation.
    pub fn connector_list(&self) -> Vec<Connector> {
        let mut list = self.connectors.iter().copied().collect::<Vec<_>>();
        list.sort_by_key(|c| (c.to_index(), c.from_index()));
        list
    }

    fn recompute(&mut self) -> ConnectorDiff {
        self.layout = resolve_chains(self.sequence.as_slice());
        let next = connectors(self.sequence.as_slice(), &self.layout);
        let diff = self.connectors.sync(next);
        tracing::debug!(
            rev = self.rev,
            trips = self.sequence.len(),
            added = diff.added.len(),
            removed = diff.removed.len(),
            "recomputed trip board"
        );
        diff
    }
}

/// Applies `ops` atomically: either every op succeeds and the board moves to a new revision, or
/// the board is left untouched.
pub fn apply_ops(board: &mut TripBoard, base_rev: u64, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
    let current_rev = board.rev;
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0, delta: ConnectorDiff::default() });
    }

    let mut sequence = board.sequence.clone();
    for (op_index, op) in ops.iter().enumerate() {
        apply_op(&mut sequence, op_index, op)?;
    }

    board.sequence = sequence;
    board.rev += 1;
    let delta = board.recompute();

    Ok(ApplyResult { new_rev: board.rev, applied: ops.len(), delta })
}

fn apply_op(sequence: &mut TripSequence, op_index: usize, op: &Op) -> Result<(), ApplyError> {
    match op {
        Op::AddTrip { from, to } => {
            sequence
                .add_trip(from, to)
                .map_err(|source| ApplyError::InvalidTrip { op_index, source })?;
        }
        Op::RemoveTrip { index } => {
            let len = sequence.len();
            if sequence.remove(*index).is_none() {
                return Err(ApplyError::NoSuchTrip { op_index, index: *index, len });
            }
        }
        Op::Clear => sequence.clear(),
    }
    Ok(())
}
