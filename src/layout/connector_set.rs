// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use serde::Serialize;

use super::connector::Connector;

/// Connectors handed out by the last recomputation.
///
/// The layout is recomputed from scratch on every change; syncing the new result against this
/// set tells a front-end which drawn connectors to drop and which to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorSet {
    current: BTreeSet<Connector>,
}

/// Sorted changes between two connector sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectorDiff {
    pub added: Vec<Connector>,
    pub removed: Vec<Connector>,
}

impl ConnectorDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl ConnectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set with `next` and reports the difference.
    pub fn sync(&mut self, next: impl IntoIterator<Item = Connector>) -> ConnectorDiff {
        let next = next.into_iter().collect::<BTreeSet<_>>();
        let diff = ConnectorDiff {
            added: next.difference(&self.current).copied().collect(),
            removed: self.current.difference(&next).copied().collect(),
        };
        self.current = next;
        diff
    }

    pub fn clear(&mut self) -> ConnectorDiff {
        self.sync(std::iter::empty())
    }

    pub fn contains(&self, connector: &Connector) -> bool {
        self.current.contains(connector)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connector> + '_ {
        self.current.iter()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
