// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::finding::{FindingStatus, PatrolFinding, Severity};
use crate::patrol::{NetworkPatrol, PatrolStatus};
use serde::{Deserialize, Serialize};

/// Aggregate counts over a patrol collection.
///
/// Always computed over the full, unfiltered collection: the headline
/// numbers stay put while the list below them is being narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatrolStats {
    /// Total number of patrols.
    pub total: usize,
    /// Patrols still in the planned state.
    pub planned: usize,
    /// Patrols currently underway.
    pub in_progress: usize,
    /// Patrols finished and signed off.
    pub completed: usize,
    /// Findings across all patrols.
    pub total_findings: usize,
    /// Critical-severity findings across all patrols.
    pub critical_findings: usize,
}

/// Computes aggregate counts over a patrol collection.
///
/// # Arguments
///
/// * `patrols` - The full patrol collection
#[must_use]
pub fn collection_stats(patrols: &[NetworkPatrol]) -> PatrolStats {
    PatrolStats {
        total: patrols.len(),
        planned: count_status(patrols, PatrolStatus::Planned),
        in_progress: count_status(patrols, PatrolStatus::InProgress),
        completed: count_status(patrols, PatrolStatus::Completed),
        total_findings: patrols.iter().map(|patrol| patrol.findings.len()).sum(),
        critical_findings: patrols
            .iter()
            .map(|patrol| {
                patrol
                    .findings
                    .iter()
                    .filter(|finding| finding.severity == Severity::Critical)
                    .count()
            })
            .sum(),
    }
}

fn count_status(patrols: &[NetworkPatrol], status: PatrolStatus) -> usize {
    patrols.iter().filter(|patrol| patrol.status == status).count()
}

/// Finding counts by severity and workflow status for a single patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FindingTally {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Findings still in the open state.
    pub open: usize,
    /// Findings marked resolved.
    pub resolved: usize,
}

/// Counts a patrol's findings by severity and by open/resolved status.
///
/// In-progress and monitoring findings count toward neither status bucket.
///
/// # Arguments
///
/// * `findings` - The findings to tally
#[must_use]
pub fn tally_findings(findings: &[PatrolFinding]) -> FindingTally {
    let mut tally = FindingTally::default();
    for finding in findings {
        match finding.severity {
            Severity::Critical => tally.critical += 1,
            Severity::High => tally.high += 1,
            Severity::Medium => tally.medium += 1,
            Severity::Low => tally.low += 1,
        }
        match finding.status {
            FindingStatus::Open => tally.open += 1,
            FindingStatus::Resolved => tally.resolved += 1,
            FindingStatus::InProgress | FindingStatus::Escalated => {}
        }
    }
    tally
}
