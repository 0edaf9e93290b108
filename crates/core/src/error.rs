// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fiber_patrol_domain::{DomainError, FindingId};

/// Errors that can occur while editing or finalizing a patrol draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The patrol number cannot change once the patrol exists.
    PatrolNumberLocked,
    /// A team roster index does not refer to an existing slot.
    TeamMemberIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The roster length.
        len: usize,
    },
    /// The roster always keeps at least one slot; the last one cannot go.
    CannotRemoveLastTeamMember,
    /// A findings index does not refer to an existing entry.
    FindingIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The findings list length.
        len: usize,
    },
    /// A measurements index does not refer to an existing entry.
    MeasurementIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The measurements list length.
        len: usize,
    },
    /// A measurement cannot be added before a route is selected.
    RouteNotSelected,
    /// No finding with the given id exists on the patrol.
    FindingNotFound {
        /// The id that was looked up.
        finding_id: FindingId,
    },
    /// The finding does not qualify for maintenance creation.
    FindingNotEligible {
        /// The ineligible finding.
        finding_id: FindingId,
    },
    /// The finding already carries a maintenance ticket.
    FindingAlreadyLinked {
        /// The finding that was already linked.
        finding_id: FindingId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PatrolNumberLocked => {
                write!(f, "Patrol number cannot change once the patrol exists")
            }
            Self::TeamMemberIndexOutOfRange { index, len } => {
                write!(f, "No team member at index {index} (roster has {len})")
            }
            Self::CannotRemoveLastTeamMember => {
                write!(f, "The last team roster slot cannot be removed")
            }
            Self::FindingIndexOutOfRange { index, len } => {
                write!(f, "No finding at index {index} (patrol has {len})")
            }
            Self::MeasurementIndexOutOfRange { index, len } => {
                write!(f, "No measurement at index {index} (patrol has {len})")
            }
            Self::RouteNotSelected => {
                write!(f, "A route must be selected before measurements can be added")
            }
            Self::FindingNotFound { finding_id } => {
                write!(f, "No finding with id '{finding_id}' on this patrol")
            }
            Self::FindingNotEligible { finding_id } => {
                write!(
                    f,
                    "Finding '{finding_id}' does not qualify for maintenance creation"
                )
            }
            Self::FindingAlreadyLinked { finding_id } => {
                write!(
                    f,
                    "Finding '{finding_id}' already carries a maintenance ticket"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
