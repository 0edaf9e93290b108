// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fiber_patrol::CoreError;
use fiber_patrol_domain::{DomainError, MaintenanceId};
use thiserror::Error;

/// Failure reported by a collaborator store.
///
/// Stores are external collaborators (persistence, sync, import/export);
/// this type is the whole contract for what they may report back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store understood the request and refused it.
    #[error("store rejected the payload: {0}")]
    Rejected(String),
    /// The store could not be reached or did not answer.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A referenced resource does not exist.
    NotFound {
        /// The kind of resource that was looked up.
        resource_type: String,
        /// A human-readable description of the lookup.
        message: String,
    },
    /// A collaborator store refused or failed a dispatch.
    StoreFailure {
        /// The operation that was being dispatched.
        operation: String,
        /// The store's failure description.
        message: String,
    },
    /// The maintenance record was stored but the finding update was not.
    ///
    /// The created id is carried so the caller can retry the second half
    /// via [`crate::relink_finding`]; the maintenance store is create-only,
    /// so the record itself cannot be rolled back.
    FindingLinkFailed {
        /// The maintenance record that was created before the failure.
        maintenance_id: MaintenanceId,
        /// The store's failure description.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "Not found ({resource_type}): {message}")
            }
            Self::StoreFailure { operation, message } => {
                write!(f, "Store dispatch '{operation}' failed: {message}")
            }
            Self::FindingLinkFailed {
                maintenance_id,
                message,
            } => {
                write!(
                    f,
                    "Maintenance record '{maintenance_id}' was created but the finding link failed: {message}"
                )
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Field names follow the record schema.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTitle(message) => ApiError::InvalidInput {
            field: String::from("title"),
            message,
        },
        DomainError::InvalidDescription(message) => ApiError::InvalidInput {
            field: String::from("description"),
            message,
        },
        DomainError::MissingRoute => ApiError::InvalidInput {
            field: String::from("route_id"),
            message: String::from("A route must be selected for the patrol"),
        },
        DomainError::EmptyPatrolTeam => ApiError::InvalidInput {
            field: String::from("patrol_team"),
            message: String::from("Patrol team must contain at least one named member"),
        },
        DomainError::InvalidPatrolType(value) => ApiError::InvalidInput {
            field: String::from("patrol_type"),
            message: format!("'{value}' is not a recognized patrol type"),
        },
        DomainError::InvalidPatrolStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' is not a recognized patrol status"),
        },
        DomainError::InvalidPriority(value) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("'{value}' is not a recognized priority"),
        },
        DomainError::InvalidWeatherCondition(value) => ApiError::InvalidInput {
            field: String::from("weather_condition"),
            message: format!("'{value}' is not a recognized weather condition"),
        },
        DomainError::InvalidFindingType(value) => ApiError::InvalidInput {
            field: String::from("finding_type"),
            message: format!("'{value}' is not a recognized finding type"),
        },
        DomainError::InvalidSeverity(value) => ApiError::InvalidInput {
            field: String::from("severity"),
            message: format!("'{value}' is not a recognized severity"),
        },
        DomainError::InvalidFindingStatus(value) => ApiError::InvalidInput {
            field: String::from("finding_status"),
            message: format!("'{value}' is not a recognized finding status"),
        },
        DomainError::InvalidActionRequired(value) => ApiError::InvalidInput {
            field: String::from("action_required"),
            message: format!("'{value}' is not a recognized action-required value"),
        },
        DomainError::InvalidMeasurementType(value) => ApiError::InvalidInput {
            field: String::from("measurement_type"),
            message: format!("'{value}' is not a recognized measurement type"),
        },
        DomainError::InvalidFiberCondition(value) => ApiError::InvalidInput {
            field: String::from("fiber_condition"),
            message: format!("'{value}' is not a recognized fiber condition"),
        },
        DomainError::InvalidAttachmentType(value) => ApiError::InvalidInput {
            field: String::from("attachment_type"),
            message: format!("'{value}' is not a recognized attachment type"),
        },
        DomainError::InvalidMaintenanceType(value) => ApiError::InvalidInput {
            field: String::from("maintenance_type"),
            message: format!("'{value}' is not a recognized maintenance type"),
        },
        DomainError::InvalidMaintenanceStatus(value) => ApiError::InvalidInput {
            field: String::from("maintenance_status"),
            message: format!("'{value}' is not a recognized maintenance status"),
        },
        DomainError::InvalidRouteStatus(value) => ApiError::InvalidInput {
            field: String::from("route_status"),
            message: format!("'{value}' is not a recognized route status"),
        },
    }
}

/// Translates a core editing error into an API error.
///
/// Domain violations delegate to [`translate_domain_error`]; editor
/// precondition failures become named rule violations.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PatrolNumberLocked => ApiError::DomainRuleViolation {
            rule: String::from("patrol_number_locked"),
            message: String::from("The patrol number cannot change once the patrol exists"),
        },
        CoreError::TeamMemberIndexOutOfRange { index, len } => ApiError::DomainRuleViolation {
            rule: String::from("team_index_in_range"),
            message: format!("No team member at index {index} (roster has {len})"),
        },
        CoreError::CannotRemoveLastTeamMember => ApiError::DomainRuleViolation {
            rule: String::from("team_roster_minimum"),
            message: String::from("The last team roster slot cannot be removed"),
        },
        CoreError::FindingIndexOutOfRange { index, len } => ApiError::DomainRuleViolation {
            rule: String::from("finding_index_in_range"),
            message: format!("No finding at index {index} (patrol has {len})"),
        },
        CoreError::MeasurementIndexOutOfRange { index, len } => ApiError::DomainRuleViolation {
            rule: String::from("measurement_index_in_range"),
            message: format!("No measurement at index {index} (patrol has {len})"),
        },
        CoreError::RouteNotSelected => ApiError::InvalidInput {
            field: String::from("route_id"),
            message: String::from("A route must be selected for the patrol"),
        },
        CoreError::FindingNotFound { finding_id } => ApiError::NotFound {
            resource_type: String::from("finding"),
            message: format!("No finding with id '{finding_id}' on this patrol"),
        },
        CoreError::FindingNotEligible { finding_id } => ApiError::DomainRuleViolation {
            rule: String::from("maintenance_eligibility"),
            message: format!("Finding '{finding_id}' does not qualify for maintenance creation"),
        },
        CoreError::FindingAlreadyLinked { finding_id } => ApiError::DomainRuleViolation {
            rule: String::from("single_maintenance_ticket"),
            message: format!("Finding '{finding_id}' already carries a maintenance ticket"),
        },
    }
}
