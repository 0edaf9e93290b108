// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for error translation and display.

use fiber_patrol::CoreError;
use fiber_patrol_domain::{DomainError, FindingId, MaintenanceId};

use crate::{ApiError, StoreError, translate_core_error, translate_domain_error};

#[test]
fn test_translate_invalid_title_passes_message_through() {
    let err = translate_domain_error(DomainError::InvalidTitle(String::from(
        "Title cannot be empty",
    )));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("title"),
            message: String::from("Title cannot be empty"),
        }
    );
}

#[test]
fn test_translate_parse_error_names_the_offending_value() {
    let err = translate_domain_error(DomainError::InvalidSeverity(String::from("urgent")));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("severity"),
            message: String::from("'urgent' is not a recognized severity"),
        }
    );
}

#[test]
fn test_translate_missing_route_targets_route_field() {
    let err = translate_domain_error(DomainError::MissingRoute);

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("route_id"),
            message: String::from("A route must be selected for the patrol"),
        }
    );
}

#[test]
fn test_translate_core_delegates_domain_violations() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::EmptyPatrolTeam));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("patrol_team"),
            message: String::from("Patrol team must contain at least one named member"),
        }
    );
}

#[test]
fn test_translate_patrol_number_lock() {
    let err = translate_core_error(CoreError::PatrolNumberLocked);

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("patrol_number_locked"),
            message: String::from("The patrol number cannot change once the patrol exists"),
        }
    );
}

#[test]
fn test_translate_roster_minimum() {
    let err = translate_core_error(CoreError::CannotRemoveLastTeamMember);

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("team_roster_minimum"),
            message: String::from("The last team roster slot cannot be removed"),
        }
    );
}

#[test]
fn test_translate_index_errors_describe_bounds() {
    let err = translate_core_error(CoreError::FindingIndexOutOfRange { index: 2, len: 1 });

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("finding_index_in_range"),
            message: String::from("No finding at index 2 (patrol has 1)"),
        }
    );
}

#[test]
fn test_translate_finding_not_found() {
    let err = translate_core_error(CoreError::FindingNotFound {
        finding_id: FindingId::new(String::from("finding-404")),
    });

    assert_eq!(
        err,
        ApiError::NotFound {
            resource_type: String::from("finding"),
            message: String::from("No finding with id 'finding-404' on this patrol"),
        }
    );
}

#[test]
fn test_translate_maintenance_eligibility_rules() {
    let not_eligible = translate_core_error(CoreError::FindingNotEligible {
        finding_id: FindingId::new(String::from("finding-1")),
    });
    let already_linked = translate_core_error(CoreError::FindingAlreadyLinked {
        finding_id: FindingId::new(String::from("finding-1")),
    });

    assert_eq!(
        not_eligible,
        ApiError::DomainRuleViolation {
            rule: String::from("maintenance_eligibility"),
            message: String::from("Finding 'finding-1' does not qualify for maintenance creation"),
        }
    );
    assert_eq!(
        already_linked,
        ApiError::DomainRuleViolation {
            rule: String::from("single_maintenance_ticket"),
            message: String::from("Finding 'finding-1' already carries a maintenance ticket"),
        }
    );
}

#[test]
fn test_api_error_display_formats() {
    let invalid = ApiError::InvalidInput {
        field: String::from("title"),
        message: String::from("Title cannot be empty"),
    };
    let violation = ApiError::DomainRuleViolation {
        rule: String::from("patrol_stored"),
        message: String::from("Maintenance can only be raised against a stored patrol"),
    };
    let not_found = ApiError::NotFound {
        resource_type: String::from("finding"),
        message: String::from("No finding with id 'finding-404' on this patrol"),
    };
    let store_failure = ApiError::StoreFailure {
        operation: String::from("create_patrol"),
        message: String::from("store rejected the payload: create refused"),
    };
    let link_failed = ApiError::FindingLinkFailed {
        maintenance_id: MaintenanceId::new(String::from("maint-1")),
        message: String::from("store unavailable: patrol store offline"),
    };

    assert_eq!(
        invalid.to_string(),
        "Invalid input for field 'title': Title cannot be empty"
    );
    assert_eq!(
        violation.to_string(),
        "Domain rule violation (patrol_stored): Maintenance can only be raised against a stored patrol"
    );
    assert_eq!(
        not_found.to_string(),
        "Not found (finding): No finding with id 'finding-404' on this patrol"
    );
    assert_eq!(
        store_failure.to_string(),
        "Store dispatch 'create_patrol' failed: store rejected the payload: create refused"
    );
    assert_eq!(
        link_failed.to_string(),
        "Maintenance record 'maint-1' was created but the finding link failed: store unavailable: patrol store offline"
    );
}

#[test]
fn test_store_error_display_formats() {
    assert_eq!(
        StoreError::Rejected(String::from("duplicate ticket")).to_string(),
        "store rejected the payload: duplicate ticket"
    );
    assert_eq!(
        StoreError::Unavailable(String::from("patrol store offline")).to_string(),
        "store unavailable: patrol store offline"
    );
}
