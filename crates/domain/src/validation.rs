// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::RouteId;

/// Validates the fields a patrol must carry before it can be submitted.
///
/// This function checks field-level constraints only; it does not inspect
/// findings or measurements, which are always optional.
///
/// # Arguments
///
/// * `title` - The patrol title
/// * `description` - The patrol description
/// * `route_id` - The selected route, if any
/// * `patrol_team` - The team roster, possibly containing blank slots
///
/// # Returns
///
/// * `Ok(())` if the patrol is ready for submission
/// * `Err(DomainError)` describing the first violation otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - The description is empty or whitespace-only
/// - No route has been selected
/// - No team entry carries a name
pub fn validate_patrol_fields(
    title: &str,
    description: &str,
    route_id: Option<&RouteId>,
    patrol_team: &[String],
) -> Result<(), DomainError> {
    // Rule: title must carry content
    if is_blank(title) {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rule: description must carry content
    if is_blank(description) {
        return Err(DomainError::InvalidDescription(String::from(
            "Description cannot be empty",
        )));
    }

    // Rule: a route must be selected
    if route_id.is_none() {
        return Err(DomainError::MissingRoute);
    }

    // Rule: at least one team member must be named
    if !has_named_member(patrol_team) {
        return Err(DomainError::EmptyPatrolTeam);
    }

    Ok(())
}

/// Returns whether at least one roster entry carries a name.
///
/// The editor keeps blank slots around while the roster is being filled in;
/// they do not count.
#[must_use]
pub fn has_named_member(patrol_team: &[String]) -> bool {
    patrol_team.iter().any(|member| !is_blank(member))
}

/// Returns the roster with blank slots dropped.
///
/// Kept entries are carried verbatim, surrounding whitespace included;
/// only entries with no content at all are removed. Order is preserved.
#[must_use]
pub fn named_members(patrol_team: &[String]) -> Vec<String> {
    patrol_team
        .iter()
        .filter(|member| !is_blank(member))
        .cloned()
        .collect()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
