// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::patrol::{NetworkPatrol, PatrolStatus, PatrolType};
use crate::route::{Route, resolve_route_name};

/// Criteria for narrowing a patrol list.
///
/// All criteria must hold for a patrol to pass (AND semantics). A `None`
/// status or type means that axis is not being filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatrolFilter {
    /// Case-insensitive substring matched against the patrol title, the
    /// patrol number, and the resolved route name. Empty matches everything.
    pub search: String,
    /// Keep only patrols in this status.
    pub status: Option<PatrolStatus>,
    /// Keep only patrols of this type.
    pub patrol_type: Option<PatrolType>,
}

/// Narrows a patrol collection to the entries matching a filter.
///
/// The input order is preserved. Patrols referencing a route missing from
/// `routes` match the search against the placeholder name, so searching for
/// "unknown" finds them.
///
/// # Arguments
///
/// * `patrols` - The full patrol collection
/// * `filter` - The criteria to apply
/// * `routes` - The known routes, used to resolve names for text search
#[must_use]
pub fn filter_patrols<'a>(
    patrols: &'a [NetworkPatrol],
    filter: &PatrolFilter,
    routes: &[Route],
) -> Vec<&'a NetworkPatrol> {
    patrols
        .iter()
        .filter(|patrol| matches_filter(patrol, filter, routes))
        .collect()
}

fn matches_filter(patrol: &NetworkPatrol, filter: &PatrolFilter, routes: &[Route]) -> bool {
    let needle: String = filter.search.to_lowercase();
    let matches_search: bool = patrol.title.to_lowercase().contains(&needle)
        || patrol.patrol_number.to_lowercase().contains(&needle)
        || resolve_route_name(routes, &patrol.route_id)
            .to_lowercase()
            .contains(&needle);

    let matches_status: bool = filter
        .status
        .is_none_or(|status| patrol.status == status);
    let matches_type: bool = filter
        .patrol_type
        .is_none_or(|patrol_type| patrol.patrol_type == patrol_type);

    matches_search && matches_status && matches_type
}
