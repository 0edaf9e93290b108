// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::RouteId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Name substituted whenever a patrol references a route the collection
/// does not contain.
pub const UNKNOWN_ROUTE: &str = "Unknown Route";

/// Operational state of a route, as reported by the route owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStatus {
    Operational,
    Warning,
    Critical,
    Maintenance,
}

impl RouteStatus {
    /// Converts this route status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for RouteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(Self::Operational),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidRouteStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Endpoints of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLocation {
    /// Where the route starts (e.g. a POP or exchange name).
    pub start: String,
    /// Where the route ends.
    pub end: String,
}

impl RouteLocation {
    /// Creates a new `RouteLocation`.
    ///
    /// # Arguments
    ///
    /// * `start` - Where the route starts
    /// * `end` - Where the route ends
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// A fiber route, owned and maintained by an external collaborator.
///
/// Patrols only reference routes; this core never modifies them. Unknown
/// fields from the collaborator's fuller record are ignored on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// The route identifier patrols reference.
    pub id: RouteId,
    /// Display name (e.g. "CGK-BDO Backbone").
    pub name: String,
    /// Operational state.
    pub status: RouteStatus,
    /// Endpoints of the route.
    pub location: RouteLocation,
    /// Number of fiber cores in the cable.
    pub fiber_count: u32,
}

/// Resolves a route id to its display name.
///
/// # Arguments
///
/// * `routes` - The known routes
/// * `route_id` - The id to resolve
///
/// # Returns
///
/// The route's name, or [`UNKNOWN_ROUTE`] when the id is not present.
/// Dangling references are expected (routes can be deleted out from under
/// patrol records) and are never an error.
#[must_use]
pub fn resolve_route_name<'a>(routes: &'a [Route], route_id: &RouteId) -> &'a str {
    routes
        .iter()
        .find(|route| &route.id == route_id)
        .map_or(UNKNOWN_ROUTE, |route| route.name.as_str())
}
