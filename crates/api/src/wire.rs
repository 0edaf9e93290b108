// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON contract with the import/export collaborator.
//!
//! Record structs serialize `camelCase` and classification enums
//! `kebab-case`; the wire tests pin those shapes so a schema drift shows
//! up here instead of at the collaborator.

use fiber_patrol_domain::{NetworkPatrol, Route};

/// Serializes routes for export.
///
/// # Arguments
///
/// * `routes` - The routes to serialize
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn routes_to_json(routes: &[Route]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(routes)
}

/// Deserializes routes from an import payload.
///
/// # Arguments
///
/// * `json` - The JSON document to parse
///
/// # Errors
///
/// Returns an error if the document is not valid JSON or does not match
/// the route schema.
pub fn routes_from_json(json: &str) -> Result<Vec<Route>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serializes patrols for export.
///
/// # Arguments
///
/// * `patrols` - The patrols to serialize
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn patrols_to_json(patrols: &[NetworkPatrol]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(patrols)
}

/// Deserializes patrols from an import payload.
///
/// # Arguments
///
/// * `json` - The JSON document to parse
///
/// # Errors
///
/// Returns an error if the document is not valid JSON or does not match
/// the patrol schema.
pub fn patrols_from_json(json: &str) -> Result<Vec<NetworkPatrol>, serde_json::Error> {
    serde_json::from_str(json)
}
