// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts for the external stores this boundary
//! dispatches to.
//!
//! The stores themselves live outside this workspace (persistence, sync,
//! import/export). The traits here are the whole surface the orchestration
//! relies on; tests substitute in-memory fakes.

use crate::error::StoreError;
use fiber_patrol_domain::{
    MaintenanceId, MaintenanceRecord, NetworkPatrol, PatrolFinding, PatrolId, RouteId,
};

/// Resolves route ids to display names.
pub trait RouteProvider {
    /// Returns the route's display name, or `None` when the id is unknown.
    ///
    /// Dangling route references are expected; callers substitute the
    /// `"Unknown Route"` placeholder rather than treating this as an error.
    fn route_name(&self, route_id: &RouteId) -> Option<String>;
}

/// Store of patrol records.
pub trait PatrolStore {
    /// Stores a new patrol and returns the id it was assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses or cannot accept the patrol.
    fn create(&mut self, patrol: NetworkPatrol) -> Result<PatrolId, StoreError>;

    /// Replaces an existing patrol.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses or cannot accept the patrol.
    fn update(&mut self, id: &PatrolId, patrol: NetworkPatrol) -> Result<(), StoreError>;

    /// Replaces only the finding list of an existing patrol.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses or cannot accept the update.
    fn update_findings(
        &mut self,
        id: &PatrolId,
        findings: Vec<PatrolFinding>,
    ) -> Result<(), StoreError>;
}

/// Store of maintenance records.
///
/// The contract is create-only: once a record is accepted it cannot be
/// withdrawn from here, which is why partial failures in the linkage flow
/// are reconciled by retry rather than rollback.
pub trait MaintenanceStore {
    /// Stores a new maintenance record and returns the id it was assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses or cannot accept the record.
    fn create(&mut self, record: MaintenanceRecord) -> Result<MaintenanceId, StoreError>;
}
