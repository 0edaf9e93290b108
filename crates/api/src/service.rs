// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatch orchestration over the collaborator stores.

use crate::error::{ApiError, translate_core_error};
use crate::stores::{MaintenanceStore, PatrolStore, RouteProvider};
use fiber_patrol::{link_maintenance, maintenance_request_for_finding};
use fiber_patrol_domain::{
    FindingId, MaintenanceId, MaintenanceRecord, NetworkPatrol, PatrolFinding, PatrolId,
    UNKNOWN_ROUTE,
};
use fiber_patrol_report::{
    generate_report, report_email_url, report_filename, report_whatsapp_url,
};
use time::{Date, OffsetDateTime};

/// Outcome of a completed maintenance linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceLink {
    /// The id the maintenance store assigned to the new record.
    pub maintenance_id: MaintenanceId,
    /// The patrol's full finding list with the linked finding patched.
    pub findings: Vec<PatrolFinding>,
}

/// A report with its share hand-offs, ready for the caller to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBundle {
    /// The plain-text report.
    pub report: String,
    /// `mailto:` URL carrying the report.
    pub email_url: String,
    /// WhatsApp share URL carrying the report.
    pub whatsapp_url: String,
    /// Suggested filename for a downloaded copy.
    pub filename: String,
}

/// Stores a finalized patrol, creating or updating by id presence.
///
/// A patrol without an id has never been stored; it is dispatched as a
/// create and adopts the id the store assigns. A patrol with an id is
/// dispatched as a full update under that id.
///
/// # Arguments
///
/// * `patrol` - The finalized patrol to store
/// * `store` - The patrol store to dispatch to
///
/// # Returns
///
/// The effective [`PatrolId`] the record is stored under.
///
/// # Errors
///
/// Returns [`ApiError::StoreFailure`] if the store refuses the dispatch.
pub fn submit_patrol(
    patrol: NetworkPatrol,
    store: &mut dyn PatrolStore,
) -> Result<PatrolId, ApiError> {
    match patrol.id.clone() {
        Some(id) => {
            store
                .update(&id, patrol)
                .map_err(|err| ApiError::StoreFailure {
                    operation: String::from("update_patrol"),
                    message: err.to_string(),
                })?;
            Ok(id)
        }
        None => store.create(patrol).map_err(|err| ApiError::StoreFailure {
            operation: String::from("create_patrol"),
            message: err.to_string(),
        }),
    }
}

/// Raises a maintenance record for a finding and links it back.
///
/// This operation:
/// - builds the corrective maintenance payload from the finding (pure)
/// - dispatches the record to the maintenance store; the id the store
///   assigns becomes the finding's ticket id
/// - patches the finding list and dispatches the partial update to the
///   patrol store
///
/// # Arguments
///
/// * `patrol` - The stored patrol the finding belongs to
/// * `finding_id` - The finding to raise maintenance work for
/// * `today` - Date the work is scheduled for
/// * `maintenance_store` - The maintenance store to dispatch the record to
/// * `patrol_store` - The patrol store to dispatch the finding patch to
///
/// # Returns
///
/// A [`MaintenanceLink`] carrying the assigned maintenance id and the
/// patched finding list.
///
/// # Errors
///
/// Returns an error if:
/// - The finding is unknown, ineligible, or already linked
/// - The maintenance store refuses the record
/// - The record was stored but the finding patch failed; this is
///   [`ApiError::FindingLinkFailed`] and carries the created maintenance
///   id so the caller can retry via [`relink_finding`]
pub fn create_maintenance_for_finding(
    patrol: &NetworkPatrol,
    finding_id: &FindingId,
    today: Date,
    maintenance_store: &mut dyn MaintenanceStore,
    patrol_store: &mut dyn PatrolStore,
) -> Result<MaintenanceLink, ApiError> {
    let record: MaintenanceRecord =
        maintenance_request_for_finding(patrol, finding_id, today).map_err(translate_core_error)?;

    let maintenance_id: MaintenanceId =
        maintenance_store
            .create(record)
            .map_err(|err| ApiError::StoreFailure {
                operation: String::from("create_maintenance"),
                message: err.to_string(),
            })?;

    relink_finding(patrol, finding_id, maintenance_id, patrol_store)
}

/// Retries the second half of a maintenance linkage.
///
/// The maintenance store is create-only, so a record that was stored
/// before the finding patch failed cannot be rolled back; reconciliation
/// is by retrying this call with the id carried in
/// [`ApiError::FindingLinkFailed`].
///
/// # Arguments
///
/// * `patrol` - The stored patrol the finding belongs to
/// * `finding_id` - The finding to patch
/// * `maintenance_id` - The id the maintenance store assigned
/// * `patrol_store` - The patrol store to dispatch the finding patch to
///
/// # Returns
///
/// A [`MaintenanceLink`] carrying the maintenance id and the patched
/// finding list.
///
/// # Errors
///
/// Returns an error if:
/// - The patrol has no id (it was never stored)
/// - The finding is unknown or already linked
/// - The patrol store refuses the patch, reported as
///   [`ApiError::FindingLinkFailed`]
pub fn relink_finding(
    patrol: &NetworkPatrol,
    finding_id: &FindingId,
    maintenance_id: MaintenanceId,
    patrol_store: &mut dyn PatrolStore,
) -> Result<MaintenanceLink, ApiError> {
    let patrol_id: PatrolId =
        patrol
            .id
            .clone()
            .ok_or_else(|| ApiError::DomainRuleViolation {
                rule: String::from("patrol_stored"),
                message: String::from("Maintenance can only be raised against a stored patrol"),
            })?;

    let findings: Vec<PatrolFinding> =
        link_maintenance(patrol, finding_id, maintenance_id.clone())
            .map_err(translate_core_error)?;

    if let Err(err) = patrol_store.update_findings(&patrol_id, findings.clone()) {
        tracing::warn!(
            maintenance_id = %maintenance_id,
            finding_id = %finding_id,
            error = %err,
            "maintenance record stored but the finding link dispatch failed"
        );
        return Err(ApiError::FindingLinkFailed {
            maintenance_id,
            message: err.to_string(),
        });
    }

    Ok(MaintenanceLink {
        maintenance_id,
        findings,
    })
}

/// Renders a patrol's report together with its share hand-offs.
///
/// The route name is resolved through the provider; a dangling route
/// reference falls back to the `"Unknown Route"` placeholder.
///
/// # Arguments
///
/// * `patrol` - The patrol to report on
/// * `routes` - Route name resolution
/// * `generated_at` - Timestamp stamped into the report footer
#[must_use]
pub fn patrol_report(
    patrol: &NetworkPatrol,
    routes: &dyn RouteProvider,
    generated_at: OffsetDateTime,
) -> ReportBundle {
    let route_name: String = routes
        .route_name(&patrol.route_id)
        .unwrap_or_else(|| String::from(UNKNOWN_ROUTE));
    let report: String = generate_report(patrol, &route_name, generated_at);

    ReportBundle {
        email_url: report_email_url(&patrol.patrol_number, &report),
        whatsapp_url: report_whatsapp_url(&report),
        filename: report_filename(&patrol.patrol_number),
        report,
    }
}
