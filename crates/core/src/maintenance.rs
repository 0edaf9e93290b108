// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use fiber_patrol_domain::{
    ActionRequired, FindingId, FindingStatus, MaintenanceId, MaintenanceRecord, MaintenanceStatus,
    MaintenanceType, NetworkPatrol, PatrolFinding,
};
use time::Date;

/// Builds the corrective maintenance record a finding calls for.
///
/// The record is a request payload: its `id` is `None` until the
/// maintenance store assigns one. The finding itself is not modified here;
/// [`link_maintenance`] patches it once the store has accepted the record.
///
/// # Arguments
///
/// * `patrol` - The patrol the finding belongs to
/// * `finding_id` - The finding to create maintenance work for
/// * `today` - Date the work is scheduled for
///
/// # Returns
///
/// * `Ok(MaintenanceRecord)` ready for the maintenance store
/// * `Err(CoreError)` if the finding is unknown or does not qualify
///
/// # Errors
///
/// Returns an error if:
/// - No finding with the given id exists on the patrol
/// - The finding already carries a maintenance ticket
/// - The finding requires no action
pub fn maintenance_request_for_finding(
    patrol: &NetworkPatrol,
    finding_id: &FindingId,
    today: Date,
) -> Result<MaintenanceRecord, CoreError> {
    let finding: &PatrolFinding = find_finding(patrol, finding_id)?;

    // Linking is one-shot per finding.
    if finding.maintenance_ticket_id.is_some() {
        return Err(CoreError::FindingAlreadyLinked {
            finding_id: finding_id.clone(),
        });
    }
    if matches!(finding.action_required, ActionRequired::None) {
        return Err(CoreError::FindingNotEligible {
            finding_id: finding_id.clone(),
        });
    }

    Ok(MaintenanceRecord {
        id: None,
        route_id: patrol.route_id.clone(),
        maintenance_type: MaintenanceType::Corrective,
        status: MaintenanceStatus::Scheduled,
        title: format!("Repair: {}", finding.title),
        description: format!(
            "{}\n\nLocation: {}\nSeverity: {}\nAction Required: {}",
            finding.description, finding.location.address, finding.severity, finding.action_required
        ),
        scheduled_date: today,
        completed_date: None,
        technician: finding.assigned_to.clone().unwrap_or_default(),
        priority: finding.severity.escalation_priority(),
        duration: None,
        notes: Some(format!(
            "Created from patrol finding: {}\nPatrol: {}",
            finding_id, patrol.patrol_number
        )),
    })
}

/// Produces the patrol's finding list with one finding tied to a
/// maintenance record.
///
/// Exactly the addressed finding changes: its ticket id is set and its
/// status moves to in-progress. Every sibling is returned unchanged. The
/// caller hands the returned list to the patrol store as a partial update.
///
/// # Arguments
///
/// * `patrol` - The patrol the finding belongs to
/// * `finding_id` - The finding to patch
/// * `maintenance_id` - Identifier the maintenance store assigned
///
/// # Returns
///
/// * `Ok(Vec<PatrolFinding>)` the full finding list with the patch applied
/// * `Err(CoreError)` if the finding is unknown or already linked
///
/// # Errors
///
/// Returns an error if:
/// - No finding with the given id exists on the patrol
/// - The finding already carries a maintenance ticket
pub fn link_maintenance(
    patrol: &NetworkPatrol,
    finding_id: &FindingId,
    maintenance_id: MaintenanceId,
) -> Result<Vec<PatrolFinding>, CoreError> {
    let finding: &PatrolFinding = find_finding(patrol, finding_id)?;
    if finding.maintenance_ticket_id.is_some() {
        return Err(CoreError::FindingAlreadyLinked {
            finding_id: finding_id.clone(),
        });
    }

    let findings: Vec<PatrolFinding> = patrol
        .findings
        .iter()
        .map(|finding| {
            if finding.id.as_ref() == Some(finding_id) {
                let mut patched: PatrolFinding = finding.clone();
                patched.maintenance_ticket_id = Some(maintenance_id.clone());
                patched.status = FindingStatus::InProgress;
                patched
            } else {
                finding.clone()
            }
        })
        .collect();

    Ok(findings)
}

fn find_finding<'a>(
    patrol: &'a NetworkPatrol,
    finding_id: &FindingId,
) -> Result<&'a PatrolFinding, CoreError> {
    patrol
        .findings
        .iter()
        .find(|finding| finding.id.as_ref() == Some(finding_id))
        .ok_or_else(|| CoreError::FindingNotFound {
            finding_id: finding_id.clone(),
        })
}
