// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::PatrolDraft;
use crate::error::CoreError;
use crate::ids::IdGenerator;
use fiber_patrol_domain::{
    CableMeasurement, FindingId, MeasurementId, NetworkPatrol, PatrolFinding, PatrolStatus,
    RouteId, VehicleInfo, named_members,
};
use time::OffsetDateTime;

/// Identity of the person saving a patrol.
///
/// Passed in explicitly by the caller; the editor itself has no notion of a
/// signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// Display name recorded in the patrol's audit fields.
    pub name: String,
}

impl Operator {
    /// Creates a new `Operator`.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name recorded in the patrol's audit fields
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self { name }
    }
}

/// Turns a draft into the patrol record to hand to the store.
///
/// The draft is left untouched; finalizing twice produces two equal records
/// when given the same clock value and an id generator in the same state.
///
/// # Arguments
///
/// * `draft` - The draft to finalize
/// * `operator` - Who is saving the patrol
/// * `now` - The save timestamp
/// * `ids` - Generator for durable finding/measurement identifiers
///
/// # Returns
///
/// * `Ok(NetworkPatrol)` ready for the store's create or update operation
/// * `Err(CoreError)` if the draft does not validate
///
/// # Errors
///
/// Returns an error if the title or description is blank, no route is
/// selected, or no roster slot carries a name.
pub fn finalize(
    draft: &PatrolDraft,
    operator: &Operator,
    now: OffsetDateTime,
    ids: &mut dyn IdGenerator,
) -> Result<NetworkPatrol, CoreError> {
    draft.validate()?;

    let route_id: RouteId = draft.route_id.clone().ok_or(CoreError::RouteNotSelected)?;

    // Blank roster slots are working state, not record content.
    let patrol_team: Vec<String> = named_members(&draft.patrol_team);

    let findings: Vec<PatrolFinding> = draft
        .findings
        .iter()
        .map(|finding| {
            let mut finding: PatrolFinding = finding.clone();
            // Identifiers are assigned once and survive later edits.
            if finding.id.is_none() {
                finding.id = Some(FindingId::new(ids.next_id()));
            }
            finding.updated_at = now;
            finding
        })
        .collect();

    let measurements: Vec<CableMeasurement> = draft
        .measurements
        .iter()
        .map(|measurement| {
            let mut measurement: CableMeasurement = measurement.clone();
            if measurement.id.is_none() {
                measurement.id = Some(MeasurementId::new(ids.next_id()));
            }
            // The route may have changed since the measurement row was added.
            measurement.route_id = route_id.clone();
            measurement
        })
        .collect();

    let (created_by, created_at): (String, OffsetDateTime) = draft.origin.as_ref().map_or_else(
        || (operator.name.clone(), now),
        |origin| (origin.created_by.clone(), origin.created_at),
    );

    // Stamped on the transition into completed; a patrol saved again while
    // already completed keeps its original completion time.
    let completed_at: Option<OffsetDateTime> = if draft.status == PatrolStatus::Completed {
        match &draft.origin {
            Some(origin) if origin.status == PatrolStatus::Completed => {
                origin.completed_at.or(Some(now))
            }
            _ => Some(now),
        }
    } else {
        draft.origin.as_ref().and_then(|origin| origin.completed_at)
    };

    let vehicle_info: Option<VehicleInfo> = if draft.vehicle.is_blank() {
        None
    } else {
        Some(draft.vehicle.clone())
    };

    Ok(NetworkPatrol {
        id: draft.origin.as_ref().and_then(|origin| origin.patrol_id.clone()),
        patrol_number: draft.patrol_number.clone(),
        route_id,
        patrol_type: draft.patrol_type,
        status: draft.status,
        priority: draft.priority,
        title: draft.title.clone(),
        description: draft.description.clone(),
        patrol_date: draft.patrol_date,
        start_time: draft.start_time,
        end_time: draft.end_time,
        patrol_team,
        vehicle_info,
        weather: draft.weather.clone(),
        findings,
        measurements,
        summary: draft.summary.clone(),
        recommendations: draft.recommendations.clone(),
        next_patrol_date: draft.next_patrol_date,
        created_by,
        created_at,
        updated_at: now,
        completed_at,
    })
}
