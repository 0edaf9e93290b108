// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fiber_patrol_domain::{
    CableMeasurement, DomainError, NetworkPatrol, PatrolFinding, PatrolId, PatrolStatus,
    PatrolType, Priority, RouteId, VehicleInfo, Weather, WeatherCondition, validate_patrol_fields,
};
use time::macros::time;
use time::{Date, OffsetDateTime, Time};

/// Immutable facts carried over from the patrol a draft was opened from.
///
/// Present only when editing; a draft for a brand-new patrol has no origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftOrigin {
    /// The stored patrol's identifier.
    pub patrol_id: Option<PatrolId>,
    /// Who created the patrol originally.
    pub created_by: String,
    /// When the patrol was created originally.
    pub created_at: OffsetDateTime,
    /// The patrol's status when the draft was opened.
    pub status: PatrolStatus,
    /// The patrol's completion timestamp when the draft was opened.
    pub completed_at: Option<OffsetDateTime>,
}

/// Working copy of a patrol being created or edited.
///
/// A draft is plain local state: mutations go through
/// [`apply`](crate::apply) as commands, and nothing leaves the draft until
/// [`finalize`](crate::finalize) turns it into a [`NetworkPatrol`].
/// Abandoning an edit is simply dropping the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolDraft {
    /// Where the draft came from. `None` when creating a new patrol.
    pub origin: Option<DraftOrigin>,
    /// Patrol number. Editable only while the patrol does not exist yet.
    pub patrol_number: String,
    /// Selected route. `None` until the operator picks one.
    pub route_id: Option<RouteId>,
    /// Why the patrol is being carried out.
    pub patrol_type: PatrolType,
    /// Lifecycle state the patrol will be saved in.
    pub status: PatrolStatus,
    /// Urgency classification.
    pub priority: Priority,
    /// Short headline.
    pub title: String,
    /// What the patrol covers.
    pub description: String,
    /// Calendar date of the patrol.
    pub patrol_date: Date,
    /// Planned or actual start of the walk.
    pub start_time: Time,
    /// End of the walk, once known.
    pub end_time: Option<Time>,
    /// Team roster. Blank slots are kept while the roster is being
    /// filled in and dropped at finalization.
    pub patrol_team: Vec<String>,
    /// Vehicle entry. Left entirely blank when no vehicle was used.
    pub vehicle: VehicleInfo,
    /// Weather observed at patrol time.
    pub weather: Weather,
    /// Findings recorded so far.
    pub findings: Vec<PatrolFinding>,
    /// Measurements recorded so far.
    pub measurements: Vec<CableMeasurement>,
    /// Narrative summary.
    pub summary: String,
    /// Follow-up recommendations.
    pub recommendations: String,
    /// Suggested date for the next patrol of this route.
    pub next_patrol_date: Option<Date>,
}

impl PatrolDraft {
    /// Opens a draft for a brand-new patrol.
    ///
    /// Defaults mirror a fresh field form: a suggested patrol number for
    /// today, a routine planned patrol at medium priority starting at
    /// 08:00, one empty roster slot, and sunny 25 degree weather.
    ///
    /// # Arguments
    ///
    /// * `today` - The calendar date the patrol is being planned on
    #[must_use]
    pub fn create(today: Date) -> Self {
        Self {
            origin: None,
            patrol_number: suggest_patrol_number(today),
            route_id: None,
            patrol_type: PatrolType::default(),
            status: PatrolStatus::default(),
            priority: Priority::default(),
            title: String::new(),
            description: String::new(),
            patrol_date: today,
            start_time: time!(08:00),
            end_time: None,
            patrol_team: vec![String::new()],
            vehicle: VehicleInfo::new(String::new(), String::new()),
            weather: Weather::new(WeatherCondition::default(), Some(25), None),
            findings: Vec::new(),
            measurements: Vec::new(),
            summary: String::new(),
            recommendations: String::new(),
            next_patrol_date: None,
        }
    }

    /// Opens a draft pre-populated from a stored patrol.
    ///
    /// The patrol's identity, creation audit fields, and current
    /// status/completion are remembered in [`DraftOrigin`] so
    /// finalization can preserve them.
    ///
    /// # Arguments
    ///
    /// * `patrol` - The patrol to edit
    #[must_use]
    pub fn edit(patrol: &NetworkPatrol) -> Self {
        Self {
            origin: Some(DraftOrigin {
                patrol_id: patrol.id.clone(),
                created_by: patrol.created_by.clone(),
                created_at: patrol.created_at,
                status: patrol.status,
                completed_at: patrol.completed_at,
            }),
            patrol_number: patrol.patrol_number.clone(),
            route_id: Some(patrol.route_id.clone()),
            patrol_type: patrol.patrol_type,
            status: patrol.status,
            priority: patrol.priority,
            title: patrol.title.clone(),
            description: patrol.description.clone(),
            patrol_date: patrol.patrol_date,
            start_time: patrol.start_time,
            end_time: patrol.end_time,
            patrol_team: patrol.patrol_team.clone(),
            vehicle: patrol
                .vehicle_info
                .clone()
                .unwrap_or_else(|| VehicleInfo::new(String::new(), String::new())),
            weather: patrol.weather.clone(),
            findings: patrol.findings.clone(),
            measurements: patrol.measurements.clone(),
            summary: patrol.summary.clone(),
            recommendations: patrol.recommendations.clone(),
            next_patrol_date: patrol.next_patrol_date,
        }
    }

    /// Returns whether this draft edits an existing patrol.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.origin.is_some()
    }

    /// Checks whether the draft is ready for submission.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the draft can be finalized
    /// * `Err(DomainError)` describing the first violation otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the title or description is blank, no route is
    /// selected, or no roster slot carries a name.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_patrol_fields(
            &self.title,
            &self.description,
            self.route_id.as_ref(),
            &self.patrol_team,
        )
    }

    /// Returns whether the draft is ready for submission.
    ///
    /// The yes/no projection of [`Self::validate`], for gating a submit
    /// control.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Suggests a patrol number for a patrol planned on the given date.
///
/// The suggestion is the `PATROL-YYYYMMDD-` stem; the operator completes
/// the running sequence by hand.
///
/// # Arguments
///
/// * `date` - The planned patrol date
#[must_use]
pub fn suggest_patrol_number(date: Date) -> String {
    format!(
        "PATROL-{:04}{:02}{:02}-",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
