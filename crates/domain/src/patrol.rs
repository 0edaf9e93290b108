// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::finding::PatrolFinding;
use crate::ids::{PatrolId, RouteId};
use crate::measurement::CableMeasurement;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime, Time};

time::serde::format_description!(hh_mm, Time, "[hour]:[minute]");

/// Classifies why a patrol is being carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PatrolType {
    /// Scheduled route inspection.
    #[default]
    Routine,
    /// Unplanned patrol in response to an incident.
    Emergency,
    /// Re-inspection of earlier findings.
    FollowUp,
    /// Joint visit coordinated with a third party working near the route.
    ThirdPartyCoordination,
}

impl PatrolType {
    /// Converts this patrol type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Emergency => "emergency",
            Self::FollowUp => "follow-up",
            Self::ThirdPartyCoordination => "third-party-coordination",
        }
    }
}

impl FromStr for PatrolType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "routine" => Ok(Self::Routine),
            "emergency" => Ok(Self::Emergency),
            "follow-up" => Ok(Self::FollowUp),
            "third-party-coordination" => Ok(Self::ThirdPartyCoordination),
            _ => Err(DomainError::InvalidPatrolType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PatrolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the lifecycle state of a patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PatrolStatus {
    /// Initial state after creation.
    #[default]
    Planned,
    /// Team is on the route.
    InProgress,
    /// Patrol finished and signed off.
    Completed,
    /// Patrol called off before completion.
    Cancelled,
}

impl PatrolStatus {
    /// Converts this patrol status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for PatrolStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidPatrolStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PatrolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency classification shared by patrols and maintenance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// No urgency.
    Low,
    /// Normal scheduling.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
    /// Service-affecting or imminent risk.
    Critical,
}

impl Priority {
    /// Converts this priority to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weather condition observed during the patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
}

impl WeatherCondition {
    /// Converts this weather condition to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
            Self::Foggy => "foggy",
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunny" => Ok(Self::Sunny),
            "cloudy" => Ok(Self::Cloudy),
            "rainy" => Ok(Self::Rainy),
            "stormy" => Ok(Self::Stormy),
            "foggy" => Ok(Self::Foggy),
            _ => Err(DomainError::InvalidWeatherCondition(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weather observed at patrol time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// The overall condition.
    pub condition: WeatherCondition,
    /// Temperature in degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    /// Free-form remarks (e.g. "heavy rain after 14:00").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Weather {
    /// Creates a new `Weather` observation.
    ///
    /// # Arguments
    ///
    /// * `condition` - The overall condition
    /// * `temperature` - Temperature in degrees Celsius, if recorded
    /// * `notes` - Free-form remarks
    #[must_use]
    pub const fn new(
        condition: WeatherCondition,
        temperature: Option<i32>,
        notes: Option<String>,
    ) -> Self {
        Self {
            condition,
            temperature,
            notes,
        }
    }
}

/// Vehicle used by the patrol team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    /// License plate number.
    pub plate_number: String,
    /// Vehicle kind (e.g. "pickup", "motorcycle").
    #[serde(rename = "type")]
    pub vehicle_type: String,
}

impl VehicleInfo {
    /// Creates a new `VehicleInfo`.
    ///
    /// # Arguments
    ///
    /// * `plate_number` - License plate number
    /// * `vehicle_type` - Vehicle kind
    #[must_use]
    pub const fn new(plate_number: String, vehicle_type: String) -> Self {
        Self {
            plate_number,
            vehicle_type,
        }
    }

    /// Returns true when neither field carries any content.
    ///
    /// A blank vehicle entry is dropped from the patrol record entirely.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.plate_number.trim().is_empty() && self.vehicle_type.trim().is_empty()
    }
}

/// A field patrol along a fiber route, with everything observed on the way.
///
/// The patrol owns its findings and measurements exclusively; they are not
/// shared with or referenced by other patrols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPatrol {
    /// Store-assigned identifier.
    /// `None` indicates the patrol has not been persisted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PatrolId>,
    /// Human-readable patrol number (`PATROL-YYYYMMDD-XXX`).
    /// Immutable once the patrol exists.
    pub patrol_number: String,
    /// The route being patrolled.
    pub route_id: RouteId,
    /// Why the patrol is being carried out.
    #[serde(rename = "type")]
    pub patrol_type: PatrolType,
    /// Lifecycle state.
    pub status: PatrolStatus,
    /// Urgency classification.
    pub priority: Priority,
    /// Short headline for lists and reports.
    pub title: String,
    /// What the patrol covers.
    pub description: String,
    /// Calendar date of the patrol.
    pub patrol_date: Date,
    /// Planned or actual start of the walk.
    #[serde(with = "hh_mm")]
    pub start_time: Time,
    /// End of the walk. `None` while the patrol is underway.
    #[serde(with = "hh_mm::option", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Time>,
    /// Names of the team members, in roster order.
    pub patrol_team: Vec<String>,
    /// Vehicle used, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_info: Option<VehicleInfo>,
    /// Weather observed at patrol time.
    pub weather: Weather,
    /// Findings recorded along the route.
    pub findings: Vec<PatrolFinding>,
    /// Cable measurements taken along the route.
    pub measurements: Vec<CableMeasurement>,
    /// Narrative summary of the patrol.
    pub summary: String,
    /// Follow-up recommendations.
    pub recommendations: String,
    /// Suggested date for the next patrol of this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_patrol_date: Option<Date>,
    /// Operator who created the record.
    pub created_by: String,
    /// When the record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the record was last modified.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// When the patrol transitioned into the completed state.
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<OffsetDateTime>,
}

impl NetworkPatrol {
    /// Returns the patrol time span as a display label.
    ///
    /// A patrol without an end time reads as still in progress,
    /// e.g. `"08:00 - In Progress"`.
    #[must_use]
    pub fn duration_label(&self) -> String {
        let start: String = clock_label(self.start_time);
        self.end_time.map_or_else(
            || format!("{start} - In Progress"),
            |end| format!("{start} - {}", clock_label(end)),
        )
    }
}

fn clock_label(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}
