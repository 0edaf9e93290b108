// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{FindingId, MaintenanceId, PatrolId};
use crate::patrol::Priority;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Classifies what was observed along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FindingType {
    /// Excavation, construction, or other work by an outside party near the cable.
    ThirdPartyActivity,
    /// Buried cable visible above ground.
    CableExposure,
    /// Damage to poles, closures, cabinets, or other plant.
    InfrastructureDamage,
    UnauthorizedAccess,
    /// Flooding, erosion, landslide, or similar natural threat.
    EnvironmentalHazard,
    EquipmentTheft,
    Vandalism,
    /// Nearby construction likely to affect the route.
    ConstructionImpact,
    VegetationGrowth,
    #[default]
    Other,
}

impl FindingType {
    /// Converts this finding type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThirdPartyActivity => "third-party-activity",
            Self::CableExposure => "cable-exposure",
            Self::InfrastructureDamage => "infrastructure-damage",
            Self::UnauthorizedAccess => "unauthorized-access",
            Self::EnvironmentalHazard => "environmental-hazard",
            Self::EquipmentTheft => "equipment-theft",
            Self::Vandalism => "vandalism",
            Self::ConstructionImpact => "construction-impact",
            Self::VegetationGrowth => "vegetation-growth",
            Self::Other => "other",
        }
    }
}

impl FromStr for FindingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "third-party-activity" => Ok(Self::ThirdPartyActivity),
            "cable-exposure" => Ok(Self::CableExposure),
            "infrastructure-damage" => Ok(Self::InfrastructureDamage),
            "unauthorized-access" => Ok(Self::UnauthorizedAccess),
            "environmental-hazard" => Ok(Self::EnvironmentalHazard),
            "equipment-theft" => Ok(Self::EquipmentTheft),
            "vandalism" => Ok(Self::Vandalism),
            "construction-impact" => Ok(Self::ConstructionImpact),
            "vegetation-growth" => Ok(Self::VegetationGrowth),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidFindingType(s.to_string())),
        }
    }
}

impl std::fmt::Display for FindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How serious a finding is for the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Converts this severity to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Maps finding severity to the priority of the maintenance work it spawns.
    ///
    /// Critical and high carry over directly; everything below is scheduled
    /// at medium priority.
    #[must_use]
    pub const fn escalation_priority(self) -> Priority {
        match self {
            Self::Critical => Priority::Critical,
            Self::High => Priority::High,
            Self::Medium | Self::Low => Priority::Medium,
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidSeverity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FindingStatus {
    /// Recorded, nobody working on it yet.
    #[default]
    Open,
    /// Being handled, typically through a linked maintenance record.
    InProgress,
    Resolved,
    /// Raised beyond the patrol team.
    Escalated,
}

impl FindingStatus {
    /// Converts this finding status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Escalated => "escalated",
        }
    }
}

impl FromStr for FindingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "escalated" => Ok(Self::Escalated),
            _ => Err(DomainError::InvalidFindingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of follow-up a finding calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRequired {
    /// Dispatch now.
    Immediate,
    /// Plan repair work.
    Scheduled,
    /// Watch on subsequent patrols.
    #[default]
    Monitoring,
    /// Coordinate with the third party involved.
    Coordination,
    /// No follow-up needed.
    None,
}

impl ActionRequired {
    /// Converts this action-required value to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Scheduled => "scheduled",
            Self::Monitoring => "monitoring",
            Self::Coordination => "coordination",
            Self::None => "none",
        }
    }
}

impl FromStr for ActionRequired {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Self::Immediate),
            "scheduled" => Ok(Self::Scheduled),
            "monitoring" => Ok(Self::Monitoring),
            "coordination" => Ok(Self::Coordination),
            "none" => Ok(Self::None),
            _ => Err(DomainError::InvalidActionRequired(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActionRequired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where along the route a finding was observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FindingLocation {
    pub longitude: f64,
    pub latitude: f64,
    /// Street address or nearest addressable point.
    pub address: String,
    /// Nearby landmark, when an address alone is not enough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    /// Kilometer post reference (e.g. "KM 12+500").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km_post: Option<String>,
}

impl FindingLocation {
    /// Creates a new `FindingLocation` without landmark or kilometer post.
    ///
    /// # Arguments
    ///
    /// * `longitude` - Longitude in decimal degrees
    /// * `latitude` - Latitude in decimal degrees
    /// * `address` - Street address or nearest addressable point
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, address: String) -> Self {
        Self {
            longitude,
            latitude,
            address,
            landmark: None,
            km_post: None,
        }
    }
}

/// A photo taken in the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Identifier assigned when the photo was captured.
    pub id: String,
    /// Where the image is stored.
    pub url: String,
    /// What the photo shows.
    pub caption: String,
    /// When the photo was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Photo {
    /// Creates a new `Photo`.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier assigned when the photo was captured
    /// * `url` - Where the image is stored
    /// * `caption` - What the photo shows
    /// * `timestamp` - When the photo was taken
    #[must_use]
    pub const fn new(id: String, url: String, caption: String, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            url,
            caption,
            timestamp,
        }
    }
}

/// Quick field measurements attached directly to a finding.
///
/// Distinct from [`crate::CableMeasurement`]: these are spot readings taken
/// at the finding location, not a full instrument session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FindingMeasurements {
    /// Remaining cover over the cable, in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_depth: Option<f64>,
    /// Length of exposed cable, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_length: Option<f64>,
    /// Free-form description of how far the damage extends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_extent: Option<String>,
    /// Measured signal loss, in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_loss: Option<f64>,
    /// Summary of any OTDR readings taken at the spot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otdr_results: Option<String>,
}

/// Details about the outside party involved in a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyDetails {
    /// Company carrying out the activity.
    pub company: String,
    /// Who to reach on site.
    pub contact_person: String,
    /// What the party is doing (e.g. "road widening").
    pub activity_type: String,
    /// Permit number, when the work is permitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_number: Option<String>,
    /// How long the activity is expected to last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
}

/// Something observed during a patrol that is worth recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatrolFinding {
    /// Durable identifier, assigned when the patrol is first finalized.
    /// `None` while the finding only exists inside a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FindingId>,
    /// The owning patrol. `None` until the store assigns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_id: Option<PatrolId>,
    /// What was observed.
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    /// How serious it is.
    pub severity: Severity,
    /// Short headline.
    pub title: String,
    /// Full description of the observation.
    pub description: String,
    /// Where it was observed.
    pub location: FindingLocation,
    /// Photos taken at the spot.
    pub photos: Vec<Photo>,
    /// Spot readings taken at the finding location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<FindingMeasurements>,
    /// Outside party involved, for third-party findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_party_details: Option<ThirdPartyDetails>,
    /// What follow-up the finding calls for.
    pub action_required: ActionRequired,
    /// Lifecycle state.
    pub status: FindingStatus,
    /// Who the follow-up is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// When the finding was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the finding was last modified.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// When the finding was resolved.
    #[serde(
        with = "time::serde::rfc3339::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_at: Option<OffsetDateTime>,
    /// Maintenance record spawned from this finding, set at most once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_ticket_id: Option<MaintenanceId>,
}

impl PatrolFinding {
    /// Returns whether maintenance work can be created from this finding.
    ///
    /// A finding qualifies when it calls for some follow-up action and no
    /// maintenance record has been linked to it yet. Linking is one-shot:
    /// once a ticket id is set the finding never becomes eligible again.
    #[must_use]
    pub const fn eligible_for_maintenance(&self) -> bool {
        !matches!(self.action_required, ActionRequired::None) && self.maintenance_ticket_id.is_none()
    }
}
