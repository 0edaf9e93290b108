// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{MaintenanceId, RouteId};
use crate::patrol::Priority;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Whether maintenance work is planned ahead or fixes something broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceType {
    /// Planned upkeep.
    Preventive,
    /// Repair of observed damage.
    Corrective,
}

impl MaintenanceType {
    /// Converts this maintenance type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Corrective => "corrective",
        }
    }
}

impl FromStr for MaintenanceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preventive" => Ok(Self::Preventive),
            "corrective" => Ok(Self::Corrective),
            _ => Err(DomainError::InvalidMaintenanceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a maintenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    /// Converts this maintenance status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidMaintenanceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maintenance work on a route, held by the external maintenance store.
///
/// This core only ever builds them (from patrol findings) and hands them
/// off; scheduling and completion live with the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    /// Store-assigned identifier.
    /// `None` indicates the record has not been persisted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MaintenanceId>,
    /// The route the work applies to.
    pub route_id: RouteId,
    /// Planned upkeep or repair.
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    /// Lifecycle state.
    pub status: MaintenanceStatus,
    /// Short headline.
    pub title: String,
    /// What the work involves.
    pub description: String,
    /// When the work is planned for.
    pub scheduled_date: Date,
    /// When the work finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<Date>,
    /// Technician responsible for the work.
    pub technician: String,
    /// Urgency classification.
    pub priority: Priority,
    /// Time the work took, in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Free-form notes, including provenance when spawned from a finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
