// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Patrol title is empty or invalid.
    InvalidTitle(String),
    /// Patrol description is empty or invalid.
    InvalidDescription(String),
    /// No route has been selected for the patrol.
    MissingRoute,
    /// Patrol team does not contain at least one named member.
    EmptyPatrolTeam,
    /// Patrol type string is not a recognized value.
    InvalidPatrolType(String),
    /// Patrol status string is not a recognized value.
    InvalidPatrolStatus(String),
    /// Priority string is not a recognized value.
    InvalidPriority(String),
    /// Weather condition string is not a recognized value.
    InvalidWeatherCondition(String),
    /// Finding type string is not a recognized value.
    InvalidFindingType(String),
    /// Severity string is not a recognized value.
    InvalidSeverity(String),
    /// Finding status string is not a recognized value.
    InvalidFindingStatus(String),
    /// Action-required string is not a recognized value.
    InvalidActionRequired(String),
    /// Measurement type string is not a recognized value.
    InvalidMeasurementType(String),
    /// Fiber condition string is not a recognized value.
    InvalidFiberCondition(String),
    /// Attachment type string is not a recognized value.
    InvalidAttachmentType(String),
    /// Maintenance type string is not a recognized value.
    InvalidMaintenanceType(String),
    /// Maintenance status string is not a recognized value.
    InvalidMaintenanceStatus(String),
    /// Route status string is not a recognized value.
    InvalidRouteStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::MissingRoute => write!(f, "A route must be selected for the patrol"),
            Self::EmptyPatrolTeam => {
                write!(f, "Patrol team must contain at least one named member")
            }
            Self::InvalidPatrolType(value) => write!(f, "Invalid patrol type: {value}"),
            Self::InvalidPatrolStatus(value) => write!(f, "Invalid patrol status: {value}"),
            Self::InvalidPriority(value) => write!(f, "Invalid priority: {value}"),
            Self::InvalidWeatherCondition(value) => {
                write!(f, "Invalid weather condition: {value}")
            }
            Self::InvalidFindingType(value) => write!(f, "Invalid finding type: {value}"),
            Self::InvalidSeverity(value) => write!(f, "Invalid severity: {value}"),
            Self::InvalidFindingStatus(value) => write!(f, "Invalid finding status: {value}"),
            Self::InvalidActionRequired(value) => {
                write!(f, "Invalid action-required value: {value}")
            }
            Self::InvalidMeasurementType(value) => {
                write!(f, "Invalid measurement type: {value}")
            }
            Self::InvalidFiberCondition(value) => write!(f, "Invalid fiber condition: {value}"),
            Self::InvalidAttachmentType(value) => write!(f, "Invalid attachment type: {value}"),
            Self::InvalidMaintenanceType(value) => {
                write!(f, "Invalid maintenance type: {value}")
            }
            Self::InvalidMaintenanceStatus(value) => {
                write!(f, "Invalid maintenance status: {value}")
            }
            Self::InvalidRouteStatus(value) => write!(f, "Invalid route status: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
