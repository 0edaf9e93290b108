// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{LinkId, MeasurementId, PatrolId, RouteId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Instrument or method used for a measurement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementType {
    /// Optical time-domain reflectometer trace.
    #[default]
    Otdr,
    /// Optical power meter reading.
    PowerMeter,
    VisualInspection,
    ContinuityTest,
    InsertionLoss,
}

impl MeasurementType {
    /// Converts this measurement type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Otdr => "otdr",
            Self::PowerMeter => "power-meter",
            Self::VisualInspection => "visual-inspection",
            Self::ContinuityTest => "continuity-test",
            Self::InsertionLoss => "insertion-loss",
        }
    }
}

impl FromStr for MeasurementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "otdr" => Ok(Self::Otdr),
            "power-meter" => Ok(Self::PowerMeter),
            "visual-inspection" => Ok(Self::VisualInspection),
            "continuity-test" => Ok(Self::ContinuityTest),
            "insertion-loss" => Ok(Self::InsertionLoss),
            _ => Err(DomainError::InvalidMeasurementType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Assessed condition of the fiber at the measurement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FiberCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    Damaged,
}

impl FiberCondition {
    /// Converts this fiber condition to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Damaged => "damaged",
        }
    }
}

impl FromStr for FiberCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            "damaged" => Ok(Self::Damaged),
            _ => Err(DomainError::InvalidFiberCondition(s.to_string())),
        }
    }
}

impl std::fmt::Display for FiberCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of file attached to a measurement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentType {
    /// Raw trace file exported from the OTDR.
    OtdrTrace,
    Photo,
    Report,
    Other,
}

impl AttachmentType {
    /// Converts this attachment type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OtdrTrace => "otdr-trace",
            Self::Photo => "photo",
            Self::Report => "report",
            Self::Other => "other",
        }
    }
}

impl FromStr for AttachmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "otdr-trace" => Ok(Self::OtdrTrace),
            "photo" => Ok(Self::Photo),
            "report" => Ok(Self::Report),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidAttachmentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AttachmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where along the route a measurement was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementLocation {
    pub longitude: f64,
    pub latitude: f64,
    /// Street address or nearest addressable point.
    pub address: String,
    /// Kilometer post reference (e.g. "KM 12+500").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km_post: Option<String>,
}

impl MeasurementLocation {
    /// Creates a new `MeasurementLocation` without a kilometer post.
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
            km_post: None,
        }
    }
}

/// Readings produced by a measurement session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementResults {
    /// End-to-end loss, in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loss: Option<f64>,
    /// Reflectance at the worst event, in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflectance: Option<f64>,
    /// Measured fiber length, in km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Overall condition assessment.
    pub fiber_condition: FiberCondition,
    /// Notable events or irregularities seen in the trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Vec<String>>,
    /// Technician's recommendations based on the readings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

/// Instrument the measurement was taken with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Device make and model.
    pub device_model: String,
    /// Device serial number.
    pub serial_number: String,
    /// Last calibration date of the device.
    pub calibration_date: Date,
}

impl Equipment {
    /// Creates a new `Equipment` entry.
    ///
    /// # Arguments
    ///
    /// * `device_model` - Device make and model
    /// * `serial_number` - Device serial number
    /// * `calibration_date` - Last calibration date of the device
    #[must_use]
    pub const fn new(device_model: String, serial_number: String, calibration_date: Date) -> Self {
        Self {
            device_model,
            serial_number,
            calibration_date,
        }
    }
}

/// A file attached to a measurement session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Identifier assigned when the file was attached.
    pub id: String,
    /// Kind of file.
    #[serde(rename = "type")]
    pub attachment_type: AttachmentType,
    /// Where the file is stored.
    pub url: String,
    /// Original filename.
    pub filename: String,
}

impl Attachment {
    /// Creates a new `Attachment`.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier assigned when the file was attached
    /// * `attachment_type` - Kind of file
    /// * `url` - Where the file is stored
    /// * `filename` - Original filename
    #[must_use]
    pub const fn new(
        id: String,
        attachment_type: AttachmentType,
        url: String,
        filename: String,
    ) -> Self {
        Self {
            id,
            attachment_type,
            url,
            filename,
        }
    }
}

/// A full instrument measurement session taken during a patrol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CableMeasurement {
    /// Durable identifier, assigned when the patrol is first finalized.
    /// `None` while the measurement only exists inside a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MeasurementId>,
    /// The owning patrol. `None` until the store assigns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_id: Option<PatrolId>,
    /// The route measured. Always the route the patrol covers.
    pub route_id: RouteId,
    /// Specific link within the route, when the session targeted one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    /// Instrument or method used.
    pub measurement_type: MeasurementType,
    /// Where the session was taken.
    pub location: MeasurementLocation,
    /// Readings produced by the session.
    pub results: MeasurementResults,
    /// Instrument the session was taken with.
    pub equipment: Equipment,
    /// Technician who ran the session.
    pub performed_by: String,
    /// When the session was taken.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Files produced by the session.
    pub attachments: Vec<Attachment>,
}
