// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fiber_patrol_domain::{
    ActionRequired, FiberCondition, FindingStatus, FindingType, LinkId, MeasurementType,
    PatrolStatus, PatrolType, Priority, RouteId, Severity, WeatherCondition,
};
use time::{Date, OffsetDateTime, Time};

/// A command represents operator intent against a draft as data only.
///
/// Commands are the only way to change a [`PatrolDraft`](crate::PatrolDraft);
/// [`apply`](crate::apply) interprets them.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftCommand {
    /// Set the patrol number. Rejected when editing an existing patrol.
    SetPatrolNumber(String),
    /// Select the route the patrol covers.
    SelectRoute(RouteId),
    /// Set the patrol type.
    SetPatrolType(PatrolType),
    /// Set the lifecycle status the patrol will be saved in.
    SetStatus(PatrolStatus),
    /// Set the priority.
    SetPriority(Priority),
    /// Set the title.
    SetTitle(String),
    /// Set the description.
    SetDescription(String),
    /// Set the patrol date.
    SetPatrolDate(Date),
    /// Set the start time.
    SetStartTime(Time),
    /// Set or clear the end time.
    SetEndTime(Option<Time>),
    /// Append an empty roster slot.
    AddTeamMember,
    /// Overwrite one roster slot.
    SetTeamMember {
        /// Position of the slot.
        index: usize,
        /// The member name, possibly blank while being typed.
        name: String,
    },
    /// Remove one roster slot. The last remaining slot cannot be removed.
    RemoveTeamMember {
        /// Position of the slot.
        index: usize,
    },
    /// Set the vehicle plate number.
    SetVehiclePlate(String),
    /// Set the vehicle type.
    SetVehicleType(String),
    /// Set the weather condition.
    SetWeatherCondition(WeatherCondition),
    /// Set or clear the observed temperature in degrees Celsius.
    SetTemperature(Option<i32>),
    /// Set or clear free-form weather notes.
    SetWeatherNotes(Option<String>),
    /// Append a new finding with entry defaults.
    AddFinding {
        /// Timestamp to record as the finding's creation time.
        recorded_at: OffsetDateTime,
    },
    /// Overwrite one field of one finding.
    UpdateFinding {
        /// Position of the finding.
        index: usize,
        /// The field to overwrite.
        field: FindingField,
    },
    /// Remove one finding.
    RemoveFinding {
        /// Position of the finding.
        index: usize,
    },
    /// Append a new measurement against the selected route.
    AddMeasurement {
        /// Timestamp to record as the measurement time.
        recorded_at: OffsetDateTime,
    },
    /// Overwrite one field of one measurement.
    UpdateMeasurement {
        /// Position of the measurement.
        index: usize,
        /// The field to overwrite.
        field: MeasurementField,
    },
    /// Remove one measurement.
    RemoveMeasurement {
        /// Position of the measurement.
        index: usize,
    },
    /// Set the narrative summary.
    SetSummary(String),
    /// Set the follow-up recommendations.
    SetRecommendations(String),
    /// Set or clear the suggested next patrol date.
    SetNextPatrolDate(Option<Date>),
}

/// One editable field of a draft finding.
#[derive(Debug, Clone, PartialEq)]
pub enum FindingField {
    /// Category of the finding.
    Type(FindingType),
    /// Severity of the finding.
    Severity(Severity),
    /// Short headline.
    Title(String),
    /// Full description.
    Description(String),
    /// One field of the finding's location.
    Location(LocationField),
    /// One quantitative reading attached to the finding.
    Measurements(FindingMeasurementField),
    /// One field of the third-party details. Creates the block on first use.
    ThirdParty(ThirdPartyField),
    /// Response class the finding calls for.
    ActionRequired(ActionRequired),
    /// Workflow state of the finding.
    Status(FindingStatus),
    /// Set or clear the person assigned to follow up.
    AssignedTo(Option<String>),
    /// Set or clear the resolution timestamp.
    ResolvedAt(Option<OffsetDateTime>),
}

/// One editable field of a finding's location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationField {
    /// Longitude in decimal degrees.
    Longitude(f64),
    /// Latitude in decimal degrees.
    Latitude(f64),
    /// Street address or segment description.
    Address(String),
    /// Set or clear the nearby landmark.
    Landmark(Option<String>),
    /// Set or clear the kilometre-post marker.
    KmPost(Option<String>),
}

/// One quantitative reading attached to a finding.
#[derive(Debug, Clone, PartialEq)]
pub enum FindingMeasurementField {
    /// Set or clear the cable depth in centimetres.
    CableDepth(Option<f64>),
    /// Set or clear the exposed length in metres.
    ExposureLength(Option<f64>),
    /// Set or clear the free-form damaged extent description.
    DamageExtent(Option<String>),
    /// Set or clear the signal loss in dB.
    SignalLoss(Option<f64>),
    /// Set or clear the OTDR trace summary.
    OtdrResults(Option<String>),
}

/// One editable field of a finding's third-party details.
#[derive(Debug, Clone, PartialEq)]
pub enum ThirdPartyField {
    /// Company carrying out the third-party activity.
    Company(String),
    /// Contact person at the company.
    ContactPerson(String),
    /// What the third party is doing near the route.
    ActivityType(String),
    /// Set or clear the permit number.
    PermitNumber(Option<String>),
    /// Set or clear the expected duration.
    EstimatedDuration(Option<String>),
}

/// One editable field of a draft measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementField {
    /// Measurement technique.
    Type(MeasurementType),
    /// Set or clear the specific link measured.
    LinkId(Option<LinkId>),
    /// One field of the measurement's location.
    Location(MeasurementLocationField),
    /// One field of the measurement's results.
    Results(ResultsField),
    /// One field of the equipment entry.
    Equipment(EquipmentField),
    /// Technician who performed the measurement.
    PerformedBy(String),
}

/// One editable field of a measurement's location.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementLocationField {
    /// Longitude in decimal degrees.
    Longitude(f64),
    /// Latitude in decimal degrees.
    Latitude(f64),
    /// Street address or segment description.
    Address(String),
    /// Set or clear the kilometre-post marker.
    KmPost(Option<String>),
}

/// One editable field of a measurement's results.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsField {
    /// Set or clear the total loss in dB.
    TotalLoss(Option<f64>),
    /// Set or clear the reflectance in dB.
    Reflectance(Option<f64>),
    /// Set or clear the measured length in kilometres.
    Length(Option<f64>),
    /// Assessed fiber condition.
    FiberCondition(FiberCondition),
    /// Set or clear the list of anomalies observed.
    Anomalies(Option<Vec<String>>),
    /// Set or clear the technician's recommendations.
    Recommendations(Option<String>),
}

/// One editable field of a measurement's equipment entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentField {
    /// Device make and model.
    DeviceModel(String),
    /// Device serial number.
    SerialNumber(String),
    /// Date the device was last calibrated.
    CalibrationDate(Date),
}
