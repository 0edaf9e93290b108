// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{
    DraftCommand, EquipmentField, FindingField, FindingMeasurementField, LocationField,
    MeasurementField, MeasurementLocationField, ResultsField, ThirdPartyField,
};
use crate::draft::PatrolDraft;
use crate::error::CoreError;
use fiber_patrol_domain::{
    ActionRequired, CableMeasurement, Equipment, FindingLocation, FindingMeasurements,
    FindingStatus, FindingType, MeasurementLocation, MeasurementResults, MeasurementType,
    PatrolFinding, RouteId, Severity, ThirdPartyDetails,
};
use time::OffsetDateTime;

/// Applies a command to a draft, producing the next draft.
///
/// The input draft is never mutated; a rejected command leaves the caller
/// holding the unchanged draft.
///
/// # Arguments
///
/// * `draft` - The current draft (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(PatrolDraft)` containing the next draft state
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The patrol number is changed on an existing patrol
/// - A list index is out of range
/// - The last roster slot is removed
/// - A measurement is added before a route is selected
#[allow(clippy::too_many_lines)]
pub fn apply(draft: &PatrolDraft, command: DraftCommand) -> Result<PatrolDraft, CoreError> {
    let mut next: PatrolDraft = draft.clone();

    match command {
        DraftCommand::SetPatrolNumber(patrol_number) => {
            // The number identifies the patrol to humans; once the patrol
            // exists it never changes.
            if next.is_editing() {
                return Err(CoreError::PatrolNumberLocked);
            }
            next.patrol_number = patrol_number;
        }
        DraftCommand::SelectRoute(route_id) => {
            next.route_id = Some(route_id);
        }
        DraftCommand::SetPatrolType(patrol_type) => {
            next.patrol_type = patrol_type;
        }
        DraftCommand::SetStatus(status) => {
            next.status = status;
        }
        DraftCommand::SetPriority(priority) => {
            next.priority = priority;
        }
        DraftCommand::SetTitle(title) => {
            next.title = title;
        }
        DraftCommand::SetDescription(description) => {
            next.description = description;
        }
        DraftCommand::SetPatrolDate(patrol_date) => {
            next.patrol_date = patrol_date;
        }
        DraftCommand::SetStartTime(start_time) => {
            next.start_time = start_time;
        }
        DraftCommand::SetEndTime(end_time) => {
            next.end_time = end_time;
        }
        DraftCommand::AddTeamMember => {
            next.patrol_team.push(String::new());
        }
        DraftCommand::SetTeamMember { index, name } => {
            let len: usize = next.patrol_team.len();
            match next.patrol_team.get_mut(index) {
                Some(slot) => *slot = name,
                None => return Err(CoreError::TeamMemberIndexOutOfRange { index, len }),
            }
        }
        DraftCommand::RemoveTeamMember { index } => {
            let len: usize = next.patrol_team.len();
            if index >= len {
                return Err(CoreError::TeamMemberIndexOutOfRange { index, len });
            }
            // The roster never shrinks below one slot.
            if len == 1 {
                return Err(CoreError::CannotRemoveLastTeamMember);
            }
            next.patrol_team.remove(index);
        }
        DraftCommand::SetVehiclePlate(plate_number) => {
            next.vehicle.plate_number = plate_number;
        }
        DraftCommand::SetVehicleType(vehicle_type) => {
            next.vehicle.vehicle_type = vehicle_type;
        }
        DraftCommand::SetWeatherCondition(condition) => {
            next.weather.condition = condition;
        }
        DraftCommand::SetTemperature(temperature) => {
            next.weather.temperature = temperature;
        }
        DraftCommand::SetWeatherNotes(notes) => {
            next.weather.notes = notes;
        }
        DraftCommand::AddFinding { recorded_at } => {
            next.findings.push(new_finding(recorded_at));
        }
        DraftCommand::UpdateFinding { index, field } => {
            let len: usize = next.findings.len();
            match next.findings.get_mut(index) {
                Some(finding) => apply_finding_field(finding, field),
                None => return Err(CoreError::FindingIndexOutOfRange { index, len }),
            }
        }
        DraftCommand::RemoveFinding { index } => {
            let len: usize = next.findings.len();
            if index >= len {
                return Err(CoreError::FindingIndexOutOfRange { index, len });
            }
            next.findings.remove(index);
        }
        DraftCommand::AddMeasurement { recorded_at } => {
            // A measurement is always recorded against the patrol's route.
            match next.route_id.clone() {
                Some(route_id) => next.measurements.push(new_measurement(route_id, recorded_at)),
                None => return Err(CoreError::RouteNotSelected),
            }
        }
        DraftCommand::UpdateMeasurement { index, field } => {
            let len: usize = next.measurements.len();
            match next.measurements.get_mut(index) {
                Some(measurement) => apply_measurement_field(measurement, field),
                None => return Err(CoreError::MeasurementIndexOutOfRange { index, len }),
            }
        }
        DraftCommand::RemoveMeasurement { index } => {
            let len: usize = next.measurements.len();
            if index >= len {
                return Err(CoreError::MeasurementIndexOutOfRange { index, len });
            }
            next.measurements.remove(index);
        }
        DraftCommand::SetSummary(summary) => {
            next.summary = summary;
        }
        DraftCommand::SetRecommendations(recommendations) => {
            next.recommendations = recommendations;
        }
        DraftCommand::SetNextPatrolDate(next_patrol_date) => {
            next.next_patrol_date = next_patrol_date;
        }
    }

    Ok(next)
}

/// Builds the finding a fresh "add finding" row starts from.
fn new_finding(recorded_at: OffsetDateTime) -> PatrolFinding {
    PatrolFinding {
        id: None,
        patrol_id: None,
        finding_type: FindingType::Other,
        severity: Severity::Medium,
        title: String::new(),
        description: String::new(),
        location: FindingLocation::default(),
        photos: Vec::new(),
        measurements: None,
        third_party_details: None,
        action_required: ActionRequired::Monitoring,
        status: FindingStatus::Open,
        assigned_to: None,
        created_at: recorded_at,
        updated_at: recorded_at,
        resolved_at: None,
        maintenance_ticket_id: None,
    }
}

/// Builds the measurement a fresh "add measurement" row starts from.
fn new_measurement(route_id: RouteId, recorded_at: OffsetDateTime) -> CableMeasurement {
    CableMeasurement {
        id: None,
        patrol_id: None,
        route_id,
        link_id: None,
        measurement_type: MeasurementType::Otdr,
        location: MeasurementLocation::default(),
        results: MeasurementResults::default(),
        equipment: Equipment::new(String::new(), String::new(), recorded_at.date()),
        performed_by: String::new(),
        timestamp: recorded_at,
        attachments: Vec::new(),
    }
}

/// Overwrites one field of a finding, creating optional sub-objects on
/// first touch.
fn apply_finding_field(finding: &mut PatrolFinding, field: FindingField) {
    match field {
        FindingField::Type(finding_type) => finding.finding_type = finding_type,
        FindingField::Severity(severity) => finding.severity = severity,
        FindingField::Title(title) => finding.title = title,
        FindingField::Description(description) => finding.description = description,
        FindingField::Location(location_field) => match location_field {
            LocationField::Longitude(longitude) => finding.location.longitude = longitude,
            LocationField::Latitude(latitude) => finding.location.latitude = latitude,
            LocationField::Address(address) => finding.location.address = address,
            LocationField::Landmark(landmark) => finding.location.landmark = landmark,
            LocationField::KmPost(km_post) => finding.location.km_post = km_post,
        },
        FindingField::Measurements(measurement_field) => {
            let measurements: &mut FindingMeasurements = finding
                .measurements
                .get_or_insert_with(FindingMeasurements::default);
            match measurement_field {
                FindingMeasurementField::CableDepth(cable_depth) => {
                    measurements.cable_depth = cable_depth;
                }
                FindingMeasurementField::ExposureLength(exposure_length) => {
                    measurements.exposure_length = exposure_length;
                }
                FindingMeasurementField::DamageExtent(damage_extent) => {
                    measurements.damage_extent = damage_extent;
                }
                FindingMeasurementField::SignalLoss(signal_loss) => {
                    measurements.signal_loss = signal_loss;
                }
                FindingMeasurementField::OtdrResults(otdr_results) => {
                    measurements.otdr_results = otdr_results;
                }
            }
        }
        FindingField::ThirdParty(third_party_field) => {
            let details: &mut ThirdPartyDetails = finding
                .third_party_details
                .get_or_insert_with(ThirdPartyDetails::default);
            match third_party_field {
                ThirdPartyField::Company(company) => details.company = company,
                ThirdPartyField::ContactPerson(contact_person) => {
                    details.contact_person = contact_person;
                }
                ThirdPartyField::ActivityType(activity_type) => {
                    details.activity_type = activity_type;
                }
                ThirdPartyField::PermitNumber(permit_number) => {
                    details.permit_number = permit_number;
                }
                ThirdPartyField::EstimatedDuration(estimated_duration) => {
                    details.estimated_duration = estimated_duration;
                }
            }
        }
        FindingField::ActionRequired(action_required) => finding.action_required = action_required,
        FindingField::Status(status) => finding.status = status,
        FindingField::AssignedTo(assigned_to) => finding.assigned_to = assigned_to,
        FindingField::ResolvedAt(resolved_at) => finding.resolved_at = resolved_at,
    }
}

/// Overwrites one field of a measurement.
fn apply_measurement_field(measurement: &mut CableMeasurement, field: MeasurementField) {
    match field {
        MeasurementField::Type(measurement_type) => {
            measurement.measurement_type = measurement_type;
        }
        MeasurementField::LinkId(link_id) => measurement.link_id = link_id,
        MeasurementField::Location(location_field) => match location_field {
            MeasurementLocationField::Longitude(longitude) => {
                measurement.location.longitude = longitude;
            }
            MeasurementLocationField::Latitude(latitude) => {
                measurement.location.latitude = latitude;
            }
            MeasurementLocationField::Address(address) => {
                measurement.location.address = address;
            }
            MeasurementLocationField::KmPost(km_post) => {
                measurement.location.km_post = km_post;
            }
        },
        MeasurementField::Results(results_field) => match results_field {
            ResultsField::TotalLoss(total_loss) => measurement.results.total_loss = total_loss,
            ResultsField::Reflectance(reflectance) => {
                measurement.results.reflectance = reflectance;
            }
            ResultsField::Length(length) => measurement.results.length = length,
            ResultsField::FiberCondition(fiber_condition) => {
                measurement.results.fiber_condition = fiber_condition;
            }
            ResultsField::Anomalies(anomalies) => measurement.results.anomalies = anomalies,
            ResultsField::Recommendations(recommendations) => {
                measurement.results.recommendations = recommendations;
            }
        },
        MeasurementField::Equipment(equipment_field) => match equipment_field {
            EquipmentField::DeviceModel(device_model) => {
                measurement.equipment.device_model = device_model;
            }
            EquipmentField::SerialNumber(serial_number) => {
                measurement.equipment.serial_number = serial_number;
            }
            EquipmentField::CalibrationDate(calibration_date) => {
                measurement.equipment.calibration_date = calibration_date;
            }
        },
        MeasurementField::PerformedBy(performed_by) => measurement.performed_by = performed_by,
    }
}
