// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fiber_patrol_domain::{
    ActionRequired, CableMeasurement, Equipment, FiberCondition, FindingId, FindingLocation,
    FindingStatus, FindingType, MeasurementId, MeasurementLocation, MeasurementResults,
    MeasurementType, NetworkPatrol, PatrolFinding, PatrolId, PatrolStatus, PatrolType, Priority,
    RouteId, Severity, ThirdPartyDetails, Weather, WeatherCondition,
};
use time::macros::{date, datetime, time};

pub fn create_test_finding() -> PatrolFinding {
    PatrolFinding {
        id: Some(FindingId::new(String::from("finding-1"))),
        patrol_id: Some(PatrolId::new(String::from("patrol-1"))),
        finding_type: FindingType::CableExposure,
        severity: Severity::High,
        title: String::from("Exposed cable at culvert"),
        description: String::from("Roughly two meters of cable visible after rain washout"),
        location: FindingLocation::new(106.8456, -6.2088, String::from("Jl. Raya Bogor KM 24")),
        photos: vec![],
        measurements: None,
        third_party_details: None,
        action_required: ActionRequired::Scheduled,
        status: FindingStatus::Open,
        assigned_to: Some(String::from("Budi Hartono")),
        created_at: datetime!(2026-03-14 09:15 UTC),
        updated_at: datetime!(2026-03-14 09:15 UTC),
        resolved_at: None,
        maintenance_ticket_id: None,
    }
}

pub fn create_test_third_party_finding() -> PatrolFinding {
    PatrolFinding {
        id: Some(FindingId::new(String::from("finding-2"))),
        finding_type: FindingType::ThirdPartyActivity,
        severity: Severity::Critical,
        title: String::from("Digging near the duct route"),
        description: String::from("Backhoe working directly above the duct line"),
        location: FindingLocation::new(106.8101, -6.2241, String::from("Jl. Sudirman KM 3")),
        third_party_details: Some(ThirdPartyDetails {
            company: String::from("PT Galian Jaya"),
            contact_person: String::from("Rudi Setiawan"),
            activity_type: String::from("road widening"),
            permit_number: None,
            estimated_duration: None,
        }),
        action_required: ActionRequired::Immediate,
        assigned_to: None,
        ..create_test_finding()
    }
}

pub fn create_test_measurement() -> CableMeasurement {
    CableMeasurement {
        id: Some(MeasurementId::new(String::from("measurement-1"))),
        patrol_id: Some(PatrolId::new(String::from("patrol-1"))),
        route_id: RouteId::new(String::from("route-1")),
        link_id: None,
        measurement_type: MeasurementType::Otdr,
        location: MeasurementLocation::new(
            106.8456,
            -6.2088,
            String::from("Handhole 12 access point"),
        ),
        results: MeasurementResults {
            total_loss: Some(12.4),
            reflectance: None,
            length: Some(42.5),
            fiber_condition: FiberCondition::Good,
            anomalies: None,
            recommendations: None,
        },
        equipment: Equipment::new(
            String::from("EXFO MaxTester 730C"),
            String::from("EX-99021"),
            date!(2026 - 01 - 10),
        ),
        performed_by: String::from("Ana Sari"),
        timestamp: datetime!(2026-03-14 10:30 UTC),
        attachments: vec![],
    }
}

pub fn create_test_patrol() -> NetworkPatrol {
    NetworkPatrol {
        id: Some(PatrolId::new(String::from("patrol-1"))),
        patrol_number: String::from("PATROL-20260314-001"),
        route_id: RouteId::new(String::from("route-1")),
        patrol_type: PatrolType::Routine,
        status: PatrolStatus::Completed,
        priority: Priority::Medium,
        title: String::from("Monthly inspection of the CGK-BDO backbone"),
        description: String::from("Walk the full route and verify closure integrity"),
        patrol_date: date!(2026 - 03 - 14),
        start_time: time!(08:00),
        end_time: Some(time!(15:30)),
        patrol_team: vec![String::from("Ana Sari"), String::from("Budi Hartono")],
        vehicle_info: None,
        weather: Weather::new(WeatherCondition::Sunny, Some(25), None),
        findings: vec![create_test_finding(), create_test_third_party_finding()],
        measurements: vec![create_test_measurement()],
        summary: String::from("Route in good condition overall"),
        recommendations: String::from("Re-bury the exposed section near KM 24"),
        next_patrol_date: None,
        created_by: String::from("Dewi Lestari"),
        created_at: datetime!(2026-03-14 06:00 UTC),
        updated_at: datetime!(2026-03-14 15:30 UTC),
        completed_at: Some(datetime!(2026-03-14 15:30 UTC)),
    }
}
