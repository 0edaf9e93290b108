// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionRequired, CableMeasurement, Equipment, FiberCondition, FindingId, FindingLocation,
    FindingStatus, FindingType, MeasurementId, MeasurementLocation, MeasurementResults,
    MeasurementType, NetworkPatrol, PatrolFinding, PatrolId, PatrolStatus, PatrolType, Priority,
    Route, RouteId, RouteLocation, RouteStatus, Severity, Weather, WeatherCondition,
};
use time::macros::{date, datetime, time};

pub fn create_test_route(id: &str, name: &str) -> Route {
    Route {
        id: RouteId::new(id.to_string()),
        name: name.to_string(),
        status: RouteStatus::Operational,
        location: RouteLocation::new(String::from("POP Cawang"), String::from("POP Bogor")),
        fiber_count: 48,
    }
}

pub fn create_test_patrol() -> NetworkPatrol {
    NetworkPatrol {
        id: Some(PatrolId::new(String::from("patrol-1"))),
        patrol_number: String::from("PATROL-20260314-001"),
        route_id: RouteId::new(String::from("route-1")),
        patrol_type: PatrolType::Routine,
        status: PatrolStatus::Planned,
        priority: Priority::Medium,
        title: String::from("Monthly route inspection"),
        description: String::from("Walk the full route and check known exposure points"),
        patrol_date: date!(2026 - 03 - 14),
        start_time: time!(08:00),
        end_time: None,
        patrol_team: vec![String::from("Ana Sari")],
        vehicle_info: None,
        weather: Weather::new(WeatherCondition::Sunny, Some(25), None),
        findings: Vec::new(),
        measurements: Vec::new(),
        summary: String::new(),
        recommendations: String::new(),
        next_patrol_date: None,
        created_by: String::from("Dewi Lestari"),
        created_at: datetime!(2026-03-14 06:00 UTC),
        updated_at: datetime!(2026-03-14 06:00 UTC),
        completed_at: None,
    }
}

pub fn create_test_finding(severity: Severity) -> PatrolFinding {
    PatrolFinding {
        id: Some(FindingId::new(String::from("finding-1"))),
        patrol_id: None,
        finding_type: FindingType::CableExposure,
        severity,
        title: String::from("Exposed cable at culvert"),
        description: String::from("Roughly two meters of cable visible after erosion"),
        location: FindingLocation::new(106.8456, -6.2088, String::from("Jl. Raya Bogor KM 24")),
        photos: Vec::new(),
        measurements: None,
        third_party_details: None,
        action_required: ActionRequired::Scheduled,
        status: FindingStatus::Open,
        assigned_to: None,
        created_at: datetime!(2026-03-14 09:30 UTC),
        updated_at: datetime!(2026-03-14 09:30 UTC),
        resolved_at: None,
        maintenance_ticket_id: None,
    }
}

pub fn create_test_measurement() -> CableMeasurement {
    CableMeasurement {
        id: Some(MeasurementId::new(String::from("measurement-1"))),
        patrol_id: None,
        route_id: RouteId::new(String::from("route-1")),
        link_id: None,
        measurement_type: MeasurementType::Otdr,
        location: MeasurementLocation::new(
            106.8456,
            -6.2088,
            String::from("Jl. Raya Bogor KM 24"),
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
            String::from("MT7-88231"),
            date!(2026 - 01 - 15),
        ),
        performed_by: String::from("Budi Santoso"),
        timestamp: datetime!(2026-03-14 10:15 UTC),
        attachments: Vec::new(),
    }
}
