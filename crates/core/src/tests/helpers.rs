// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Operator, PatrolDraft};
use fiber_patrol_domain::{
    ActionRequired, FindingId, FindingLocation, FindingStatus, FindingType, NetworkPatrol,
    PatrolFinding, PatrolId, PatrolStatus, PatrolType, Priority, RouteId, Severity, Weather,
    WeatherCondition,
};
use time::macros::{date, datetime, time};

pub fn create_test_operator() -> Operator {
    Operator::new(String::from("Dewi Lestari"))
}

pub fn create_test_draft() -> PatrolDraft {
    let mut draft: PatrolDraft = PatrolDraft::create(date!(2026 - 03 - 14));
    draft.title = String::from("Monthly inspection of the CGK-BDO backbone");
    draft.description = String::from("Walk the full route and verify closure integrity");
    draft.route_id = Some(RouteId::new(String::from("route-1")));
    draft.patrol_team = vec![String::from("Ana Sari")];
    draft
}

pub fn create_test_finding(id: &str, severity: Severity) -> PatrolFinding {
    PatrolFinding {
        id: Some(FindingId::new(String::from(id))),
        patrol_id: Some(PatrolId::new(String::from("patrol-1"))),
        finding_type: FindingType::CableExposure,
        severity,
        title: String::from("Exposed cable at culvert"),
        description: String::from("Roughly two meters of cable visible after rain washout"),
        location: FindingLocation::new(106.8456, -6.2088, String::from("Jl. Raya Bogor KM 24")),
        photos: Vec::new(),
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

pub fn create_test_patrol() -> NetworkPatrol {
    NetworkPatrol {
        id: Some(PatrolId::new(String::from("patrol-1"))),
        patrol_number: String::from("PATROL-20260314-001"),
        route_id: RouteId::new(String::from("route-1")),
        patrol_type: PatrolType::Routine,
        status: PatrolStatus::InProgress,
        priority: Priority::Medium,
        title: String::from("Monthly inspection of the CGK-BDO backbone"),
        description: String::from("Walk the full route and verify closure integrity"),
        patrol_date: date!(2026 - 03 - 14),
        start_time: time!(08:00),
        end_time: None,
        patrol_team: vec![String::from("Ana Sari"), String::from("Budi Hartono")],
        vehicle_info: None,
        weather: Weather::new(WeatherCondition::Sunny, Some(25), None),
        findings: vec![
            create_test_finding("finding-1", Severity::High),
            create_test_finding("finding-2", Severity::Low),
        ],
        measurements: Vec::new(),
        summary: String::from("Route in good condition overall"),
        recommendations: String::from("Re-bury the exposed section near KM 24"),
        next_patrol_date: None,
        created_by: String::from("Dewi Lestari"),
        created_at: datetime!(2026-03-14 06:00 UTC),
        updated_at: datetime!(2026-03-14 06:00 UTC),
        completed_at: None,
    }
}
