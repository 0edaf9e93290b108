// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use fiber_patrol_domain::{
    ActionRequired, CableMeasurement, Equipment, FiberCondition, FindingId, FindingLocation,
    FindingStatus, FindingType, MaintenanceId, MaintenanceRecord, MeasurementId,
    MeasurementLocation, MeasurementResults, MeasurementType, NetworkPatrol, PatrolFinding,
    PatrolId, PatrolStatus, PatrolType, Priority, Route, RouteId, RouteLocation, RouteStatus,
    Severity, Weather, WeatherCondition,
};
use time::macros::{date, datetime, time};

use crate::{MaintenanceStore, PatrolStore, RouteProvider, StoreError};

/// Route provider backed by a fixed name table.
#[derive(Debug, Default)]
pub struct FakeRouteProvider {
    pub routes: Vec<(RouteId, String)>,
}

impl RouteProvider for FakeRouteProvider {
    fn route_name(&self, route_id: &RouteId) -> Option<String> {
        self.routes
            .iter()
            .find(|(id, _)| id == route_id)
            .map(|(_, name)| name.clone())
    }
}

/// Patrol store that records every dispatch it accepts.
#[derive(Debug, Default)]
pub struct FakePatrolStore {
    pub created: Vec<NetworkPatrol>,
    pub updated: Vec<(PatrolId, NetworkPatrol)>,
    pub finding_updates: Vec<(PatrolId, Vec<PatrolFinding>)>,
    pub fail_writes: bool,
    pub fail_finding_updates: bool,
}

impl PatrolStore for FakePatrolStore {
    fn create(&mut self, patrol: NetworkPatrol) -> Result<PatrolId, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Rejected(String::from("create refused")));
        }
        self.created.push(patrol);
        Ok(PatrolId::new(format!("patrol-{}", self.created.len())))
    }

    fn update(&mut self, id: &PatrolId, patrol: NetworkPatrol) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable(String::from("patrol store offline")));
        }
        self.updated.push((id.clone(), patrol));
        Ok(())
    }

    fn update_findings(
        &mut self,
        id: &PatrolId,
        findings: Vec<PatrolFinding>,
    ) -> Result<(), StoreError> {
        if self.fail_finding_updates {
            return Err(StoreError::Unavailable(String::from("patrol store offline")));
        }
        self.finding_updates.push((id.clone(), findings));
        Ok(())
    }
}

/// Maintenance store that records every dispatch it accepts.
#[derive(Debug, Default)]
pub struct FakeMaintenanceStore {
    pub records: Vec<MaintenanceRecord>,
    pub reject: bool,
}

impl MaintenanceStore for FakeMaintenanceStore {
    fn create(&mut self, record: MaintenanceRecord) -> Result<MaintenanceId, StoreError> {
        if self.reject {
            return Err(StoreError::Rejected(String::from("duplicate ticket")));
        }
        self.records.push(record);
        Ok(MaintenanceId::new(format!("maint-{}", self.records.len())))
    }
}

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
            date!(2026 - 01 - 15),
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
        title: String::from("Monthly route inspection"),
        description: String::from("Walk the full route and verify closure integrity"),
        patrol_date: date!(2026 - 03 - 14),
        start_time: time!(08:00),
        end_time: Some(time!(15:30)),
        patrol_team: vec![String::from("Ana Sari"), String::from("Budi Hartono")],
        vehicle_info: None,
        weather: Weather::new(WeatherCondition::Sunny, Some(25), None),
        findings: vec![create_test_finding()],
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

pub fn create_test_route() -> Route {
    Route {
        id: RouteId::new(String::from("route-1")),
        name: String::from("CGK-BDO Backbone"),
        status: RouteStatus::Operational,
        location: RouteLocation::new(String::from("POP Cawang"), String::from("POP Bogor")),
        fiber_count: 48,
    }
}
