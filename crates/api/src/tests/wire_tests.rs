// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the import/export JSON contract.

use serde_json::Value;

use crate::tests::helpers::{create_test_patrol, create_test_route};
use crate::{patrols_from_json, patrols_to_json, routes_from_json, routes_to_json};

#[test]
fn test_patrols_round_trip() {
    let patrols = vec![create_test_patrol()];

    let json: String = patrols_to_json(&patrols).expect("export should serialize");
    let back = patrols_from_json(&json).expect("import should parse");

    assert_eq!(back, patrols);
}

#[test]
fn test_patrol_export_uses_wire_field_names() {
    let json: String =
        patrols_to_json(&[create_test_patrol()]).expect("export should serialize");
    let value: Value = serde_json::from_str(&json).expect("export should be valid JSON");
    let patrol = &value[0];

    assert_eq!(patrol["id"], "patrol-1");
    assert_eq!(patrol["patrolNumber"], "PATROL-20260314-001");
    assert_eq!(patrol["routeId"], "route-1");
    assert_eq!(patrol["type"], "routine");
    assert_eq!(patrol["status"], "completed");
    assert_eq!(patrol["patrolDate"], "2026-03-14");
    assert_eq!(patrol["startTime"], "08:00");
    assert_eq!(patrol["endTime"], "15:30");
    assert_eq!(patrol["createdAt"], "2026-03-14T06:00:00Z");
    assert_eq!(patrol["completedAt"], "2026-03-14T15:30:00Z");
    // Field names are camelCase on the wire, never snake_case.
    assert!(patrol.get("patrol_number").is_none());
    assert!(patrol.get("patrolType").is_none());
}

#[test]
fn test_finding_export_shape() {
    let json: String =
        patrols_to_json(&[create_test_patrol()]).expect("export should serialize");
    let value: Value = serde_json::from_str(&json).expect("export should be valid JSON");
    let finding = &value[0]["findings"][0];

    assert_eq!(finding["type"], "cable-exposure");
    assert_eq!(finding["severity"], "high");
    assert_eq!(finding["actionRequired"], "scheduled");
    assert_eq!(finding["status"], "open");
    assert_eq!(finding["location"]["address"], "Jl. Raya Bogor KM 24");
    assert_eq!(finding["createdAt"], "2026-03-14T09:15:00Z");
    assert!(finding.get("maintenanceTicketId").is_none());
    assert!(finding.get("resolvedAt").is_none());
}

#[test]
fn test_measurement_export_shape() {
    let json: String =
        patrols_to_json(&[create_test_patrol()]).expect("export should serialize");
    let value: Value = serde_json::from_str(&json).expect("export should be valid JSON");
    let measurement = &value[0]["measurements"][0];

    assert_eq!(measurement["measurementType"], "otdr");
    assert_eq!(measurement["results"]["totalLoss"], 12.4);
    assert_eq!(measurement["results"]["fiberCondition"], "good");
    assert_eq!(measurement["equipment"]["calibrationDate"], "2026-01-15");
    assert_eq!(measurement["timestamp"], "2026-03-14T10:30:00Z");
}

#[test]
fn test_export_omits_absent_optionals() {
    let mut patrol = create_test_patrol();
    patrol.id = None;
    patrol.end_time = None;
    patrol.completed_at = None;

    let json: String = patrols_to_json(&[patrol]).expect("export should serialize");
    let value: Value = serde_json::from_str(&json).expect("export should be valid JSON");
    let exported = &value[0];

    assert!(exported.get("id").is_none());
    assert!(exported.get("endTime").is_none());
    assert!(exported.get("completedAt").is_none());
    assert!(exported.get("vehicleInfo").is_none());
    assert!(exported.get("nextPatrolDate").is_none());
}

#[test]
fn test_routes_round_trip() {
    let routes = vec![create_test_route()];

    let json: String = routes_to_json(&routes).expect("export should serialize");
    let back = routes_from_json(&json).expect("import should parse");

    assert_eq!(back, routes);
}

#[test]
fn test_route_export_shape() {
    let json: String = routes_to_json(&[create_test_route()]).expect("export should serialize");
    let value: Value = serde_json::from_str(&json).expect("export should be valid JSON");
    let route = &value[0];

    assert_eq!(route["name"], "CGK-BDO Backbone");
    assert_eq!(route["status"], "operational");
    assert_eq!(route["fiberCount"], 48);
    assert_eq!(route["location"]["start"], "POP Cawang");
    assert_eq!(route["location"]["end"], "POP Bogor");
}

#[test]
fn test_malformed_payload_errors() {
    assert!(patrols_from_json("{not json").is_err());
    assert!(patrols_from_json(r#"[{"patrolNumber": 7}]"#).is_err());
    assert!(routes_from_json("[[]]").is_err());
}
