// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod filter;
mod finding;
mod ids;
mod maintenance;
mod measurement;
mod patrol;
mod route;
mod stats;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use filter::{PatrolFilter, filter_patrols};
pub use finding::{
    ActionRequired, FindingLocation, FindingMeasurements, FindingStatus, FindingType,
    PatrolFinding, Photo, Severity, ThirdPartyDetails,
};
pub use ids::{FindingId, LinkId, MaintenanceId, MeasurementId, PatrolId, RouteId};
pub use maintenance::{MaintenanceRecord, MaintenanceStatus, MaintenanceType};
pub use measurement::{
    Attachment, AttachmentType, CableMeasurement, Equipment, FiberCondition, MeasurementLocation,
    MeasurementResults, MeasurementType,
};
pub use patrol::{
    NetworkPatrol, PatrolStatus, PatrolType, Priority, VehicleInfo, Weather, WeatherCondition,
};
pub use route::{Route, RouteLocation, RouteStatus, UNKNOWN_ROUTE, resolve_route_name};
pub use stats::{FindingTally, PatrolStats, collection_stats, tally_findings};
pub use validation::{has_named_member, named_members, validate_patrol_fields};
