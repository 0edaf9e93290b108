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

mod apply;
mod command;
mod draft;
mod error;
mod finalize;
mod ids;
mod maintenance;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{
    DraftCommand, EquipmentField, FindingField, FindingMeasurementField, LocationField,
    MeasurementField, MeasurementLocationField, ResultsField, ThirdPartyField,
};
pub use draft::{DraftOrigin, PatrolDraft, suggest_patrol_number};
pub use error::CoreError;
pub use finalize::{Operator, finalize};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use maintenance::{link_maintenance, maintenance_request_for_finding};
