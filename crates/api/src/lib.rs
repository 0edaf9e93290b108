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
    clippy::all
)]

mod error;
mod service;
mod stores;
mod wire;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, StoreError, translate_core_error, translate_domain_error};
pub use service::{
    MaintenanceLink, ReportBundle, create_maintenance_for_finding, patrol_report, relink_finding,
    submit_patrol,
};
pub use stores::{MaintenanceStore, PatrolStore, RouteProvider};
pub use wire::{patrols_from_json, patrols_to_json, routes_from_json, routes_to_json};
