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

mod generate;
mod transport;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use generate::generate_report;
pub use transport::{report_email_url, report_filename, report_whatsapp_url};
