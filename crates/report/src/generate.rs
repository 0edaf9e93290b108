// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fiber_patrol_domain::{CableMeasurement, NetworkPatrol, PatrolFinding};
use time::{OffsetDateTime, UtcOffset};

/// Renders a patrol as a plain-text report suitable for sharing over
/// email or messaging.
///
/// The output depends only on the arguments. Rendering the same patrol
/// with the same `route_name` and `generated_at` produces byte-identical
/// text.
///
/// # Arguments
///
/// * `patrol` - The patrol to render
/// * `route_name` - Display name of the patrolled route
/// * `generated_at` - Timestamp stamped into the report footer
///
/// # Returns
///
/// The report text, trimmed of leading and trailing whitespace.
#[must_use]
pub fn generate_report(
    patrol: &NetworkPatrol,
    route_name: &str,
    generated_at: OffsetDateTime,
) -> String {
    let mut report: String = String::new();

    report.push_str("NETWORK PATROL REPORT\n");
    report.push_str("=====================\n\n");
    report.push_str(&format!("Patrol Number: {}\n", patrol.patrol_number));
    report.push_str(&format!("Route: {route_name}\n"));
    report.push_str(&format!("Date: {}\n", patrol.patrol_date));
    report.push_str(&format!("Team: {}\n", patrol.patrol_team.join(", ")));
    report.push_str(&format!("Status: {}\n", patrol.status));

    report.push_str("\nSUMMARY\n-------\n");
    report.push_str(&patrol.summary);
    report.push('\n');

    report.push_str(&format!("\nFINDINGS ({})\n--------\n", patrol.findings.len()));
    for (index, finding) in patrol.findings.iter().enumerate() {
        report.push_str(&finding_section(index + 1, finding));
    }

    report.push_str(&format!(
        "\nMEASUREMENTS ({})\n------------\n",
        patrol.measurements.len()
    ));
    for (index, measurement) in patrol.measurements.iter().enumerate() {
        report.push_str(&measurement_section(index + 1, measurement));
    }

    report.push_str("\nRECOMMENDATIONS\n---------------\n");
    report.push_str(&patrol.recommendations);
    report.push('\n');

    report.push_str(&format!("\nGenerated on: {}", footer_timestamp(generated_at)));

    report.trim().to_string()
}

/// Renders one numbered finding entry.
fn finding_section(number: usize, finding: &PatrolFinding) -> String {
    let severity: String = finding.severity.as_str().to_uppercase();
    let finding_type: String = finding.finding_type.as_str().replace('-', " ");

    let mut section: String = String::new();
    section.push_str(&format!("\n{number}. {} ({severity})\n", finding.title));
    section.push_str(&format!("   Type: {finding_type}\n"));
    section.push_str(&format!("   Location: {}\n", finding.location.address));
    section.push_str(&format!("   Description: {}\n", finding.description));
    section.push_str(&format!("   Action Required: {}\n", finding.action_required));
    section.push_str(&format!("   Status: {}\n", finding.status));

    if let Some(details) = &finding.third_party_details {
        section.push_str(&format!("   Third Party: {}\n", details.company));
        section.push_str(&format!("   Contact: {}\n", details.contact_person));
        section.push_str(&format!("   Activity: {}\n", details.activity_type));
    }

    section
}

/// Renders one numbered measurement entry.
fn measurement_section(number: usize, measurement: &CableMeasurement) -> String {
    let measurement_type: String = measurement.measurement_type.as_str().to_uppercase();

    let mut section: String = String::new();
    section.push_str(&format!("\n{number}. {measurement_type}\n"));
    section.push_str(&format!("   Location: {}\n", measurement.location.address));
    section.push_str(&format!(
        "   Fiber Condition: {}\n",
        measurement.results.fiber_condition
    ));

    if let Some(total_loss) = measurement.results.total_loss {
        section.push_str(&format!("   Total Loss: {total_loss} dB\n"));
    }
    if let Some(length) = measurement.results.length {
        section.push_str(&format!("   Length: {length} km\n"));
    }

    section.push_str(&format!("   Performed by: {}\n", measurement.performed_by));

    section
}

/// Formats the footer timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
fn footer_timestamp(generated_at: OffsetDateTime) -> String {
    let utc: OffsetDateTime = generated_at.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}
