// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Builds a `mailto:` URL that opens a draft email carrying the report.
///
/// The subject line is `Network Patrol Report - {patrol_number}`; both
/// subject and body are percent-encoded.
///
/// # Arguments
///
/// * `patrol_number` - Patrol number used in the subject line
/// * `report` - Report text to place in the email body
#[must_use]
pub fn report_email_url(patrol_number: &str, report: &str) -> String {
    let subject: String = format!("Network Patrol Report - {patrol_number}");
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(report)
    )
}

/// Builds a WhatsApp share URL carrying the percent-encoded report text.
///
/// # Arguments
///
/// * `report` - Report text to share
#[must_use]
pub fn report_whatsapp_url(report: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(report))
}

/// Suggested filename for a downloaded copy of the report.
///
/// # Arguments
///
/// * `patrol_number` - Patrol number the report was generated for
#[must_use]
pub fn report_filename(patrol_number: &str) -> String {
    format!("{patrol_number}_report.txt")
}
