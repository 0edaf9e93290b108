// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_patrol;
use crate::{generate_report, report_email_url, report_filename, report_whatsapp_url};
use time::macros::datetime;

#[test]
fn test_email_url_encodes_subject_and_body() {
    let url: String = report_email_url("PATROL-20260314-001", "Line 1\nLine 2");

    let expected: &str =
        "mailto:?subject=Network%20Patrol%20Report%20-%20PATROL-20260314-001&body=Line%201%0ALine%202";
    assert_eq!(url, expected);
}

#[test]
fn test_whatsapp_url_encodes_report_text() {
    let url: String = report_whatsapp_url("Line 1\nLine 2");

    assert_eq!(url, "https://wa.me/?text=Line%201%0ALine%202");
}

#[test]
fn test_encoding_covers_reserved_punctuation() {
    let url: String = report_whatsapp_url("FINDINGS (2): open");

    assert_eq!(url, "https://wa.me/?text=FINDINGS%20%282%29%3A%20open");
}

#[test]
fn test_share_urls_contain_no_raw_whitespace() {
    let report: String = generate_report(
        &create_test_patrol(),
        "CGK-BDO Backbone",
        datetime!(2026-03-14 12:00 UTC),
    );

    let url: String = report_whatsapp_url(&report);

    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
}

#[test]
fn test_filename_follows_patrol_number() {
    let filename: String = report_filename("PATROL-20260314-001");

    assert_eq!(filename, "PATROL-20260314-001_report.txt");
}
