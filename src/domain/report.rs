//! Reading the version tool's show-bump report.
//!
//! The report is expected to start with the current version, e.g.
//!
//! ```text
//! 1.2.3 ── bump ─┬─ major ─ 2.0.0
//!                ├─ minor ─ 1.3.0
//!                ╰─ patch ─ 1.2.4
//! ```
//!
//! Only the first token of the first line is interpreted. Anything else in the
//! report is passed through untouched.

/// Extract the current version from a show-bump report.
///
/// Returns the first whitespace-delimited token of the first line, or `None`
/// when the report is empty or its first line is blank.
pub fn current_version(report: &str) -> Option<&str> {
    report.lines().next()?.split_whitespace().next()
}

/// Whether a reported version parses as a semantic version.
///
/// A leading `v` is tolerated since many projects tag that way.
pub fn is_semver(token: &str) -> bool {
    let trimmed = token.strip_prefix('v').unwrap_or(token);
    semver::Version::parse(trimmed).is_ok()
}
