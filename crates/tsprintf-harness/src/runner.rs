//! Fixture analysis driver.
//!
//! Runs the contract matcher over recorded call sites and produces value
//! reports; nothing here keeps global state or prints on its own.

use tsprintf_core::canon::ArgumentDescriptor;
use tsprintf_core::matcher;
use tsprintf_core::scanner::{scan, specifier_count};
use tsprintf_core::stream::CAPACITY;

use crate::ctype;
use crate::fixtures::{CallSite, FixtureSet};
use crate::report::{Finding, FindingKind, Report, SiteReport};

/// Analyzes one call site.
///
/// Unparsable argument spellings and over-capacity formats are findings in
/// their own right; the matcher only runs when the inputs give it a complete
/// picture, so it never reports a bogus verdict built on guesses.
pub fn analyze_call_site(site: &CallSite) -> SiteReport {
    let mut findings = Vec::new();

    let mut args: Vec<ArgumentDescriptor> = Vec::with_capacity(site.args.len());
    for (position, spelling) in site.args.iter().enumerate() {
        match ctype::parse(spelling) {
            Ok(descriptor) => args.push(descriptor),
            Err(err) => findings.push(Finding {
                kind: FindingKind::UnrecognizedArgumentType,
                position,
                expected: None,
                actual: Some(spelling.clone()),
                message: format!("argument {position}: {err}"),
            }),
        }
    }

    let specifiers = specifier_count(&site.format);
    if specifiers > CAPACITY {
        findings.push(Finding {
            kind: FindingKind::CapacityExceeded,
            position: CAPACITY,
            expected: None,
            actual: None,
            message: format!(
                "format holds {specifiers} conversion specifiers, only {CAPACITY} can be checked"
            ),
        });
    }

    // Matching on partial inputs would report guesses, not findings.
    if findings.is_empty() {
        if let Err(violation) = matcher::check(scan(&site.format), &args) {
            findings.push(Finding::from_violation(violation));
        }
    }

    SiteReport {
        name: site.name.clone(),
        location: site.location.clone(),
        format: site.format.clone(),
        findings,
    }
}

/// Analyzes every site in a fixture set.
#[must_use]
pub fn analyze_set(set: &FixtureSet) -> Report {
    let sites: Vec<SiteReport> = set.sites.iter().map(analyze_call_site).collect();
    let clean_sites = sites.iter().filter(|s| s.clean()).count();
    Report {
        unit: set.unit.clone(),
        total_sites: sites.len(),
        clean_sites,
        sites,
    }
}
