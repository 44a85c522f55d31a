//! Analysis findings and report rendering.

use serde::{Deserialize, Serialize};
use tsprintf_core::matcher::ContractViolation;

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The specifier at the reported position is malformed.
    MalformedFormatString,
    /// The argument's type disagrees with what the conversion reads.
    TypeMismatch,
    /// The format consumes more arguments than the call supplies.
    TooFewArguments,
    /// The call supplies arguments no conversion consumes.
    TooManyArguments,
    /// The argument is not a plain trivially-copyable type.
    InvalidArgumentKind,
    /// The recorded type spelling could not be understood.
    UnrecognizedArgumentType,
    /// The format holds more specifiers than the checker can track; the
    /// verdict for this site is incomplete.
    CapacityExceeded,
}

/// One diagnostic for one call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Zero-based specifier/argument index the finding is about.
    pub position: usize,
    /// Required type, C-spelled, where the kind has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Supplied type, C-spelled, where the kind has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Human-readable one-liner.
    pub message: String,
}

impl Finding {
    /// Lowers a matcher verdict into a finding.
    pub fn from_violation(violation: ContractViolation) -> Self {
        let (kind, expected, actual) = match violation {
            ContractViolation::MalformedFormatString { .. } => {
                (FindingKind::MalformedFormatString, None, None)
            }
            ContractViolation::TypeMismatch {
                expected, actual, ..
            } => (
                FindingKind::TypeMismatch,
                Some(expected.to_string()),
                Some(actual.to_string()),
            ),
            ContractViolation::TooFewArguments { .. } => (FindingKind::TooFewArguments, None, None),
            ContractViolation::TooManyArguments { .. } => {
                (FindingKind::TooManyArguments, None, None)
            }
            ContractViolation::InvalidArgumentKind { .. } => {
                (FindingKind::InvalidArgumentKind, None, None)
            }
        };
        Finding {
            kind,
            position: violation.position(),
            expected,
            actual,
            message: violation.to_string(),
        }
    }
}

/// Verdict for one analyzed call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    pub name: String,
    pub location: String,
    pub format: String,
    pub findings: Vec<Finding>,
}

impl SiteReport {
    #[must_use]
    pub fn clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Aggregated verdicts for a whole fixture run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub unit: String,
    pub total_sites: usize,
    pub clean_sites: usize,
    pub sites: Vec<SiteReport>,
}

impl Report {
    #[must_use]
    pub fn all_clean(&self) -> bool {
        self.clean_sites == self.total_sites
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Compiler-style text rendering, one line per finding.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for site in &self.sites {
            if site.clean() {
                continue;
            }
            for finding in &site.findings {
                out.push_str(&format!(
                    "{}: error: {} [{}]\n",
                    site.location, finding.message, site.name
                ));
            }
        }
        out.push_str(&format!(
            "{}: {} of {} call sites clean\n",
            self.unit, self.clean_sites, self.total_sites
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsprintf_core::canon::{CanonType, Scalar};

    #[test]
    fn test_finding_from_mismatch_carries_both_spellings() {
        let finding = Finding::from_violation(ContractViolation::TypeMismatch {
            position: 2,
            expected: CanonType::Scalar(Scalar::Int),
            actual: CanonType::Scalar(Scalar::Long),
        });
        assert_eq!(finding.kind, FindingKind::TypeMismatch);
        assert_eq!(finding.position, 2);
        assert_eq!(finding.expected.as_deref(), Some("int"));
        assert_eq!(finding.actual.as_deref(), Some("long"));
    }

    #[test]
    fn test_text_rendering_names_the_location() {
        let report = Report {
            unit: String::from("demo.c"),
            total_sites: 1,
            clean_sites: 0,
            sites: vec![SiteReport {
                name: String::from("case-a"),
                location: String::from("demo.c:7"),
                format: String::from("%d"),
                findings: vec![Finding::from_violation(ContractViolation::TooFewArguments {
                    position: 0,
                })],
            }],
        };
        let text = report.to_text();
        assert!(text.contains("demo.c:7: error:"));
        assert!(text.contains("0 of 1 call sites clean"));
    }

    #[test]
    fn test_json_omits_absent_type_spellings() {
        let finding = Finding::from_violation(ContractViolation::TooManyArguments { position: 1 });
        let json = serde_json::to_string(&finding).expect("serializes");
        assert!(!json.contains("expected"));
        assert!(json.contains("too_many_arguments"));
    }
}
