//! Fixture loading and management.
//!
//! A fixture set is a JSON capture of printf-family call sites: the
//! format literal each call passes plus the C spellings of its argument
//! types, as a front-end or extraction script would record them.

use serde::{Deserialize, Serialize};

/// One recorded call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSite {
    /// Case identifier.
    pub name: String,
    /// Source location the call was extracted from ("file.c:123").
    pub location: String,
    /// Format string literal, without surrounding quotes.
    pub format: String,
    /// C type spellings of the variadic arguments, in call order.
    pub args: Vec<String>,
}

/// A collection of call sites extracted from one translation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Translation unit or corpus the sites came from.
    pub unit: String,
    /// Individual call sites.
    pub sites: Vec<CallSite>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}
