//! Offline contract analysis over recorded printf-family call sites.
//!
//! The library half of the harness: fixture schema, the C type-spelling
//! parser, the per-site analysis runner, and report rendering. The `harness`
//! binary wires these to the command line.

pub mod ctype;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use fixtures::{CallSite, FixtureSet};
pub use report::{Finding, FindingKind, Report, SiteReport};
pub use runner::{analyze_call_site, analyze_set};
