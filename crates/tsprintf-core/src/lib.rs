//! # tsprintf-core
//!
//! Static verification that a printf-style format string and the argument
//! list supplied alongside it agree on type, before the call ever runs.
//!
//! The crate is split into four components, leaves first:
//!
//! - [`table`]: the immutable (conversion category × length modifier) →
//!   required type matrix.
//! - [`scanner`]: a single-pass lexer that turns a format string into an
//!   ordered requirement stream.
//! - [`stream`]: the packed fixed-capacity encoding of that stream.
//! - [`matcher`]: the lockstep comparison of the requirement stream against
//!   the canonicalized types of the actual arguments.
//!
//! Everything is a pure `const fn` over immutable inputs, so the same core
//! serves both a compile-time embedding (see `tsprintf-abi`) and an offline
//! analysis embedding (see `tsprintf-harness`).
//!
//! This crate deliberately does not format anything: once a call site passes
//! the check, rendering is the job of the platform's native printf family.

#![deny(unsafe_code)]

pub mod canon;
pub mod matcher;
pub mod scanner;
pub mod stream;
pub mod table;
pub mod typeid;
