//! # tsprintf-abi
//!
//! Compile-time embedding of the format/argument contract checker, plus the
//! thin wrappers that forward an already-validated call to the platform's
//! native printf family.
//!
//! The [`tsprintf!`], [`tsfprintf!`], [`tssprintf!`] and [`tssnprintf!`]
//! macros take a format string *literal*, const-evaluate the scanner over
//! it, and assert the contract against the argument tuple in an inline
//! `const` block. A violation is a hard build failure; a passing call
//! forwards the format string and arguments unchanged to `libc`.
//!
//! Arguments are checked in the platform ABI domain (see [`arg::AbiType`]):
//! the Rust type system cannot tell `long` from `long long` on LP64, so the
//! exact-type table is collapsed to what the ABI can distinguish. The
//! offline analysis embedding in `tsprintf-harness` keeps the full
//! exact-C-type semantics.

pub mod arg;
pub mod check;
mod macros;

/// Macro plumbing. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::check::typecheck_args;
    pub use libc;
    pub use tsprintf_core::scanner::encode;
}
