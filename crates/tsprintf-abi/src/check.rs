//! Post-monomorphization contract assertion.
//!
//! [`typecheck_args`] is instantiated by the printf macros with the packed
//! requirement stream as a `const` parameter and the call's argument tuple
//! as a type. The inline `const` block evaluates once per instantiation;
//! a failing contract panics during constant evaluation, which surfaces as
//! a build error at the offending call site.
//!
//! Const panics cannot carry formatted positions, so each failure kind gets
//! a fixed message; the harness embedding is the place to go for full
//! position/expected/actual diagnostics.

use tsprintf_core::stream::TokenStream;
use tsprintf_core::typeid::TypeId;

use crate::arg::{AbiType, ArgList, abi_accepts, abi_of};

/// Outcome of an ABI-domain walk, collapsed to what a const panic can say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiFault {
    Malformed,
    Mismatch,
    TooFew,
    TooMany,
}

/// Walks the requirement stream against the actual ABI identities.
///
/// Same precedence order as the core matcher: simultaneous exhaustion is
/// success; missing/surplus arguments dominate; a malformed token dominates
/// the argument at its position; otherwise the identities must agree.
#[must_use]
pub const fn verify(stream: TokenStream, args: &[AbiType]) -> Option<AbiFault> {
    let mut position = 0_usize;
    loop {
        let token = stream.get(position);
        let token_present = !matches!(token, TypeId::None);
        let arg_present = position < args.len();

        match (token_present, arg_present) {
            (false, false) => return None,
            (true, false) => return Some(AbiFault::TooFew),
            (false, true) => return Some(AbiFault::TooMany),
            (true, true) => {
                let expected = match abi_of(token) {
                    Some(required) => required,
                    None => return Some(AbiFault::Malformed),
                };
                if !abi_accepts(expected, args[position]) {
                    return Some(AbiFault::Mismatch);
                }
            }
        }
        position += 1;
    }
}

/// Asserts the contract for one monomorphized call site.
///
/// `BITS` is the packed requirement stream of the format literal; `L` is
/// the tuple type of the supplied arguments. The value is only borrowed to
/// drive inference — nothing is read from it.
pub fn typecheck_args<const BITS: u64, L: ArgList>(_args: &L) {
    const {
        match verify(TokenStream::from_bits(BITS), L::ABIS) {
            None => {}
            Some(AbiFault::Malformed) => {
                panic!("tsprintf: malformed conversion specifier in format string")
            }
            Some(AbiFault::Mismatch) => {
                panic!("tsprintf: type mismatch between format string and argument")
            }
            Some(AbiFault::TooFew) => {
                panic!("tsprintf: too few arguments for format string")
            }
            Some(AbiFault::TooMany) => {
                panic!("tsprintf: too many arguments for format string")
            }
        }
    }
}
