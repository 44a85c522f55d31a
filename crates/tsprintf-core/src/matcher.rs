//! Contract matcher.
//!
//! Walks the requirement stream and the argument list in lockstep and
//! reports one verdict. Linear, fail-fast, single pass: checking halts at
//! the first failing position and never aggregates further mismatches for
//! the same call. No side effects beyond the returned verdict.

use thiserror::Error;

use crate::canon::{self, ArgumentDescriptor, CanonType};
use crate::stream::TokenStream;
use crate::typeid::TypeId;

/// One precise failure diagnosis.
///
/// Every variant is detected before the formatting call would run and is
/// non-recoverable: the remediation is always to fix the call site or the
/// format string, never to retry or catch at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// The specifier at this position is malformed, regardless of what
    /// argument was supplied there.
    #[error("malformed conversion specifier at position {position}")]
    MalformedFormatString { position: usize },

    /// The argument's canonical type is not exactly the required type.
    #[error("argument {position} has type `{actual}` but the format requires `{expected}`")]
    TypeMismatch {
        position: usize,
        expected: CanonType,
        actual: CanonType,
    },

    /// The format requires more arguments than were supplied.
    #[error("too few arguments: format requires another argument at position {position}")]
    TooFewArguments { position: usize },

    /// The call supplies more arguments than the format consumes.
    #[error("too many arguments: argument {position} is not consumed by the format")]
    TooManyArguments { position: usize },

    /// The argument is not a plain trivially-copyable type and is never
    /// eligible as a variadic argument.
    #[error("argument {position} is not a plain trivially-copyable type")]
    InvalidArgumentKind { position: usize },
}

impl ContractViolation {
    /// Position of the first offending token or argument.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            ContractViolation::MalformedFormatString { position }
            | ContractViolation::TypeMismatch { position, .. }
            | ContractViolation::TooFewArguments { position }
            | ContractViolation::TooManyArguments { position }
            | ContractViolation::InvalidArgumentKind { position } => position,
        }
    }
}

/// Checks a requirement stream against the raw argument descriptors of a
/// call site.
///
/// Rules, in order of precedence at each position:
/// 1. both exhausted → success;
/// 2. tokens remain, arguments exhausted → [`ContractViolation::TooFewArguments`];
/// 3. arguments remain, tokens exhausted → [`ContractViolation::TooManyArguments`];
/// 4. the token is [`TypeId::Error`] → [`ContractViolation::MalformedFormatString`];
/// 5. otherwise the canonicalized argument must be exactly the required
///    type (with the const-pointee allowance documented in
///    [`canon::accepts`]).
pub const fn check(
    stream: TokenStream,
    args: &[ArgumentDescriptor],
) -> Result<(), ContractViolation> {
    let mut position = 0_usize;
    loop {
        let token = stream.get(position);
        let token_present = !matches!(token, TypeId::None);
        let arg_present = position < args.len();

        match (token_present, arg_present) {
            (false, false) => return Ok(()),
            (true, false) => return Err(ContractViolation::TooFewArguments { position }),
            (false, true) => return Err(ContractViolation::TooManyArguments { position }),
            (true, true) => {
                if matches!(token, TypeId::Error) {
                    return Err(ContractViolation::MalformedFormatString { position });
                }
                let actual = match canon::canonicalize(args[position]) {
                    Some(canonical) => canonical,
                    None => return Err(ContractViolation::InvalidArgumentKind { position }),
                };
                // Concrete tokens always have a requirement; the sentinels
                // were handled above.
                let expected = match canon::requirement(token) {
                    Some(required) => required,
                    None => return Err(ContractViolation::MalformedFormatString { position }),
                };
                if !canon::accepts(expected, actual) {
                    return Err(ContractViolation::TypeMismatch {
                        position,
                        expected,
                        actual,
                    });
                }
            }
        }
        position += 1;
    }
}

/// [`check`] for arguments that are already canonical.
///
/// Used where canonicalization happened upstream (for instance in a type
/// system that has no arrays to decay). Same precedence rules as [`check`];
/// [`ContractViolation::InvalidArgumentKind`] cannot occur on this path.
pub const fn check_canonical(
    stream: TokenStream,
    args: &[CanonType],
) -> Result<(), ContractViolation> {
    let mut position = 0_usize;
    loop {
        let token = stream.get(position);
        let token_present = !matches!(token, TypeId::None);
        let arg_present = position < args.len();

        match (token_present, arg_present) {
            (false, false) => return Ok(()),
            (true, false) => return Err(ContractViolation::TooFewArguments { position }),
            (false, true) => return Err(ContractViolation::TooManyArguments { position }),
            (true, true) => {
                if matches!(token, TypeId::Error) {
                    return Err(ContractViolation::MalformedFormatString { position });
                }
                let expected = match canon::requirement(token) {
                    Some(required) => required,
                    None => return Err(ContractViolation::MalformedFormatString { position }),
                };
                if !canon::accepts(expected, args[position]) {
                    return Err(ContractViolation::TypeMismatch {
                        position,
                        expected,
                        actual: args[position],
                    });
                }
            }
        }
        position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::{Pointee, Scalar};
    use crate::scanner::scan;

    const INT: ArgumentDescriptor = ArgumentDescriptor::Value(Scalar::Int);
    const LONG: ArgumentDescriptor = ArgumentDescriptor::Value(Scalar::Long);
    const DOUBLE: ArgumentDescriptor = ArgumentDescriptor::Value(Scalar::Double);

    #[test]
    fn test_empty_format_zero_args_succeeds() {
        assert_eq!(check(scan("Hello"), &[]), Ok(()));
    }

    #[test]
    fn test_escape_contributes_no_token() {
        assert_eq!(check(scan("100%%"), &[]), Ok(()));
    }

    #[test]
    fn test_exact_match_succeeds() {
        assert_eq!(check(scan("%d"), &[INT]), Ok(()));
        assert_eq!(
            check(
                scan("Hello %lld"),
                &[ArgumentDescriptor::Value(Scalar::LongLong)]
            ),
            Ok(())
        );
    }

    #[test]
    fn test_flags_and_width_do_not_affect_matching() {
        assert_eq!(check(scan("%+0.0f,%d%%"), &[DOUBLE, INT]), Ok(()));
    }

    #[test]
    fn test_type_mismatch_reports_both_types() {
        let verdict = check(scan("%d"), &[LONG]);
        assert_eq!(
            verdict,
            Err(ContractViolation::TypeMismatch {
                position: 0,
                expected: CanonType::Scalar(Scalar::Int),
                actual: CanonType::Scalar(Scalar::Long),
            })
        );
    }

    #[test]
    fn test_too_few_arguments() {
        assert_eq!(
            check(scan("%d"), &[]),
            Err(ContractViolation::TooFewArguments { position: 0 })
        );
        assert_eq!(
            check(scan("%d %d %d"), &[INT]),
            Err(ContractViolation::TooFewArguments { position: 1 })
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            check(scan("Hello"), &[INT]),
            Err(ContractViolation::TooManyArguments { position: 0 })
        );
        assert_eq!(
            check(scan("%d"), &[INT, INT]),
            Err(ContractViolation::TooManyArguments { position: 1 })
        );
    }

    #[test]
    fn test_malformed_specifier_dominates_argument() {
        // The argument at the malformed position is irrelevant.
        assert_eq!(
            check(scan("%q"), &[INT]),
            Err(ContractViolation::MalformedFormatString { position: 0 })
        );
        assert_eq!(
            check(scan("%d %lp"), &[INT, INT]),
            Err(ContractViolation::MalformedFormatString { position: 1 })
        );
    }

    #[test]
    fn test_exhaustion_precedes_malformedness() {
        // Rule 2 applies before rule 4: a trailing malformed token with no
        // argument reports the missing argument, matching the precedence
        // order.
        assert_eq!(
            check(scan("%q"), &[]),
            Err(ContractViolation::TooFewArguments { position: 0 })
        );
    }

    #[test]
    fn test_invalid_argument_kind() {
        assert_eq!(
            check(scan("%d"), &[ArgumentDescriptor::Aggregate]),
            Err(ContractViolation::InvalidArgumentKind { position: 0 })
        );
    }

    #[test]
    fn test_fail_fast_reports_first_position_only() {
        // Both positions mismatch; only the first is reported.
        let verdict = check(scan("%d%s"), &[DOUBLE, INT]);
        assert_eq!(verdict.unwrap_err().position(), 0);
    }

    #[test]
    fn test_string_argument_via_array_decay() {
        let literal = ArgumentDescriptor::Array {
            element: Pointee::Scalar(Scalar::Char),
            const_element: true,
            len: 6,
        };
        assert_eq!(check(scan("%s"), &[literal]), Ok(()));
    }

    #[test]
    fn test_chars_written_needs_mutable_pointee() {
        let mutable = ArgumentDescriptor::Pointer {
            pointee: Pointee::Scalar(Scalar::Int),
            const_pointee: false,
        };
        let constant = ArgumentDescriptor::Pointer {
            pointee: Pointee::Scalar(Scalar::Int),
            const_pointee: true,
        };
        assert_eq!(check(scan("%n"), &[mutable]), Ok(()));
        assert!(matches!(
            check(scan("%n"), &[constant]),
            Err(ContractViolation::TypeMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn test_check_canonical_mirrors_check() {
        let args = [
            CanonType::Scalar(Scalar::Double),
            CanonType::Scalar(Scalar::Int),
        ];
        assert_eq!(check_canonical(scan("%f %d"), &args), Ok(()));
        assert_eq!(
            check_canonical(scan("%f"), &args),
            Err(ContractViolation::TooManyArguments { position: 1 })
        );
    }

    #[test]
    fn test_check_is_const_evaluable() {
        const VERDICT: Result<(), ContractViolation> = check(
            scan("%s"),
            &[ArgumentDescriptor::Pointer {
                pointee: Pointee::Scalar(Scalar::Char),
                const_pointee: true,
            }],
        );
        assert_eq!(VERDICT, Ok(()));
    }

    #[test]
    fn test_violation_messages_are_actionable() {
        let msg = check(scan("%d"), &[LONG]).unwrap_err().to_string();
        assert!(msg.contains("`long`"));
        assert!(msg.contains("`int`"));
    }
}
