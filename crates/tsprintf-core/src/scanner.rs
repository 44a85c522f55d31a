//! Lexical scanner for printf format strings.
//!
//! Single left-to-right pass, O(length): each `%`-specifier is consumed,
//! classified through the [`table`](crate::table), and appended to a
//! [`TokenStream`]. `%%` is the sole escape and emits no token. Option
//! characters (flags, width digits, precision, `*`) are skipped without
//! validation; their syntax is not this checker's concern.
//!
//! Truncation policy: format text that ends inside a specifier — right
//! after the `%`, mid-options, or mid-modifier — records one
//! [`TypeId::Error`] token for the truncated specifier. A truncated
//! specifier is malformed, and the matcher has to be able to see it.

use crate::stream::TokenStream;
use crate::table::{self, Modifier};
use crate::typeid::TypeId;

/// Bytes that terminate option skipping: a length-modifier starter or a
/// conversion letter.
const fn ends_options(byte: u8) -> bool {
    table::is_modifier_start(byte) || table::classify(byte).is_some()
}

/// Scans a format string into its requirement stream.
///
/// The result may be empty (no specifiers present). Each malformed
/// specifier contributes a [`TypeId::Error`] token and scanning resumes
/// after the malformed point.
#[must_use]
pub const fn scan(fmt: &str) -> TokenStream {
    scan_bytes(fmt.as_bytes())
}

/// Byte-level scanner; [`scan`] is the usual entry point.
#[must_use]
pub const fn scan_bytes(fmt: &[u8]) -> TokenStream {
    let mut stream = TokenStream::EMPTY;
    let mut count = 0_usize;
    let mut pos = 0_usize;
    let len = fmt.len();

    while pos < len {
        if fmt[pos] != b'%' {
            pos += 1;
            continue;
        }
        pos += 1;

        // Text ends right after '%': truncated specifier.
        if pos >= len {
            stream = stream.merge(count, TypeId::Error);
            break;
        }

        // "%%" is an escaped '%', not a specifier.
        if fmt[pos] == b'%' {
            pos += 1;
            continue;
        }

        // Skip flags, width, precision, '*'. Not validated here.
        while pos < len && !ends_options(fmt[pos]) {
            pos += 1;
        }
        if pos >= len {
            stream = stream.merge(count, TypeId::Error);
            break;
        }

        // Length modifier: greedy two-character match for h/hh and l/ll.
        let modifier = match fmt[pos] {
            b'h' => {
                pos += 1;
                if pos < len && fmt[pos] == b'h' {
                    pos += 1;
                    Modifier::Hh
                } else {
                    Modifier::H
                }
            }
            b'l' => {
                pos += 1;
                if pos < len && fmt[pos] == b'l' {
                    pos += 1;
                    Modifier::Ll
                } else {
                    Modifier::L
                }
            }
            b'j' => {
                pos += 1;
                Modifier::J
            }
            b'z' => {
                pos += 1;
                Modifier::Z
            }
            b't' => {
                pos += 1;
                Modifier::T
            }
            b'L' => {
                pos += 1;
                Modifier::BigL
            }
            _ => Modifier::None,
        };

        if pos >= len {
            // Modifier with no conversion letter: truncated specifier.
            stream = stream.merge(count, TypeId::Error);
            break;
        }

        let id = match table::classify(fmt[pos]) {
            Some(conversion) => table::lookup(conversion, modifier),
            None => TypeId::Error,
        };
        pos += 1;

        stream = stream.merge(count, id);
        count += 1;
    }

    stream
}

/// The packed bits of [`scan`]'s result.
///
/// Exists so the compile-time embedding can carry the stream across a
/// `const` generic boundary (only primitives may be const parameters).
#[must_use]
pub const fn encode(fmt: &str) -> u64 {
    scan(fmt).bits()
}

/// Counts the specifiers in `fmt` without capacity truncation.
///
/// `%%` escapes do not count; malformed and truncated specifiers do. Used
/// by the analysis embedding to diagnose formats whose arity exceeds
/// [`CAPACITY`](crate::stream::CAPACITY).
#[must_use]
pub const fn specifier_count(fmt: &str) -> usize {
    let bytes = fmt.as_bytes();
    let mut count = 0_usize;
    let mut pos = 0_usize;
    let len = bytes.len();

    while pos < len {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        pos += 1;
        if pos >= len {
            count += 1;
            break;
        }
        if bytes[pos] == b'%' {
            pos += 1;
            continue;
        }
        while pos < len && !ends_options(bytes[pos]) {
            pos += 1;
        }
        count += 1;
        // Step over whatever ended the options (or a modifier letter); the
        // exact shape of the specifier tail does not change the count.
        while pos < len && (table::is_modifier_start(bytes[pos])) {
            pos += 1;
        }
        if pos < len && table::classify(bytes[pos]).is_some() {
            pos += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::CAPACITY;

    fn decode(fmt: &str) -> Vec<TypeId> {
        scan(fmt).decode()
    }

    #[test]
    fn test_no_specifiers_is_empty() {
        assert_eq!(decode("Hello"), vec![]);
        assert_eq!(decode(""), vec![]);
    }

    #[test]
    fn test_percent_escape_emits_no_token() {
        assert_eq!(decode("100%%"), vec![]);
        assert_eq!(decode("%%%%"), vec![]);
    }

    #[test]
    fn test_simple_int() {
        assert_eq!(decode("%d"), vec![TypeId::Int]);
        assert_eq!(decode("%i"), vec![TypeId::Int]);
    }

    #[test]
    fn test_long_long() {
        assert_eq!(decode("Hello %lld"), vec![TypeId::LongLong]);
    }

    #[test]
    fn test_options_are_skipped() {
        assert_eq!(decode("%+0.0f,%d%%"), vec![TypeId::Double, TypeId::Int]);
        assert_eq!(decode("%-#012.4e"), vec![TypeId::Double]);
        assert_eq!(decode("%*d"), vec![TypeId::Int]);
    }

    #[test]
    fn test_greedy_modifier_match() {
        assert_eq!(decode("%hhd"), vec![TypeId::SignedChar]);
        assert_eq!(decode("%hd"), vec![TypeId::Short]);
        assert_eq!(decode("%ld"), vec![TypeId::Long]);
        assert_eq!(decode("%lld"), vec![TypeId::LongLong]);
        assert_eq!(decode("%jd"), vec![TypeId::IntMax]);
        assert_eq!(decode("%zd"), vec![TypeId::SignedSize]);
        assert_eq!(decode("%td"), vec![TypeId::Ptrdiff]);
        assert_eq!(decode("%Lf"), vec![TypeId::LongDouble]);
    }

    #[test]
    fn test_wide_variants() {
        assert_eq!(decode("%lc"), vec![TypeId::WideInt]);
        assert_eq!(decode("%ls"), vec![TypeId::WideCharPtr]);
    }

    #[test]
    fn test_illegal_combination_is_error_token() {
        assert_eq!(decode("%lp"), vec![TypeId::Error]);
        assert_eq!(decode("%hhf"), vec![TypeId::Error]);
        assert_eq!(decode("%Ld"), vec![TypeId::Error]);
    }

    #[test]
    fn test_unrecognized_conversion_is_error_token() {
        // 'q' is not a supported conversion; scanning resumes after it.
        assert_eq!(decode("%hq%d"), vec![TypeId::Error, TypeId::Int]);
    }

    #[test]
    fn test_truncated_specifier_is_error_token() {
        assert_eq!(decode("%"), vec![TypeId::Error]);
        assert_eq!(decode("abc%"), vec![TypeId::Error]);
        assert_eq!(decode("%l"), vec![TypeId::Error]);
        assert_eq!(decode("%h"), vec![TypeId::Error]);
        assert_eq!(decode("%08"), vec![TypeId::Error]);
    }

    #[test]
    fn test_multiple_specifiers_keep_order() {
        assert_eq!(
            decode("%s=%d (%x) %p"),
            vec![
                TypeId::CharPtr,
                TypeId::Int,
                TypeId::UnsignedInt,
                TypeId::VoidPtr
            ]
        );
    }

    #[test]
    fn test_capacity_boundary() {
        let at_capacity = "%d".repeat(CAPACITY);
        assert_eq!(scan(&at_capacity).len(), CAPACITY);

        let over_capacity = "%d".repeat(CAPACITY + 1);
        assert_eq!(scan(&over_capacity).len(), CAPACITY);
    }

    #[test]
    fn test_scan_is_const_evaluable() {
        const STREAM: TokenStream = scan("%s takes %d and %f");
        assert_eq!(
            STREAM.decode(),
            vec![TypeId::CharPtr, TypeId::Int, TypeId::Double]
        );
    }

    #[test]
    fn test_specifier_count_ignores_capacity() {
        assert_eq!(specifier_count("no specifiers"), 0);
        assert_eq!(specifier_count("100%%"), 0);
        assert_eq!(specifier_count("%d %s"), 2);
        let over = "%d".repeat(CAPACITY + 3);
        assert_eq!(specifier_count(&over), CAPACITY + 3);
    }

    #[test]
    fn test_specifier_count_counts_truncated_tail() {
        assert_eq!(specifier_count("%d%"), 2);
        assert_eq!(specifier_count("%l"), 1);
    }
}
