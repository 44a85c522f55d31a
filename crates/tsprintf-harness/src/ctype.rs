//! Parser from C type spellings to argument descriptors.
//!
//! Fixture files record argument types the way a C front end would print
//! them ("const char *", "unsigned long long", "int[8]"). This module
//! turns such a spelling into the [`ArgumentDescriptor`] the matcher
//! consumes. The grammar is deliberately small: a declaration-specifier
//! word soup, an optional run of pointer levels, an optional trailing
//! array extent.
//!
//! Word order inside the specifier soup is free, as in C: "unsigned long
//! long int" and "long int unsigned long" name the same type. Resolution
//! therefore sorts the words and looks the canonical form up.

use thiserror::Error;
use tsprintf_core::canon::{ArgumentDescriptor, Pointee, Scalar};

/// Why a spelling could not be turned into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("empty type spelling")]
    Empty,
    #[error("unknown type spelling `{0}`")]
    Unknown(String),
    #[error("bad array extent in `{0}`")]
    BadArray(String),
    #[error("`{0}` cannot be passed by value")]
    NotAValue(String),
}

/// What the specifier words resolved to, before pointer/array structure
/// is applied.
enum Base {
    Scalar(Scalar),
    Void,
    WideChar,
    Aggregate,
}

/// Parses one C type spelling into an [`ArgumentDescriptor`].
///
/// Unknown identifiers (typedefs this parser has no table for) are a
/// [`TypeParseError::Unknown`]; the runner reports those as a finding
/// rather than guessing.
pub fn parse(spelling: &str) -> Result<ArgumentDescriptor, TypeParseError> {
    let mut tokens = tokenize(spelling);
    if tokens.is_empty() {
        return Err(TypeParseError::Empty);
    }

    // Trailing `[N]` array extent, if any.
    let mut array_len: Option<usize> = None;
    if tokens.last().map(String::as_str) == Some("]") {
        tokens.pop();
        let extent = tokens.pop().ok_or_else(|| bad_array(spelling))?;
        if tokens.pop().as_deref() != Some("[") {
            return Err(bad_array(spelling));
        }
        let len: usize = extent.parse().map_err(|_| bad_array(spelling))?;
        if len == 0 {
            return Err(bad_array(spelling));
        }
        array_len = Some(len);
    }
    if tokens.iter().any(|t| t == "[" || t == "]") {
        return Err(bad_array(spelling));
    }

    // Split the flat token list into specifier words and pointer levels.
    // `const` before the first `*` qualifies the base; `const` after a
    // `*` qualifies that pointer level and is irrelevant to the check.
    let mut words: Vec<&str> = Vec::new();
    let mut stars = 0_usize;
    let mut base_const = false;
    for token in &tokens {
        match token.as_str() {
            "*" => stars += 1,
            "const" | "volatile" => {
                if stars == 0 && token == "const" {
                    base_const = true;
                }
            }
            word => {
                if stars > 0 {
                    return Err(TypeParseError::Unknown(spelling.to_owned()));
                }
                words.push(word);
            }
        }
    }

    let base = resolve_base(&words).ok_or_else(|| TypeParseError::Unknown(spelling.to_owned()))?;

    match (stars, array_len) {
        (0, None) => match base {
            Base::Scalar(scalar) => Ok(ArgumentDescriptor::Value(scalar)),
            Base::Aggregate => Ok(ArgumentDescriptor::Aggregate),
            Base::Void | Base::WideChar => Err(TypeParseError::NotAValue(spelling.to_owned())),
        },
        (0, Some(len)) => Ok(ArgumentDescriptor::Array {
            element: match base {
                Base::Scalar(scalar) => Pointee::Scalar(scalar),
                Base::WideChar => Pointee::WideChar,
                // Arrays of aggregates decay to pointers nothing matches.
                Base::Void | Base::Aggregate => Pointee::Other,
            },
            const_element: base_const,
            len,
        }),
        (1, None) => Ok(ArgumentDescriptor::Pointer {
            pointee: match base {
                Base::Scalar(scalar) => Pointee::Scalar(scalar),
                Base::Void => Pointee::Void,
                Base::WideChar => Pointee::WideChar,
                Base::Aggregate => Pointee::Other,
            },
            const_pointee: base_const,
        }),
        // Multi-level pointers, and arrays of pointers, point at pointers;
        // no conversion reads through those.
        _ => Ok(ArgumentDescriptor::Pointer {
            pointee: Pointee::Other,
            const_pointee: false,
        }),
    }
}

fn bad_array(spelling: &str) -> TypeParseError {
    TypeParseError::BadArray(spelling.to_owned())
}

/// Splits a spelling into words, `*`, `[`, `]`, and extent tokens.
fn tokenize(spelling: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(spelling.len() + 8);
    for ch in spelling.chars() {
        match ch {
            '*' | '[' | ']' => {
                spaced.push(' ');
                spaced.push(ch);
                spaced.push(' ');
            }
            _ => spaced.push(ch),
        }
    }
    spaced.split_whitespace().map(str::to_owned).collect()
}

/// Resolves a specifier word soup to a base type.
///
/// `struct`/`union`/`enum` tags resolve to [`Base::Aggregate`]; enums have
/// an implementation-defined underlying integer this parser does not know,
/// so they are treated as opaque rather than guessed at.
fn resolve_base(words: &[&str]) -> Option<Base> {
    if matches!(words.first(), Some(&"struct" | &"union" | &"enum")) {
        return Some(Base::Aggregate);
    }

    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_unstable();
    let key = sorted.join(" ");

    let scalar = match key.as_str() {
        "char" => Scalar::Char,
        "char signed" => Scalar::SignedChar,
        "char unsigned" => Scalar::UnsignedChar,
        "short" | "int short" | "short signed" | "int short signed" => Scalar::Short,
        "short unsigned" | "int short unsigned" => Scalar::UnsignedShort,
        "int" | "signed" | "int signed" => Scalar::Int,
        "unsigned" | "int unsigned" => Scalar::UnsignedInt,
        "long" | "int long" | "long signed" | "int long signed" => Scalar::Long,
        "long unsigned" | "int long unsigned" => Scalar::UnsignedLong,
        "long long" | "int long long" | "long long signed" | "int long long signed" => {
            Scalar::LongLong
        }
        "long long unsigned" | "int long long unsigned" => Scalar::UnsignedLongLong,
        "intmax_t" => Scalar::IntMax,
        "uintmax_t" => Scalar::UIntMax,
        "size_t" => Scalar::Size,
        "ssize_t" => Scalar::SignedSize,
        "ptrdiff_t" => Scalar::Ptrdiff,
        "float" => Scalar::Float,
        "double" => Scalar::Double,
        "double long" => Scalar::LongDouble,
        "wint_t" => Scalar::WideInt,
        "bool" | "_Bool" => Scalar::Bool,
        "void" => return Some(Base::Void),
        "wchar_t" => return Some(Base::WideChar),
        _ => return None,
    };
    Some(Base::Scalar(scalar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalars() {
        assert_eq!(parse("int"), Ok(ArgumentDescriptor::Value(Scalar::Int)));
        assert_eq!(
            parse("unsigned long long int"),
            Ok(ArgumentDescriptor::Value(Scalar::UnsignedLongLong))
        );
        assert_eq!(
            parse("long int unsigned long"),
            Ok(ArgumentDescriptor::Value(Scalar::UnsignedLongLong))
        );
        assert_eq!(
            parse("long double"),
            Ok(ArgumentDescriptor::Value(Scalar::LongDouble))
        );
        assert_eq!(parse("size_t"), Ok(ArgumentDescriptor::Value(Scalar::Size)));
    }

    #[test]
    fn test_pointers_and_constness() {
        assert_eq!(
            parse("const char *"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::Scalar(Scalar::Char),
                const_pointee: true,
            })
        );
        // West and east const spell the same type.
        assert_eq!(parse("char const *"), parse("const char *"));
        assert_eq!(
            parse("void *"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::Void,
                const_pointee: false,
            })
        );
        assert_eq!(
            parse("wchar_t *"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::WideChar,
                const_pointee: false,
            })
        );
    }

    #[test]
    fn test_pointer_level_const_does_not_qualify_pointee() {
        assert_eq!(
            parse("char * const"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::Scalar(Scalar::Char),
                const_pointee: false,
            })
        );
    }

    #[test]
    fn test_multi_level_pointers_are_opaque() {
        assert_eq!(
            parse("char **"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::Other,
                const_pointee: false,
            })
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            parse("char[16]"),
            Ok(ArgumentDescriptor::Array {
                element: Pointee::Scalar(Scalar::Char),
                const_element: false,
                len: 16,
            })
        );
        assert_eq!(
            parse("const char [6]"),
            Ok(ArgumentDescriptor::Array {
                element: Pointee::Scalar(Scalar::Char),
                const_element: true,
                len: 6,
            })
        );
        assert_eq!(
            parse("wchar_t[8]"),
            Ok(ArgumentDescriptor::Array {
                element: Pointee::WideChar,
                const_element: false,
                len: 8,
            })
        );
        assert_eq!(parse("char[0]"), Err(bad_array("char[0]")));
        assert_eq!(parse("char[x]"), Err(bad_array("char[x]")));
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(parse("struct stat"), Ok(ArgumentDescriptor::Aggregate));
        assert_eq!(parse("union sigval"), Ok(ArgumentDescriptor::Aggregate));
        assert_eq!(parse("enum color"), Ok(ArgumentDescriptor::Aggregate));
        assert_eq!(
            parse("struct stat *"),
            Ok(ArgumentDescriptor::Pointer {
                pointee: Pointee::Other,
                const_pointee: false,
            })
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse(""), Err(TypeParseError::Empty));
        assert_eq!(parse("   "), Err(TypeParseError::Empty));
        assert_eq!(
            parse("void"),
            Err(TypeParseError::NotAValue("void".to_owned()))
        );
        assert_eq!(
            parse("wchar_t"),
            Err(TypeParseError::NotAValue("wchar_t".to_owned()))
        );
        assert_eq!(
            parse("FILE *"),
            Err(TypeParseError::Unknown("FILE *".to_owned()))
        );
        assert_eq!(
            parse("unsigned unsigned"),
            Err(TypeParseError::Unknown("unsigned unsigned".to_owned()))
        );
    }
}
