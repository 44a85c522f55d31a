//! Argument type canonicalization.
//!
//! A call-site collaborator reports each supplied argument as an
//! [`ArgumentDescriptor`]: the statically-known raw type, before decay.
//! [`canonicalize`] is the one explicit normalization step applied before
//! comparison: arrays decay to pointer-to-element (keeping the element's
//! const qualification), and anything that is not a plain trivially-copyable
//! type is rejected.
//!
//! Matching against a required type is exact, with a single asymmetric
//! allowance: a pointer to mutable is accepted where a pointer to const is
//! expected, never the reverse. The `%n` family writes through its pointer
//! argument, so it demands a non-const pointee outright.

use core::fmt;

use crate::typeid::TypeId;

/// A plain scalar C type, as it appears after decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Scalar {
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    IntMax,
    UIntMax,
    Size,
    SignedSize,
    Ptrdiff,
    UnsignedPtrdiff,
    Float,
    Double,
    LongDouble,
    WideInt,
}

/// What a pointer argument points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointee {
    Void,
    WideChar,
    Scalar(Scalar),
    /// A pointee the checker has no required type for (pointer-to-pointer,
    /// function pointers, ...). Never produced by the type table, so it can
    /// only appear on the actual side of a comparison and never matches.
    Other,
}

/// Canonicalized argument type: the form types are compared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonType {
    Scalar(Scalar),
    Pointer { pointee: Pointee, const_pointee: bool },
}

/// Raw, statically-known type of one supplied argument, per call site.
///
/// Owned by the call-site collaborator, not by this core; the variants cover
/// exactly what the checker needs to know to canonicalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentDescriptor {
    /// A plain scalar value. Top-level qualifiers are irrelevant to the
    /// callee and are not represented.
    Value(Scalar),
    /// A pointer value. Top-level constness of the pointer itself is
    /// dropped; constness of the pointee is what matching cares about.
    Pointer { pointee: Pointee, const_pointee: bool },
    /// An array, which decays to a pointer to its (possibly const) element.
    Array {
        element: Pointee,
        const_element: bool,
        len: usize,
    },
    /// Anything that is not a plain trivially-copyable type: aggregates,
    /// references, types with nontrivial copy semantics. Never eligible.
    Aggregate,
}

/// Decays and normalizes a raw descriptor into its canonical type.
///
/// Returns `None` for descriptors that are not eligible as variadic
/// arguments at all ([`ArgumentDescriptor::Aggregate`]).
#[must_use]
pub const fn canonicalize(arg: ArgumentDescriptor) -> Option<CanonType> {
    match arg {
        ArgumentDescriptor::Value(scalar) => Some(CanonType::Scalar(scalar)),
        ArgumentDescriptor::Pointer {
            pointee,
            const_pointee,
        } => Some(CanonType::Pointer {
            pointee,
            const_pointee,
        }),
        ArgumentDescriptor::Array {
            element,
            const_element,
            len: _,
        } => Some(CanonType::Pointer {
            pointee: element,
            const_pointee: const_element,
        }),
        ArgumentDescriptor::Aggregate => None,
    }
}

/// The canonical type a concrete [`TypeId`] requires of its argument.
///
/// Returns `None` for the two sentinels, which denote no type at all.
#[must_use]
pub const fn requirement(id: TypeId) -> Option<CanonType> {
    const fn scalar(s: Scalar) -> Option<CanonType> {
        Some(CanonType::Scalar(s))
    }
    const fn reads(p: Pointee) -> Option<CanonType> {
        Some(CanonType::Pointer {
            pointee: p,
            const_pointee: true,
        })
    }
    const fn writes(p: Pointee) -> Option<CanonType> {
        Some(CanonType::Pointer {
            pointee: p,
            const_pointee: false,
        })
    }

    match id {
        TypeId::None | TypeId::Error => None,
        TypeId::CharPtr => reads(Pointee::Scalar(Scalar::Char)),
        TypeId::Double => scalar(Scalar::Double),
        TypeId::Int => scalar(Scalar::Int),
        TypeId::IntPtr => writes(Pointee::Scalar(Scalar::Int)),
        TypeId::IntMax => scalar(Scalar::IntMax),
        TypeId::IntMaxPtr => writes(Pointee::Scalar(Scalar::IntMax)),
        TypeId::Long => scalar(Scalar::Long),
        TypeId::LongDouble => scalar(Scalar::LongDouble),
        TypeId::LongLong => scalar(Scalar::LongLong),
        TypeId::LongLongPtr => writes(Pointee::Scalar(Scalar::LongLong)),
        TypeId::LongPtr => writes(Pointee::Scalar(Scalar::Long)),
        TypeId::Ptrdiff => scalar(Scalar::Ptrdiff),
        TypeId::PtrdiffPtr => writes(Pointee::Scalar(Scalar::Ptrdiff)),
        TypeId::Short => scalar(Scalar::Short),
        TypeId::ShortPtr => writes(Pointee::Scalar(Scalar::Short)),
        TypeId::SignedChar => scalar(Scalar::SignedChar),
        TypeId::SignedCharPtr => writes(Pointee::Scalar(Scalar::SignedChar)),
        TypeId::SignedSize => scalar(Scalar::SignedSize),
        TypeId::SignedSizePtr => writes(Pointee::Scalar(Scalar::SignedSize)),
        TypeId::Size => scalar(Scalar::Size),
        TypeId::UIntMax => scalar(Scalar::UIntMax),
        TypeId::UnsignedChar => scalar(Scalar::UnsignedChar),
        TypeId::UnsignedInt => scalar(Scalar::UnsignedInt),
        TypeId::UnsignedLong => scalar(Scalar::UnsignedLong),
        TypeId::UnsignedLongLong => scalar(Scalar::UnsignedLongLong),
        TypeId::UnsignedPtrdiff => scalar(Scalar::UnsignedPtrdiff),
        TypeId::UnsignedShort => scalar(Scalar::UnsignedShort),
        TypeId::VoidPtr => reads(Pointee::Void),
        TypeId::WideCharPtr => reads(Pointee::WideChar),
        TypeId::WideInt => scalar(Scalar::WideInt),
    }
}

const fn scalar_eq(a: Scalar, b: Scalar) -> bool {
    a as u8 == b as u8
}

const fn pointee_eq(a: Pointee, b: Pointee) -> bool {
    match (a, b) {
        (Pointee::Void, Pointee::Void) => true,
        (Pointee::WideChar, Pointee::WideChar) => true,
        (Pointee::Scalar(x), Pointee::Scalar(y)) => scalar_eq(x, y),
        // `Other` never matches, not even itself.
        _ => false,
    }
}

/// Whether `actual` satisfies `expected` under exact-type matching.
///
/// The only non-identity case accepted: a mutable pointee where a const
/// pointee is expected. An expected non-const pointee (the `%n` family)
/// rejects any const-qualified actual.
#[must_use]
pub const fn accepts(expected: CanonType, actual: CanonType) -> bool {
    match (expected, actual) {
        (CanonType::Scalar(e), CanonType::Scalar(a)) => scalar_eq(e, a),
        (
            CanonType::Pointer {
                pointee: pe,
                const_pointee: ce,
            },
            CanonType::Pointer {
                pointee: pa,
                const_pointee: ca,
            },
        ) => pointee_eq(pe, pa) && (ce || !ca),
        _ => false,
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scalar::Bool => "bool",
            Scalar::Char => "char",
            Scalar::SignedChar => "signed char",
            Scalar::UnsignedChar => "unsigned char",
            Scalar::Short => "short",
            Scalar::UnsignedShort => "unsigned short",
            Scalar::Int => "int",
            Scalar::UnsignedInt => "unsigned int",
            Scalar::Long => "long",
            Scalar::UnsignedLong => "unsigned long",
            Scalar::LongLong => "long long",
            Scalar::UnsignedLongLong => "unsigned long long",
            Scalar::IntMax => "intmax_t",
            Scalar::UIntMax => "uintmax_t",
            Scalar::Size => "size_t",
            Scalar::SignedSize => "ssize_t",
            Scalar::Ptrdiff => "ptrdiff_t",
            Scalar::UnsignedPtrdiff => "unsigned ptrdiff_t",
            Scalar::Float => "float",
            Scalar::Double => "double",
            Scalar::LongDouble => "long double",
            Scalar::WideInt => "wint_t",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Pointee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pointee::Void => f.write_str("void"),
            Pointee::WideChar => f.write_str("wchar_t"),
            Pointee::Scalar(s) => s.fmt(f),
            Pointee::Other => f.write_str("<unsupported pointee>"),
        }
    }
}

impl fmt::Display for CanonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonType::Scalar(s) => s.fmt(f),
            CanonType::Pointer {
                pointee,
                const_pointee: true,
            } => write!(f, "const {pointee} *"),
            CanonType::Pointer {
                pointee,
                const_pointee: false,
            } => write!(f, "{pointee} *"),
        }
    }
}
