//! Type resolution table.
//!
//! Pure static data: (conversion category × length-modifier category) →
//! required [`TypeId`]. Reproduces the ISO C / POSIX fprintf compatibility
//! matrix exactly; every combination that standard calls illegal maps to
//! [`TypeId::Error`], never to a best-effort type.
//!
//! Reference: ISO C11 7.21.6.1, POSIX.1-2024 fprintf.

use crate::typeid::TypeId;

/// Semantic class of a conversion letter.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`
    Char = 0,
    /// `s`
    Str = 1,
    /// `d` `i`
    SignedInt = 2,
    /// `o` `x` `X` `u`
    UnsignedInt = 3,
    /// `f` `F` `e` `E` `a` `A` `g` `G`
    Float = 4,
    /// `n`
    CharsWritten = 5,
    /// `p`
    Pointer = 6,
}

/// Number of conversion categories.
pub const CONVERSION_COUNT: usize = 7;

/// Semantic class of a length-modifier prefix.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    None = 0,
    Hh = 1,
    H = 2,
    /// `l`
    L = 3,
    Ll = 4,
    J = 5,
    Z = 6,
    T = 7,
    /// `L`
    BigL = 8,
}

/// Number of length-modifier categories.
pub const MODIFIER_COUNT: usize = 9;

/// The required-type matrix, built once, process-wide constant.
///
/// Columns follow the [`Modifier`] discriminants:
/// none, hh, h, l, ll, j, z, t, L.
#[rustfmt::skip]
pub const TYPE_TABLE: [[TypeId; MODIFIER_COUNT]; CONVERSION_COUNT] = {
    use TypeId::*;
    [
        // none    hh             h            l            ll                j          z              t                L
        /* c  */ [Int,         Error,         Error,         WideInt,       Error,            Error,     Error,         Error,           Error],
        /* s  */ [CharPtr,     Error,         Error,         WideCharPtr,   Error,            Error,     Error,         Error,           Error],
        /* di */ [Int,         SignedChar,    Short,         Long,          LongLong,         IntMax,    SignedSize,    Ptrdiff,         Error],
        /* oxXu */ [UnsignedInt, UnsignedChar, UnsignedShort, UnsignedLong, UnsignedLongLong, UIntMax,   Size,          UnsignedPtrdiff, Error],
        /* fF.. */ [Double,     Error,         Error,         Double,        Error,            Error,     Error,         Error,           LongDouble],
        /* n  */ [IntPtr,      SignedCharPtr, ShortPtr,      LongPtr,       LongLongPtr,      IntMaxPtr, SignedSizePtr, PtrdiffPtr,      Error],
        /* p  */ [VoidPtr,     Error,         Error,         Error,         Error,            Error,     Error,         Error,           Error],
    ]
};

/// Looks up the required type for one parsed specifier.
#[inline]
#[must_use]
pub const fn lookup(conversion: Conversion, modifier: Modifier) -> TypeId {
    TYPE_TABLE[conversion as usize][modifier as usize]
}

/// Classifies a conversion letter, or `None` if the byte is not one of the
/// supported letters `c s d i o x X u f F e E a A g G n p`.
#[must_use]
pub const fn classify(byte: u8) -> Option<Conversion> {
    match byte {
        b'c' => Some(Conversion::Char),
        b's' => Some(Conversion::Str),
        b'd' | b'i' => Some(Conversion::SignedInt),
        b'o' | b'x' | b'X' | b'u' => Some(Conversion::UnsignedInt),
        b'f' | b'F' | b'e' | b'E' | b'a' | b'A' | b'g' | b'G' => Some(Conversion::Float),
        b'n' => Some(Conversion::CharsWritten),
        b'p' => Some(Conversion::Pointer),
        _ => None,
    }
}

/// `true` for the bytes a length modifier can start with.
#[inline]
#[must_use]
pub const fn is_modifier_start(byte: u8) -> bool {
    matches!(byte, b'h' | b'l' | b'j' | b'z' | b't' | b'L')
}
