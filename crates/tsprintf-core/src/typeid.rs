//! Closed tag identifying one native argument type.
//!
//! A `TypeId` is what the scanner records per conversion specifier and what
//! the packed stream stores in each 5-bit slot. Two sentinels share the code
//! space with the 30 concrete types: [`TypeId::None`] marks an empty slot
//! (end of stream) and [`TypeId::Error`] marks a malformed specifier.
//! `Error` is distinct from `None` so a malformed specifier is never
//! mistaken for end-of-stream.

use core::fmt;

/// Tag for one native argument type recognized by the checker.
///
/// The discriminants are the wire codes used by the packed
/// [`TokenStream`](crate::stream::TokenStream); all 32 values fit exactly in
/// a 5-bit slot.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeId {
    /// Empty slot; reading a stream stops here.
    None = 0x00,
    /// Malformed conversion specifier.
    Error = 0x01,
    CharPtr = 0x02,
    Double = 0x03,
    Int = 0x04,
    IntPtr = 0x05,
    IntMax = 0x06,
    IntMaxPtr = 0x07,
    Long = 0x08,
    LongDouble = 0x09,
    LongLong = 0x0A,
    LongLongPtr = 0x0B,
    LongPtr = 0x0C,
    Ptrdiff = 0x0D,
    PtrdiffPtr = 0x0E,
    Short = 0x0F,
    ShortPtr = 0x10,
    SignedChar = 0x11,
    SignedCharPtr = 0x12,
    SignedSize = 0x13,
    SignedSizePtr = 0x14,
    Size = 0x15,
    UIntMax = 0x16,
    UnsignedChar = 0x17,
    UnsignedInt = 0x18,
    UnsignedLong = 0x19,
    UnsignedLongLong = 0x1A,
    UnsignedPtrdiff = 0x1B,
    UnsignedShort = 0x1C,
    VoidPtr = 0x1D,
    WideCharPtr = 0x1E,
    WideInt = 0x1F,
}

impl TypeId {
    /// The 5-bit wire code of this tag.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a 5-bit wire code back into a tag.
    ///
    /// Codes above `0x1F` cannot come out of a masked slot; they decode to
    /// [`TypeId::Error`] rather than to a guessed type.
    #[must_use]
    pub const fn from_code(code: u8) -> TypeId {
        match code {
            0x00 => TypeId::None,
            0x01 => TypeId::Error,
            0x02 => TypeId::CharPtr,
            0x03 => TypeId::Double,
            0x04 => TypeId::Int,
            0x05 => TypeId::IntPtr,
            0x06 => TypeId::IntMax,
            0x07 => TypeId::IntMaxPtr,
            0x08 => TypeId::Long,
            0x09 => TypeId::LongDouble,
            0x0A => TypeId::LongLong,
            0x0B => TypeId::LongLongPtr,
            0x0C => TypeId::LongPtr,
            0x0D => TypeId::Ptrdiff,
            0x0E => TypeId::PtrdiffPtr,
            0x0F => TypeId::Short,
            0x10 => TypeId::ShortPtr,
            0x11 => TypeId::SignedChar,
            0x12 => TypeId::SignedCharPtr,
            0x13 => TypeId::SignedSize,
            0x14 => TypeId::SignedSizePtr,
            0x15 => TypeId::Size,
            0x16 => TypeId::UIntMax,
            0x17 => TypeId::UnsignedChar,
            0x18 => TypeId::UnsignedInt,
            0x19 => TypeId::UnsignedLong,
            0x1A => TypeId::UnsignedLongLong,
            0x1B => TypeId::UnsignedPtrdiff,
            0x1C => TypeId::UnsignedShort,
            0x1D => TypeId::VoidPtr,
            0x1E => TypeId::WideCharPtr,
            0x1F => TypeId::WideInt,
            _ => TypeId::Error,
        }
    }

    /// `true` for the two sentinel tags.
    #[inline]
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, TypeId::None | TypeId::Error)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeId::None => "<none>",
            TypeId::Error => "<malformed specifier>",
            TypeId::CharPtr => "const char *",
            TypeId::Double => "double",
            TypeId::Int => "int",
            TypeId::IntPtr => "int *",
            TypeId::IntMax => "intmax_t",
            TypeId::IntMaxPtr => "intmax_t *",
            TypeId::Long => "long",
            TypeId::LongDouble => "long double",
            TypeId::LongLong => "long long",
            TypeId::LongLongPtr => "long long *",
            TypeId::LongPtr => "long *",
            TypeId::Ptrdiff => "ptrdiff_t",
            TypeId::PtrdiffPtr => "ptrdiff_t *",
            TypeId::Short => "short",
            TypeId::ShortPtr => "short *",
            TypeId::SignedChar => "signed char",
            TypeId::SignedCharPtr => "signed char *",
            TypeId::SignedSize => "ssize_t",
            TypeId::SignedSizePtr => "ssize_t *",
            TypeId::Size => "size_t",
            TypeId::UIntMax => "uintmax_t",
            TypeId::UnsignedChar => "unsigned char",
            TypeId::UnsignedInt => "unsigned int",
            TypeId::UnsignedLong => "unsigned long",
            TypeId::UnsignedLongLong => "unsigned long long",
            TypeId::UnsignedPtrdiff => "unsigned ptrdiff_t",
            TypeId::UnsignedShort => "unsigned short",
            TypeId::VoidPtr => "const void *",
            TypeId::WideCharPtr => "const wchar_t *",
            TypeId::WideInt => "wint_t",
        };
        f.write_str(name)
    }
}
