//! ABI identity of variadic arguments.
//!
//! The compile-time embedding checks Rust values against the requirement
//! stream, so required C types are collapsed to their platform layout: an
//! integer is its bit width and signedness, a pointer is its pointee's
//! width and the mutability the conversion demands. On LP64 this means
//! `%ld`, `%lld`, `%jd` and `%zd` are all satisfied by an `i64`, exactly as
//! the platform printf would read them.
//!
//! C default argument promotions are part of the ABI identity: `%hhd` and
//! `%hd` read an `int` slot at the callee, so they require an `i32` here —
//! Rust refuses to pass sub-`int` scalars across a variadic boundary
//! (E0617), which is the same rule enforced in the type system.
//!
//! Assumes a glibc-style target: `wchar_t` is a 32-bit signed int and
//! `wint_t` a 32-bit unsigned int. `long` tracks the pointer width.

use tsprintf_core::typeid::TypeId;

/// Bit width of `long`, `size_t`, `ssize_t` and `ptrdiff_t`.
#[cfg(target_pointer_width = "64")]
pub const WORD_BITS: u8 = 64;
#[cfg(target_pointer_width = "32")]
pub const WORD_BITS: u8 = 32;

/// Bit width of `wchar_t` on glibc targets.
pub const WCHAR_BITS: u8 = 32;

/// What an ABI pointer points at, identified by width alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiPointee {
    Void,
    /// An integer pointee of the given bit width. Signedness of the
    /// pointee is not part of the ABI identity.
    Width(u8),
}

/// Platform layout identity of one C argument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    Signed(u8),
    Unsigned(u8),
    Double,
    /// `long double`; no stable Rust type maps to it, so `%Lf` can never be
    /// satisfied from Rust.
    LongDouble,
    /// `mutable` is the *requirement*: conversions that write through the
    /// pointer demand a mutable actual. On the actual side it records
    /// whether the value is a `*mut`.
    Pointer { pointee: AbiPointee, mutable: bool },
}

/// ABI identity a concrete [`TypeId`] requires; `None` for the sentinels.
#[must_use]
pub const fn abi_of(id: TypeId) -> Option<AbiType> {
    const fn reads(pointee: AbiPointee) -> Option<AbiType> {
        Some(AbiType::Pointer {
            pointee,
            mutable: false,
        })
    }
    const fn writes(pointee: AbiPointee) -> Option<AbiType> {
        Some(AbiType::Pointer {
            pointee,
            mutable: true,
        })
    }

    match id {
        TypeId::None | TypeId::Error => None,
        TypeId::CharPtr => reads(AbiPointee::Width(8)),
        TypeId::Double => Some(AbiType::Double),
        TypeId::Int => Some(AbiType::Signed(32)),
        TypeId::IntPtr => writes(AbiPointee::Width(32)),
        TypeId::IntMax => Some(AbiType::Signed(64)),
        TypeId::IntMaxPtr => writes(AbiPointee::Width(64)),
        TypeId::Long => Some(AbiType::Signed(WORD_BITS)),
        TypeId::LongDouble => Some(AbiType::LongDouble),
        TypeId::LongLong => Some(AbiType::Signed(64)),
        TypeId::LongLongPtr => writes(AbiPointee::Width(64)),
        TypeId::LongPtr => writes(AbiPointee::Width(WORD_BITS)),
        TypeId::Ptrdiff => Some(AbiType::Signed(WORD_BITS)),
        TypeId::PtrdiffPtr => writes(AbiPointee::Width(WORD_BITS)),
        // Promoted: the callee reads an int-sized slot for %hd and %hhd.
        TypeId::Short => Some(AbiType::Signed(32)),
        TypeId::ShortPtr => writes(AbiPointee::Width(16)),
        TypeId::SignedChar => Some(AbiType::Signed(32)),
        TypeId::SignedCharPtr => writes(AbiPointee::Width(8)),
        TypeId::SignedSize => Some(AbiType::Signed(WORD_BITS)),
        TypeId::SignedSizePtr => writes(AbiPointee::Width(WORD_BITS)),
        TypeId::Size => Some(AbiType::Unsigned(WORD_BITS)),
        TypeId::UIntMax => Some(AbiType::Unsigned(64)),
        TypeId::UnsignedChar => Some(AbiType::Unsigned(32)),
        TypeId::UnsignedInt => Some(AbiType::Unsigned(32)),
        TypeId::UnsignedLong => Some(AbiType::Unsigned(WORD_BITS)),
        TypeId::UnsignedLongLong => Some(AbiType::Unsigned(64)),
        TypeId::UnsignedPtrdiff => Some(AbiType::Unsigned(WORD_BITS)),
        TypeId::UnsignedShort => Some(AbiType::Unsigned(32)),
        TypeId::VoidPtr => reads(AbiPointee::Void),
        TypeId::WideCharPtr => reads(AbiPointee::Width(WCHAR_BITS)),
        TypeId::WideInt => Some(AbiType::Unsigned(32)),
    }
}

const fn pointee_eq(a: AbiPointee, b: AbiPointee) -> bool {
    match (a, b) {
        (AbiPointee::Void, AbiPointee::Void) => true,
        (AbiPointee::Width(x), AbiPointee::Width(y)) => x == y,
        _ => false,
    }
}

/// Whether an actual ABI identity satisfies a required one.
///
/// Same asymmetry as the exact-type matcher: a `*mut` is accepted where a
/// read-only pointer is required, but a writing conversion (`%n`) rejects
/// a `*const`.
#[must_use]
pub const fn abi_accepts(expected: AbiType, actual: AbiType) -> bool {
    match (expected, actual) {
        (AbiType::Signed(e), AbiType::Signed(a)) => e == a,
        (AbiType::Unsigned(e), AbiType::Unsigned(a)) => e == a,
        (AbiType::Double, AbiType::Double) => true,
        (AbiType::LongDouble, AbiType::LongDouble) => true,
        (
            AbiType::Pointer {
                pointee: pe,
                mutable: me,
            },
            AbiType::Pointer {
                pointee: pa,
                mutable: ma,
            },
        ) => pointee_eq(pe, pa) && (!me || ma),
        _ => false,
    }
}

/// A Rust value that may legally cross a C variadic boundary.
///
/// # Safety
///
/// Implementations assert that `Self` is FFI-safe when passed as a variadic
/// argument and that [`CArg::ABI`] is its true platform identity. Small
/// integers are fine as-is: each variadic slot is register-sized on the
/// supported ABIs, and the narrow conversions read only the low bits.
///
/// There is deliberately no impl for the types Rust cannot pass variadically
/// (`f32`, `i8`, `i16`, `u8`, `u16`, `bool`, `char`): C default argument
/// promotion does not happen implicitly at a Rust call site, so callers
/// pass the promoted type themselves (`f64`, `i32`, `u32`).
pub unsafe trait CArg: Copy {
    const ABI: AbiType;
}

macro_rules! impl_carg {
    ($($ty:ty => $abi:expr;)*) => {
        $(
            unsafe impl CArg for $ty {
                const ABI: AbiType = $abi;
            }
        )*
    };
}

impl_carg! {
    i32 => AbiType::Signed(32);
    i64 => AbiType::Signed(64);
    isize => AbiType::Signed(WORD_BITS);
    u32 => AbiType::Unsigned(32);
    u64 => AbiType::Unsigned(64);
    usize => AbiType::Unsigned(WORD_BITS);
    f64 => AbiType::Double;

    *const libc::c_void => AbiType::Pointer { pointee: AbiPointee::Void, mutable: false };
    *mut libc::c_void => AbiType::Pointer { pointee: AbiPointee::Void, mutable: true };
    *const i8 => AbiType::Pointer { pointee: AbiPointee::Width(8), mutable: false };
    *mut i8 => AbiType::Pointer { pointee: AbiPointee::Width(8), mutable: true };
    *const u8 => AbiType::Pointer { pointee: AbiPointee::Width(8), mutable: false };
    *mut u8 => AbiType::Pointer { pointee: AbiPointee::Width(8), mutable: true };
    *const i16 => AbiType::Pointer { pointee: AbiPointee::Width(16), mutable: false };
    *mut i16 => AbiType::Pointer { pointee: AbiPointee::Width(16), mutable: true };
    *const i32 => AbiType::Pointer { pointee: AbiPointee::Width(32), mutable: false };
    *mut i32 => AbiType::Pointer { pointee: AbiPointee::Width(32), mutable: true };
    *const u32 => AbiType::Pointer { pointee: AbiPointee::Width(32), mutable: false };
    *mut u32 => AbiType::Pointer { pointee: AbiPointee::Width(32), mutable: true };
    *const i64 => AbiType::Pointer { pointee: AbiPointee::Width(64), mutable: false };
    *mut i64 => AbiType::Pointer { pointee: AbiPointee::Width(64), mutable: true };
    *const isize => AbiType::Pointer { pointee: AbiPointee::Width(WORD_BITS), mutable: false };
    *mut isize => AbiType::Pointer { pointee: AbiPointee::Width(WORD_BITS), mutable: true };
}

/// The ordered ABI identities of a call's argument tuple.
///
/// Implemented for tuples of [`CArg`] up to the requirement stream's
/// capacity; a call with more arguments than the stream can carry fails to
/// find an impl and is rejected at compile time.
pub trait ArgList {
    const ABIS: &'static [AbiType];
}

impl ArgList for () {
    const ABIS: &'static [AbiType] = &[];
}

macro_rules! impl_arg_list {
    ($($name:ident)+) => {
        impl<$($name: CArg,)+> ArgList for ($($name,)+) {
            const ABIS: &'static [AbiType] = &[$($name::ABI,)+];
        }
    };
}

impl_arg_list!(A);
impl_arg_list!(A B);
impl_arg_list!(A B C);
impl_arg_list!(A B C D);
impl_arg_list!(A B C D E);
impl_arg_list!(A B C D E F);
impl_arg_list!(A B C D E F G);
impl_arg_list!(A B C D E F G H);
impl_arg_list!(A B C D E F G H I);
impl_arg_list!(A B C D E F G H I J);
impl_arg_list!(A B C D E F G H I J K);
impl_arg_list!(A B C D E F G H I J K L);
