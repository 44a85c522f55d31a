//! Packed requirement stream.
//!
//! A [`TokenStream`] is the compact encoding of the ordered list of types a
//! format string requires: 5-bit [`TypeId`] codes packed into a `u64`,
//! lowest index first. Capacity is the register width divided by the slot
//! width — 12 slots. Reading stops at the first [`TypeId::None`] slot or at
//! capacity, whichever comes first.
//!
//! The stream is an ephemeral per-format-string analysis artifact; it is
//! created at analysis time and discarded, never persisted. The raw-bits
//! accessors exist solely so a stream can cross a `const` generic boundary
//! in the compile-time embedding.

use core::fmt;

use crate::typeid::TypeId;

/// Width of one slot in bits.
pub const SLOT_BITS: u32 = 5;

/// Mask covering one slot.
pub const SLOT_MASK: u64 = 0x1F;

/// Maximum number of tokens one stream can carry.
pub const CAPACITY: usize = (u64::BITS / SLOT_BITS) as usize;

/// Compact ordered sequence of the [`TypeId`]s a format string requires.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenStream {
    bits: u64,
}

impl TokenStream {
    /// The empty stream: every slot is [`TypeId::None`].
    pub const EMPTY: TokenStream = TokenStream { bits: 0 };

    /// Rebuilds a stream from its packed representation.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> TokenStream {
        TokenStream { bits }
    }

    /// The packed representation.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Overwrites slot `index` with `id` and returns the updated stream.
    ///
    /// Indices at or beyond [`CAPACITY`] return the stream unchanged: a
    /// silent truncation policy, preserved deliberately. Specifiers beyond
    /// capacity are simply absent from the stream; embeddings that want to
    /// reject over-long calls must guard arity themselves (both shipped
    /// embeddings do).
    #[must_use]
    pub const fn merge(self, index: usize, id: TypeId) -> TokenStream {
        if index >= CAPACITY {
            return self;
        }
        let shift = index as u32 * SLOT_BITS;
        TokenStream {
            bits: (self.bits & !(SLOT_MASK << shift)) | ((id.code() as u64 & SLOT_MASK) << shift),
        }
    }

    /// Reads slot `index`. Out-of-range indices read as [`TypeId::None`].
    #[must_use]
    pub const fn get(self, index: usize) -> TypeId {
        if index >= CAPACITY {
            return TypeId::None;
        }
        let shift = index as u32 * SLOT_BITS;
        TypeId::from_code(((self.bits >> shift) & SLOT_MASK) as u8)
    }

    /// Number of tokens before the first empty slot.
    #[must_use]
    pub const fn len(self) -> usize {
        let mut i = 0;
        while i < CAPACITY {
            if matches!(self.get(i), TypeId::None) {
                return i;
            }
            i += 1;
        }
        CAPACITY
    }

    /// `true` when the stream carries no tokens.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.get(0), TypeId::None)
    }

    /// Unpacks the stream into a vector of tags.
    ///
    /// Used by tests and tooling only; the validation hot path never
    /// decodes.
    #[must_use]
    pub fn decode(self) -> Vec<TypeId> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.decode()).finish()
    }
}
