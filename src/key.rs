//! Order-preserving key transforms.
//!
//! Every supported key type maps onto an unsigned integer of the same width
//! whose plain unsigned ordering matches the numeric ordering of the original
//! value. The radix passes only ever look at these unsigned images, one byte
//! at a time.
//!
//! - Unsigned integers: identity.
//! - Signed integers: the sign bit is flipped, so `MIN` maps to `0` and `MAX`
//!   to the unsigned maximum.
//! - Floats: non-negative values get the sign bit set; negative values are
//!   bitwise inverted, so larger magnitudes land lower. `-0.0` maps to the
//!   same key as `+0.0`.
//!
//! NaN ordering is not a contract. With the transform above, NaNs with the
//! sign bit clear sort after `+inf` and NaNs with the sign bit set sort before
//! `-inf`.

/// Number of bits per digit.
pub const DIGIT_BITS: usize = 8;
/// Number of buckets per digit (2^DIGIT_BITS).
pub const NUM_BUCKETS: usize = 1 << DIGIT_BITS;
/// Widest supported key, in digits.
pub const MAX_DIGITS: usize = 8;

/// Unsigned integer image of a sort key, split into bytes by the radix passes.
pub trait UnsignedKey: Copy + private::Sealed {
    /// Key width in bytes, which is also the number of radix passes.
    const BYTES: usize;

    /// Extracts byte `digit` (0 = least significant) as a bucket index.
    fn digit(self, digit: usize) -> usize;
}

macro_rules! impl_unsigned_key {
    ($($t:ty)*) => ($(
        impl UnsignedKey for $t {
            const BYTES: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn digit(self, digit: usize) -> usize {
                ((self >> (digit * DIGIT_BITS)) & 0xFF) as usize
            }
        }
    )*)
}

impl_unsigned_key! { u8 u16 u32 u64 usize }

/// Types usable as radix sort keys.
///
/// Implemented for `u8`..`u64`, `i8`..`i64`, `usize`, `isize`, `f32` and `f64`.
/// The trait is sealed; wrap other types in a key function that returns one
/// of these.
pub trait RadixKey: Copy + private::Sealed {
    /// Unsigned integer of the same width.
    type Unsigned: UnsignedKey;

    /// Maps the value onto its order-preserving unsigned image.
    fn to_radix(self) -> Self::Unsigned;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty)*) => ($(
        impl RadixKey for $t {
            type Unsigned = $t;

            #[inline(always)]
            fn to_radix(self) -> $t {
                self
            }
        }
    )*)
}

macro_rules! impl_radix_key_signed {
    ($($t:ty => $u:ty, $flip:ident;)*) => ($(
        impl RadixKey for $t {
            type Unsigned = $u;

            #[inline(always)]
            fn to_radix(self) -> $u {
                $flip(self as $u)
            }
        }
    )*)
}

impl_radix_key_unsigned! { u8 u16 u32 u64 usize }

impl_radix_key_signed! {
    i8 => u8, flip_sign_u8;
    i16 => u16, flip_sign_u16;
    i32 => u32, flip_sign_u32;
    i64 => u64, flip_sign_u64;
    isize => usize, flip_sign_usize;
}

impl RadixKey for f32 {
    type Unsigned = u32;

    #[inline(always)]
    fn to_radix(self) -> u32 {
        f32_bits_key(self.to_bits())
    }
}

impl RadixKey for f64 {
    type Unsigned = u64;

    #[inline(always)]
    fn to_radix(self) -> u64 {
        f64_bits_key(self.to_bits())
    }
}

macro_rules! flip_sign_fns {
    ($($name:ident: $u:ty;)*) => ($(
        /// Flips the sign bit of a two's complement bit pattern.
        #[inline(always)]
        pub fn $name(bits: $u) -> $u {
            bits ^ (1 << (<$u>::BITS - 1))
        }
    )*)
}

flip_sign_fns! {
    flip_sign_u8: u8;
    flip_sign_u16: u16;
    flip_sign_u32: u32;
    flip_sign_u64: u64;
    flip_sign_usize: usize;
}

macro_rules! float_bits_fns {
    ($($name:ident: $u:ty;)*) => ($(
        /// Maps the raw bits of an IEEE float onto an order-preserving key.
        #[inline(always)]
        pub fn $name(bits: $u) -> $u {
            const SIGN: $u = 1 << (<$u>::BITS - 1);
            // -0.0 has only the sign bit set and shares +0.0's key.
            if bits & SIGN == 0 || bits == SIGN {
                bits | SIGN
            } else {
                !bits
            }
        }
    )*)
}

float_bits_fns! {
    f32_bits_key: u32;
    f64_bits_key: u64;
}

mod private {
    pub trait Sealed {}

    macro_rules! sealed_impl {
        ($($t:ty)*) => ($(
            impl Sealed for $t {}
        )*)
    }

    sealed_impl! {
        u8 u16 u32 u64 usize
        i8 i16 i32 i64 isize
        f32 f64
    }
}
