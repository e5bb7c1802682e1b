//! Numeric types usable as edge distances.

use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// Bound for edge distances.
///
/// Implemented for all primitive integer and floating point types.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered counterpart used as a priority queue key.
    type Ord: Ord + From<Self> + Into<Self>;

    /// Identity of addition, the distance of a vertex to itself.
    fn zero() -> Self;

    /// Sentinel for "no path known", greater than any real distance.
    fn inf() -> Self;

    /// Whether the type can represent negative values at all.
    ///
    /// Algorithms use this to skip the scan for negative edges.
    fn is_unsigned() -> bool;

    /// Arithmetic mean of the values. Integer types round toward zero.
    /// Returns zero if there are no values.
    ///
    /// The sum is accumulated in a wider type (`i128` or `f64`), so it does
    /// not overflow even if it exceeds the range of `Self`.
    fn mean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>;

    fn to_f64(&self) -> f64;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn mean<I>(values: I) -> Self
            where
                I: IntoIterator<Item = Self>,
            {
                let (sum, count) = values
                    .into_iter()
                    .fold((0i128, 0i128), |(sum, count), value| {
                        (sum + value as i128, count + 1)
                    });

                if count == 0 {
                    return 0;
                }

                // The mean lies between the smallest and the largest value.
                (sum / count) as $ty
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn mean<I>(values: I) -> Self
            where
                I: IntoIterator<Item = Self>,
            {
                let (sum, count) = values
                    .into_iter()
                    .fold((0f64, 0usize), |(sum, count), value| {
                        (sum + value as f64, count + 1)
                    });

                if count == 0 {
                    return Self::zero();
                }

                (sum / count as f64) as $ty
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
