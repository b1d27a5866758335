//! Float helpers that work with and without `std`.

use num_traits::Float;

#[inline]
pub(crate) fn round(x: f64) -> f64 {
    Float::round(x)
}

#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    Float::ceil(x)
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    Float::abs(x)
}
