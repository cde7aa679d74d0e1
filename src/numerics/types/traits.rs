// src/numerics/types/traits.rs
// FloatingPoint: the scalar abstraction the vector, quaternion and basis
// types are written against.

use core::fmt::Debug;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

/// FloatingPoint is implemented for `f32` and `f64`.
///
/// Besides the arithmetic operators it carries the comparison tolerances used
/// throughout the kernel and the handful of libm functions the geometry
/// needs, so generic code never has to name a concrete float type.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// General approximate-equality tolerance.
    const CMP_EPSILON: Self;
    /// Tolerance for "is this unit length" checks.
    const UNIT_EPSILON: Self;
    const PI: Self;
    const TAU: Self;

    fn zero() -> Self;
    fn one() -> Self;

    /// Lossy conversion used for literal constants in generic code.
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, x: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;

    /// `-1` for negative values, `+1` otherwise (zero included).
    fn sgn(self) -> Self {
        if self < Self::zero() {
            -Self::one()
        } else {
            Self::one()
        }
    }

    fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    fn clamp(self, low: Self, high: Self) -> Self {
        if self < low {
            low
        } else if self > high {
            high
        } else {
            self
        }
    }
}

macro_rules! impl_floating_point {
    ($t:ident) => {
        impl FloatingPoint for $t {
            const CMP_EPSILON: Self = 0.00001;
            const UNIT_EPSILON: Self = 0.001;
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;

            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }

            fn from_f64(value: f64) -> Self { value as $t }
            fn to_f64(self) -> f64 { self as f64 }

            fn abs(self) -> Self { $t::abs(self) }
            fn sqrt(self) -> Self { $t::sqrt(self) }
            fn sin(self) -> Self { $t::sin(self) }
            fn cos(self) -> Self { $t::cos(self) }
            fn tan(self) -> Self { $t::tan(self) }
            fn asin(self) -> Self { $t::asin(self) }
            fn acos(self) -> Self { $t::acos(self) }
            fn atan(self) -> Self { $t::atan(self) }
            fn atan2(self, x: Self) -> Self { $t::atan2(self, x) }
            fn sinh(self) -> Self { $t::sinh(self) }
            fn cosh(self) -> Self { $t::cosh(self) }
            fn tanh(self) -> Self { $t::tanh(self) }
            fn floor(self) -> Self { $t::floor(self) }
            fn ceil(self) -> Self { $t::ceil(self) }
            fn round(self) -> Self { $t::round(self) }
            fn powf(self, exponent: Self) -> Self { $t::powf(self, exponent) }
            fn exp(self) -> Self { $t::exp(self) }
            fn ln(self) -> Self { $t::ln(self) }
            fn is_nan(self) -> bool { $t::is_nan(self) }
            fn is_infinite(self) -> bool { $t::is_infinite(self) }
            fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
