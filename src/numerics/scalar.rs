// src/numerics/scalar.rs
// Scalar helpers: approximate comparison, interpolation, wrapping and the
// assorted editor/container utilities the vector types build on.

use tracing::warn;

use crate::error::{NumericsError, Result};
use crate::numerics::types::traits::FloatingPoint;

/// Hash-table growth sizes, ascending.
const PRIME_TABLE: [u32; 29] = [
    5, 13, 23, 47, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613,
    393241, 786433, 1572869, 3145739, 6291469, 12582917, 25165843, 50331653, 100663319,
    201326611, 402653189, 805306457, 1610612741,
];

/// Thresholds for `step_decimals`; slightly below each power of ten to absorb
/// representation error in values like `0.1`.
const STEP_DECIMAL_THRESHOLDS: [f64; 10] = [
    0.9999,
    0.09999,
    0.009999,
    0.0009999,
    0.00009999,
    0.000009999,
    0.0000009999,
    0.00000009999,
    0.000000009999,
    0.0000000009999,
];

const LINEAR_TO_DB: f64 = 8.685_889_638_065_036_553_022_578_378_332_1;
const DB_TO_LINEAR: f64 = 0.115_129_254_649_702_284_200_899_572_734_22;

/// Approximate equality with a tolerance that scales with `a`.
///
/// Exactly equal values (infinities included) compare equal before any
/// subtraction happens, so `inf - inf = NaN` never reaches the comparison.
pub fn is_equal_approx<T: FloatingPoint>(a: T, b: T) -> bool {
    if a == b {
        return true;
    }
    let tolerance = (T::CMP_EPSILON * a.abs()).max(T::CMP_EPSILON);
    (a - b).abs() < tolerance
}

pub fn is_equal_approx_tolerance<T: FloatingPoint>(a: T, b: T, tolerance: T) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < tolerance
}

pub fn is_zero_approx<T: FloatingPoint>(value: T) -> bool {
    value.abs() < T::CMP_EPSILON
}

/// Scale-invariant comparison using the default epsilons.
pub fn is_equal_approx_ratio<T: FloatingPoint>(a: T, b: T) -> bool {
    is_equal_approx_ratio_min(a, b, T::CMP_EPSILON, T::CMP_EPSILON)
}

pub fn is_equal_approx_ratio_eps<T: FloatingPoint>(a: T, b: T, epsilon: T) -> bool {
    is_equal_approx_ratio_min(a, b, epsilon, T::CMP_EPSILON)
}

/// Compares `|a - b|` relative to the mean magnitude of `a` and `b`.
///
/// Differences below `min_epsilon` are accepted outright, which also keeps
/// the division away from a near-zero average.
pub fn is_equal_approx_ratio_min<T: FloatingPoint>(a: T, b: T, epsilon: T, min_epsilon: T) -> bool {
    let diff = (a - b).abs();
    if diff == T::zero() || diff < min_epsilon {
        return true;
    }
    let avg_size = (a.abs() + b.abs()) / T::from_f64(2.0);
    diff / avg_size < epsilon
}

/// Linear interpolation, exact at `weight == 0` and `weight == 1`.
pub fn lerp<T: FloatingPoint>(from: T, to: T, weight: T) -> T {
    from * (T::one() - weight) + to * weight
}

/// Interpolates along the shortest arc between two angles in radians.
pub fn lerp_angle<T: FloatingPoint>(from: T, to: T, weight: T) -> T {
    let difference = (to - from) % T::TAU;
    let distance = (T::from_f64(2.0) * difference) % T::TAU - difference;
    from + distance * weight
}

pub fn inverse_lerp<T: FloatingPoint>(from: T, to: T, value: T) -> T {
    (value - from) / (to - from)
}

/// Remaps `value` from `[istart, istop]` onto `[ostart, ostop]`.
pub fn range_lerp<T: FloatingPoint>(value: T, istart: T, istop: T, ostart: T, ostop: T) -> T {
    lerp(ostart, ostop, inverse_lerp(istart, istop, value))
}

pub fn smoothstep<T: FloatingPoint>(from: T, to: T, s: T) -> T {
    if is_equal_approx(from, to) {
        return from;
    }
    let s = ((s - from) / (to - from)).clamp(T::zero(), T::one());
    s * s * (T::from_f64(3.0) - T::from_f64(2.0) * s)
}

pub fn move_toward<T: FloatingPoint>(from: T, to: T, delta: T) -> T {
    if (to - from).abs() <= delta {
        to
    } else {
        from + (to - from).sgn() * delta
    }
}

/// Wraps `value` into `[min, max)`. A zero-width range returns `min`.
pub fn wrapi(value: i64, min: i64, max: i64) -> i64 {
    // Widened so that ranges spanning most of i64 cannot overflow.
    let (value, min_wide) = (i128::from(value), i128::from(min));
    let range = i128::from(max) - min_wide;
    if range == 0 {
        return min;
    }
    (min_wide + ((value - min_wide) % range + range) % range) as i64
}

/// Floating-point counterpart of [`wrapi`]; near-zero ranges return `min`.
pub fn wrapf<T: FloatingPoint>(value: T, min: T, max: T) -> T {
    let range = max - min;
    if is_zero_approx(range) {
        return min;
    }
    value - range * ((value - min) / range).floor()
}

/// Floating-point modulo whose result takes the sign of `y`.
pub fn fposmod<T: FloatingPoint>(x: T, y: T) -> T {
    let mut value = x % y;
    if (value < T::zero() && y > T::zero()) || (value > T::zero() && y < T::zero()) {
        value += y;
    }
    // Normalizes -0.0 to +0.0.
    value + T::zero()
}

pub fn posmod(x: i64, y: i64) -> i64 {
    let mut value = x % y;
    if (value < 0 && y > 0) || (value > 0 && y < 0) {
        value += y;
    }
    value
}

/// Rounds `value` to the nearest multiple of `step`; a zero step is a no-op.
pub fn stepify<T: FloatingPoint>(value: T, step: T) -> T {
    if step != T::zero() {
        (value / step + T::from_f64(0.5)).floor() * step
    } else {
        value
    }
}

pub fn snap_scalar<T: FloatingPoint>(offset: T, step: T, target: T) -> T {
    if step != T::zero() {
        stepify(target - offset, step) + offset
    } else {
        target
    }
}

/// Snaps to a grid of cells `step` wide separated by `separation` gaps.
pub fn snap_scalar_separation<T: FloatingPoint>(offset: T, step: T, target: T, separation: T) -> T {
    if step == T::zero() {
        return target;
    }
    let a = stepify(target - offset, step + separation) + offset;
    let mut b = a;
    if target >= T::zero() {
        b -= separation;
    } else {
        b += step;
    }
    if (target - a).abs() < (target - b).abs() {
        a
    } else {
        b
    }
}

/// Unnormalized sinc, `sin(x) / x` with `sinc(0) = 1`.
pub fn sinc<T: FloatingPoint>(x: T) -> T {
    if x == T::zero() {
        T::one()
    } else {
        x.sin() / x
    }
}

pub fn sincn<T: FloatingPoint>(x: T) -> T {
    sinc(T::PI * x)
}

pub fn deg2rad<T: FloatingPoint>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

pub fn rad2deg<T: FloatingPoint>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

pub fn linear2db<T: FloatingPoint>(linear: T) -> T {
    linear.ln() * T::from_f64(LINEAR_TO_DB)
}

pub fn db2linear<T: FloatingPoint>(db: T) -> T {
    (db * T::from_f64(DB_TO_LINEAR)).exp()
}

/// Easing curve over `x` clamped to `[0, 1]`.
///
/// * `curve > 1`: ease in, `x^curve`
/// * `0 < curve < 1`: ease out
/// * `curve < 0`: in/out blend pivoting at `x = 0.5`
/// * `curve == 0`: returns `0`
pub fn ease(x: f64, curve: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    if curve > 0.0 {
        if curve < 1.0 {
            1.0 - (1.0 - x).powf(1.0 / curve)
        } else {
            x.powf(curve)
        }
    } else if curve < 0.0 {
        if x < 0.5 {
            (x * 2.0).powf(-curve) * 0.5
        } else {
            (1.0 - (1.0 - (x - 0.5) * 2.0).powf(-curve)) * 0.5 + 0.5
        }
    } else {
        0.0
    }
}

/// Number of decimal digits needed to show the fractional part of `step`.
pub fn step_decimals(step: f64) -> usize {
    let abs = step.abs();
    let decimals = abs - abs.trunc();
    STEP_DECIMAL_THRESHOLDS
        .iter()
        .position(|&threshold| decimals >= threshold)
        .unwrap_or(0)
}

/// Like [`step_decimals`], but a (near) zero step means "unlimited" and
/// yields 16 digits.
pub fn range_step_decimals(step: f64) -> usize {
    if step < 0.000_000_000_000_1 {
        return 16;
    }
    step_decimals(step)
}

/// Shrinks `value` toward zero by `amount * step`, never crossing zero.
pub fn dectime(value: f64, amount: f64, step: f64) -> f64 {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let magnitude = (value.abs() - amount * step).max(0.0);
    magnitude * sign
}

/// Smallest prime from the growth table strictly larger than `value`.
pub fn larger_prime(value: u32) -> Result<u32> {
    match PRIME_TABLE.iter().find(|&&prime| prime > value) {
        Some(&prime) => Ok(prime),
        None => {
            warn!(value, "prime growth table exhausted");
            Err(NumericsError::PrimeTableExhausted { value })
        }
    }
}

/// Rounds to the nearest integer, ties to even.
pub fn fast_ftoi(value: f32) -> i32 {
    value.round_ties_even() as i32
}
