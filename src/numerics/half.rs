// src/numerics/half.rs
// IEEE-754 binary16 <-> binary32 conversion.
//
// Layout: sign:1 | exponent:5 | mantissa:10.

const HALF_SIGN_MASK: u16 = 0x8000;
const HALF_EXPONENT_MASK: u16 = 0x7c00;
const HALF_MANTISSA_MASK: u16 = 0x03ff;

const FLOAT_EXPONENT_MASK: u32 = 0xff << 23;
const FLOAT_MANTISSA_MASK: u32 = (1 << 23) - 1;

/// Biased float exponent of the first value too large for a half (2^16).
const FLOAT_HALF_OVERFLOW: u32 = 0x4780_0000;
/// Biased float exponent of 2^-15, the largest power of two below the
/// smallest normal half.
const FLOAT_HALF_UNDERFLOW: u32 = 0x3800_0000;
/// Biased float exponent of 2^-24, the smallest subnormal half.
const FLOAT_HALF_SUBNORMAL_MIN: u32 = 0x3380_0000;

/// Expands half-precision bits to the bits of the equal `f32`.
///
/// Every half value, subnormals included, is exactly representable as an
/// `f32`, so this never rounds.
pub fn half_to_float_bits(half: u16) -> u32 {
    let sign = u32::from(half & HALF_SIGN_MASK) << 16;
    let exponent = half & HALF_EXPONENT_MASK;
    let mantissa = half & HALF_MANTISSA_MASK;

    match exponent {
        0 => {
            if mantissa == 0 {
                return sign;
            }
            // Subnormal: shift the mantissa up until the implicit bit shows.
            let mut mantissa = mantissa << 1;
            let mut shift: u32 = 0;
            while mantissa & 0x0400 == 0 {
                mantissa <<= 1;
                shift += 1;
            }
            let float_exponent = (127 - 15 - shift) << 23;
            let float_mantissa = u32::from(mantissa & HALF_MANTISSA_MASK) << 13;
            sign | float_exponent | float_mantissa
        }
        HALF_EXPONENT_MASK => sign | 0x7f80_0000 | (u32::from(mantissa) << 13),
        _ => sign | ((u32::from(half & 0x7fff) + 0x1_c000) << 13),
    }
}

pub fn half_to_float(half: u16) -> f32 {
    f32::from_bits(half_to_float_bits(half))
}

/// Packs an `f32` into half-precision bits.
///
/// The mantissa is truncated. Values too large become infinity of the same
/// sign and NaN stays NaN. Magnitudes below the smallest normal half encode
/// as half subnormals; below 2^-24 they flush to a zero that keeps the sign.
pub fn make_half_float(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 31) as u16) << 15;
    let mut mantissa = bits & FLOAT_MANTISSA_MASK;
    let exponent = bits & FLOAT_EXPONENT_MASK;

    if exponent >= FLOAT_HALF_OVERFLOW {
        mantissa = if mantissa != 0 && exponent == FLOAT_EXPONENT_MASK {
            FLOAT_MANTISSA_MASK
        } else {
            0
        };
        sign | HALF_EXPONENT_MASK | (mantissa >> 13) as u16
    } else if exponent < FLOAT_HALF_SUBNORMAL_MIN {
        sign
    } else if exponent <= FLOAT_HALF_UNDERFLOW {
        // Subnormal half: restore the implicit bit and shift it into place.
        let shift = 126 - (exponent >> 23);
        sign | ((mantissa | 0x0080_0000) >> shift) as u16
    } else {
        sign | ((exponent - FLOAT_HALF_UNDERFLOW) >> 13) as u16 | (mantissa >> 13) as u16
    }
}
