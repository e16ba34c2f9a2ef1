//! Elementary functions on the complex plane: exp, log, sqrt, trig and
//! inverse trig, and roots of unity.
//!
//! Everything here is built from [`power`]/[`log`] and the unit imaginary
//! [`Complex::i()`], so the non-finite edge cases (zero-modulus logarithms
//! and bases) flow through unchanged.

use crate::ops::{add, divide, multiply, power, subtract};
use crate::{Complex, Error, Representation};
use num_traits::Float;

/// Complex exponential, `e^z`.
pub fn exp<T: Float>(z: Complex<T>) -> Complex<T> {
    let e = Complex::from_real(T::from(std::f64::consts::E).unwrap());
    power(e, z)
}

/// Sine: `sin(z) = (e^(iz) - e^(-iz)) / 2i`.
pub fn sin<T: Float>(z: Complex<T>) -> Complex<T> {
    let i = Complex::i();
    let two = Complex::from_real(T::from(2.0).unwrap());
    let pos = exp(multiply(i, z));
    let neg = exp(multiply(-i, z));

    divide(subtract(pos, neg), multiply(two, i))
}

/// Cosine: `cos(z) = (e^(iz) + e^(-iz)) / 2`.
pub fn cos<T: Float>(z: Complex<T>) -> Complex<T> {
    let i = Complex::i();
    let two = Complex::from_real(T::from(2.0).unwrap());
    let pos = exp(multiply(i, z));
    let neg = exp(multiply(-i, z));

    divide(add(pos, neg), two)
}

/// Tangent: `tan(z) = sin(z) / cos(z)`.
///
/// Where `cos(z)` has zero modulus the result is non-finite, never an error.
pub fn tan<T: Float>(z: Complex<T>) -> Complex<T> {
    divide(sin(z), cos(z))
}

/// Principal natural logarithm: `log(z) = ln|z| + i*arg(z)`.
///
/// The result mirrors the input representation; a zero-modulus argument
/// yields a non-finite real part (`ln 0 → -∞`).
pub fn log<T: Float>(z: Complex<T>) -> Complex<T> {
    let principal = Complex::rectangular(z.modulus().ln(), z.phase());
    match z.representation() {
        Representation::Polar => principal.to_polar(),
        Representation::Rectangular => principal,
    }
}

/// Principal square root, `z^0.5` via [`power`].
pub fn sqrt<T: Float>(z: Complex<T>) -> Complex<T> {
    power(z, Complex::from_real(T::from(0.5).unwrap()))
}

/// Arcsine: `asin(z) = -i * ln(iz + sqrt(1 - z^2))`.
pub fn asin<T: Float>(z: Complex<T>) -> Complex<T> {
    let i = Complex::i();
    let one = Complex::from_real(T::one());
    let two = Complex::from_real(T::from(2.0).unwrap());
    let root = sqrt(subtract(one, power(z, two)));

    multiply(-i, log(add(multiply(i, z), root)))
}

/// Arccosine: `acos(z) = -i * ln(z + i*sqrt(1 - z^2))`.
pub fn acos<T: Float>(z: Complex<T>) -> Complex<T> {
    let i = Complex::i();
    let one = Complex::from_real(T::one());
    let two = Complex::from_real(T::from(2.0).unwrap());
    let root = sqrt(subtract(one, power(z, two)));

    multiply(-i, log(add(z, multiply(i, root))))
}

/// Arctangent: `atan(z) = ln((1 + iz) / (1 - iz)) / 2i`.
pub fn atan<T: Float>(z: Complex<T>) -> Complex<T> {
    let i = Complex::i();
    let one = Complex::from_real(T::one());
    let two = Complex::from_real(T::from(2.0).unwrap());
    let num = add(one, multiply(i, z));
    let den = subtract(one, multiply(i, z));

    divide(log(divide(num, den)), multiply(i, two))
}

/// The `n` complex n-th roots of unity, as rectangular values on the unit
/// circle at angles `2πk/n` for `k` in `0..n`, in that order.
///
/// Returns [`Error::InvalidRootCount`] when `n` is zero.
pub fn nth_roots_of_unity<T: Float>(n: u32) -> Result<Vec<Complex<T>>, Error> {
    if n == 0 {
        return Err(Error::InvalidRootCount);
    }
    let two_pi = T::from(2.0 * std::f64::consts::PI).unwrap();
    let n_t = T::from(n).unwrap();

    Ok((0..n)
        .map(|k| {
            let angle = two_pi * T::from(k).unwrap() / n_t;
            Complex::polar(T::one(), angle).to_rectangular()
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
