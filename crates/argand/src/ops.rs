//! Binary, variadic, and operator-trait arithmetic for complex values.
//!
//! Every binary operation follows one representation rule: if both operands
//! are polar the result is polar, otherwise it is rectangular.

use crate::{Complex, Error, Operand, Representation};
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// Binary operations
// ============================================================================

/// Adds two complex values componentwise.
pub fn add<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let sum = Complex::rectangular(a.real() + b.real(), a.imag() + b.imag());
    match (a.representation(), b.representation()) {
        (Representation::Polar, Representation::Polar) => sum.to_polar(),
        _ => sum,
    }
}

/// Subtracts `b` from `a` componentwise.
pub fn subtract<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let diff = Complex::rectangular(a.real() - b.real(), a.imag() - b.imag());
    match (a.representation(), b.representation()) {
        (Representation::Polar, Representation::Polar) => diff.to_polar(),
        _ => diff,
    }
}

/// Multiplies two complex values.
///
/// Two polar operands multiply directly as `(|a|*|b|, arg a + arg b)`,
/// avoiding the trig round trip; any other pairing uses the rectangular
/// cross terms `(ac - bd, ad + bc)`.
pub fn multiply<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    match (a.representation(), b.representation()) {
        (Representation::Polar, Representation::Polar) => {
            Complex::polar(a.modulus() * b.modulus(), a.phase() + b.phase())
        }
        _ => Complex::rectangular(
            a.real() * b.real() - a.imag() * b.imag(),
            a.real() * b.imag() + a.imag() * b.real(),
        ),
    }
}

/// Divides `a` by `b`.
///
/// Division always reduces through polar form, `(|a|/|b|, arg a - arg b)`.
/// A zero-modulus divisor yields non-finite components per IEEE float rules
/// rather than an error.
pub fn divide<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let quotient = Complex::polar(a.modulus() / b.modulus(), a.phase() - b.phase());
    match (a.representation(), b.representation()) {
        (Representation::Polar, Representation::Polar) => quotient,
        _ => quotient.to_rectangular(),
    }
}

/// Raises `a` to the complex power `b` via the exponential identity:
///
/// ```text
/// a^b = |a|^re(b) * e^(-im(b) * arg a)  ∠  im(b) * ln|a| + re(b) * arg a
/// ```
///
/// A zero-modulus base yields NaN components (from `0 * ln 0`); this is
/// deliberate IEEE pass-through, not special-cased away.
pub fn power<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let mag = a.modulus().powf(b.real()) * (-b.imag() * a.phase()).exp();
    let angle = b.imag() * a.modulus().ln() + b.real() * a.phase();
    let result = Complex::polar(mag, angle);
    match (a.representation(), b.representation()) {
        (Representation::Polar, Representation::Polar) => result,
        _ => result.to_rectangular(),
    }
}

// ============================================================================
// Variadic reductions
// ============================================================================

/// Sums any number of complex and real operands, left to right, starting from
/// the additive identity `0 ∠ 0`.
///
/// Because the identity is polar, an all-polar argument list reduces to a
/// polar result. Returns [`Error::EmptyArguments`] for an empty slice.
pub fn sum<T: Float>(operands: &[Operand<T>]) -> Result<Complex<T>, Error> {
    if operands.is_empty() {
        return Err(Error::EmptyArguments);
    }
    let mut acc = Complex::polar(T::zero(), T::zero());
    for operand in operands {
        acc = add(acc, operand.to_complex());
    }
    Ok(acc)
}

/// Multiplies any number of complex and real operands, left to right, starting
/// from the multiplicative identity `1 ∠ 0`.
///
/// Returns [`Error::EmptyArguments`] for an empty slice.
pub fn product<T: Float>(operands: &[Operand<T>]) -> Result<Complex<T>, Error> {
    if operands.is_empty() {
        return Err(Error::EmptyArguments);
    }
    let mut acc = Complex::polar(T::one(), T::zero());
    for operand in operands {
        acc = multiply(acc, operand.to_complex());
    }
    Ok(acc)
}

// ============================================================================
// Operator traits
// ============================================================================

impl<T: Float> Add for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: Complex<T>) -> Complex<T> {
        add(self, rhs)
    }
}

impl<T: Float> Add<T> for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: T) -> Complex<T> {
        add(self, Complex::from_real(rhs))
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: Complex<T>) -> Complex<T> {
        subtract(self, rhs)
    }
}

impl<T: Float> Sub<T> for Complex<T> {
    type Output = Complex<T>;

    fn sub(self, rhs: T) -> Complex<T> {
        subtract(self, Complex::from_real(rhs))
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: Complex<T>) -> Complex<T> {
        multiply(self, rhs)
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Complex<T>;

    fn mul(self, rhs: T) -> Complex<T> {
        multiply(self, Complex::from_real(rhs))
    }
}

impl<T: Float> Div for Complex<T> {
    type Output = Complex<T>;

    fn div(self, rhs: Complex<T>) -> Complex<T> {
        divide(self, rhs)
    }
}

impl<T: Float> Div<T> for Complex<T> {
    type Output = Complex<T>;

    fn div(self, rhs: T) -> Complex<T> {
        divide(self, Complex::from_real(rhs))
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Complex<T>;

    /// Representation-preserving negation: rectangular values negate both
    /// components, polar values rotate the raw angle by π.
    fn neg(self) -> Complex<T> {
        match self {
            Complex::Rectangular { re, im } => Complex::Rectangular { re: -re, im: -im },
            Complex::Polar { mag, angle } => Complex::Polar {
                mag,
                angle: angle + T::from(std::f64::consts::PI).unwrap(),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
