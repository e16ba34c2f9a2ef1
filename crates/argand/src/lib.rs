//! Complex numbers with two interchangeable representations.
//!
//! A value is either rectangular `(re, im)` or polar `(mag, angle)`, and both
//! forms expose the same capability set: real/imaginary parts, modulus, phase,
//! conjugate, inverse, and conversion in either direction. Arithmetic keeps
//! track of representation: an operation on two polar values yields a polar
//! value, every other pairing yields a rectangular one.
//!
//! Polar values store their fields raw: the magnitude may be negative and the
//! angle unnormalized. `modulus()` and `phase()` derive the canonical
//! non-negative magnitude and `[-π, π]` angle on every call without touching
//! the stored fields, so values are immutable and freely shareable.
//!
//! # Example
//!
//! ```
//! use argand::{multiply, Complex};
//!
//! let z = Complex::rectangular(3.0_f64, 4.0);
//! assert!((z.modulus() - 5.0).abs() < 1e-12);
//!
//! // Polar * Polar stays polar; any mixed pairing goes rectangular.
//! let w = multiply(z, Complex::polar(2.0, 0.0));
//! assert!(w.approx_eq(&Complex::rectangular(6.0, 8.0)));
//! ```
//!
//! Variadic reduction accepts a mix of complex values and real scalars:
//!
//! ```
//! use argand::{sum, Complex, Operand};
//!
//! let total = sum(&[
//!     Operand::Complex(Complex::rectangular(1.0, 1.0)),
//!     Operand::Real(2.0),
//! ])
//! .unwrap();
//! assert!(total.approx_eq(&Complex::rectangular(3.0, 1.0)));
//! ```

use num_traits::Float;
use std::fmt;

mod funcs;
mod ops;


pub use funcs::{acos, asin, atan, cos, exp, log, nth_roots_of_unity, sin, sqrt, tan};
pub use ops::{add, divide, multiply, power, product, subtract, sum};

/// Componentwise tolerance used by [`Complex::approx_eq`].
pub const EQ_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Representation
// ============================================================================

/// Representation of a complex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Cartesian `(re, im)` components.
    Rectangular,
    /// Magnitude and angle `(mag, angle)`.
    Polar,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Rectangular => write!(f, "rectangular"),
            Representation::Polar => write!(f, "polar"),
        }
    }
}

// ============================================================================
// Complex values
// ============================================================================

/// A complex number in one of two representations, generic over numeric type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Complex<T> {
    /// Rectangular form `re + im*i`.
    Rectangular { re: T, im: T },
    /// Polar form `mag * e^(angle*i)`, stored raw: `mag` may be negative and
    /// `angle` may lie outside `[-π, π]`.
    Polar { mag: T, angle: T },
}

impl<T: Float> Complex<T> {
    /// Constructs a rectangular value from real and imaginary parts.
    pub fn rectangular(re: T, im: T) -> Self {
        Complex::Rectangular { re, im }
    }

    /// Constructs a polar value from magnitude and angle in radians.
    ///
    /// Both fields are stored as given; normalization happens in the
    /// [`modulus`](Complex::modulus) and [`phase`](Complex::phase) accessors.
    pub fn polar(mag: T, angle: T) -> Self {
        Complex::Polar { mag, angle }
    }

    /// Lifts a real scalar to a rectangular value with zero imaginary part.
    pub fn from_real(x: T) -> Self {
        Complex::Rectangular {
            re: x,
            im: T::zero(),
        }
    }

    /// The unit imaginary, `1 * e^(iπ/2)`.
    pub fn i() -> Self {
        Complex::Polar {
            mag: T::one(),
            angle: T::from(std::f64::consts::FRAC_PI_2).unwrap(),
        }
    }

    /// Returns which representation this value carries.
    pub fn representation(&self) -> Representation {
        match self {
            Complex::Rectangular { .. } => Representation::Rectangular,
            Complex::Polar { .. } => Representation::Polar,
        }
    }

    /// Real part.
    ///
    /// For polar values this is `mag * cos(angle)`, except that an angle whose
    /// sine is exactly `±1` forces the real part to `0`, removing
    /// floating-point leakage at quarter turns.
    pub fn real(&self) -> T {
        match self {
            Complex::Rectangular { re, .. } => *re,
            Complex::Polar { mag, angle } => {
                if angle.sin().abs() == T::one() {
                    T::zero()
                } else {
                    *mag * angle.cos()
                }
            }
        }
    }

    /// Imaginary part.
    ///
    /// Symmetric to [`real`](Complex::real): an angle whose cosine is exactly
    /// `±1` forces the imaginary part to `0`.
    pub fn imag(&self) -> T {
        match self {
            Complex::Rectangular { im, .. } => *im,
            Complex::Polar { mag, angle } => {
                if angle.cos().abs() == T::one() {
                    T::zero()
                } else {
                    *mag * angle.sin()
                }
            }
        }
    }

    /// Non-negative magnitude `|z|`.
    pub fn modulus(&self) -> T {
        match self {
            Complex::Rectangular { re, im } => (*re * *re + *im * *im).sqrt(),
            Complex::Polar { mag, .. } => mag.abs(),
        }
    }

    /// Phase angle in radians, normalized to `[-π, π]`.
    ///
    /// For rectangular values this is a quadrant-adjusted `atan(im/re)`, not
    /// `atan2`. The pure-imaginary axis (`re == 0`, `im != 0`) is handled only
    /// through IEEE division (`im/0 → ±∞`, `atan(±∞) = ±π/2`); this is a known
    /// edge case kept for compatibility.
    ///
    /// For polar values the stored fields are never modified: a negative
    /// magnitude rotates the effective angle by π, a zero magnitude pins the
    /// phase to `0`, and the result is shifted by multiples of 2π into range.
    /// Repeated calls always return the same value.
    pub fn phase(&self) -> T {
        let pi = T::from(std::f64::consts::PI).unwrap();
        match self {
            Complex::Rectangular { re, im } => {
                if *re < T::zero() {
                    if *im >= T::zero() {
                        (*im / *re).atan() + pi
                    } else {
                        (*im / *re).atan() - pi
                    }
                } else if *re == T::zero() && *im == T::zero() {
                    T::zero()
                } else {
                    (*im / *re).atan()
                }
            }
            Complex::Polar { mag, angle } => {
                if *mag == T::zero() {
                    return T::zero();
                }
                let mut theta = if *mag < T::zero() { *angle + pi } else { *angle };
                if !theta.is_finite() {
                    return theta;
                }
                let two_pi = pi + pi;
                while theta > pi {
                    theta = theta - two_pi;
                }
                while theta < -pi {
                    theta = theta + two_pi;
                }
                theta
            }
        }
    }

    /// Complex conjugate, in the same representation.
    ///
    /// Conjugation is structural: a polar value negates its stored angle as
    /// is, independent of normalization.
    pub fn conjugate(self) -> Self {
        match self {
            Complex::Rectangular { re, im } => Complex::Rectangular { re, im: -im },
            Complex::Polar { mag, angle } => Complex::Polar { mag, angle: -angle },
        }
    }

    /// Multiplicative inverse `1/z`, in the same representation.
    ///
    /// A zero-modulus value produces non-finite components rather than an
    /// error, matching IEEE float semantics.
    pub fn inverse(self) -> Self {
        match self {
            Complex::Rectangular { re, im } => {
                let m2 = re * re + im * im;
                Complex::Rectangular {
                    re: re / m2,
                    im: -im / m2,
                }
            }
            Complex::Polar { .. } => Complex::Polar {
                mag: T::one() / self.modulus(),
                angle: -self.phase(),
            },
        }
    }

    /// This value in rectangular form. A no-op for rectangular input.
    pub fn to_rectangular(self) -> Self {
        match self {
            Complex::Rectangular { .. } => self,
            Complex::Polar { .. } => Complex::Rectangular {
                re: self.real(),
                im: self.imag(),
            },
        }
    }

    /// This value in polar form. A no-op for polar input.
    pub fn to_polar(self) -> Self {
        match self {
            Complex::Rectangular { .. } => Complex::Polar {
                mag: self.modulus(),
                angle: self.phase(),
            },
            Complex::Polar { .. } => self,
        }
    }

    /// Tolerance-based equality across representations.
    ///
    /// Two values are equal when their real and imaginary parts each agree
    /// within [`EQ_TOLERANCE`], regardless of representation.
    pub fn approx_eq(&self, other: &Self) -> bool {
        let eps = T::from(EQ_TOLERANCE).unwrap();
        (self.real() - other.real()).abs() < eps && (self.imag() - other.imag()).abs() < eps
    }
}

impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    /// Renders `"<re>+<im>i"` (with `-` for a negative imaginary part) for
    /// rectangular values and `"<mag>e^<angle>i"` with the normalized
    /// modulus and phase for polar values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complex::Rectangular { re, im } => {
                if *im < T::zero() {
                    write!(f, "{}-{}i", re, -*im)
                } else {
                    write!(f, "{}+{}i", re, im)
                }
            }
            Complex::Polar { .. } => write!(f, "{}e^{}i", self.modulus(), self.phase()),
        }
    }
}

// ============================================================================
// Operands
// ============================================================================

/// Argument to a variadic reduction: a complex value or a real scalar.
///
/// Reals are lifted via [`Complex::from_real`] before reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    /// A complex value in either representation.
    Complex(Complex<T>),
    /// A real scalar.
    Real(T),
}

impl<T: Float> Operand<T> {
    /// The operand as a complex value.
    pub fn to_complex(&self) -> Complex<T> {
        match self {
            Operand::Complex(z) => *z,
            Operand::Real(x) => Complex::from_real(*x),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejected-input error.
///
/// Non-finite arithmetic results (division by a zero-modulus value, logarithm
/// of zero, and so on) are never errors; they propagate as NaN/∞ per IEEE
/// float rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A variadic reduction was called with an empty argument list.
    EmptyArguments,
    /// A root count of zero was requested.
    InvalidRootCount,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyArguments => write!(f, "at least one argument is required"),
            Error::InvalidRootCount => write!(f, "root count must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_close(a: f64, b: f64, context: &str) {
        assert!(
            (a - b).abs() < 1e-9,
            "{}: values differ: {} vs {}",
            context,
            a,
            b
        );
    }

    #[test]
    fn test_rectangular_accessors() {
        let z = Complex::rectangular(3.0, 4.0);
        assert_eq!(z.real(), 3.0);
        assert_eq!(z.imag(), 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(z.representation(), Representation::Rectangular);
    }

    #[test]
    fn test_rectangular_phase_quadrants() {
        assert_close(Complex::rectangular(1.0, 1.0).phase(), FRAC_PI_4, "Q1");
        assert_close(
            Complex::rectangular(-1.0, 1.0).phase(),
            3.0 * FRAC_PI_4,
            "Q2",
        );
        assert_close(
            Complex::rectangular(-1.0, -1.0).phase(),
            -3.0 * FRAC_PI_4,
            "Q3",
        );
        assert_close(Complex::rectangular(1.0, -1.0).phase(), -FRAC_PI_4, "Q4");
        assert_eq!(Complex::rectangular(0.0, 0.0).phase(), 0.0);
    }

    #[test]
    fn test_rectangular_phase_imaginary_axis() {
        // Not atan2: the pure-imaginary axis goes through im/0 -> ±inf.
        assert_close(Complex::rectangular(0.0, 2.0).phase(), FRAC_PI_2, "+i axis");
        assert_close(
            Complex::rectangular(0.0, -2.0).phase(),
            -FRAC_PI_2,
            "-i axis",
        );
    }

    #[test]
    fn test_polar_accessors() {
        let z = Complex::polar(2.0, FRAC_PI_4);
        assert_close(z.real(), 2.0 * FRAC_PI_4.cos(), "real");
        assert_close(z.imag(), 2.0 * FRAC_PI_4.sin(), "imag");
        assert_eq!(z.modulus(), 2.0);
        assert_eq!(z.representation(), Representation::Polar);
    }

    #[test]
    fn test_polar_quarter_turn_components_are_exact() {
        // sin(pi/2) == 1 exactly, so the real part is forced to zero.
        let i = Complex::polar(1.0, FRAC_PI_2);
        assert_eq!(i.real(), 0.0);
        assert_eq!(i.imag(), 1.0);

        // cos(0) == 1 exactly, so the imaginary part is forced to zero.
        let one = Complex::polar(1.0, 0.0);
        assert_eq!(one.real(), 1.0);
        assert_eq!(one.imag(), 0.0);
    }

    #[test]
    fn test_polar_phase_normalization() {
        let z = Complex::polar(1.0, 5.0 * FRAC_PI_2);
        assert_close(z.phase(), FRAC_PI_2, "wrap down");

        let w = Complex::polar(1.0, -3.0 * PI + 0.25);
        assert_close(w.phase(), -PI + 0.25, "wrap up");
    }

    #[test]
    fn test_polar_phase_negative_magnitude() {
        let z = Complex::polar(-1.0, 0.0);
        assert_close(z.phase(), PI, "negative magnitude rotates by pi");
        assert_eq!(z.modulus(), 1.0);
        assert!(z.approx_eq(&Complex::rectangular(-1.0, 0.0)));
    }

    #[test]
    fn test_polar_phase_zero_magnitude() {
        assert_eq!(Complex::polar(0.0, 1.234).phase(), 0.0);
    }

    #[test]
    fn test_polar_phase_is_pure() {
        let z = Complex::polar(-2.0, 7.0 * PI);
        let first = z.phase();
        let second = z.phase();
        assert_eq!(first, second);
        // Stored fields are untouched by the derived accessor.
        assert_eq!(z, Complex::polar(-2.0, 7.0 * PI));
    }

    #[test]
    fn test_conjugate_involution() {
        let z = Complex::rectangular(1.5, -2.5);
        assert_eq!(z.conjugate().conjugate(), z);

        let p = Complex::polar(2.0, 0.7);
        assert_eq!(p.conjugate().conjugate(), p);
        assert_close(p.conjugate().imag(), -p.imag(), "conjugate negates imag");
    }

    #[test]
    fn test_conjugate_is_structural() {
        // The raw stored angle is negated, untouched by normalization.
        let p = Complex::polar(1.0, 3.0 * PI);
        assert_eq!(p.conjugate(), Complex::polar(1.0, -3.0 * PI));
    }

    #[test]
    fn test_inverse() {
        let z = Complex::rectangular(3.0, 4.0);
        let inv = z.inverse();
        assert_close(inv.real(), 3.0 / 25.0, "inverse real");
        assert_close(inv.imag(), -4.0 / 25.0, "inverse imag");

        let p = Complex::polar(2.0, 0.5);
        let pinv = p.inverse();
        assert_eq!(pinv.representation(), Representation::Polar);
        assert_close(pinv.modulus(), 0.5, "inverse modulus");
        assert_close(pinv.phase(), -0.5, "inverse phase");
    }

    #[test]
    fn test_inverse_of_zero_is_non_finite() {
        let inv = Complex::rectangular(0.0, 0.0).inverse();
        assert!(!inv.real().is_finite());
    }

    #[test]
    fn test_round_trip_rectangular() {
        for &(re, im) in &[(3.0, 4.0), (-3.0, -4.0), (-1.0, 2.0), (0.5, -0.5)] {
            let z = Complex::rectangular(re, im);
            assert!(
                z.to_polar().to_rectangular().approx_eq(&z),
                "round trip failed for ({}, {})",
                re,
                im
            );
        }
    }

    #[test]
    fn test_round_trip_polar() {
        let p = Complex::polar(2.0, 1.0);
        let back = p.to_rectangular().to_polar();
        assert_close(back.modulus(), 2.0, "modulus");
        assert_close(back.phase(), 1.0, "phase");
    }

    #[test]
    fn test_quarter_turn_to_rectangular() {
        let i = Complex::polar(1.0, FRAC_PI_2).to_rectangular();
        assert!(i.approx_eq(&Complex::rectangular(0.0, 1.0)));
    }

    #[test]
    fn test_approx_eq_across_representations() {
        let a = Complex::polar(E, 0.0);
        let b = Complex::rectangular(E, 0.0);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&Complex::rectangular(E + 1e-3, 0.0)));
    }

    #[test]
    fn test_display_rectangular() {
        assert_eq!(Complex::rectangular(1.5, 2.5).to_string(), "1.5+2.5i");
        assert_eq!(Complex::rectangular(1.5, -2.5).to_string(), "1.5-2.5i");
    }

    #[test]
    fn test_display_polar_uses_normalized_fields() {
        assert_eq!(Complex::polar(2.0, 0.5).to_string(), "2e^0.5i");
        // Negative magnitude renders through modulus()/phase().
        let z = Complex::polar(-2.0, 0.0);
        assert_eq!(z.to_string(), format!("2e^{}i", std::f64::consts::PI));
    }

    #[test]
    fn test_operand_lifting() {
        assert_eq!(
            Operand::Real(2.5).to_complex(),
            Complex::rectangular(2.5, 0.0)
        );
        let z = Complex::polar(1.0, 0.3);
        assert_eq!(Operand::Complex(z).to_complex(), z);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::EmptyArguments.to_string(),
            "at least one argument is required"
        );
        assert_eq!(
            Error::InvalidRootCount.to_string(),
            "root count must be at least 1"
        );
    }
}
