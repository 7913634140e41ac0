//! Dense polynomial algebra over the Goldilocks field.

use std::collections::BTreeMap;
use std::fmt;

use ark_poly::DenseUVPolynomial;
use ark_poly::univariate::DensePolynomial;
use serde::{Deserialize, Serialize};

use crate::goldilocks::{Fp, Goldilocks};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Polynomial with Goldilocks coefficients.
///
/// The coefficient at index `i` belongs to `x^i`, so `[1, 2, 3]` represents
/// `3x^2 + 2x + 1`.
///
/// # Invariants
///
/// * Constructors never trim: length is part of the value and `==` compares
///   lengths before coefficients.
/// * Arithmetic pads the shorter operand with zeros instead of truncating.
pub struct Polynomial {
    /// Coefficients in ascending order of power.
    pub coefficients: Vec<Goldilocks>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients, keeping trailing zeros.
    pub fn new(coefficients: Vec<Goldilocks>) -> Self {
        Self { coefficients }
    }

    /// The zero polynomial in its empty representation.
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    pub fn constant(c: Goldilocks) -> Self {
        Self::new(vec![c])
    }

    /// Builds a polynomial from slots that may be absent.
    ///
    /// An absent slot is the additive identity.
    pub fn from_slots(slots: Vec<Option<Goldilocks>>) -> Self {
        Self::new(
            slots
                .into_iter()
                .map(|slot| slot.unwrap_or_else(Goldilocks::zero))
                .collect(),
        )
    }

    /// Builds a polynomial from `power -> coefficient` pairs.
    ///
    /// The result has `max_power + 1` coefficients; powers not named are zero.
    pub fn from_sparse(terms: &BTreeMap<usize, Goldilocks>) -> Self {
        let Some((&max_power, _)) = terms.last_key_value() else {
            return Self::zero();
        };

        let mut slots = vec![None; max_power + 1];
        for (&power, &coeff) in terms {
            slots[power] = Some(coeff);
        }
        Self::from_slots(slots)
    }

    /// Builds the monic polynomial `(x - xs[0]) * ... * (x - xs[k-1])`.
    ///
    /// The result always has `xs.len() + 1` coefficients.
    pub fn zero_at_given_x(xs: &[Goldilocks]) -> Self {
        let mut root = Vec::with_capacity(xs.len() + 1);
        root.push(Goldilocks::one());

        for &x in xs {
            root.insert(0, Goldilocks::zero());
            for j in 0..root.len() - 1 {
                let next = root[j + 1];
                root[j] -= next * x;
            }
        }

        Self::new(root)
    }

    /// Lagrange interpolation through `(xs[i], ys[i])`.
    ///
    /// The result has `xs.len()` coefficients. Returns `None` when the
    /// lengths differ or `xs` contains duplicates.
    pub fn interpolate(xs: &[Goldilocks], ys: &[Goldilocks]) -> Option<Self> {
        let root = Self::zero_at_given_x(xs);
        if root.len() != ys.len() + 1 {
            return None;
        }

        let numerators = xs
            .iter()
            .map(|&x| root.divide(&Self::new(vec![-x, Goldilocks::one()])))
            .collect::<Option<Vec<_>>>()?;

        let denominators: Vec<Goldilocks> = numerators
            .iter()
            .zip(xs)
            .map(|(numerator, &x)| numerator.evaluate(x))
            .collect();
        // a repeated point zeroes its own denominator
        if denominators.iter().any(Goldilocks::is_zero) {
            return None;
        }
        let inv_denominators = Goldilocks::batch_inverse(&denominators);

        let mut result = vec![Goldilocks::zero(); ys.len()];
        for ((numerator, &y), &inv) in numerators.iter().zip(ys).zip(&inv_denominators) {
            let scale = y * inv;
            for (acc, &coeff) in result.iter_mut().zip(&numerator.coefficients) {
                *acc += coeff * scale;
            }
        }

        Some(Self::new(result))
    }

    /// Number of coefficient slots, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficient of `x^i`, `None` past the end.
    pub fn coefficient(&self, i: usize) -> Option<Goldilocks> {
        self.coefficients.get(i).copied()
    }

    pub fn push(&mut self, coeff: Goldilocks) {
        self.coefficients.push(coeff);
    }

    /// Returns the degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Coefficient of the highest non-zero term, zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> Goldilocks {
        self.degree()
            .map(|d| self.coefficients[d])
            .unwrap_or_else(Goldilocks::zero)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Drops trailing zero coefficients.
    pub fn trim(mut self) -> Self {
        while self.coefficients.last().is_some_and(|c| c.is_zero()) {
            self.coefficients.pop();
        }
        self
    }

    /// Adds two polynomials. The result has `max(len)` coefficients.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        self.zip_padded(other, |a, b| a + b)
    }

    /// Subtracts `other`. The result has `max(len)` coefficients.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.zip_padded(other, |a, b| a - b)
    }

    fn zip_padded(
        &self,
        other: &Polynomial,
        op: impl Fn(Goldilocks, Goldilocks) -> Goldilocks,
    ) -> Polynomial {
        let max_len = std::cmp::max(self.len(), other.len());
        let coefficients = (0..max_len)
            .map(|i| {
                let a = self.coefficient(i).unwrap_or_else(Goldilocks::zero);
                let b = other.coefficient(i).unwrap_or_else(Goldilocks::zero);
                op(a, b)
            })
            .collect();
        Polynomial::new(coefficients)
    }

    /// Schoolbook product with `len(a) + len(b) - 1` coefficients.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::zero();
        }

        let mut result = vec![Goldilocks::zero(); self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Polynomial::new(result)
    }

    pub fn mul_by_const(&self, c: Goldilocks) -> Polynomial {
        Polynomial::new(self.coefficients.iter().map(|&a| a * c).collect())
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// The quotient has `len(self) - len(divisor) + 1` coefficients and the
    /// remainder `len(divisor) - 1`. Returns `None` when `self` is shorter than
    /// the divisor or the divisor's top slot is zero.
    pub fn div_rem(&self, divisor: &Polynomial) -> Option<(Polynomial, Polynomial)> {
        let top = *divisor.coefficients.last()?;
        if self.len() < divisor.len() || top.is_zero() {
            return None;
        }

        let mut remainder = self.coefficients.clone();
        let divisor_pos = divisor.len() - 1;
        let mut quotient = vec![Goldilocks::zero(); self.len() - divisor_pos];
        let top_inv = top.inverse();

        for diff in (0..quotient.len()).rev() {
            let quot = remainder[diff + divisor_pos] * top_inv;
            quotient[diff] = quot;
            for (i, &d) in divisor.coefficients.iter().enumerate() {
                remainder[diff + i] -= d * quot;
            }
        }

        remainder.truncate(divisor_pos);
        Some((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    /// Quotient of long division by `divisor`. See [`Self::div_rem`].
    pub fn divide(&self, divisor: &Polynomial) -> Option<Polynomial> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// `self - (self / divisor) * divisor`, truncated to `len(divisor) - 1`
    /// coefficients.
    pub fn modulo(&self, divisor: &Polynomial) -> Option<Polynomial> {
        let quotient = self.divide(divisor)?;
        let mut rest = self.sub(&quotient.multiply(divisor));
        rest.coefficients.truncate(divisor.len() - 1);
        Some(rest)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: Goldilocks) -> Goldilocks {
        self.coefficients
            .iter()
            .rev()
            .fold(Goldilocks::zero(), |acc, &coeff| acc * x + coeff)
    }

    /// Evaluates at every point of `domain`, preserving its order.
    pub fn evaluate_domain(&self, domain: &[Goldilocks]) -> Vec<Goldilocks> {
        domain.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Closed-form `c0 + c1*x + c2*x^2 + c3*x^3` for a four-coefficient
    /// polynomial.
    ///
    /// # Panics
    ///
    /// Panics if fewer than four coefficients are present.
    pub fn evaluate_quartic(&self, x: Goldilocks) -> Goldilocks {
        let c = &self.coefficients;
        let xsq = x * x;
        let xcb = xsq * x;
        c[0] + c[1] * x + c[2] * xsq + c[3] * xcb
    }

    /// Every `step`-th coefficient starting at `start`.
    ///
    /// Returns `None` when `start` is out of range or `step` is zero.
    pub fn subslice(&self, start: usize, step: usize) -> Option<Polynomial> {
        if start >= self.len() || step == 0 {
            return None;
        }
        Some(Polynomial::new(
            self.coefficients[start..].iter().step_by(step).copied().collect(),
        ))
    }

    pub fn reverse(&self) -> Polynomial {
        Polynomial::new(self.coefficients.iter().rev().copied().collect())
    }

    /// Creates a polynomial from an ark-poly dense polynomial.
    pub fn from_dense_poly(poly: DensePolynomial<Fp>) -> Self {
        Self::new(poly.coeffs.into_iter().map(Goldilocks::from).collect())
    }

    /// Converts into an ark-poly dense polynomial (which trims trailing zeros).
    pub fn to_dense_poly(&self) -> DensePolynomial<Fp> {
        DensePolynomial::from_coefficients_vec(
            self.coefficients.iter().map(|c| c.into_inner()).collect(),
        )
    }

    /// Returns polynomial coefficients.
    pub fn coefficients(&self) -> &[Goldilocks] {
        &self.coefficients
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(i, coeff)| match i {
                0 => format!("{}", coeff),
                1 => format!("{}x", coeff),
                _ => format!("{}x^{}", coeff, i),
            })
            .collect();

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}
