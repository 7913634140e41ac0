// Goldilocks field implementation
// Prime: p = 2^64 - 2^32 + 1 = 18446744069414584321
// The Montgomery arithmetic is generated by ark-ff; `Goldilocks` owns one
// such element and exposes the canonical-value contract on top of it.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ark_ff::fields::{Fp64, MontBackend, MontConfig};
use ark_ff::{Field, PrimeField};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::constants::{GENERATOR, MODULUS, ROOT_ORDER};
use crate::errors::FieldError;

#[derive(MontConfig)]
#[modulus = "18446744069414584321"]
#[generator = "7"]
pub struct GoldilocksConfig;

/// Generated Montgomery representation backing [`Goldilocks`].
pub type Fp = Fp64<MontBackend<GoldilocksConfig, 1>>;

/// Element of the prime field with modulus `2^64 - 2^32 + 1`.
///
/// Every observable value is the canonical representative in `[0, p)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct Goldilocks {
    inner: Fp,
}

impl Goldilocks {
    pub const PRIME: u64 = MODULUS;

    #[inline]
    pub fn new(value: u64) -> Self {
        Self {
            inner: Fp::from(value),
        }
    }

    /// Negative values wrap around the modulus, `-1` maps to `p - 1`.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self {
            inner: Fp::from(value),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { inner: Fp::zero() }
    }

    #[inline]
    pub fn one() -> Self {
        Self { inner: Fp::one() }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.inner.is_one()
    }

    /// Canonical representative in `[0, p)`.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.inner.into_bigint().0[0]
    }

    pub fn from_biguint(value: &BigUint) -> Self {
        Self {
            inner: Fp::from_le_bytes_mod_order(&value.to_bytes_le()),
        }
    }

    pub fn from_bigint(value: &BigInt) -> Self {
        let magnitude = Self::from_biguint(value.magnitude());
        match value.sign() {
            Sign::Minus => -magnitude,
            _ => magnitude,
        }
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from(self.as_u64())
    }

    /// Interprets `bytes` as a big-endian integer of any length, reduced mod p.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            inner: Fp::from_be_bytes_mod_order(bytes),
        }
    }

    /// Canonical big-endian encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 8] {
        self.as_u64().to_be_bytes()
    }

    /// Derives an element from an arbitrary byte string by big-endian
    /// accumulation and a final reduction. Deterministic, not uniform.
    pub fn sample(bytes: &[u8]) -> Self {
        let acc = bytes
            .iter()
            .fold(BigUint::zero(), |acc, &byte| (acc << 8u32) ^ BigUint::from(byte));
        Self::from_biguint(&(acc % BigUint::from(MODULUS)))
    }

    /// Generate a random Goldilocks element.
    pub fn random(rng: &mut impl rand::Rng) -> Self {
        Self::new(rng.gen_range(0..Self::PRIME))
    }

    #[inline]
    pub fn square(self) -> Self {
        Self {
            inner: self.inner.square(),
        }
    }

    pub fn pow(self, exp: u64) -> Self {
        Self {
            inner: self.inner.pow([exp]),
        }
    }

    /// Square-and-multiply over the bits of an arbitrary-precision exponent.
    pub fn exp(self, exponent: &BigUint) -> Self {
        let mut result = Self::one();
        for i in (0..exponent.bits()).rev() {
            result = result.square();
            if exponent.bit(i) {
                result *= self;
            }
        }
        result
    }

    pub fn checked_inverse(self) -> Option<Self> {
        self.inner.inverse().map(|inner| Self { inner })
    }

    /// # Panics
    ///
    /// Panics when `self` is zero.
    pub fn inverse(self) -> Self {
        match self.checked_inverse() {
            Some(inv) => inv,
            None => panic!("Cannot invert zero"),
        }
    }

    /// Inverts every entry with a single field inversion.
    ///
    /// `None` entries are skipped: they contribute one to the running product
    /// and produce one in the output.
    ///
    /// # Panics
    ///
    /// Panics when a present entry is zero.
    pub fn multi_inverse(values: &[Option<Self>]) -> Vec<Self> {
        let mut partials = Vec::with_capacity(values.len() + 1);
        partials.push(Self::one());
        for value in values {
            let last = partials[partials.len() - 1];
            partials.push(last * value.unwrap_or_else(Self::one));
        }

        let mut inv = partials[values.len()].inverse();
        let mut outputs = vec![Self::one(); values.len()];
        for i in (0..values.len()).rev() {
            if let Some(value) = values[i] {
                outputs[i] = partials[i] * inv;
                inv *= value;
            }
        }
        outputs
    }

    /// [`Self::multi_inverse`] over a sequence without skipped entries.
    pub fn batch_inverse(values: &[Self]) -> Vec<Self> {
        let slots: Vec<Option<Self>> = values.iter().copied().map(Some).collect();
        Self::multi_inverse(&slots)
    }

    /// Order of the multiplicative group, `p - 1`, as a field element.
    pub fn root_order() -> Self {
        Self::new(ROOT_ORDER)
    }

    /// Returns `generator^((p - 1) / size)`.
    pub fn root_of_unity(size: u64) -> Result<Self, FieldError> {
        if size == 0 {
            return Err(FieldError::ZeroOrder);
        }
        if ROOT_ORDER % size != 0 {
            return Err(FieldError::OrderDoesNotDivide { size });
        }

        let root = Self::new(GENERATOR).pow(ROOT_ORDER / size);
        debug_assert!(root.pow(size).is_one());
        Ok(root)
    }

    /// `self^order == 1` and, for `order > 1`, `self^(order / 2) != 1`.
    pub fn is_primitive_root_of_unity(self, order: u64) -> bool {
        if order == 0 || !self.pow(order).is_one() {
            return false;
        }
        order == 1 || !self.pow(order / 2).is_one()
    }

    /// Underlying generated element, for interop with ark-poly.
    #[inline]
    pub fn into_inner(self) -> Fp {
        self.inner
    }
}

impl From<Fp> for Goldilocks {
    fn from(inner: Fp) -> Self {
        Self { inner }
    }
}

impl From<u64> for Goldilocks {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for Goldilocks {
    fn from(value: u32) -> Self {
        Self::new(value as u64)
    }
}

impl From<u128> for Goldilocks {
    fn from(value: u128) -> Self {
        Self {
            inner: Fp::from(value),
        }
    }
}

impl From<i64> for Goldilocks {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Goldilocks {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<Goldilocks> for u64 {
    fn from(value: Goldilocks) -> Self {
        value.as_u64()
    }
}

impl PartialOrd for Goldilocks {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Goldilocks {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

impl Add for Goldilocks {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            inner: self.inner + rhs.inner,
        }
    }
}

impl AddAssign for Goldilocks {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Goldilocks {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            inner: self.inner - rhs.inner,
        }
    }
}

impl SubAssign for Goldilocks {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Goldilocks {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            inner: self.inner * rhs.inner,
        }
    }
}

impl MulAssign for Goldilocks {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Goldilocks {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Goldilocks {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Goldilocks {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { inner: -self.inner }
    }
}

impl Sum for Goldilocks {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for Goldilocks {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl Zero for Goldilocks {
    fn zero() -> Self {
        Goldilocks::zero()
    }

    fn is_zero(&self) -> bool {
        Goldilocks::is_zero(self)
    }
}

impl One for Goldilocks {
    fn one() -> Self {
        Goldilocks::one()
    }
}

impl fmt::Display for Goldilocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

impl fmt::Debug for Goldilocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Goldilocks").field(&self.as_u64()).finish()
    }
}
