// NTT implementation for the Goldilocks field

use tracing::debug;

use crate::constants::FAST_MULTIPLY_THRESHOLD;
use crate::errors::NttError;
use crate::goldilocks::Goldilocks;
use crate::math::polynomial::Polynomial;

#[inline]
fn bit_reverse(mut x: usize, log_n: usize) -> usize {
    let mut result = 0;
    for _ in 0..log_n {
        result = (result << 1) | (x & 1);
        x >>= 1;
    }
    result
}

fn check_length(len: usize) -> Result<(), NttError> {
    if len > 1 && !len.is_power_of_two() {
        return Err(NttError::NonPowerOfTwo { len });
    }
    Ok(())
}

/// Requires `root^order == 1` and `root^(order / 2) != 1`.
fn check_root(root: Goldilocks, order: u64) -> Result<(), NttError> {
    if !root.pow(order).is_one() {
        return Err(NttError::NotRootOfUnity { order });
    }
    if root.pow(order / 2).is_one() {
        return Err(NttError::NotPrimitive { order });
    }
    Ok(())
}

/// Radix-2 Cooley-Tukey transform: `out[k] = sum_j values[j] * root^(jk)`.
///
/// `values.len()` must be a power of two and `root` a primitive root of that
/// order. Sequences of length 0 or 1 are returned unchanged.
pub fn ntt(root: Goldilocks, values: &Polynomial) -> Result<Polynomial, NttError> {
    let n = values.len();
    check_length(n)?;
    if n <= 1 {
        return Ok(values.clone());
    }
    check_root(root, n as u64)?;

    ntt_recursive(root, values)
}

fn ntt_recursive(root: Goldilocks, values: &Polynomial) -> Result<Polynomial, NttError> {
    let n = values.len();
    if n == 1 {
        return Ok(values.clone());
    }

    let half = n / 2;
    let split = |start| values.subslice(start, 2).ok_or(NttError::NonPowerOfTwo { len: n });
    let evens = ntt_recursive(root.square(), &split(0)?)?;
    let odds = ntt_recursive(root.square(), &split(1)?)?;

    let mut output = vec![Goldilocks::zero(); n];
    let mut twiddle = Goldilocks::one();
    for i in 0..half {
        let t = twiddle * odds.coefficients[i];
        output[i] = evens.coefficients[i] + t;
        output[i + half] = evens.coefficients[i] - t;
        twiddle *= root;
    }

    Ok(Polynomial::new(output))
}

/// Inverse of [`ntt`]: transform with `root^-1`, then scale by `n^-1`.
pub fn intt(root: Goldilocks, values: &Polynomial) -> Result<Polynomial, NttError> {
    let n = values.len();
    check_length(n)?;
    if n <= 1 {
        return Ok(values.clone());
    }
    check_root(root, n as u64)?;

    let ninv = Goldilocks::new(n as u64).inverse();
    let transformed = ntt_recursive(root.inverse(), values)?;
    Ok(transformed.mul_by_const(ninv))
}

/// In-place Cooley-Tukey NTT, same output order as [`ntt`].
pub fn ntt_in_place(values: &mut [Goldilocks], omega: Goldilocks) -> Result<(), NttError> {
    let n = values.len();
    check_length(n)?;
    if n <= 1 {
        return Ok(());
    }
    check_root(omega, n as u64)?;

    butterflies(values, omega);
    Ok(())
}

fn butterflies(values: &mut [Goldilocks], omega: Goldilocks) {
    let n = values.len();
    let log_n = n.trailing_zeros() as usize;

    for i in 0..n {
        let j = bit_reverse(i, log_n);
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let step = n / len;
        let w_len = omega.pow(step as u64);

        for i in (0..n).step_by(len) {
            let mut w = Goldilocks::one();
            for j in 0..len / 2 {
                let u = values[i + j];
                let v = values[i + j + len / 2] * w;
                values[i + j] = u + v;
                values[i + j + len / 2] = u - v;
                w *= w_len;
            }
        }
        len *= 2;
    }
}

/// In-place inverse NTT
pub fn intt_in_place(values: &mut [Goldilocks], omega: Goldilocks) -> Result<(), NttError> {
    let n = values.len();
    check_length(n)?;
    if n <= 1 {
        return Ok(());
    }
    check_root(omega, n as u64)?;

    butterflies(values, omega.inverse());

    let inv_n = Goldilocks::new(n as u64).inverse();
    for v in values.iter_mut() {
        *v *= inv_n;
    }
    Ok(())
}

/// Multiplies two polynomials through the convolution theorem.
///
/// `root` must be a primitive root of `root_order` (half-order check). The
/// transform itself runs over a fresh root of the padded power-of-two size.
/// Products of degree below [`FAST_MULTIPLY_THRESHOLD`] are computed
/// schoolbook-style. The result always equals [`Polynomial::multiply`].
#[tracing::instrument(skip_all, fields(lhs = lhs.len(), rhs = rhs.len()))]
pub fn fast_multiply(
    lhs: &Polynomial,
    rhs: &Polynomial,
    root: Goldilocks,
    root_order: Goldilocks,
) -> Result<Polynomial, NttError> {
    let order = root_order.to_biguint();
    if !root.exp(&order).is_one() {
        return Err(NttError::NotRootOfUnity {
            order: root_order.as_u64(),
        });
    }
    if root.exp(&(order >> 1u32)).is_one() {
        return Err(NttError::NotPrimitive {
            order: root_order.as_u64(),
        });
    }

    if lhs.is_empty() || rhs.is_empty() {
        return Ok(lhs.multiply(rhs));
    }

    let degree = lhs.len() + rhs.len() - 2;
    if degree < FAST_MULTIPLY_THRESHOLD {
        debug!(degree, "product below transform threshold, using schoolbook");
        return Ok(lhs.multiply(rhs));
    }

    let n = (degree + 1).next_power_of_two();
    let omega = Goldilocks::root_of_unity(n as u64)?;
    debug!(degree, n, "multiplying through ntt");

    let mut lhs_codeword = lhs.coefficients.clone();
    lhs_codeword.resize(n, Goldilocks::zero());
    let mut rhs_codeword = rhs.coefficients.clone();
    rhs_codeword.resize(n, Goldilocks::zero());

    ntt_in_place(&mut lhs_codeword, omega)?;
    ntt_in_place(&mut rhs_codeword, omega)?;

    let mut product: Vec<Goldilocks> = lhs_codeword
        .iter()
        .zip(&rhs_codeword)
        .map(|(&a, &b)| a * b)
        .collect();

    intt_in_place(&mut product, omega)?;
    product.truncate(degree + 1);

    Ok(Polynomial::new(product))
}
