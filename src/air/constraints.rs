//! Constraint polynomials for the running-sum trace.
//!
//! Boundary constraints pin the first and last rows. The transition
//! constraint `C = S(omicron * x) - (F(x) + S(x))` vanishes on every domain
//! point except the last, where the trace wraps into its boundary row.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::air::trace::Receipt;
use crate::errors::{AirError, FieldError};
use crate::goldilocks::Goldilocks;
use crate::math::domain::{GoldilocksDomain, powers_of};
use crate::math::polynomial::Polynomial;

/// First and last trace rows as degree-1 polynomials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConstraints {
    pub first: Polynomial,
    pub last: Polynomial,
}

fn interpolate_column(
    column: &'static str,
    xs: &[Goldilocks],
    ys: &[Goldilocks],
) -> Result<Polynomial, AirError> {
    Polynomial::interpolate(xs, ys).ok_or_else(|| {
        debug!(column, points = xs.len(), "interpolation failed");
        AirError::Interpolation {
            column,
            points: xs.len(),
        }
    })
}

impl Receipt {
    /// `None` for a receipt without rows.
    pub fn boundary_constraints(&self) -> Option<BoundaryConstraints> {
        let last = self.height().checked_sub(1)?;
        Some(BoundaryConstraints {
            first: self.row(0),
            last: self.row(last),
        })
    }

    /// Evaluation domain `[omicron^0, ..., omicron^(height - 1)]`.
    pub fn domain(&self, omicron: Goldilocks) -> Vec<Goldilocks> {
        powers_of(omicron, self.height())
    }

    /// Smallest power-of-two subgroup with room for every row. Its generator
    /// is a valid `omicron` for the constraint methods.
    pub fn trace_domain(&self) -> Result<GoldilocksDomain, FieldError> {
        GoldilocksDomain::new(self.height().next_power_of_two())
    }

    /// Interpolates both columns over the domain generated by `omicron` and
    /// returns `S_shifted - (F + S)`.
    ///
    /// `omicron` needs an order of at least the trace height, otherwise the
    /// domain repeats points and interpolation fails.
    #[tracing::instrument(skip_all, fields(height = self.height()))]
    pub fn transitional_constraints(&self, omicron: Goldilocks) -> Result<Polynomial, AirError> {
        let n = self.height();
        if n == 0 {
            return Err(AirError::Interpolation {
                column: "first",
                points: 0,
            });
        }
        let domain = self.domain(omicron);

        let f = interpolate_column("first", &domain, &self.first)?;
        let s = interpolate_column("second", &domain, &self.second)?;
        let s_shifted = interpolate_column("shifted second", &domain[..n - 1], &self.second[1..])?;

        Ok(s_shifted.sub(&f.add(&s)))
    }

    /// Values of the transition constraint on every domain point.
    pub fn evaluate_transitional_constraints(
        &self,
        omicron: Goldilocks,
    ) -> Result<Vec<Goldilocks>, AirError> {
        let c = self.transitional_constraints(omicron)?;
        Ok(c.evaluate_domain(&self.domain(omicron)))
    }

    /// Checks both boundary rows and that the transition constraint vanishes
    /// on every step but the last.
    pub fn is_satisfied(&self, omicron: Goldilocks) -> Result<bool, AirError> {
        let n = self.height();
        if n == 0 || self.second.len() != n {
            return Ok(false);
        }

        let total: Goldilocks = self.first[..n - 1].iter().copied().sum();
        let boundaries_hold = self.second[0].is_zero()
            && self.first[n - 1] == total
            && self.second[n - 1] == total;
        if !boundaries_hold {
            debug!("boundary rows do not match the accumulated total");
            return Ok(false);
        }

        let evaluations = self.evaluate_transitional_constraints(omicron)?;
        Ok(evaluations[..n - 1].iter().all(Goldilocks::is_zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> Receipt {
        Receipt::from_u64s(&[5, 12, 13])
    }

    #[test]
    fn test_boundary_constraints() {
        let bc = receipt().boundary_constraints().unwrap();
        assert_eq!(bc.first, Polynomial::new(vec![Goldilocks::new(5), Goldilocks::zero()]));
        assert_eq!(bc.last, Polynomial::new(vec![Goldilocks::new(30), Goldilocks::new(30)]));
    }

    #[test]
    fn test_transition_constraint_vanishes_before_boundary() {
        let receipt = receipt();
        let omicron = Goldilocks::root_of_unity(receipt.height() as u64).unwrap();

        let evaluations = receipt.evaluate_transitional_constraints(omicron).unwrap();
        assert_eq!(evaluations.len(), 4);
        assert!(evaluations[..3].iter().all(Goldilocks::is_zero));
        assert!(!evaluations[3].is_zero());
        assert!(receipt.is_satisfied(omicron).unwrap());
    }

    #[test]
    fn test_tampered_running_total_is_detected() {
        let mut receipt = receipt();
        receipt.second[2] = Goldilocks::new(18);
        let omicron = Goldilocks::root_of_unity(4).unwrap();

        let evaluations = receipt.evaluate_transitional_constraints(omicron).unwrap();
        assert!(!evaluations[1].is_zero());
        assert!(!receipt.is_satisfied(omicron).unwrap());
    }

    #[test]
    fn test_tampered_boundary_is_detected() {
        let mut receipt = receipt();
        receipt.first[3] = Goldilocks::new(31);
        let omicron = Goldilocks::root_of_unity(4).unwrap();
        assert!(!receipt.is_satisfied(omicron).unwrap());
    }

    #[test]
    fn test_small_order_root_fails_interpolation() {
        let receipt = receipt();
        let omicron = Goldilocks::root_of_unity(2).unwrap();
        assert_eq!(
            receipt.transitional_constraints(omicron),
            Err(AirError::Interpolation {
                column: "first",
                points: 4
            })
        );
    }

    #[test]
    fn test_trace_domain_covers_height() {
        let domain = receipt().trace_domain().unwrap();
        assert_eq!(domain.size(), 4);
        assert!(receipt().is_satisfied(domain.generator()).unwrap());

        let longer = Receipt::from_u64s(&[1; 4]);
        let domain = longer.trace_domain().unwrap();
        assert_eq!(domain.size(), 8);
        assert_eq!(&longer.domain(domain.generator())[..], &domain.elements()[..5]);
    }

    #[test]
    fn test_rowless_receipt_has_no_constraints() {
        let receipt = Receipt {
            first: Vec::new(),
            second: Vec::new(),
        };
        assert_eq!(receipt.boundary_constraints(), None);
        assert!(receipt.transitional_constraints(Goldilocks::one()).is_err());
        assert!(!receipt.is_satisfied(Goldilocks::one()).unwrap());
    }

    #[test]
    fn test_single_row_trace() {
        let receipt = Receipt::compute(&[]);
        let c = receipt.transitional_constraints(Goldilocks::one()).unwrap();
        assert!(c.is_zero());
        assert!(receipt.is_satisfied(Goldilocks::one()).unwrap());
    }
}
