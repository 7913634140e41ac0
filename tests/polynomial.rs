#[cfg(test)]
mod tests {
    use ark_poly::Polynomial as ArkPolynomial;
    use proptest::prelude::*;
    use simple_air::{Goldilocks, Polynomial};

    fn felt() -> impl Strategy<Value = Goldilocks> {
        (0..Goldilocks::PRIME).prop_map(Goldilocks::new)
    }

    fn nonzero_felt() -> impl Strategy<Value = Goldilocks> {
        (1..Goldilocks::PRIME).prop_map(Goldilocks::new)
    }

    fn poly(max_len: usize) -> impl Strategy<Value = Polynomial> {
        prop::collection::vec(felt(), 1..max_len).prop_map(Polynomial::new)
    }

    #[test]
    fn test_polynomial_division() {
        // (x^3 + 2x^2 + 3x + 4) / (x + 1)
        let dividend = Polynomial::new(vec![
            Goldilocks::new(4),
            Goldilocks::new(3),
            Goldilocks::new(2),
            Goldilocks::new(1),
        ]);
        let divisor = Polynomial::new(vec![Goldilocks::new(1), Goldilocks::new(1)]);
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(quotient.coefficients[0].as_u64(), 2);
        assert_eq!(quotient.coefficients[1].as_u64(), 1);
        assert_eq!(quotient.coefficients[2].as_u64(), 1);
        assert_eq!(remainder.coefficients[0].as_u64(), 2);
    }

    #[test]
    fn test_polynomial_division_exact() {
        // (x^2 + 2x + 1) / (x + 1)
        let dividend = Polynomial::new(vec![
            Goldilocks::new(1),
            Goldilocks::new(2),
            Goldilocks::new(1),
        ]);
        let divisor = Polynomial::new(vec![Goldilocks::new(1), Goldilocks::new(1)]);
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(quotient.coefficients[0].as_u64(), 1);
        assert_eq!(quotient.coefficients[1].as_u64(), 1);
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_interpolation_through_domain() {
        let omega = Goldilocks::root_of_unity(8).unwrap();
        let xs = simple_air::math::domain::powers_of(omega, 8);
        let ys: Vec<Goldilocks> = (0..8u64).map(|i| Goldilocks::new(i * i + 1)).collect();

        let p = Polynomial::interpolate(&xs, &ys).unwrap();
        assert_eq!(p.evaluate_domain(&xs), ys);
    }

    #[test]
    fn test_dense_poly_conversion() {
        let p = Polynomial::new(vec![Goldilocks::new(3), Goldilocks::new(0), Goldilocks::new(8)]);
        let dense = p.to_dense_poly();
        assert_eq!(Polynomial::from_dense_poly(dense), p);
    }

    proptest! {
        #[test]
        fn field_division_inverts_multiplication(a in felt(), b in nonzero_felt()) {
            prop_assert_eq!((a / b) * b, a);
            prop_assert!((b * b.inverse()).is_one());
        }

        #[test]
        fn batch_inverse_matches_single(xs in prop::collection::vec(nonzero_felt(), 0..20)) {
            let before = xs.clone();
            let inverses = Goldilocks::batch_inverse(&xs);
            prop_assert_eq!(&xs, &before);
            for (x, inv) in xs.iter().zip(&inverses) {
                prop_assert_eq!(*inv, x.inverse());
            }
        }

        #[test]
        fn add_and_multiply_commute(a in poly(10), b in poly(10)) {
            prop_assert_eq!(a.add(&b), b.add(&a));
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn add_and_multiply_associate(a in poly(8), b in poly(8), c in poly(8)) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
            prop_assert_eq!(a.multiply(&b).multiply(&c), a.multiply(&b.multiply(&c)));
        }

        #[test]
        fn division_recombines(a in poly(16), b in poly(6)) {
            if let (Some(q), Some(r)) = (a.divide(&b), a.modulo(&b)) {
                let recombined = q.multiply(&b).add(&r);
                prop_assert_eq!(recombined, a);
            }
        }

        #[test]
        fn evaluation_matches_ark_poly(p in poly(20), x in felt()) {
            let expected = p.to_dense_poly().evaluate(&x.into_inner());
            prop_assert_eq!(p.evaluate(x), Goldilocks::from(expected));
        }

        #[test]
        fn interpolation_round_trips(
            xs in prop::collection::btree_set(0..Goldilocks::PRIME, 1..10),
            seed in prop::collection::vec(felt(), 10),
        ) {
            let xs: Vec<Goldilocks> = xs.into_iter().map(Goldilocks::new).collect();
            let ys = &seed[..xs.len()];

            let p = Polynomial::interpolate(&xs, ys).unwrap();
            prop_assert_eq!(p.len(), xs.len());
            for (x, y) in xs.iter().zip(ys) {
                prop_assert_eq!(p.evaluate(*x), *y);
            }
        }

        #[test]
        fn vanishing_polynomial_has_given_roots(
            xs in prop::collection::btree_set(0..Goldilocks::PRIME, 0..10),
        ) {
            let xs: Vec<Goldilocks> = xs.into_iter().map(Goldilocks::new).collect();
            let z = Polynomial::zero_at_given_x(&xs);

            prop_assert_eq!(z.degree(), Some(xs.len()));
            for x in &xs {
                prop_assert!(z.evaluate(*x).is_zero());
            }
        }

        #[test]
        fn duplicate_points_do_not_interpolate(x in felt(), y in felt()) {
            prop_assert!(Polynomial::interpolate(&[x, x], &[y, y]).is_none());
        }
    }
}
