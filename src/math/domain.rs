use crate::errors::FieldError;
use crate::goldilocks::Goldilocks;

/// `[omega^0, omega^1, ..., omega^(n-1)]`
pub fn powers_of(omega: Goldilocks, n: usize) -> Vec<Goldilocks> {
    let mut domain = Vec::with_capacity(n);
    let mut cur = Goldilocks::one();
    for _ in 0..n {
        domain.push(cur);
        cur *= omega;
    }
    domain
}

/// Multiplicative subgroup generated by a root of unity of the given order.
#[derive(Debug, Clone)]
pub struct GoldilocksDomain {
    generator: Goldilocks,
    elements: Vec<Goldilocks>,
}

impl GoldilocksDomain {
    pub fn new(size: usize) -> Result<Self, FieldError> {
        let generator = Goldilocks::root_of_unity(size as u64)?;
        Ok(Self {
            generator,
            elements: powers_of(generator, size),
        })
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn generator(&self) -> Goldilocks {
        self.generator
    }

    pub fn element(&self, i: usize) -> Goldilocks {
        self.elements[i % self.elements.len()]
    }

    pub fn elements(&self) -> &[Goldilocks] {
        &self.elements
    }
}

#[test]
fn test_domain_properties() {
    let blowup_factor = 8;
    let domain = GoldilocksDomain::new(4).unwrap();
    let extended_domain = GoldilocksDomain::new(4 * blowup_factor).unwrap();

    assert_eq!(domain.size(), 4);
    assert_eq!(extended_domain.size(), 4 * blowup_factor);
    assert_eq!(domain.element(4), domain.element(0));

    // The original points appear in the extended domain at regular intervals
    for (i, &point) in domain.elements().iter().enumerate() {
        assert_eq!(point, extended_domain.elements()[i * blowup_factor]);
    }
}

#[test]
fn test_domain_points_are_distinct() {
    let domain = GoldilocksDomain::new(16).unwrap();
    assert!(domain.elements()[0].is_one());
    for i in 0..domain.size() {
        for j in i + 1..domain.size() {
            assert_ne!(domain.elements()[i], domain.elements()[j]);
        }
    }
}

#[test]
fn test_powers_of() {
    let powers = powers_of(Goldilocks::new(3), 4);
    let values: Vec<u64> = powers.iter().map(Goldilocks::as_u64).collect();
    assert_eq!(values, vec![1, 3, 9, 27]);
    assert!(powers_of(Goldilocks::new(3), 0).is_empty());
}
