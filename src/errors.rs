use thiserror::Error;

/// Failures when deriving roots of unity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("root of unity order must be non-zero")]
    ZeroOrder,
    #[error("root of unity order {size} does not divide the multiplicative group order")]
    OrderDoesNotDivide { size: u64 },
}

/// Precondition violations of the number-theoretic transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NttError {
    #[error("cannot transform a sequence of length {len}, length must be a power of two")]
    NonPowerOfTwo { len: usize },
    #[error("supplied root is not a {order}-th root of unity")]
    NotRootOfUnity { order: u64 },
    #[error("supplied root is not a primitive {order}-th root of unity")]
    NotPrimitive { order: u64 },
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Failures while deriving AIR constraints from a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirError {
    #[error("cannot interpolate the {column} column over {points} domain points")]
    Interpolation { column: &'static str, points: usize },
}
