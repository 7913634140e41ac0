//! AIR execution trace and constraint construction for a prefix-sum program,
//! on top of Goldilocks field arithmetic, dense polynomials and an NTT.

pub mod air;
pub mod constants;
pub mod errors;
pub mod goldilocks;
pub mod math;
pub mod ntt_goldilocks;

pub use goldilocks::Goldilocks;
pub use math::polynomial::Polynomial;
