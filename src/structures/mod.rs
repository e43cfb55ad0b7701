pub mod irreducible;
pub mod poly;
#[cfg(feature = "rand")]
pub mod sampler;
