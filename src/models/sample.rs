//! Benchmark measurement models

/// A single benchmark record: the bit-size of the generated primes and
/// the average time taken to generate one prime of that size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub bits: u32,
    pub seconds: f64,
}
