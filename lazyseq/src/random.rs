use clap::Parser;
use lazyseq_core::Lazy;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Parser)]
pub(crate) struct Random {
    /// How many numbers to print
    #[arg(long, short, default_value_t = 5)]
    pub(crate) count: usize,
    /// Seed for the generator; the same seed gives the same numbers
    #[arg(long, short, default_value_t = 0)]
    pub(crate) seed: u64,
}

impl Random {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        println!("{:?}", random_numbers(self.seed).take(self.count).to_vec());
        Ok(())
    }
}

/// An endless stream of numbers in `[0, 1)`.
///
/// Every traversal reseeds its own generator, so traversals agree.
pub(crate) fn random_numbers<'a>(seed: u64) -> Lazy<'a, f64> {
    Lazy::new(move || {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        std::iter::repeat_with(move || rng.gen::<f64>())
    })
}
