use clap::Parser;
use lazyseq_core::Lazy;

#[derive(Debug, Parser)]
pub(crate) struct Fibonacci {
    /// How many numbers to print
    #[arg(long, short, default_value_t = 10)]
    pub(crate) count: usize,
}

impl Fibonacci {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        println!("{:?}", fibonacci().take(self.count).to_vec());
        Ok(())
    }
}

/// Every Fibonacci number that fits in a `u64`.
pub(crate) fn fibonacci<'a>() -> Lazy<'a, u64> {
    Lazy::new(|| {
        // the second field is None once the next number would overflow
        std::iter::successors(Some((0u64, Some(1u64))), |&(a, b)| {
            b.map(|b| (b, a.checked_add(b)))
        })
        .map(|(a, _)| a)
    })
}
