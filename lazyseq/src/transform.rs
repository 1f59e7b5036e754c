use clap::Parser;
use lazyseq_core::{error, range, Lazy};

#[derive(Debug, Parser)]
pub(crate) struct Transform {
    /// How many naturals to take before transforming
    #[arg(long, short, default_value_t = 20)]
    pub(crate) count: usize,
}

impl Transform {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        println!("{:?}", even_successors(self.count)?.to_vec());
        Ok(())
    }
}

/// The even numbers among `1..=count`.
pub(crate) fn even_successors<'a>(count: usize) -> error::Result<Lazy<'a, u64>> {
    Ok(range(0, None, 1)?
        .take(count)
        .map(|x| x + 1)
        .filter(|x| x % 2 == 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_successors() {
        assert_eq!(
            even_successors(20).unwrap().to_vec(),
            vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]
        );
        assert!(even_successors(0).unwrap().to_vec().is_empty());
    }
}
