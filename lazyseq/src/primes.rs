use clap::Parser;
use lazyseq_core::{error, range, Lazy};

#[derive(Debug, Parser)]
pub(crate) struct Primes {
    /// How many primes to print
    #[arg(long, short, default_value_t = 10)]
    pub(crate) count: usize,
    /// Also print the prime at this zero-based index
    #[arg(long)]
    pub(crate) at: Option<usize>,
}

impl Primes {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let primes = primes()?;
        println!("{:?}", primes.take(self.count).to_vec());
        if let Some(index) = self.at {
            // the primes never run out, so this always finds one
            if let Some(prime) = primes.at(index) {
                println!("prime {}: {}", index, prime);
            }
        }
        Ok(())
    }
}

pub(crate) fn primes<'a>() -> error::Result<Lazy<'a, u64>> {
    Ok(range(2, None, 1)?.filter(|n| is_prime(*n)))
}

pub(crate) fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while within_root(i, n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Whether `i * i <= n`, without overflowing for large `n`.
fn within_root(i: u64, n: u64) -> bool {
    i <= n / i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let small = (0..30).filter(|n| is_prime(*n)).collect::<Vec<_>>();
        assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_first_ten() {
        assert_eq!(
            primes().unwrap().take(10).to_vec(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_at() {
        let primes = primes().unwrap();
        assert_eq!(primes.at(999), Some(7919));
        assert_eq!(primes.cached_len(), 1000);
        assert_eq!(primes.at(0), Some(2));
    }

    #[test]
    fn test_within_root_near_max() {
        assert!(within_root(4_294_967_295, u64::MAX));
        assert!(!within_root(4_294_967_296, u64::MAX));
        assert!(within_root(5, 25));
        assert!(!within_root(5, 24));
    }

    #[test]
    fn test_is_prime_large() {
        // largest prime below 2^32
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_291 * 3));
    }
}
