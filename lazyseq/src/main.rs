mod chunks;
mod fibonacci;
mod pages;
mod primes;
mod random;
mod transform;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first Fibonacci numbers.
    Fibonacci(fibonacci::Fibonacci),
    /// Print the first prime numbers, optionally looking one up by index.
    Primes(primes::Primes),
    /// Print seeded pseudo-random numbers in [0, 1).
    Random(random::Random),
    /// Chain take, map and filter over the naturals.
    Transform(transform::Transform),
    /// Sum a large data set by flattening it chunk by chunk.
    Chunks(chunks::Chunks),
    /// Flatten simulated paged API results and take the first items.
    Pages(pages::Pages),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Fibonacci(fibonacci) => {
            fibonacci.run()?;
        }
        Commands::Primes(primes) => {
            primes.run()?;
        }
        Commands::Random(random) => {
            random.run()?;
        }
        Commands::Transform(transform) => {
            transform.run()?;
        }
        Commands::Chunks(chunks) => {
            chunks.run()?;
        }
        Commands::Pages(pages) => {
            pages.run()?;
        }
    }
    Ok(())
}
