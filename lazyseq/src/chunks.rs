use std::rc::Rc;

use clap::Parser;
use lazyseq_core::Lazy;
use log::debug;

#[derive(Debug, Parser)]
pub(crate) struct Chunks {
    /// Number of items in the data set
    #[arg(long, default_value_t = 1_000_000)]
    pub(crate) size: u64,
    /// Number of items per chunk
    #[arg(long, default_value_t = 1000)]
    pub(crate) chunk: usize,
}

impl Chunks {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.chunk > 0, "chunk size must be at least 1");
        let data: Rc<[u64]> = (0..self.size).collect();
        debug!("built data set of {} items", data.len());
        println!("{}", sum(&chunked(data, self.chunk)));
        Ok(())
    }
}

/// Slice `data` into consecutive chunks of at most `chunk` items.
///
/// `chunk` must not be zero.
pub(crate) fn chunked<'a>(data: Rc<[u64]>, chunk: usize) -> Lazy<'a, Vec<u64>> {
    Lazy::new(move || {
        let data = data.clone();
        (0..data.len())
            .step_by(chunk)
            .map(move |start| data[start..(start + chunk).min(data.len())].to_vec())
    })
}

/// Sum all items, flattening one chunk at a time.
pub(crate) fn sum(chunks: &Lazy<'_, Vec<u64>>) -> u64 {
    let items: Lazy<'_, u64> = chunks.flat_map(|chunk| Lazy::from(chunk));
    items.fold(0, |total, item| total + item)
}
