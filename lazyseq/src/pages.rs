use clap::Parser;
use lazyseq_core::Lazy;
use log::debug;

const PAGE_SIZE: u64 = 10;

#[derive(Debug, Parser)]
pub(crate) struct Pages {
    /// Number of pages available
    #[arg(long, default_value_t = 3)]
    pub(crate) pages: u64,
    /// How many items to take from the flattened pages
    #[arg(long, short, default_value_t = 10)]
    pub(crate) take: usize,
}

impl Pages {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let items = paged(self.pages, fetch_page).take(self.take);
        println!("{:?}", items.to_vec());
        Ok(())
    }
}

/// Stand-in for a remote API returning one page of results.
fn fetch_page(page: u64) -> Vec<u64> {
    debug!("fetching page {}", page);
    (0..PAGE_SIZE).map(|i| page * PAGE_SIZE + i).collect()
}

/// Items from pages `1..=pages`, fetched only when a consumer gets to them.
pub(crate) fn paged<'a, F>(pages: u64, fetch: F) -> Lazy<'a, u64>
where
    F: Fn(u64) -> Vec<u64> + 'a,
{
    Lazy::new(move || 1..=pages)
        .map(fetch)
        .flat_map(|items: Vec<u64>| Lazy::from(items))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use insta::assert_debug_snapshot;

    use super::*;

    #[test]
    fn test_first_page() {
        assert_debug_snapshot!(paged(3, fetch_page).take(10).to_vec(), @r###"
        [
            10,
            11,
            12,
            13,
            14,
            15,
            16,
            17,
            18,
            19,
        ]
        "###);
    }

    #[test]
    fn test_fetches_only_needed_pages() {
        let fetches = Cell::new(0);
        let items = paged(3, |page| {
            fetches.set(fetches.get() + 1);
            fetch_page(page)
        });
        assert_eq!(items.take(12).to_vec().last(), Some(&21));
        assert_eq!(fetches.get(), 2);
        assert_eq!(items.to_vec().len(), 30);
        assert_eq!(fetches.get(), 5);
    }
}
