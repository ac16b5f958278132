//! Fixed-size page slicing over result collections.

/// Results shown per page; not user-configurable.
pub const PAGE_SIZE: usize = 10;

/// The 1-based page `number` of `results`.
///
/// Out-of-range page numbers (including 0) give an empty slice rather than
/// an error, mirroring tolerant array slicing. Slicing never re-orders
/// anything.
pub fn page<T>(results: &[T], number: usize) -> &[T] {
    let start = match number.checked_sub(1).and_then(|n| n.checked_mul(PAGE_SIZE)) {
        Some(start) if start < results.len() => start,
        _ => return &[],
    };
    let end = (start + PAGE_SIZE).min(results.len());
    &results[start..end]
}

/// Pages needed to show `total` results.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_full_and_partial_pages() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page(&items, 1), (0..10).collect::<Vec<_>>().as_slice());
        assert_eq!(page(&items, 2), (10..20).collect::<Vec<_>>().as_slice());
        assert_eq!(page(&items, 3), (20..25).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn pages_partition_exactly() {
        let items: Vec<usize> = (0..37).collect();
        let mut rejoined = Vec::new();
        for n in 1..=page_count(items.len()) {
            rejoined.extend_from_slice(page(&items, n));
        }
        assert_eq!(rejoined, items);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..25).collect();
        assert!(page(&items, 0).is_empty());
        assert!(page(&items, 4).is_empty());
        assert!(page(&items, usize::MAX).is_empty());
        assert!(page::<usize>(&[], 1).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }
}
