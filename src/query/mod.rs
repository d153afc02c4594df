//! The filter -> paginate pipeline.
//!
//! Pure functions from the full product list to the visible slice. Nothing
//! here caches or owns state; the pipeline is recomputed on every event.

use crate::model::Product;

/// Products shown per page.
pub const PAGE_SIZE: usize = 6;

/// The page-sized subset of the filtered list, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    pub page: usize,
    pub total_pages: usize,
}

/// Total pages for `count` filtered products: ceil(count / PAGE_SIZE).
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Case-insensitive substring filter on the product name. Empty text keeps
/// everything.
fn matches(product: &Product, search: &str) -> bool {
    product.name.to_lowercase().contains(&search.to_lowercase())
}

/// Derive the visible slice for a 1-based `page`.
///
/// A page past the end of the filtered list yields an empty slice; the page
/// number is carried through untouched, never clamped.
pub fn page_view(products: &[Product], search: &str, page: usize) -> PageView {
    let filtered: Vec<&Product> = products.iter().filter(|p| matches(p, search)).collect();
    let total_pages = total_pages(filtered.len());

    let start = (page.saturating_sub(1)) * PAGE_SIZE;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    PageView {
        items,
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_products;

    fn numbered_products(count: usize) -> Vec<Product> {
        (1..=count as u64)
            .map(|i| Product::new(i, format!("Item {i}"), 100, "Misc", 1, ""))
            .collect()
    }

    #[test]
    fn empty_search_keeps_the_full_list() {
        let products = seed_products();
        let view = page_view(&products, "", 1);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_name() {
        let products = seed_products();
        let view = page_view(&products, "mouse", 1);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Wireless Mouse");

        let view = page_view(&products, "MOUSE", 1);
        assert_eq!(view.items.len(), 1);

        // Substring match, not prefix match.
        let view = page_view(&products, "chair", 1);
        assert_eq!(view.items[0].name, "Office Chair");

        let view = page_view(&products, "no such product", 1);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn total_pages_is_ceil_of_count_over_page_size() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_list_exactly_once() {
        let products = numbered_products(13);
        let pages = total_pages(products.len());
        assert_eq!(pages, 3);

        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend(page_view(&products, "", page).items);
        }
        assert_eq!(seen, products);
    }

    #[test]
    fn page_past_the_end_is_empty_and_not_clamped() {
        let products = numbered_products(7);
        let view = page_view(&products, "", 5);
        assert!(view.items.is_empty());
        assert_eq!(view.page, 5);
        assert_eq!(view.total_pages, 2);
    }
}
