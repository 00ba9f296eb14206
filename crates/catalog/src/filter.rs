use crate::catalog::Catalog;
use crate::product::Product;
use crate::sections::{Section, group_by_title};

/// Return `true` when `title` contains `query`, ignoring case.
///
/// An empty query matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
	if query.is_empty() {
		return true;
	}
	title.to_lowercase().contains(&query.to_lowercase())
}

/// Products whose title matches `query`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
	products
		.iter()
		.filter(|product| title_matches(&product.title, query))
		.collect()
}

/// Derive the visible sections for `query` from scratch.
pub fn recompute(query: &str, catalog: &Catalog) -> Vec<Section> {
	group_by_title(filter_products(catalog.products(), query))
}
