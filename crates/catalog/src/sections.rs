use serde::Serialize;

use crate::product::Product;

/// Products sharing one title, in the order they appeared in the source list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
	pub title: String,
	pub items: Vec<Product>,
}

impl Section {
	fn new(first: Product) -> Self {
		Self {
			title: first.title.clone(),
			items: vec![first],
		}
	}
}

/// Partition products into sections keyed by their exact title.
///
/// Sections follow the order in which each title first appears and items keep
/// their relative input order, so flattening the result yields the input.
pub fn group_by_title<'a, I>(products: I) -> Vec<Section>
where
	I: IntoIterator<Item = &'a Product>,
{
	let mut sections: Vec<Section> = Vec::new();
	for product in products {
		match sections
			.iter_mut()
			.find(|section| section.title == product.title)
		{
			Some(section) => section.items.push(product.clone()),
			None => sections.push(Section::new(product.clone())),
		}
	}
	sections
}
