//! The immutable product list the screen draws from.
//!
//! A catalog is either the built-in wood furniture list or a JSON array read
//! from disk. Once constructed it is never mutated; every view the screen
//! shows is derived from it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::product::{Product, Rate};

/// Failures while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("malformed catalog: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("duplicate product id {0:?}")]
	DuplicateId(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
	products: Vec<Product>,
}

impl Catalog {
	pub fn new(products: Vec<Product>) -> Self {
		Self { products }
	}

	/// The wood furniture list shipped with the binary.
	#[must_use]
	pub fn builtin() -> Self {
		let products = BUILTIN
			.iter()
			.map(|(id, title, image, rate)| Product::new(*id, *title, *image, Rate::from(*rate)))
			.collect();
		Self::new(products)
	}

	/// Parse a JSON array of products, rejecting duplicate ids.
	pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
		let products: Vec<Product> = serde_json::from_str(json)?;
		let mut seen = HashSet::new();
		for product in &products {
			if !seen.insert(product.id.as_str()) {
				return Err(CatalogError::DuplicateId(product.id.clone()));
			}
		}
		Ok(Self::new(products))
	}

	/// Read a catalog file from disk.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::from_json_str(&json)?;
		log::debug!(
			"loaded {} products from {}",
			catalog.len(),
			path.display()
		);
		Ok(catalog)
	}

	pub fn products(&self) -> &[Product] {
		&self.products
	}

	pub fn len(&self) -> usize {
		self.products.len()
	}

	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}
}

const BUILTIN: &[(&str, &str, &str, f64)] = &[
	("1", "Chairs", "assets/furniture/oak-dining-chair.jpg", 120.0),
	("2", "Tables", "assets/furniture/walnut-dining-table.jpg", 640.0),
	("3", "Chairs", "assets/furniture/teak-armchair.jpg", 185.0),
	("4", "Beds", "assets/furniture/pine-double-bed.jpg", 520.0),
	("5", "Wardrobes", "assets/furniture/cedar-wardrobe.jpg", 780.0),
	("6", "Tables", "assets/furniture/maple-coffee-table.jpg", 210.0),
	("7", "Shelves", "assets/furniture/birch-bookshelf.jpg", 150.0),
	("8", "Chairs", "assets/furniture/rocking-chair.jpg", 240.0),
	("9", "Beds", "assets/furniture/mahogany-king-bed.jpg", 910.0),
	("10", "Dining Table", "assets/furniture/extendable-dining-table.jpg", 870.0),
	("11", "Shelves", "assets/furniture/floating-wall-shelf.jpg", 45.5),
	("12", "Wardrobes", "assets/furniture/sliding-door-wardrobe.jpg", 960.0),
	("13", "Tables", "assets/furniture/bedside-table.jpg", 95.0),
	("14", "Stools", "assets/furniture/bar-stool.jpg", 60.0),
];
