use std::fmt;

use serde::{Deserialize, Serialize};

/// Price shown on a product card.
///
/// Catalog files may carry either a plain number or a preformatted label such
/// as `"$120"`, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rate {
	Amount(f64),
	Label(String),
}

impl fmt::Display for Rate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Amount(value) if value.fract() == 0.0 => write!(f, "{value:.0}"),
			Self::Amount(value) => write!(f, "{value}"),
			Self::Label(label) => f.write_str(label),
		}
	}
}

impl From<f64> for Rate {
	fn from(value: f64) -> Self {
		Self::Amount(value)
	}
}

impl From<&str> for Rate {
	fn from(value: &str) -> Self {
		Self::Label(value.to_string())
	}
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: String,
	/// Grouping key; products sharing a title end up in the same section.
	pub title: String,
	#[serde(rename = "imageUri", alias = "image_uri", alias = "imageuri")]
	pub image_uri: String,
	pub rate: Rate,
}

impl Product {
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		image_uri: impl Into<String>,
		rate: impl Into<Rate>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			image_uri: image_uri.into(),
			rate: rate.into(),
		}
	}
}
