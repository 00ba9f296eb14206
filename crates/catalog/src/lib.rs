//! Catalog data and screen logic for `woodshop`.
//!
//! Nothing here touches the terminal: the crate groups and filters an
//! immutable product list and tracks the screen's query and refresh state so
//! the UI layer only has to draw it.

pub mod catalog;
pub mod clock;
pub mod filter;
pub mod product;
pub mod screen;
pub mod sections;

pub use catalog::{Catalog, CatalogError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use filter::{filter_products, recompute, title_matches};
pub use product::{Product, Rate};
pub use screen::{DEFAULT_REFRESH_DELAY, RefreshPolicy, ScreenController, ScreenState};
pub use sections::{Section, group_by_title};
