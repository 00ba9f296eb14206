//! Terminal catalog of wood furniture.
//!
//! The screen logic lives in `woodshop-catalog`; this crate draws it with
//! `ratatui` and re-exports the pieces embedders need.

pub mod app_dirs;
pub mod logging;
pub mod ui;

pub use ui::{App, ScreenOptions, Theme, run};
pub use woodshop_catalog::{
	Catalog, CatalogError, Product, Rate, RefreshPolicy, ScreenController, ScreenState, Section,
};
