//! Terminal presentation of the catalog screen.

mod actions;
mod app;
mod config;
mod input;
mod logs;
mod render;
mod runtime;
pub mod theme;

pub use app::App;
pub use config::{DEFAULT_TITLE, ScreenOptions};
pub use input::SearchInput;
pub use runtime::run;
pub use theme::Theme;
