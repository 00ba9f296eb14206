//! State and event handlers for the catalog screen.
//!
//! [`ScreenController`] owns the [`ScreenState`] and reacts to the two
//! user-facing events: editing the search text and requesting a refresh.
//! Refreshes are simulated: the controller records a deadline and the host
//! loop calls [`ScreenController::tick`] until the deadline passes.

use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::filter::recompute;
use crate::sections::{Section, group_by_title};

/// Delay applied to a simulated refresh unless configured otherwise.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_secs(2);

/// How a refresh behaves once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
	pub delay: Duration,
	/// Also reset the search text when a refresh completes.
	pub clear_query: bool,
}

impl Default for RefreshPolicy {
	fn default() -> Self {
		Self {
			delay: DEFAULT_REFRESH_DELAY,
			clear_query: false,
		}
	}
}

/// Everything the screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
	search_query: String,
	sections: Vec<Section>,
	refreshing: bool,
}

impl ScreenState {
	pub fn search_query(&self) -> &str {
		&self.search_query
	}

	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	pub fn refreshing(&self) -> bool {
		self.refreshing
	}

	/// Number of products across all visible sections.
	pub fn visible_count(&self) -> usize {
		self.sections.iter().map(|section| section.items.len()).sum()
	}
}

pub struct ScreenController<C = SystemClock> {
	catalog: Catalog,
	state: ScreenState,
	policy: RefreshPolicy,
	clock: C,
	refresh_deadline: Option<Instant>,
	mounted: bool,
}

impl ScreenController<SystemClock> {
	/// Mount the screen over `catalog` using the wall clock.
	pub fn new(catalog: Catalog, policy: RefreshPolicy) -> Self {
		Self::with_clock(catalog, policy, SystemClock)
	}
}

impl<C: Clock> ScreenController<C> {
	pub fn with_clock(catalog: Catalog, policy: RefreshPolicy, clock: C) -> Self {
		let sections = group_by_title(catalog.products());
		Self {
			catalog,
			state: ScreenState {
				search_query: String::new(),
				sections,
				refreshing: false,
			},
			policy,
			clock,
			refresh_deadline: None,
			mounted: true,
		}
	}

	pub fn state(&self) -> &ScreenState {
		&self.state
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn policy(&self) -> RefreshPolicy {
		self.policy
	}

	pub fn product_count(&self) -> usize {
		self.catalog.len()
	}

	pub fn is_mounted(&self) -> bool {
		self.mounted
	}

	/// Store `query` verbatim and re-derive the visible sections.
	pub fn on_search_change(&mut self, query: impl Into<String>) {
		if !self.mounted {
			return;
		}
		self.state.search_query = query.into();
		self.state.sections = recompute(&self.state.search_query, &self.catalog);
		log::debug!(
			"query {:?} matched {} products in {} sections",
			self.state.search_query,
			self.state.visible_count(),
			self.state.sections.len()
		);
	}

	/// Start a simulated refresh. A refresh already in flight is restarted.
	pub fn on_refresh(&mut self) {
		if !self.mounted {
			return;
		}
		if self.refresh_deadline.is_some() {
			log::debug!("refresh restarted before completing");
		}
		self.state.refreshing = true;
		self.refresh_deadline = Some(self.clock.now() + self.policy.delay);
		log::info!("refresh started ({} ms)", self.policy.delay.as_millis());
	}

	/// Time left until the pending refresh completes.
	pub fn refresh_remaining(&self) -> Option<Duration> {
		let deadline = self.refresh_deadline?;
		Some(deadline.saturating_duration_since(self.clock.now()))
	}

	/// Complete the pending refresh if its deadline has passed.
	///
	/// Returns `true` when a refresh finished during this call.
	pub fn tick(&mut self) -> bool {
		let Some(deadline) = self.refresh_deadline else {
			return false;
		};
		if !self.mounted || self.clock.now() < deadline {
			return false;
		}
		self.refresh_deadline = None;
		if self.policy.clear_query {
			self.state.search_query.clear();
		}
		self.state.sections = group_by_title(self.catalog.products());
		self.state.refreshing = false;
		log::info!("refresh finished with {} products", self.catalog.len());
		true
	}

	/// Tear the screen down. Pending refreshes are dropped and later events
	/// are ignored.
	pub fn unmount(&mut self) {
		if self.refresh_deadline.take().is_some() {
			log::debug!("dropping pending refresh on unmount");
		}
		self.mounted = false;
	}
}
