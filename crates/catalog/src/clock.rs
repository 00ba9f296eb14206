use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time for deadline checks.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Rc<Cell<Instant>>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self {
			now: Rc::new(Cell::new(Instant::now())),
		}
	}

	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.now.get()
	}
}

impl<C: Clock + ?Sized> Clock for Box<C> {
	fn now(&self) -> Instant {
		(**self).now()
	}
}
