//! Lifecycle of the per-frame loop, independent of the host's scheduler.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag a scheduled frame checks before arming the next one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// A live token.
	pub fn new() -> Self {
		Self::default()
	}

	/// Cancel every clone of this token.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether any clone was cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Where a [`FrameDriver`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Not yet measured or sampled.
	Uninitialized,
	/// Measured, sampled and drawn once; no loop scheduled.
	Ready,
	/// A frame callback is armed.
	Running,
	/// Loop cancelled, either paused by config or torn down.
	Stopped,
}

/// `Uninitialized → Ready → Running → Stopped`, with a fresh [`CancelToken`]
/// per run so a stale callback can never reschedule itself.
#[derive(Debug)]
pub struct FrameDriver {
	phase: Phase,
	token: CancelToken,
	torn_down: bool,
}

impl Default for FrameDriver {
	fn default() -> Self {
		Self::new()
	}
}

impl FrameDriver {
	/// A driver that has not been readied.
	pub fn new() -> Self {
		Self {
			phase: Phase::Uninitialized,
			token: CancelToken::new(),
			torn_down: false,
		}
	}

	/// Current phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether a loop is armed.
	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	/// First measurement and sampling done.
	pub fn ready(&mut self) -> bool {
		if self.phase != Phase::Uninitialized {
			return false;
		}
		self.phase = Phase::Ready;
		true
	}

	/// Begin a run. Returns the token the new loop must honour, or `None` when
	/// the driver cannot start (not ready, already running, or torn down).
	pub fn start(&mut self) -> Option<CancelToken> {
		if self.torn_down || !matches!(self.phase, Phase::Ready | Phase::Stopped) {
			return None;
		}
		self.token = CancelToken::new();
		self.phase = Phase::Running;
		Some(self.token.clone())
	}

	/// Cancel the current run; it may be started again later.
	pub fn stop(&mut self) -> bool {
		if self.phase != Phase::Running {
			return false;
		}
		self.token.cancel();
		self.phase = Phase::Stopped;
		true
	}

	/// Cancel for good; no later `start` succeeds.
	pub fn teardown(&mut self) {
		self.token.cancel();
		self.torn_down = true;
		self.phase = Phase::Stopped;
	}

	/// Whether [`teardown`](Self::teardown) ran.
	pub fn is_torn_down(&self) -> bool {
		self.torn_down
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn walks_the_lifecycle() {
		let mut driver = FrameDriver::new();
		assert_eq!(driver.phase(), Phase::Uninitialized);
		assert!(driver.start().is_none());

		assert!(driver.ready());
		assert!(!driver.ready());
		let token = driver.start().unwrap();
		assert!(driver.is_running());
		assert!(!token.is_cancelled());

		assert!(driver.stop());
		assert_eq!(driver.phase(), Phase::Stopped);
		assert!(token.is_cancelled());
	}

	#[test]
	fn restart_issues_a_fresh_token() {
		let mut driver = FrameDriver::new();
		driver.ready();
		let first = driver.start().unwrap();
		assert!(driver.start().is_none());
		driver.stop();
		let second = driver.start().unwrap();
		assert!(first.is_cancelled());
		assert!(!second.is_cancelled());
	}

	#[test]
	fn teardown_is_final() {
		let mut driver = FrameDriver::new();
		driver.ready();
		let token = driver.start().unwrap();
		driver.teardown();
		assert!(token.is_cancelled());
		assert!(driver.is_torn_down());
		assert!(driver.start().is_none());
		assert!(!driver.stop());
	}

	#[test]
	fn teardown_before_ready_blocks_start() {
		let mut driver = FrameDriver::new();
		driver.teardown();
		assert!(!driver.ready());
		assert!(driver.start().is_none());
	}
}
