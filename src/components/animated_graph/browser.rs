//! Host scheduling and event registration, released when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use super::driver::CancelToken;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop with at most one pending callback.
///
/// The next frame is armed only after the current tick returns, and only while
/// the token is live. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
	window: Window,
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
	token: CancelToken,
}

impl FrameLoop {
	/// Schedule the first frame. `None` if the host refuses the request.
	pub fn start(window: Window, token: CancelToken, mut tick: impl FnMut() + 'static) -> Option<Self> {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner, token_inner, window_inner) = (
			callback.clone(),
			pending.clone(),
			token.clone(),
			window.clone(),
		);

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if token_inner.is_cancelled() {
				return;
			}
			tick();
			if token_inner.is_cancelled() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				match window_inner.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => pending_inner.set(Some(id)),
					Err(err) => warn!("could not schedule next frame: {err:?}"),
				}
			}
		}));

		let first = match *callback.borrow() {
			Some(ref cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
			None => return None,
		};
		match first {
			Ok(id) => pending.set(Some(id)),
			Err(err) => {
				warn!("could not schedule first frame: {err:?}");
				callback.borrow_mut().take();
				return None;
			}
		}

		Some(Self {
			window,
			callback,
			pending,
			token,
		})
	}

	/// Cancel the token and the pending frame, if any.
	pub fn cancel(&mut self) {
		self.token.cancel();
		if let Some(id) = self.pending.take() {
			if let Err(err) = self.window.cancel_animation_frame(id) {
				warn!("could not cancel frame {id}: {err:?}");
			}
		}
		// Breaks the callback's reference to itself.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// A window event listener that deregisters itself when dropped.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Attach `handler` for `event`. `None` if registration fails.
	pub fn new(window: &Window, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		if let Err(err) =
			window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		{
			warn!("could not listen for {event}: {err:?}");
			return None;
		}
		Some(Self {
			window: window.clone(),
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
