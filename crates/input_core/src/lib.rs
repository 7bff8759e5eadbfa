//! # input_core
//!
//! UI-agnostic raw event layer for the view dispatcher.
//!
//! This crate describes the browser-originated signals the dispatcher consumes:
//! - [`ClickEvent`]: modifier keys, mouse button, default-action and bubbling control
//! - [`InputEvent`]: the current text value of the target control
//! - [`RawPointerEvent`]: platform pointer metrics, normalized into a [`Pointer`]
//!
//! ## Design Principles
//!
//! Obtaining these events from an actual platform (a DOM binding, a windowing
//! toolkit, a test script) is the integration layer's job. The traits here are
//! the seam: implement [`ClickEvent`] and [`InputEvent`] for the platform's
//! event types, or use the `Raw*` structs directly.
//!
//! ```
//! use input_core::{ClickEvent, RawClickEvent};
//!
//! let mut event = RawClickEvent {
//!     ctrl_key: true,
//!     ..RawClickEvent::default()
//! };
//! assert!(event.opens_new_tab());
//! event.prevent_default();
//! assert!(event.default_prevented);
//! ```

mod event;
mod pointer;

pub use event::{ClickEvent, InputEvent, PRIMARY_BUTTON, RawClickEvent, RawInputEvent};
pub use pointer::{Pointer, PointerKind, RawPointerEvent};
