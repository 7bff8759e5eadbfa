//! Keyed view trees with event handlers.
//!
//! A [`View`] renders to markup through the `html` crate and, separately,
//! flattens its handlers into an [`EventMap`] keyed by element [`Path`]. The
//! [`RenderState`] holds the map of the latest render and turns platform
//! events into application messages.

mod element;
mod event_map;
mod events;
mod render_state;
mod view;

pub use crate::element::{KeyedChildren, ViewChildren, ViewElement, ViewError};
pub use crate::event_map::{EventMap, build_event_map};
pub use crate::events::{ClickMessageData, Events, InputHandler, PointerHandler};
pub use crate::render_state::RenderState;
pub use crate::view::View;
pub use core_types::Path;
