use crate::event_map::EventMap;
use crate::events::Events;
use bus::MessageSink;
use input_core::{ClickEvent, InputEvent, Pointer, RawPointerEvent};

/// Dispatches platform events to the handlers of the last render.
///
/// Holds the current [`EventMap`] and one message sink. Before the first
/// [`RenderState::set_event_map`] the map is empty and every event is ignored.
/// An event whose path has no matching handler is a silent no-op: paths
/// legitimately go stale between renders.
pub struct RenderState<M, S> {
    event_map: EventMap<M>,
    sink: S,
}

impl<M: Clone, S: MessageSink<M>> RenderState<M, S> {
    pub fn new(sink: S) -> Self {
        Self {
            event_map: EventMap::new(),
            sink,
        }
    }

    /// Installs the handlers of a new render, replacing the old ones wholesale.
    pub fn set_event_map(&mut self, event_map: EventMap<M>) {
        log::debug!(
            target: "view.render_state",
            "replacing event map ({} -> {} bound paths)",
            self.event_map.len(),
            event_map.len()
        );
        self.event_map = event_map;
    }

    pub fn event_map(&self) -> &EventMap<M> {
        &self.event_map
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn handle_click(&mut self, path: &str, event: &mut impl ClickEvent) {
        let Some(click) = self.events_at(path).and_then(|e| e.on_click.as_ref()) else {
            return;
        };
        if click.ignore_new_tab {
            if event.opens_new_tab() {
                return;
            }
            event.prevent_default();
        }
        if click.stop_propagation {
            event.stop_propagation();
        }
        let message = click.message.clone();
        self.sink.send(message);
    }

    pub fn handle_change(&mut self, path: &str) {
        let Some(message) = self.events_at(path).and_then(|e| e.on_change.clone()) else {
            return;
        };
        self.sink.send(message);
    }

    pub fn handle_input(&mut self, path: &str, event: &impl InputEvent) {
        let Some(handler) = self.events_at(path).and_then(|e| e.on_input.as_ref()) else {
            return;
        };
        let message = handler(event.target_value().to_string());
        self.sink.send(message);
    }

    pub fn handle_pointer_move(&mut self, path: &str, event: &RawPointerEvent) {
        let Some(handler) = self.events_at(path).and_then(|e| e.on_pointer_move.as_ref()) else {
            return;
        };
        let message = handler(Pointer::from_raw(event));
        self.sink.send(message);
    }

    pub fn handle_pointer_down(&mut self, path: &str, event: &RawPointerEvent) {
        let Some(handler) = self.events_at(path).and_then(|e| e.on_pointer_down.as_ref()) else {
            return;
        };
        let message = handler(Pointer::from_raw(event));
        self.sink.send(message);
    }

    fn events_at(&self, path: &str) -> Option<&Events<M>> {
        let events = self.event_map.get(path);
        if events.is_none() {
            log::trace!(target: "view.render_state", "no handlers at path {path:?}");
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ClickMessageData, Events};
    use bus::MessageQueue;
    use core_types::Path;
    use input_core::{RawClickEvent, RawInputEvent};
    use std::sync::mpsc::Sender;

    type TestState = RenderState<String, Sender<String>>;

    fn state_with(path: &str, events: Events<String>) -> (TestState, MessageQueue<String>) {
        let queue = MessageQueue::new();
        let mut state = RenderState::new(queue.sender());
        let mut map = EventMap::new();
        map.insert(Path::root().append_key(path), events);
        state.set_event_map(map);
        (state, queue)
    }

    #[test]
    fn empty_map_ignores_everything() {
        let queue = MessageQueue::new();
        let mut state: TestState = RenderState::new(queue.sender());
        let mut click = RawClickEvent::primary();
        state.handle_click("/nothing", &mut click);
        state.handle_change("/nothing");
        state.handle_input("/nothing", &RawInputEvent::new("x"));
        state.handle_pointer_move("/nothing", &RawPointerEvent::default());
        assert!(queue.drain().is_empty());
        assert!(!click.default_prevented);
    }

    #[test]
    fn plain_click_without_new_tab_policy_leaves_default_action() {
        let (mut state, queue) = state_with("b", Events::click("go".to_string()));
        let mut click = RawClickEvent {
            ctrl_key: true,
            ..RawClickEvent::default()
        };
        state.handle_click("/b", &mut click);
        assert_eq!(queue.drain(), vec!["go".to_string()]);
        assert!(!click.default_prevented);
        assert!(!click.propagation_stopped);
    }

    #[test]
    fn stop_propagation_applies_without_new_tab_policy() {
        let events =
            Events::new().with_click(ClickMessageData::new("go".to_string()).stopping_propagation());
        let (mut state, queue) = state_with("b", events);
        let mut click = RawClickEvent::primary();
        state.handle_click("/b", &mut click);
        assert!(click.propagation_stopped);
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn change_forwards_bound_message() {
        let (mut state, queue) = state_with("c", Events::change("changed".to_string()));
        state.handle_change("/c");
        state.handle_change("/other");
        assert_eq!(queue.drain(), vec!["changed".to_string()]);
    }

    #[test]
    fn missing_binding_kind_is_a_no_op() {
        let (mut state, queue) = state_with("c", Events::change("changed".to_string()));
        state.handle_input("/c", &RawInputEvent::new("typed"));
        state.handle_pointer_down("/c", &RawPointerEvent::default());
        assert!(queue.drain().is_empty());
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl MessageSink<String> for Recorder {
        fn send(&mut self, message: String) {
            self.0.push(message);
        }
    }

    #[test]
    fn sink_state_is_readable_after_dispatch() {
        let mut state = RenderState::new(Recorder::default());
        let mut map = EventMap::new();
        map.insert(Path::root().append_key("b"), Events::click("go".to_string()));
        state.set_event_map(map);
        let mut click = RawClickEvent::primary();
        state.handle_click("/b", &mut click);
        state.handle_click("/b", &mut click);
        state.handle_click("/missing", &mut click);
        assert_eq!(state.sink().0, vec!["go".to_string(), "go".to_string()]);
    }

    #[test]
    fn new_map_replaces_old_bindings() {
        let (mut state, queue) = state_with("old", Events::change("old".to_string()));
        let mut map = EventMap::new();
        map.insert(Path::root().append_key("new"), Events::change("new".to_string()));
        state.set_event_map(map);
        state.handle_change("/old");
        state.handle_change("/new");
        assert_eq!(queue.drain(), vec!["new".to_string()]);
        assert_eq!(state.event_map().len(), 1);
    }
}
