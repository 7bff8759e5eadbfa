use crate::element::{ViewChildren, ViewElement};
use crate::events::Events;
use core_types::Path;
use std::collections::HashMap;

/// Handlers by element path. Look up with `&str` paths straight from the platform.
pub type EventMap<M> = HashMap<Path, Events<M>>;

/// Flattens the handlers in `children` into a path-keyed map.
///
/// Every keyed child extends the running path by `"/" + key`, starting from the
/// root path `""`. Only elements that carry events get an entry. Should the same
/// path come up twice, the later element wins.
pub fn build_event_map<M: Clone>(children: &ViewChildren<M>) -> EventMap<M> {
    let mut map = EventMap::new();
    collect_children(&mut map, &Path::root(), children);
    map
}

fn collect_children<M: Clone>(map: &mut EventMap<M>, path: &Path, children: &ViewChildren<M>) {
    let ViewChildren::ElementList(list) = children else {
        return;
    };
    for (key, element) in list.iter() {
        collect_element(map, path.append_key(key), element);
    }
}

fn collect_element<M: Clone>(map: &mut EventMap<M>, path: Path, element: &ViewElement<M>) {
    collect_children(map, &path, &element.children);
    if let Some(events) = &element.events {
        map.insert(path, events.clone());
    }
}
