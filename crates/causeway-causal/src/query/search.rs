//! Case-insensitive substring search over the event corpus.

use causeway_core::event::Event;

use crate::store::EventStore;

/// Events whose component, type, any data key, or any stringified data value
/// contains `query` (case-insensitive). Insertion order, each event once.
pub fn search(store: &EventStore, query: &str) -> Vec<Event> {
    let needle = query.to_lowercase();
    store
        .iter()
        .filter(|event| matches(event, &needle))
        .cloned()
        .collect()
}

fn matches(event: &Event, needle: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(needle);
    hit(&event.component)
        || hit(&event.event_type)
        || event
            .data
            .iter()
            .any(|(key, value)| hit(key) || hit(&value.to_string()))
}
