use crate::prelude::*;
use crate::prelude::JSONPathSegment::*;

const ENTRIES: &[JSONPathSegment<'static>] = &[Key("feed"), Key("entry")];
const AUTHOR_NAME: &[JSONPathSegment<'static>] =
    &[Key("feed"), Key("author"), Key("name"), Key("label")];

/// Maps an iTunes RSS feed document into its entries, in feed order.
///
/// A missing or empty `feed.entry` gives an empty list. When a feed holds a
/// single app the RSS endpoint emits `entry` as a bare object rather than a
/// one element array, both are accepted.
pub fn parse_app_items(json: &Value) -> Vec<AppItem> {
    match json.value_at(ENTRIES) {
        Some(Value::Array(entries)) => entries.iter().map(AppItem::from_entry).collect(),
        Some(entry @ Value::Object(_)) => vec![AppItem::from_entry(entry)],
        _ => Vec::new(),
    }
}

/// The feed author's display name, at `feed.author.name.label`.
pub fn parse_feed_author_name(json: &Value) -> Option<String> {
    json.string_at(AUTHOR_NAME)
}
