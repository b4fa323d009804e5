use crate::prelude::*;

/// One step of a path into a JSON document: either an object key or an
/// array index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JSONPathSegment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Navigates a JSON document segment by segment, yielding `None` as soon as
/// a key is missing, an index is out of bounds or the value has the wrong
/// shape for the segment.
pub trait JSONPathLookup {
    fn value_at(&self, path: &[JSONPathSegment<'_>]) -> Option<&Value>;

    /// Only JSON strings are returned, numbers and bools are not coerced.
    fn string_at(&self, path: &[JSONPathSegment<'_>]) -> Option<String> {
        self.value_at(path)
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }
}

impl JSONPathLookup for Value {
    fn value_at(&self, path: &[JSONPathSegment<'_>]) -> Option<&Value> {
        path.iter().try_fold(self, |value, segment| match segment {
            JSONPathSegment::Key(key) => value.as_object()?.get(*key),
            JSONPathSegment::Index(index) => value.as_array()?.get(*index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::JSONPathSegment::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn follows_keys_and_indices() {
        let json = json!({ "a": [{ "b": "c" }] });
        assert_eq!(
            json.string_at(&[Key("a"), Index(0), Key("b")]),
            Some("c".to_owned())
        );
    }

    #[test]
    fn missing_segments_are_absent() {
        let json = json!({ "a": [{ "b": "c" }] });
        assert_eq!(json.value_at(&[Key("x")]), None);
        assert_eq!(json.value_at(&[Key("a"), Index(3)]), None);
        assert_eq!(json.value_at(&[Key("a"), Key("b")]), None);
        assert_eq!(json.value_at(&[Index(0)]), None);
    }

    #[test]
    fn empty_path_is_the_value_itself() {
        let json = json!(42);
        assert_eq!(json.value_at(&[]), Some(&json));
    }

    #[test]
    fn non_string_leaf_is_not_a_string() {
        let json = json!({ "label": 5 });
        assert_eq!(json.string_at(&[Key("label")]), None);
    }
}
