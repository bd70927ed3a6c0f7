//! Path and query-string assembly shared by the operation modules.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::form_urlencoded;

/// Characters escaped inside one path segment. `/` and `?` are included so an
/// id can never address a different endpoint.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `path/segment`, with `segment` percent-encoded.
pub(crate) fn with_segment(path: &str, segment: &str) -> String {
    format!("{path}/{}", utf8_percent_encode(segment, PATH_SEGMENT))
}

/// Append `pairs` to `path` as a form-encoded query string. Returns `path`
/// unchanged when there are no pairs, so no dangling `?` is produced.
pub(crate) fn with_query<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut empty = true;
    for (name, value) in pairs {
        serializer.append_pair(name, &value);
        empty = false;
    }
    if empty {
        return path.to_string();
    }
    format!("{path}?{}", serializer.finish())
}

/// String form of a JSON value for use as a query parameter: strings are
/// used as-is, arrays are comma-joined, everything else uses its JSON text.
pub(crate) fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
