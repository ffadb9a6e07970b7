use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// Characters escaped by JavaScript's `encodeURI`: controls, space, the
/// quote/bracket/caret/backtick set below, and (implicitly) all non-ASCII
/// bytes. Everything else passes through, so field-separating commas and
/// the URI scheme punctuation in the prefix stay literal while newlines
/// become `%0A`.
const ENCODE_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'[')
    .add(b']');

/// Wraps serialized CSV text as a downloadable data URI.
pub fn to_data_uri(csv_text: &str) -> String {
    let content = format!("{DATA_URI_PREFIX}{csv_text}");
    utf8_percent_encode(&content, ENCODE_URI).to_string()
}
