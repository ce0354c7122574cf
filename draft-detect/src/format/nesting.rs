//! Nesting-depth pre-checks for the recursive parsers.
//!
//! `roxmltree` and `protox-parse` recurse once per nesting level, so deeply
//! nested input can exhaust the stack before either reports an error. These
//! scanners run first and reject anything nested deeper than
//! [`MAX_NESTING_DEPTH`]. They only need to count at least as deep as the
//! parser would; over-counting malformed input is harmless.

/// Deepest element or bracket nesting handed to a parser. Matches the
/// recursion limit `serde_json` applies to JSON.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Index just past the first `pattern` at or after `from`, or the end of input.
fn skip_past(bytes: &[u8], from: usize, pattern: &[u8]) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.windows(pattern.len()).position(|w| w == pattern))
        .map_or(bytes.len(), |pos| from + pos + pattern.len())
}

/// Index of the `>` closing the start tag opened at `start`, honoring quoted
/// attribute values.
fn start_tag_end(bytes: &[u8], start: usize) -> usize {
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        match (quote, b) {
            (None, b'"' | b'\'') => quote = Some(b),
            (Some(q), _) if q == b => quote = None,
            (None, b'>') => return i,
            _ => {}
        }
    }
    bytes.len()
}

/// Whether XML elements in `content` nest deeper than `limit`.
#[must_use]
pub fn xml_depth_exceeds(content: &str, limit: usize) -> bool {
    let bytes = content.as_bytes();
    let mut depth: usize = 0;
    let mut i = 0;

    while let Some(offset) = bytes
        .get(i..)
        .and_then(|rest| rest.iter().position(|&b| b == b'<'))
    {
        i += offset;
        let rest = &bytes[i..];
        if rest.starts_with(b"<!--") {
            i = skip_past(bytes, i + 4, b"-->");
        } else if rest.starts_with(b"<![CDATA[") {
            i = skip_past(bytes, i + 9, b"]]>");
        } else if rest.starts_with(b"<!") || rest.starts_with(b"<?") {
            i = skip_past(bytes, i + 2, b">");
        } else if rest.starts_with(b"</") {
            depth = depth.saturating_sub(1);
            i = skip_past(bytes, i + 2, b">");
        } else {
            let end = start_tag_end(bytes, i);
            if end >= bytes.len() {
                break;
            }
            let self_closing = end > i + 1 && bytes.get(end - 1) == Some(&b'/');
            if !self_closing {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            i = end + 1;
        }
    }
    false
}

/// Index just past the string literal opened at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => i += 2,
            b'\n' => return i + 1,
            _ if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Whether brackets of any kind (`{ [ ( <`) in `content` nest deeper than
/// `limit`, ignoring string literals and comments.
#[must_use]
pub fn bracket_depth_exceeds(content: &str, limit: usize) -> bool {
    let bytes = content.as_bytes();
    let mut depth: usize = 0;
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        let next = bytes.get(i + 1).copied();
        match (b, next) {
            (b'"' | b'\'', _) => i = skip_string(bytes, i),
            (b'/', Some(b'/')) => i = skip_past(bytes, i + 2, b"\n"),
            (b'/', Some(b'*')) => i = skip_past(bytes, i + 2, b"*/"),
            (b'{' | b'[' | b'(' | b'<', _) => {
                depth += 1;
                if depth > limit {
                    return true;
                }
                i += 1;
            }
            (b'}' | b']' | b')' | b'>', _) => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ => i += 1,
        }
    }
    false
}
