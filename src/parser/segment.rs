use std::sync::LazyLock;

use regex::Regex;

/// Digits and a closing parenthesis at the start of a line, plus any
/// whitespace that follows.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\)\s*").expect("regex for record markers"));

/// Split text into the blocks that follow each record marker.
///
/// A block runs from the end of its marker to the start of the next marker,
/// or to the end of the text. Text before the first marker is dropped. The
/// numbers themselves are ignored, so `1)`, `3)`, `2)` still yield three
/// blocks in textual order.
pub fn segment(text: &str) -> Vec<&str> {
    let markers: Vec<_> = MARKER.find_iter(text).collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            &text[m.end()..end]
        })
        .collect()
}
