use crate::types::Marker;

/// Scans raw document text for `[[payload]]` reference markers.
///
/// Single left-to-right pass: each `[[` opens a marker that ends at the
/// nearest following `]]`, and the literal text in between becomes the
/// payload, delimiters stripped. Matches never overlap. A `[[` with no
/// later `]]` emits nothing for that dangling span, a `]]` with no opener
/// is plain text, and a `[[` inside an open marker belongs to the payload.
/// Payloads may span lines.
pub fn extract_markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut line: u32 = 1;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'\n' {
            line += 1;
            i += 1;
            continue;
        }
        if bytes[i] == b'[' && bytes[i + 1] == b'[' {
            match find_closing(bytes, i + 2) {
                Some(close) => {
                    let payload = &text[i + 2..close];
                    markers.push(Marker {
                        payload: payload.to_string(),
                        line,
                    });
                    line += payload.bytes().filter(|&b| b == b'\n').count() as u32;
                    i = close + 2;
                    continue;
                }
                // No closing delimiter anywhere ahead, so no later
                // opener can complete a marker either.
                None => break,
            }
        }
        i += 1;
    }

    markers
}

/// Index of the next `]]` at or after `from`, if any.
fn find_closing(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b']' && bytes[i + 1] == b']' {
            return Some(i);
        }
        i += 1;
    }
    None
}
