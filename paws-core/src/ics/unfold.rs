//! Content line unfolding (RFC 5545 §3.1).

/// Splits a raw attachment into logical content lines.
///
/// Physical lines end at CRLF. A physical line whose first byte is SPACE or
/// HTAB continues the previous logical line: the whitespace byte is dropped
/// and the rest is appended with no separator. Joining happens on bytes, so
/// a fold that splits a UTF-8 sequence still decodes correctly.
///
/// A final line without a CRLF terminator is kept. Invalid UTF-8 is replaced
/// with U+FFFD.
pub fn unfold(input: &[u8]) -> Vec<String> {
    let mut lines: Vec<Vec<u8>> = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i + 1 < input.len() {
        if input[i] == b'\r' && input[i + 1] == b'\n' {
            push_physical_line(&mut lines, &input[start..i]);
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }

    if start < input.len() {
        push_physical_line(&mut lines, &input[start..]);
    }

    lines
        .into_iter()
        .map(|line| String::from_utf8_lossy(&line).into_owned())
        .collect()
}

fn push_physical_line(lines: &mut Vec<Vec<u8>>, line: &[u8]) {
    match (line.first(), lines.last_mut()) {
        (Some(b' ' | b'\t'), Some(last)) => last.extend_from_slice(&line[1..]),
        // Nothing to continue yet
        (Some(b' ' | b'\t'), None) => lines.push(line[1..].to_vec()),
        _ => lines.push(line.to_vec()),
    }
}
