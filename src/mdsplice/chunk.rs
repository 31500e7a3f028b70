//! Byte-bounded markdown chunking.
//!
//! [`split_into_chunks`] breaks a markdown string into an ordered list of
//! chunks, each at most `max_bytes` bytes, so large content can be fed to
//! payload-limited consumers one piece at a time. It prefers splitting on
//! paragraph boundaries (`"\n\n"`), then line boundaries, and falls back to
//! hard byte splits for a single oversized line.
//!
//! Chunking is not fence-aware: a fenced code block that straddles a budget
//! boundary is split like any other text. Known limitation.

/// Conservative default chunk budget in bytes.
pub const DEFAULT_CHUNK_BYTES: usize = 30000;

/// Splits markdown into chunks of at most `max_bytes` bytes each.
///
/// Whitespace-only input yields an empty vec. A zero budget falls back to
/// [`DEFAULT_CHUNK_BYTES`] rather than failing; chunk-size misconfiguration
/// degrades gracefully. Chunks come back trimmed, non-empty, and in
/// document order.
pub fn split_into_chunks(markdown: &str, max_bytes: usize) -> Vec<String> {
    if markdown.trim().is_empty() {
        return Vec::new();
    }
    let max_bytes = if max_bytes == 0 {
        DEFAULT_CHUNK_BYTES
    } else {
        max_bytes
    };

    // Normalize newlines for consistent chunking.
    let md = normalize_newlines(markdown);

    let mut chunks = Vec::new();
    let mut cur = String::new();

    for para in md.split("\n\n") {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }

        if para.len() > max_bytes {
            // Flush the current chunk first, then split this paragraph.
            flush(&mut chunks, &mut cur);
            split_paragraph(para, max_bytes, &mut chunks);
            continue;
        }

        let mut add_len = para.len();
        if !cur.is_empty() {
            add_len += 2; // "\n\n"
        }
        if cur.len() + add_len > max_bytes {
            flush(&mut chunks, &mut cur);
        }
        if !cur.is_empty() {
            cur.push_str("\n\n");
        }
        cur.push_str(para);
    }

    flush(&mut chunks, &mut cur);
    chunks
}

/// Line-level pass for a paragraph that exceeds the budget on its own.
fn split_paragraph(para: &str, max_bytes: usize, chunks: &mut Vec<String>) {
    let mut cur = String::new();

    for line in para.split('\n') {
        if line.trim().is_empty() {
            continue;
        }

        if line.len() > max_bytes {
            flush(chunks, &mut cur);
            split_line(line, max_bytes, chunks);
            continue;
        }

        let mut add_len = line.len();
        if !cur.is_empty() {
            add_len += 1; // "\n"
        }
        if cur.len() + add_len > max_bytes {
            flush(chunks, &mut cur);
        }
        if !cur.is_empty() {
            cur.push('\n');
        }
        cur.push_str(line);
    }

    flush(chunks, &mut cur);
}

/// Hard-splits a single oversized line into fixed-size byte slices.
///
/// This is the only path that may cut mid-word. Slice ends snap backward to
/// the nearest char boundary so every piece stays valid UTF-8 without
/// exceeding the budget.
fn split_line(line: &str, max_bytes: usize, chunks: &mut Vec<String>) {
    let mut start = 0;
    while start < line.len() {
        let mut end = (start + max_bytes).min(line.len());
        while end > start && !line.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // Budget smaller than one UTF-8 sequence; take the whole char.
            end = next_char_boundary(line, start);
        }
        let piece = line[start..end].trim();
        if !piece.is_empty() {
            chunks.push(piece.to_string());
        }
        start = end;
    }
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

fn flush(chunks: &mut Vec<String>, cur: &mut String) {
    let text = cur.trim();
    if !text.is_empty() {
        chunks.push(text.to_string());
    }
    cur.clear();
}

pub(crate) fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
