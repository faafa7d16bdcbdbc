//! Token-budgeted text chunking.
//!
//! Requests must stay under the model's context window, so input text is
//! split into chunks bounded by an estimated token count. The estimate uses
//! the usual four-bytes-per-token average for OpenAI-family BPEs, which is
//! close enough for budgeting on source code and prose.

const BYTES_PER_TOKEN: usize = 4;

/// Rough token count of a text for budget purposes
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(BYTES_PER_TOKEN)
}

/// Split text into chunks that each fit the given token budget.
///
/// Boundaries land on line breaks where possible; a single line larger than
/// the whole budget is split at character boundaries. Concatenating the
/// returned chunks reproduces the input exactly.
pub fn chunk_text(text: &str, max_tokens: usize) -> Vec<String> {
    let budget_bytes = max_tokens.saturating_mul(BYTES_PER_TOKEN).max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if line.len() > budget_bytes {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            split_long_line(line, budget_bytes, &mut chunks);
            continue;
        }

        if current.len() + line.len() > budget_bytes && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split a single oversized line at character boundaries
fn split_long_line(line: &str, budget_bytes: usize, chunks: &mut Vec<String>) {
    let mut piece = String::new();

    for ch in line.chars() {
        if piece.len() + ch.len_utf8() > budget_bytes && !piece.is_empty() {
            chunks.push(std::mem::take(&mut piece));
        }
        piece.push(ch);
    }

    if !piece.is_empty() {
        chunks.push(piece);
    }
}
