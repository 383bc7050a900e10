//! Sentence segmentation for speech dispatch.
//!
//! A sentence boundary is recognized only where terminal punctuation
//! (`.`, `!`, `?`) is followed by whitespace. Whatever trails the last
//! boundary is emitted as a final, unpunctuated sentence, so no input
//! text is ever dropped.

/// Split text into sentences, each trimmed and ending in one terminal
/// punctuation mark (except a possible unpunctuated trailing fragment).
///
/// Pure and stateless: the same input always yields the same output.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            // Only a following whitespace marks a boundary; "3.14" or
            // "e.g.x" keep accumulating.
            if chars.peek().is_some_and(|c| c.is_whitespace()) {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }
    }

    let remainder = current.trim();
    if !remainder.is_empty() {
        sentences.push(remainder.to_string());
    }

    sentences
}

/// Clamp a prompt to `max_chars` characters, preferring to cut at the last
/// complete sentence inside the window. Inputs already within the limit
/// pass through unchanged; a window with no terminal punctuation is
/// hard-cut at `max_chars`.
pub fn truncate_to_last_sentence(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let truncated: String = input.chars().take(max_chars).collect();
    match truncated.rfind(['.', '!', '?']) {
        // Terminal marks are single-byte, so the inclusive slice is safe.
        Some(idx) if idx > 0 => truncated[..=idx].to_string(),
        _ => truncated,
    }
}
