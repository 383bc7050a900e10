//! Greedy regrouping of sentences into bounded speech chunks.

/// Accumulate consecutive sentences into chunks whose length stays within
/// `max_chars` (counting a single joining space). A lone sentence longer
/// than `max_chars` is still emitted intact as its own chunk, never split
/// or truncated.
///
/// Concatenating the chunks in order reproduces the sentence sequence
/// exactly: nothing is lost, duplicated, or reordered.
pub fn chunk_sentences(sentences: &[String], max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        if current.is_empty() {
            current.push_str(sentence);
        } else if current.len() + 1 + sentence.len() <= max_chars {
            current.push(' ');
            current.push_str(sentence);
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(sentence);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split_sentences;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_sentences_under_the_maximum() {
        let sentences = owned(&["One.", "Two.", "Three."]);
        assert_eq!(chunk_sentences(&sentences, 10), vec!["One. Two.", "Three."]);
    }

    #[test]
    fn each_sentence_gets_its_own_chunk_when_budget_is_tight() {
        let sentences = split_sentences("Hello world. This is great! Short.");
        let chunks = chunk_sentences(&sentences, 15);
        assert_eq!(chunks, vec!["Hello world.", "This is great!", "Short."]);
    }

    #[test]
    fn overlong_sentence_is_kept_intact() {
        let sentences = owned(&["Tiny.", "This single sentence is far too long.", "End."]);
        let chunks = chunk_sentences(&sentences, 10);
        assert_eq!(
            chunks,
            vec!["Tiny.", "This single sentence is far too long.", "End."]
        );
        // The over-long chunk is exactly one sentence, untruncated.
        assert!(chunks[1].len() > 10);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_sentences(&[], 100).is_empty());
    }

    #[test]
    fn chunks_preserve_sentence_order_and_content() {
        let text = "Alpha beta. Gamma! Delta epsilon zeta? Eta. Theta iota kappa lambda. Mu";
        let sentences = split_sentences(text);
        for max in [1, 8, 16, 32, 1000] {
            let chunks = chunk_sentences(&sentences, max);
            assert_eq!(chunks.join(" "), sentences.join(" "), "max={max}");
            for chunk in &chunks {
                // Within budget, or a single sentence that alone exceeds it.
                assert!(
                    chunk.len() <= max || sentences.contains(chunk),
                    "max={max} chunk={chunk:?}"
                );
            }
        }
    }
}
