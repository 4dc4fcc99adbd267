/// Split text into chunks of at most `budget` characters, packing whole
/// words greedily.
///
/// A budget of zero or less disables chunking, as does text already within
/// budget. Words are never split; a single word longer than the budget
/// becomes its own over-budget chunk. Chunk boundaries rejoin words with
/// single spaces, so newlines survive only in single-chunk documents.
pub fn chunk_text(text: &str, budget: i64) -> Vec<String> {
    if budget <= 0 || text.chars().count() as i64 <= budget {
        return vec![text.to_string()];
    }
    let budget = budget as usize;

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= budget {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
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

    #[test]
    fn test_within_budget_single_chunk() {
        assert_eq!(chunk_text("short text", 100), vec!["short text"]);
    }

    #[test]
    fn test_zero_budget_disables_chunking() {
        let long = "word ".repeat(500);
        assert_eq!(chunk_text(&long, 0), vec![long.clone()]);
        assert_eq!(chunk_text(&long, -1), vec![long]);
    }

    #[test]
    fn test_greedy_packing() {
        // "aa bb cc dd" is 11 chars; "aa bb cc" fills the 10-char budget,
        // "dd" spills into the next chunk
        assert_eq!(chunk_text("aa bb cc dd", 10), vec!["aa bb cc", "dd"]);
    }

    #[test]
    fn test_words_never_split() {
        let chunks = chunk_text("tiny supercalifragilistic tiny", 8);
        assert!(chunks.contains(&"supercalifragilistic".to_string()));
        for chunk in &chunks {
            for word in chunk.split_whitespace() {
                assert!(["tiny", "supercalifragilistic"].contains(&word));
            }
        }
    }

    #[test]
    fn test_every_chunk_within_budget_except_long_words() {
        let text = "one two three four five six seven eight nine ten";
        for chunk in chunk_text(text, 12) {
            assert!(chunk.chars().count() <= 12, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn test_no_content_lost() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let rejoined = chunk_text(text, 15).join(" ");
        assert_eq!(rejoined, text);
    }
}
