//! Canned answers.

/// The markdown answer streamed back for `question`.
///
/// Touches every construct the widget formats (emphasis, list, code block
/// with characters needing escapes, link) and a few multi-byte characters.
pub fn compose(question: &str) -> String {
    format!(
        "You asked: **{question}**\n\
         \n\
         This answer is streamed by *mock-answer* for local development.\n\
         \n\
         * it arrives in small chunks\n\
         * chunk boundaries may split characters like é or ☕\n\
         \n\
         ```rust\n\
         fn main() {{\n    \
             if 1 < 2 && \"a\" != \"b\" {{\n        \
                 println!(\"héllo ☕\");\n    \
             }}\n\
         }}\n\
         ```\n\
         \n\
         See [the widget docs](https://example.com/sitechat) for more."
    )
}

/// Cut `bytes` into pieces of `size` bytes (the last one may be shorter).
pub fn split_bytes(bytes: &[u8], size: usize) -> Vec<Vec<u8>> {
    bytes.chunks(size.max(1)).map(<[u8]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_echoes_question() {
        assert!(compose("pricing?").starts_with("You asked: **pricing?**\n\n"));
    }

    #[test]
    fn answer_contains_a_closed_code_block() {
        let text = compose("x");
        assert_eq!(text.matches("```").count(), 2);
        assert!(text.contains("```rust\nfn main() {\n    if 1 < 2"));
    }

    #[test]
    fn split_preserves_bytes() {
        let bytes = "é☕".as_bytes();
        let pieces = split_bytes(bytes, 2);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces.concat(), bytes);
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        assert_eq!(split_bytes(b"abc", 0).len(), 3);
    }
}
