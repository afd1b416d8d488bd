//! Placeholder table shielding finished markup from later passes.
//!
//! A pass that produces final markup (a code block, a math container) puts
//! it in the [`Stash`] and leaves an opaque token in the text instead. The
//! tokens are built from private-use characters, contain no markdown
//! syntax, and are swapped back by the last pass.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const INLINE_OPEN: char = '\u{E000}';
const BLOCK_OPEN: char = '\u{E001}';
const CLOSE: char = '\u{E002}';

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{E000}\x{E001}](\d+)\x{E002}").expect("PLACEHOLDER regex pattern is valid")
});

/// How stashed markup behaves in its surrounding line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Flows inside a paragraph (inline code).
    Inline,
    /// Stands on its own; lines holding one are never wrapped in `<p>`.
    Block,
}

/// Markup set aside while the remaining passes run.
#[derive(Debug, Default)]
pub struct Stash {
    entries: Vec<String>,
}

impl Stash {
    /// Store `markup` and return the token that stands in for it.
    pub fn put(&mut self, slot: Slot, markup: String) -> String {
        let index = self.entries.len();
        self.entries.push(markup);
        let open = match slot {
            Slot::Inline => INLINE_OPEN,
            Slot::Block => BLOCK_OPEN,
        };
        format!("{open}{index}{CLOSE}")
    }

    /// Replace every token in `text` with its stashed markup.
    ///
    /// Stashed markup may itself hold tokens stored earlier (inline code
    /// inside a math block); those are restored too. Unknown tokens are
    /// dropped.
    pub fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.entries.get(index))
                    .map(|markup| self.restore(markup))
                    .unwrap_or_default()
            })
            .into_owned()
    }

    /// Number of stashed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stashed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `c` is one of the characters tokens are built from.
pub fn is_sentinel(c: char) -> bool {
    matches!(c, INLINE_OPEN | BLOCK_OPEN | CLOSE)
}

/// Whether `line` holds a block token.
pub fn holds_block(line: &str) -> bool {
    line.contains(BLOCK_OPEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_restore() {
        let mut stash = Stash::default();
        let token = stash.put(Slot::Inline, "<code>x</code>".into());
        let text = format!("a {token} b");
        assert_eq!(stash.restore(&text), "a <code>x</code> b");
        assert_eq!(stash.len(), 1);
    }

    #[test]
    fn block_tokens_are_detectable() {
        let mut stash = Stash::default();
        let inline = stash.put(Slot::Inline, String::new());
        let block = stash.put(Slot::Block, String::new());
        assert!(!holds_block(&inline));
        assert!(holds_block(&block));
        assert!(inline.chars().any(is_sentinel));
    }

    #[test]
    fn nested_tokens_are_restored() {
        let mut stash = Stash::default();
        let inner = stash.put(Slot::Inline, "<code>a</code>".into());
        let outer = stash.put(Slot::Block, format!("<div>{inner}</div>"));
        assert_eq!(stash.restore(&outer), "<div><code>a</code></div>");
    }

    #[test]
    fn unknown_token_is_dropped() {
        let stash = Stash::default();
        assert_eq!(stash.restore("x\u{E000}7\u{E002}y"), "xy");
    }
}
