//! The ordered rewrite passes behind [`crate::format`].
//!
//! Each pass takes the output of the one before it. Order matters: code
//! regions are handled first and stashed so that emphasis, list and link
//! rewriting never reach inside them, and paragraph wrapping runs last so it
//! can recognise every block-level tag produced earlier.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;
use crate::stash::{self, Slot, Stash};

/// Signature shared by every pass.
pub type PassFn = fn(&str, &mut Stash) -> String;

/// One named rewrite step.
pub struct Pass {
    /// Stable name, used by [`pass`] lookups.
    pub name: &'static str,
    /// The rewrite itself.
    pub apply: PassFn,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).finish()
    }
}

/// Every pass, in execution order.
pub const PASSES: &[Pass] = &[
    Pass { name: "strip_sentinels", apply: strip_sentinels },
    Pass { name: "fenced_code", apply: fenced_code },
    Pass { name: "inline_code", apply: inline_code },
    Pass { name: "display_math", apply: display_math },
    Pass { name: "headings_and_emphasis", apply: headings_and_emphasis },
    Pass { name: "bullet_lists", apply: bullet_lists },
    Pass { name: "links", apply: links },
    Pass { name: "paragraphs", apply: paragraphs },
    Pass { name: "restore", apply: restore },
];

/// Look a pass up by name.
pub fn pass(name: &str) -> Option<&'static Pass> {
    PASSES.iter().find(|p| p.name == name)
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new($re).expect(concat!(stringify!($name), " regex pattern is valid"))
        });
    };
}

pattern!(FENCED_CODE, r"```(\w+)?\n((?s:.*?))```");
pattern!(INLINE_CODE, r"`([^`]+)`");
pattern!(DISPLAY_MATH, r"\$\$((?s:.*?))\$\$");
pattern!(H3, r"(?m)^### (.*)$");
pattern!(H2, r"(?m)^## (.*)$");
pattern!(H1, r"(?m)^# (.*)$");
pattern!(BOLD, r"\*\*(.+?)\*\*");
pattern!(ITALIC, r"\*([^\s*](?:[^*\n]*[^\s*])?)\*");
pattern!(LINK, r"\[([^\]]+)\]\(([^)]+)\)");
pattern!(BLOCK_TAG, r"</?(h\d|ul|ol|li|blockquote|pre|img|div)\b");

/// Remove the private-use characters the stash builds its tokens from, so
/// input text can never forge one.
///
/// This is the one change made to text with no recognised constructs:
/// U+E000, U+E001 and U+E002 are dropped from every answer. They have no
/// standard glyph, so nothing visible is lost.
fn strip_sentinels(text: &str, _: &mut Stash) -> String {
    text.chars().filter(|c| !stash::is_sentinel(*c)).collect()
}

/// ```` ```lang\n...``` ```` → `<pre><code class="language-lang">`, content
/// trimmed and escaped. An unclosed fence is left as it is.
fn fenced_code(text: &str, stash: &mut Stash) -> String {
    FENCED_CODE
        .replace_all(text, |caps: &Captures<'_>| {
            let lang = caps.get(1).map_or("", |m| m.as_str());
            let code = escape_html(caps[2].trim());
            stash.put(
                Slot::Block,
                format!("<pre><code class=\"language-{lang}\">{code}</code></pre>"),
            )
        })
        .into_owned()
}

/// `` `x` `` → `<code>x</code>`, content escaped like fenced blocks.
fn inline_code(text: &str, stash: &mut Stash) -> String {
    INLINE_CODE
        .replace_all(text, |caps: &Captures<'_>| {
            stash.put(Slot::Inline, format!("<code>{}</code>", escape_html(&caps[1])))
        })
        .into_owned()
}

/// `$$...$$` → a `latex-container` div, content passed through untouched
/// for a client-side renderer.
fn display_math(text: &str, stash: &mut Stash) -> String {
    DISPLAY_MATH
        .replace_all(text, |caps: &Captures<'_>| {
            stash.put(
                Slot::Block,
                format!("<div class=\"latex-container\">{}</div>", &caps[1]),
            )
        })
        .into_owned()
}

fn headings_and_emphasis(text: &str, _: &mut Stash) -> String {
    let text = H3.replace_all(text, "<h3>$1</h3>");
    let text = H2.replace_all(&text, "<h2>$1</h2>");
    let text = H1.replace_all(&text, "<h1>$1</h1>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}

/// Runs of `* item` lines → one `<ul>` holding an `<li>` per line.
fn bullet_lists(text: &str, _: &mut Stash) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;
    for line in text.split('\n') {
        if let Some(item) = line.trim_start().strip_prefix("* ") {
            if !in_list {
                out.push("<ul>".to_string());
                in_list = true;
            }
            out.push(format!("<li>{item}</li>"));
        } else {
            if in_list {
                out.push("</ul>".to_string());
                in_list = false;
            }
            out.push(line.to_string());
        }
    }
    if in_list {
        out.push("</ul>".to_string());
    }
    out.join("\n")
}

fn links(text: &str, _: &mut Stash) -> String {
    LINK.replace_all(text, |caps: &Captures<'_>| {
        format!(
            "<a href=\"{}\" class=\"highlighted-link\" target=\"_blank\" \
             rel=\"noopener noreferrer\">{}</a>",
            caps[2].replace('"', "&quot;"),
            &caps[1],
        )
    })
    .into_owned()
}

/// Wrap every non-blank line that is not already block-level in `<p>`.
/// Whitespace-only lines are emptied.
fn paragraphs(text: &str, _: &mut Stash) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else if stash::holds_block(line) || BLOCK_TAG.is_match(line) {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn restore(text: &str, stash: &mut Stash) -> String {
    stash.restore(text)
}
