//! Splitting formatted markup around code blocks.
//!
//! The widget renders plain markup as-is but turns every code block into a
//! component of its own so it can carry a copy button. [`split_fragments`]
//! recognises the exact `<pre><code>` shape emitted by the `fenced_code`
//! pass; its escaped body cannot contain a `<`, so the closing tags are
//! unambiguous.
//!
//! Only top-level blocks are split out. A block inside a list item or a
//! math container stays inline in its surrounding markup (and has no copy
//! button), so every HTML fragment is a balanced tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::unescape_html;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^<>]*?(/?)>").expect("TAG regex pattern is valid")
});

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<pre><code class="language-([^"]*)">((?s:.*?))</code></pre>"#)
        .expect("CODE_BLOCK regex pattern is valid")
});

/// A renderable piece of a formatted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Trusted markup produced by the formatter.
    Html(String),
    /// A fenced code block.
    Code {
        /// Language tag from the opening fence, if any.
        language: Option<String>,
        /// The code as plain text (unescaped), ready for display or copy.
        code: String,
    },
}

impl Fragment {
    /// The text a copy action should place on the clipboard.
    pub fn copy_text(&self) -> Option<&str> {
        match self {
            Fragment::Code { code, .. } => Some(code),
            Fragment::Html(_) => None,
        }
    }
}

/// Split `markup` into HTML runs and code blocks, in document order.
///
/// Whitespace-only HTML runs between blocks are dropped. Code blocks nested
/// in other elements are left inside their HTML run.
pub fn split_fragments(markup: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut html_start = 0;
    let mut scanned = 0;
    let mut depth = 0;
    for caps in CODE_BLOCK.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        depth = open_elements(&markup[scanned..whole.start()], depth);
        scanned = whole.end();
        if depth > 0 {
            continue;
        }
        push_html(&mut fragments, &markup[html_start..whole.start()]);
        let language = Some(&caps[1])
            .filter(|lang| !lang.is_empty())
            .map(String::from);
        fragments.push(Fragment::Code {
            language,
            code: unescape_html(&caps[2]),
        });
        html_start = whole.end();
    }
    push_html(&mut fragments, &markup[html_start..]);
    fragments
}

/// Element nesting depth after `html`, starting from `depth`.
fn open_elements(html: &str, depth: usize) -> usize {
    TAG.captures_iter(html).fold(depth, |depth, caps| {
        let name = caps[2].to_ascii_lowercase();
        if !caps[3].is_empty() || VOID_ELEMENTS.contains(&name.as_str()) {
            depth
        } else if caps[1].is_empty() {
            depth + 1
        } else {
            depth.saturating_sub(1)
        }
    })
}

fn push_html(fragments: &mut Vec<Fragment>, html: &str) {
    if !html.trim().is_empty() {
        fragments.push(Fragment::Html(html.to_string()));
    }
}
