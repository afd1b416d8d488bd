#![deny(missing_docs)]

//! # sitechat format
//!
//! Turns the raw text streamed back by the answering endpoint into the
//! markup shown in a received message bubble.
//!
//! [`format`] is pure and deterministic, so it can be re-run on every
//! growing snapshot of a streamed answer. Running it on a longer input is
//! not guaranteed to keep the previous output as a prefix (an opening
//! fence only becomes a code block once its closing fence arrives).
//!
//! ```
//! let html = sitechat_format::format("# Hello\nSee `main.rs`");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>See <code>main.rs</code></p>");
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`passes`] | The ordered rewrite passes ([`PASSES`]) |
//! | [`stash`] | Placeholder table shielding finished markup from later passes |
//! | [`escape`] | HTML escaping for code regions |
//! | [`fragment`] | Splitting markup around code blocks for the copy action |

pub mod escape;
pub mod fragment;
pub mod passes;
pub mod stash;

pub use escape::{escape_html, unescape_html};
pub use fragment::{split_fragments, Fragment};
pub use passes::{pass, Pass, PASSES};
pub use stash::Stash;

/// Format a raw answer into markup by running every pass of [`PASSES`] in
/// order, each on the output of the previous one.
pub fn format(raw: &str) -> String {
    let mut stash = Stash::default();
    PASSES
        .iter()
        .fold(raw.to_string(), |text, pass| (pass.apply)(&text, &mut stash))
}

/// Format a raw answer and split it into renderable fragments.
///
/// Shorthand for `split_fragments(&format(raw))`.
pub fn render(raw: &str) -> Vec<Fragment> {
    split_fragments(&format(raw))
}
