//! Browser-side effects: the mount point and the few things only
//! JavaScript can do (clipboard, timers, document-wide clicks, scrolling).

use dioxus::document::{self, EvalError};
use thiserror::Error;

/// Id of the element the widget creates in `document.body` and renders into.
pub const ROOT_ID: &str = "sitechat-root";

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

/// Create `#sitechat-root` at the end of the body unless the host page
/// already provides it.
pub fn ensure_mount_point() -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    if document.get_element_by_id(ROOT_ID).is_some() {
        return Ok(());
    }
    let body = document.body().ok_or(MountError::NoDocument)?;
    let root = document
        .create_element("div")
        .map_err(|err| MountError::Dom(format!("{err:?}")))?;
    root.set_id(ROOT_ID);
    body.append_child(&root)
        .map_err(|err| MountError::Dom(format!("{err:?}")))?;
    Ok(())
}

const SCROLL_TO_END_JS: &str = r"
requestAnimationFrame(() => {
    const list = document.querySelector('#sitechat-root .sitechat-messages');
    if (list) { list.scrollTop = list.scrollHeight; }
});
";

const OUTSIDE_CLICK_JS: &str = r"
document.addEventListener('click', (e) => {
    const inside = e.composedPath().some((node) =>
        node.classList &&
        (node.classList.contains('sitechat-window') || node.classList.contains('sitechat-bubble')));
    if (!inside) { dioxus.send(true); }
});
";

const COPY_JS: &str = r"
const text = await dioxus.recv();
try {
    await navigator.clipboard.writeText(text);
    dioxus.send(true);
} catch (_) {
    dioxus.send(false);
}
";

pub fn scroll_messages_to_end() {
    document::eval(SCROLL_TO_END_JS);
}

/// Call `on_outside` for every click that lands outside the window and the
/// bubble. Runs for the lifetime of the page.
pub async fn watch_outside_clicks(mut on_outside: impl FnMut()) {
    let mut eval = document::eval(OUTSIDE_CLICK_JS);
    while eval.recv::<bool>().await.is_ok() {
        on_outside();
    }
    tracing::debug!("outside-click listener stopped");
}

/// Write `text` to the clipboard. `Ok(false)` means the browser refused.
pub async fn copy_to_clipboard(text: &str) -> Result<bool, EvalError> {
    let mut eval = document::eval(COPY_JS);
    eval.send(text)?;
    eval.recv::<bool>().await
}

pub async fn sleep_ms(millis: u32) {
    let mut eval = document::eval(&format!(
        "setTimeout(() => dioxus.send(true), {millis});"
    ));
    // A failed timer only shortens the wait.
    let _ = eval.recv::<bool>().await;
}

pub fn focus_input() {
    document::eval(
        "requestAnimationFrame(() => document.querySelector('#sitechat-root .sitechat-message-input')?.focus());",
    );
}
