use dioxus::prelude::*;
use tracing::warn;

use crate::dom;

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";
const COPIED_FEEDBACK_MS: u32 = 2000;

/// A formatted code block with a button copying its plain text.
#[component]
pub fn CodeBlock(#[props(!optional)] language: Option<String>, code: String) -> Element {
    let mut copied = use_signal(|| false);
    let language_class = format!("language-{}", language.as_deref().unwrap_or_default());
    let label = if copied() { COPIED_LABEL } else { COPY_LABEL };
    let copy_source = code.clone();

    rsx! {
        div { class: "sitechat-code",
            button {
                class: "sitechat-copy",
                onclick: move |_| {
                    let text = copy_source.clone();
                    spawn(async move {
                        match dom::copy_to_clipboard(&text).await {
                            Ok(true) => {
                                copied.set(true);
                                dom::sleep_ms(COPIED_FEEDBACK_MS).await;
                                copied.set(false);
                            }
                            Ok(false) => warn!("clipboard write refused"),
                            Err(err) => warn!(error = %err, "clipboard unavailable"),
                        }
                    });
                },
                "{label}"
            }
            pre {
                code { class: "{language_class}", "{code}" }
            }
        }
    }
}
