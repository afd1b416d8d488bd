use dioxus::prelude::*;
use sitechat_format::Fragment;

use crate::components::code_block::CodeBlock;
use crate::panel::{ListItem, MessageBody, MessageView};

#[component]
pub fn MessageList(items: Vec<ListItem>) -> Element {
    rsx! {
        div { class: "sitechat-messages",
            for item in items.iter() {
                {
                    match item {
                        ListItem::Message(view) => rsx! {
                            MessageBubble { key: "{view.id}", view: view.clone() }
                        },
                        ListItem::Typing => {
                            let typing_key = "typing";
                            rsx! {
                                TypingIndicator { key: "{typing_key}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(view: MessageView) -> Element {
    let class = view.css_class();
    match view.body {
        MessageBody::Plain(text) => rsx! {
            div { class, "{text}" }
        },
        MessageBody::Formatted(fragments) => rsx! {
            div { class,
                for (idx, fragment) in fragments.into_iter().enumerate() {
                    {
                        match fragment {
                            Fragment::Html(html) => rsx! {
                                div {
                                    key: "{idx}",
                                    class: "sitechat-markup",
                                    dangerous_inner_html: "{html}",
                                }
                            },
                            Fragment::Code { language, code } => rsx! {
                                CodeBlock { key: "{idx}", language, code }
                            },
                        }
                    }
                }
            }
        },
    }
}

/// Three pulsing dots shown while waiting for the first chunk.
#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "sitechat-message received sitechat-typing",
            span { class: "sitechat-dot" }
            span { class: "sitechat-dot" }
            span { class: "sitechat-dot" }
        }
    }
}
