use dioxus::prelude::*;

#[component]
pub fn InputRow(
    draft: String,
    can_send: bool,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "sitechat-input",
            input {
                class: "sitechat-message-input",
                r#type: "text",
                placeholder: "Type a message...",
                value: "{draft}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        on_send.call(());
                    }
                },
            }
            button {
                class: "sitechat-send",
                disabled: !can_send,
                onclick: move |_| on_send.call(()),
                "➤"
            }
        }
    }
}
