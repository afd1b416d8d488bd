use dioxus::prelude::*;

use crate::components::input_row::InputRow;
use crate::components::message_list::MessageList;
use crate::panel::ListItem;

#[component]
pub fn ChatWindow(
    class: &'static str,
    items: Vec<ListItem>,
    draft: String,
    can_send: bool,
    on_close: EventHandler<()>,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    rsx! {
        div { class,
            div { class: "sitechat-header",
                button {
                    class: "sitechat-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            MessageList { items }
            InputRow { draft, can_send, on_input, on_send }
        }
    }
}
