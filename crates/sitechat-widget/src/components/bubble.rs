use dioxus::prelude::*;

/// Floating button that opens and closes the window.
#[component]
pub fn ChatBubble(glyph: &'static str, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "sitechat-bubble",
            onclick: move |_| on_toggle.call(()),
            span { class: "sitechat-bubble-icon", "{glyph}" }
        }
    }
}
