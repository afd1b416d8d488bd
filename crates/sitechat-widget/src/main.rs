mod ask;
mod components;
mod config;
mod controller;
mod dom;
mod panel;
mod state;

use dioxus::prelude::*;
use sitechat_sdk::AnswerClient;

use components::bubble::ChatBubble;
use components::chat_window::ChatWindow;
use config::WidgetConfig;
use state::Widget;

fn main() {
    dioxus::logger::initialize_default();

    if let Err(err) = dom::ensure_mount_point() {
        tracing::error!(error = %err, "cannot attach the chat widget");
        return;
    }

    dioxus::LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(dom::ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(WidgetConfig::from_build_env);
    let client = use_hook(|| AnswerClient::new(config.client.clone()));
    let mut widget = use_signal(|| Widget::new(&config));

    // ── Clicks anywhere else on the page close the window ──
    use_future(move || async move {
        dom::watch_outside_clicks(move || widget.write().outside_clicked()).await;
    });

    let scroll_epoch = use_memo(move || widget.read().panel.scroll_epoch());
    use_effect(move || {
        let _epoch = scroll_epoch();
        dom::scroll_messages_to_end();
    });

    let focus_epoch = use_memo(move || widget.read().panel.focus_epoch());
    use_effect(move || {
        if focus_epoch() > 0 {
            dom::focus_input();
        }
    });

    let state = widget.read();
    let glyph = panel::bubble_glyph(state.controller.state());
    let window_class = panel::window_class(state.controller.state());
    let items = state.panel.items().to_vec();
    let draft = state.draft.clone();
    let can_send = state.can_send();
    drop(state);

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "sitechat-container",
            ChatWindow {
                class: window_class,
                items,
                draft,
                can_send,
                on_close: move |()| widget.write().close_clicked(),
                on_input: move |text: String| widget.write().draft = text,
                on_send: move |()| ask::submit(widget, client.clone()),
            }
            ChatBubble {
                glyph,
                on_toggle: move |()| widget.write().bubble_clicked(),
            }
        }
    }
}
