use dioxus::prelude::*;
use sitechat_sdk::AnswerClient;
use tracing::debug;

use crate::state::Widget;

/// Send the current draft and stream the answer into `widget`.
///
/// Must be called from an event handler of the root component so the
/// request task lives as long as the page.
pub fn submit(mut widget: Signal<Widget>, client: AnswerClient) {
    let request = match widget.write().begin_send() {
        Ok(request) => request,
        Err(rejected) => {
            debug!(reason = %rejected, "nothing sent");
            return;
        }
    };

    spawn(async move {
        client
            .send(
                &request.question,
                move |snapshot| widget.write().chunk_received(snapshot),
                move |err| widget.write().request_failed(&err),
                move || widget.write().request_done(),
            )
            .await;
    });
}
