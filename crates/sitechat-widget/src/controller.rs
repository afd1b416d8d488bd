//! Gesture handling and the request lifecycle.
//!
//! ```text
//!            bubble click
//!   Closed ────────────────▶ Open
//!      ▲                      │
//!      └──────────────────────┘
//!   bubble click | close click | outside click
//! ```
//!
//! Sending never changes the open state. Only one answer streams at a
//! time; a send attempted while one is in flight is rejected.

use sitechat_models::{Origin, QuestionRequest};
use sitechat_sdk::SdkError;
use tracing::{debug, error};

use crate::panel::Panel;

/// Whether the window is showing. Owned by the [`Controller`]; the panel
/// only renders from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendRejected {
    #[error("nothing to send")]
    Empty,
    #[error("an answer is still streaming")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controller {
    state: PanelState,
    phase: RequestPhase,
}

impl Controller {
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.phase == RequestPhase::InFlight
    }

    pub fn bubble_clicked(&mut self, panel: &mut Panel) {
        self.toggle_open(panel);
    }

    pub fn close_clicked(&mut self) {
        self.close();
    }

    /// A click that landed neither on the window nor on the bubble.
    pub fn outside_clicked(&mut self) {
        self.close();
    }

    /// Flip the window between open and closed. Opening asks the panel to
    /// focus the input.
    pub fn toggle_open(&mut self, panel: &mut Panel) {
        self.state.is_open = !self.state.is_open;
        if self.state.is_open {
            panel.request_focus();
        }
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Validate the draft and move it into the conversation.
    ///
    /// On success the draft is cleared, the typing indicator shown and the
    /// request returned for the caller to post. On rejection nothing
    /// changes.
    pub fn begin_send(
        &mut self,
        draft: &mut String,
        panel: &mut Panel,
    ) -> Result<QuestionRequest, SendRejected> {
        if self.is_busy() {
            debug!("send ignored, an answer is still streaming");
            return Err(SendRejected::Busy);
        }
        let request = QuestionRequest::new(draft).map_err(|_| SendRejected::Empty)?;

        panel.append_message(&request.question, Origin::Sent);
        draft.clear();
        panel.show_typing();
        self.phase = RequestPhase::InFlight;
        Ok(request)
    }

    pub fn chunk_received(&mut self, panel: &mut Panel, snapshot: &str) {
        panel.update_trailing_received(snapshot);
    }

    pub fn request_failed(&mut self, panel: &mut Panel, err: &SdkError) {
        error!(error = %err, "question failed");
        self.settle(panel);
    }

    pub fn request_done(&mut self, panel: &mut Panel) {
        self.settle(panel);
    }

    fn settle(&mut self, panel: &mut Panel) {
        panel.hide_typing();
        panel.finish_received();
        self.phase = RequestPhase::Idle;
    }
}
