use sitechat_models::QuestionRequest;
use sitechat_sdk::SdkError;

use crate::config::WidgetConfig;
use crate::controller::{Controller, SendRejected};
use crate::panel::Panel;

/// Everything the widget shows, held in one signal by the root component.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub panel: Panel,
    pub controller: Controller,
    pub draft: String,
}

impl Widget {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            panel: Panel::new(config.greeting.as_deref()),
            controller: Controller::default(),
            draft: String::new(),
        }
    }

    pub fn bubble_clicked(&mut self) {
        self.controller.bubble_clicked(&mut self.panel);
    }

    pub fn close_clicked(&mut self) {
        self.controller.close_clicked();
    }

    pub fn outside_clicked(&mut self) {
        self.controller.outside_clicked();
    }

    pub fn begin_send(&mut self) -> Result<QuestionRequest, SendRejected> {
        self.controller.begin_send(&mut self.draft, &mut self.panel)
    }

    pub fn chunk_received(&mut self, snapshot: &str) {
        self.controller.chunk_received(&mut self.panel, snapshot);
    }

    pub fn request_failed(&mut self, err: &SdkError) {
        self.controller.request_failed(&mut self.panel, err);
    }

    pub fn request_done(&mut self) {
        self.controller.request_done(&mut self.panel);
    }

    /// The send button is disabled while an answer streams.
    pub fn can_send(&self) -> bool {
        !self.controller.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitechat_models::Origin;

    #[test]
    fn starts_closed_with_greeting() {
        let widget = Widget::new(&WidgetConfig::default());
        assert!(!widget.controller.state().is_open);
        assert_eq!(widget.panel.count(Origin::Received), 1);
        assert!(widget.can_send());
    }

    #[test]
    fn send_button_disabled_until_done() {
        let mut widget = Widget::new(&WidgetConfig::from_values(None, Some("")));
        widget.draft = "hi".into();
        widget.begin_send().expect("send");
        assert!(!widget.can_send());
        widget.chunk_received("hello");
        assert!(!widget.can_send());
        widget.request_done();
        assert!(widget.can_send());
        assert_eq!(widget.panel.count(Origin::Received), 1);
    }
}
