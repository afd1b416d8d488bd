use std::fmt;

use sitechat_format::Fragment;
use sitechat_models::{Message, Origin};

use crate::controller::PanelState;

/// Bubble glyph while the window is closed.
pub const CLOSED_GLYPH: &str = "💬";
/// Bubble glyph while the window is open.
pub const OPEN_GLYPH: &str = "⌑";

// ── Open state ────────────────────────────────────────────────────────

pub fn bubble_glyph(state: PanelState) -> &'static str {
    if state.is_open {
        OPEN_GLYPH
    } else {
        CLOSED_GLYPH
    }
}

/// Class of the window element; `active` shows it.
pub fn window_class(state: PanelState) -> &'static str {
    if state.is_open {
        "sitechat-window active"
    } else {
        "sitechat-window"
    }
}

// ── Message list items ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// Shown verbatim (visitor text, greeting).
    Plain(String),
    /// Formatted answer, split around code blocks.
    Formatted(Vec<Fragment>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    pub message: Message,
    pub body: MessageBody,
    /// Still receiving chunks; only ever true for the last received message.
    pub in_progress: bool,
}

impl MessageView {
    pub fn css_class(&self) -> String {
        format!("sitechat-message {}", self.message.origin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Message(MessageView),
    Typing,
}

// ── Panel ─────────────────────────────────────────────────────────────

/// Model of the widget's visual tree.
///
/// Components render straight from this value. Scrolling and focusing are
/// side effects the view performs whenever the matching epoch changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    items: Vec<ListItem>,
    next_id: u64,
    scroll_epoch: u64,
    focus_epoch: u64,
}

impl Panel {
    pub fn new(greeting: Option<&str>) -> Self {
        let mut panel = Self::default();
        if let Some(text) = greeting {
            panel.append_message(text, Origin::Received);
        }
        panel
    }

    /// Append a message shown exactly as typed. Never formatted.
    pub fn append_message(&mut self, text: &str, origin: Origin) -> MessageId {
        let id = self.allocate_id();
        let item = ListItem::Message(MessageView {
            id,
            message: Message {
                text: text.to_string(),
                origin,
            },
            body: MessageBody::Plain(text.to_string()),
            in_progress: false,
        });
        match self.typing_position() {
            // The indicator always stays last.
            Some(pos) => self.items.insert(pos, item),
            None => self.items.push(item),
        }
        self.scroll_epoch += 1;
        id
    }

    /// Replace the answer being streamed with a longer snapshot, or start a
    /// new answer if none is in progress.
    pub fn update_trailing_received(&mut self, raw: &str) {
        self.hide_typing();
        let body = MessageBody::Formatted(sitechat_format::render(raw));
        match self.items.last_mut() {
            Some(ListItem::Message(view)) if view.in_progress && view.message.is_received() => {
                view.message = Message::received(raw);
                view.body = body;
            }
            _ => {
                let id = self.allocate_id();
                self.items.push(ListItem::Message(MessageView {
                    id,
                    message: Message::received(raw),
                    body,
                    in_progress: true,
                }));
            }
        }
        self.scroll_epoch += 1;
    }

    /// Seal the answer in progress, if any.
    pub fn finish_received(&mut self) {
        for item in &mut self.items {
            if let ListItem::Message(view) = item {
                view.in_progress = false;
            }
        }
    }

    /// Show the typing indicator at the end of the list. Showing it twice
    /// still leaves exactly one.
    pub fn show_typing(&mut self) {
        self.hide_typing();
        self.items.push(ListItem::Typing);
        self.scroll_epoch += 1;
    }

    pub fn hide_typing(&mut self) {
        self.items.retain(|item| !matches!(item, ListItem::Typing));
    }

    pub fn is_typing(&self) -> bool {
        self.typing_position().is_some()
    }

    /// Ask the view to move keyboard focus to the input.
    pub fn request_focus(&mut self) {
        self.focus_epoch += 1;
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn messages(&self) -> impl Iterator<Item = &MessageView> {
        self.items.iter().filter_map(|item| match item {
            ListItem::Message(view) => Some(view),
            ListItem::Typing => None,
        })
    }

    pub fn count(&self, origin: Origin) -> usize {
        self.messages()
            .filter(|view| view.message.origin == origin)
            .count()
    }

    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }

    pub fn focus_epoch(&self) -> u64 {
        self.focus_epoch
    }

    fn typing_position(&self) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, ListItem::Typing))
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last(panel: &Panel) -> &MessageView {
        panel.messages().last().expect("panel has messages")
    }

    #[test]
    fn greeting_is_first_message() {
        let panel = Panel::new(Some("Hello!"));
        assert_eq!(panel.count(Origin::Received), 1);
        assert_eq!(last(&panel).body, MessageBody::Plain("Hello!".into()));
        assert!(!last(&panel).in_progress);
        assert!(Panel::new(None).items().is_empty());
    }

    #[test]
    fn appended_text_is_not_formatted() {
        let mut panel = Panel::new(None);
        panel.append_message("**not bold** <b>", Origin::Sent);
        assert_eq!(last(&panel).body, MessageBody::Plain("**not bold** <b>".into()));
        assert_eq!(last(&panel).css_class(), "sitechat-message sent");
    }

    #[test]
    fn typing_indicator_is_never_duplicated() {
        let mut panel = Panel::new(None);
        panel.show_typing();
        panel.show_typing();
        let indicators = panel
            .items()
            .iter()
            .filter(|item| matches!(item, ListItem::Typing))
            .count();
        assert_eq!(indicators, 1);
        panel.hide_typing();
        panel.hide_typing();
        assert!(!panel.is_typing());
    }

    #[test]
    fn typing_indicator_stays_last() {
        let mut panel = Panel::new(None);
        panel.show_typing();
        panel.append_message("later", Origin::Sent);
        assert_eq!(panel.items().last(), Some(&ListItem::Typing));
    }

    #[test]
    fn trailing_received_is_replaced_not_duplicated() {
        let mut panel = Panel::new(None);
        panel.append_message("question", Origin::Sent);
        panel.show_typing();
        panel.update_trailing_received("Hi");
        panel.update_trailing_received("Hi there");
        assert_eq!(panel.count(Origin::Received), 1);
        assert_eq!(last(&panel).message.text, "Hi there");
        assert!(!panel.is_typing());
    }

    #[test]
    fn finished_answer_is_not_extended() {
        let mut panel = Panel::new(None);
        panel.update_trailing_received("first");
        panel.finish_received();
        panel.update_trailing_received("second");
        assert_eq!(panel.count(Origin::Received), 2);
    }

    #[test]
    fn greeting_is_not_overwritten_by_an_answer() {
        let mut panel = Panel::new(Some("Hello!"));
        panel.update_trailing_received("answer");
        assert_eq!(panel.count(Origin::Received), 2);
    }

    #[test]
    fn answers_are_formatted() {
        let mut panel = Panel::new(None);
        panel.update_trailing_received("```js\nconsole.log(1)```");
        assert_eq!(
            last(&panel).body,
            MessageBody::Formatted(vec![Fragment::Code {
                language: Some("js".into()),
                code: "console.log(1)".into(),
            }])
        );
    }

    #[test]
    fn open_state_drives_glyph_and_class() {
        let closed = PanelState::default();
        let open = PanelState { is_open: true };
        assert_eq!(bubble_glyph(closed), CLOSED_GLYPH);
        assert_eq!(window_class(closed), "sitechat-window");
        assert_eq!(bubble_glyph(open), OPEN_GLYPH);
        assert_eq!(window_class(open), "sitechat-window active");
    }

    #[test]
    fn focus_requests_are_counted() {
        let mut panel = Panel::new(None);
        assert_eq!(panel.focus_epoch(), 0);
        panel.request_focus();
        assert_eq!(panel.focus_epoch(), 1);
    }

    #[test]
    fn every_list_change_scrolls() {
        let mut panel = Panel::new(None);
        panel.append_message("q", Origin::Sent);
        panel.show_typing();
        panel.update_trailing_received("a");
        assert_eq!(panel.scroll_epoch(), 3);
    }

    #[test]
    fn ids_are_unique() {
        let mut panel = Panel::new(None);
        let a = panel.append_message("a", Origin::Sent);
        let b = panel.append_message("b", Origin::Sent);
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "m2");
    }
}
