//! Chat Transcript Controller
//!
//! State machine behind the chat widget:
//!
//! 1. Idle: input enabled
//! 2. Submit: trim; empty input or an outstanding send makes it a no-op
//! 3. Sending: the user entry is echoed immediately (tagged `Pending`), the
//!    input is cleared, the send hook sees the trimmed text and the request
//!    goes out
//! 4. Reply: an agent entry with the reply and its suggested actions
//! 5. Failure: an agent entry with a fixed apology plus a toast, no retry
//! 6. Back to idle

use std::collections::HashMap;

use super::message::{ChatMessage, MessageId};
use crate::api::ChatResponse;
use crate::error::ApiError;
use crate::fetch::{Completion, RequestTicket, Resource};
use crate::notify::{Toast, CHAT_FAILED};

/// Agent entry appended when a send fails
pub const APOLOGY: &str = "Sorry, an error occurred while processing your message.";

/// Called with the trimmed text of every outgoing message
pub type SendHook = Box<dyn FnMut(&str)>;

/// Delivery state of a user-authored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Echoed locally, round trip not resolved yet
    Pending,
    Sent,
    Failed,
}

/// A message that must now be sent to the backend
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub ticket: RequestTicket,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Replied { message_id: MessageId },
    Failed { error: ApiError, toast: Toast },
    Discarded,
}

/// Returns true for the keystroke that submits: plain Enter. Shift+Enter is
/// reserved for a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Owns the transcript and the input field of one chat widget
pub struct ChatController {
    transcript: Vec<ChatMessage>,
    deliveries: HashMap<MessageId, Delivery>,
    input: String,
    request: Resource<ChatResponse>,
    pending: Option<MessageId>,
    on_send: Option<SendHook>,
}

impl ChatController {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            deliveries: HashMap::new(),
            input: String::new(),
            request: Resource::new("chat"),
            pending: None,
            on_send: None,
        }
    }

    /// Install the hook that observes outgoing messages
    pub fn with_on_send(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.on_send = Some(Box::new(hook));
        self
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while a send is outstanding; the input is disabled meanwhile
    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Delivery tag of a user entry; `None` for agent entries
    pub fn delivery(&self, id: &MessageId) -> Option<Delivery> {
        self.deliveries.get(id).copied()
    }

    /// Replace the input text. Ignored while sending.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.is_sending() {
            return false;
        }
        self.input = text.into();
        true
    }

    /// Copy a suggested action into the input. Does not send.
    pub fn activate_suggestion(&mut self, action: &str) -> bool {
        self.set_input(action)
    }

    /// Keystroke in the input field
    pub fn on_key(&mut self, key: &str, shift: bool) -> Option<OutgoingMessage> {
        if is_submit_key(key, shift) {
            self.submit()
        } else {
            None
        }
    }

    /// Submit the current input
    pub fn submit(&mut self) -> Option<OutgoingMessage> {
        if self.is_sending() {
            tracing::debug!("Submit ignored, previous message still sending");
            return None;
        }

        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let ticket = self.request.begin()?;

        let message = ChatMessage::user(text.clone());
        self.deliveries.insert(message.id.clone(), Delivery::Pending);
        self.pending = Some(message.id.clone());
        self.transcript.push(message);
        self.input.clear();

        if let Some(hook) = self.on_send.as_mut() {
            hook(&text);
        }

        Some(OutgoingMessage { ticket, text })
    }

    /// Commit the backend's answer to the outstanding send
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<ChatResponse, ApiError>,
    ) -> ChatOutcome {
        match self.request.complete(ticket, result) {
            Completion::Loaded => {
                let Some(reply) = self.request.data().cloned() else {
                    return ChatOutcome::Discarded;
                };
                let documentation = reply.documentation().map(str::to_string);
                let message =
                    ChatMessage::agent(reply.response, reply.suggested_actions, documentation);
                let message_id = message.id.clone();
                self.transcript.push(message);
                self.settle(Delivery::Sent);
                ChatOutcome::Replied { message_id }
            }
            Completion::Failed(error) => {
                tracing::error!("Chat error: {}", error);
                self.transcript.push(ChatMessage::agent(APOLOGY, Vec::new(), None));
                self.settle(Delivery::Failed);
                ChatOutcome::Failed {
                    error,
                    toast: CHAT_FAILED,
                }
            }
            Completion::Discarded => ChatOutcome::Discarded,
        }
    }

    /// Tear down: a reply landing afterwards is ignored
    pub fn unmount(&mut self) {
        self.request.cancel();
    }

    fn settle(&mut self, delivery: Delivery) {
        if let Some(id) = self.pending.take() {
            self.deliveries.insert(id, delivery);
        }
    }
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Author;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn reply(text: &str, actions: &[&str]) -> ChatResponse {
        ChatResponse {
            response: text.to_string(),
            suggested_actions: actions.iter().map(|a| a.to_string()).collect(),
            documentation: None,
        }
    }

    #[test]
    fn test_successful_round_trip() {
        let mut chat = ChatController::new();
        chat.set_input("hello");

        let outgoing = chat.submit().unwrap();
        assert_eq!(outgoing.text, "hello");
        assert_eq!(chat.input(), "");
        assert_eq!(chat.transcript().len(), 1);

        let user_id = chat.transcript()[0].id.clone();
        assert_eq!(chat.delivery(&user_id), Some(Delivery::Pending));

        let outcome = chat.resolve(outgoing.ticket, Ok(reply("hi there", &["tell me more"])));
        assert!(matches!(outcome, ChatOutcome::Replied { .. }));

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].author, Author::User);
        assert_eq!(transcript[0].text, "hello");
        assert_eq!(transcript[1].author, Author::Agent);
        assert_eq!(transcript[1].text, "hi there");
        assert_eq!(transcript[1].suggested_actions, vec!["tell me more"]);
        assert_eq!(chat.delivery(&user_id), Some(Delivery::Sent));
        assert!(!chat.is_sending());

        // Suggestion fills the input but sends nothing
        assert!(chat.activate_suggestion("tell me more"));
        assert_eq!(chat.input(), "tell me more");
        assert!(!chat.is_sending());
        assert_eq!(chat.transcript().len(), 2);
    }

    #[test]
    fn test_failed_send_appends_apology() {
        let mut chat = ChatController::new();
        chat.set_input("  gm  ");

        let outgoing = chat.submit().unwrap();
        let outcome = chat.resolve(outgoing.ticket, Err(ApiError::status(500, "")));

        match outcome {
            ChatOutcome::Failed { toast, .. } => assert_eq!(toast, CHAT_FAILED),
            other => panic!("expected failure, got {:?}", other),
        }

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].text, "gm");
        assert_eq!(transcript[1].text, APOLOGY);
        assert!(transcript[1].suggested_actions.is_empty());
        assert_eq!(chat.delivery(&transcript[0].id), Some(Delivery::Failed));
        assert!(!chat.is_sending());
    }

    #[test]
    fn test_blank_input_is_noop() {
        let sent = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen = Rc::clone(&sent);
        let mut chat = ChatController::new().with_on_send(move |text| {
            seen.borrow_mut().push(text.to_string());
        });

        assert!(chat.submit().is_none());
        chat.set_input("   \t ");
        assert!(chat.submit().is_none());

        assert!(chat.transcript().is_empty());
        assert!(sent.borrow().is_empty());
        assert!(!chat.is_sending());
    }

    #[test]
    fn test_submit_rejected_while_sending() {
        let mut chat = ChatController::new();
        chat.set_input("first");
        let outgoing = chat.submit().unwrap();

        // Input is locked while the send is outstanding
        assert!(!chat.set_input("second"));
        assert!(!chat.activate_suggestion("second"));
        assert!(chat.submit().is_none());
        assert!(chat.on_key("Enter", false).is_none());
        assert_eq!(chat.transcript().len(), 1);

        chat.resolve(outgoing.ticket, Ok(reply("ok", &[])));
        assert!(chat.set_input("second"));
        assert!(chat.submit().is_some());
    }

    #[test]
    fn test_send_hook_sees_trimmed_text() {
        let sent = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen = Rc::clone(&sent);
        let mut chat = ChatController::new().with_on_send(move |text| {
            seen.borrow_mut().push(text.to_string());
        });

        chat.set_input("  what is sei?  ");
        chat.submit().unwrap();

        assert_eq!(*sent.borrow(), vec!["what is sei?".to_string()]);
    }

    #[test]
    fn test_enter_submits_shift_enter_does_not() {
        let mut chat = ChatController::new();
        chat.set_input("hello");

        assert!(chat.on_key("Enter", true).is_none());
        assert!(chat.on_key("a", false).is_none());
        assert_eq!(chat.input(), "hello");

        assert!(chat.on_key("Enter", false).is_some());
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn test_reply_after_unmount_is_dropped() {
        let mut chat = ChatController::new();
        chat.set_input("hello");
        let outgoing = chat.submit().unwrap();

        chat.unmount();
        let outcome = chat.resolve(outgoing.ticket, Ok(reply("late", &[])));

        assert_eq!(outcome, ChatOutcome::Discarded);
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn test_documentation_attached_to_reply() {
        let mut chat = ChatController::new();
        chat.set_input("docs?");
        let outgoing = chat.submit().unwrap();

        let response = ChatResponse {
            response: "see docs".to_string(),
            suggested_actions: vec![],
            documentation: Some("https://docs.sei.io".to_string()),
        };
        chat.resolve(outgoing.ticket, Ok(response));

        assert_eq!(
            chat.transcript()[1].documentation.as_deref(),
            Some("https://docs.sei.io")
        );
    }
}
