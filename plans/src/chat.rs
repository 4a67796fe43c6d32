//! Conversation state machine for the chat widget.
//!
//! DESIGN
//! ======
//! `transition` is the only place that decides what an event does in a given
//! state. `ChatSession` layers the message log on top and appends the bot
//! replies each accepted transition calls for; rejected events leave both the
//! state and the log untouched.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::types::{CalendarInfo, StudyPlanResult};

pub const GREETING: &str = "Hi! What topic would you like a study plan for?";
pub const APOLOGY: &str = "Sorry, I couldn't generate a study plan right now. Please try again or name another topic.";

/// Where the conversation currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    /// Chat not yet opened, or the last plan finished.
    #[default]
    Idle,
    /// Greeting shown; the next user message is taken as the topic.
    AwaitingTopic,
    /// A generation request is in flight.
    Generating,
}

/// Inputs the chat widget reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    Open,
    Submit,
    Succeeded,
    Failed,
}

/// Next state for `event`, or `None` when the event is ignored in `state`.
#[must_use]
pub fn transition(state: ConversationState, event: ChatEvent) -> Option<ConversationState> {
    use ChatEvent as E;
    use ConversationState as S;

    match (state, event) {
        (S::Idle, E::Open) => Some(S::AwaitingTopic),
        (S::AwaitingTopic, E::Submit) => Some(S::Generating),
        (S::Generating, E::Succeeded) => Some(S::Idle),
        (S::Generating, E::Failed) => Some(S::AwaitingTopic),
        (S::AwaitingTopic | S::Generating, E::Open)
        | (S::Idle | S::Generating, E::Submit)
        | (S::Idle | S::AwaitingTopic, E::Succeeded | E::Failed) => None,
    }
}

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Conversation state plus its append-only message log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    state: ConversationState,
    messages: Vec<ChatMessage>,
    open: bool,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ConversationState {
        self.state
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the input box should accept text right now.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.state == ConversationState::AwaitingTopic
    }

    /// Show the chat window; greets only when coming from `Idle`.
    ///
    /// Returns `true` when a greeting was appended.
    pub fn open(&mut self) -> bool {
        self.open = true;
        if self.apply(ChatEvent::Open) {
            self.push(Sender::Bot, GREETING);
            return true;
        }
        false
    }

    /// Hide the chat window. Conversation state is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Take user input as the topic to plan.
    ///
    /// Returns the trimmed topic to generate for, or `None` when the input is
    /// blank or the conversation is not waiting for a topic.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let topic = input.trim();
        if topic.is_empty() || !self.apply(ChatEvent::Submit) {
            return None;
        }
        self.push(Sender::User, topic);
        Some(topic.to_owned())
    }

    /// Record a finished generation and append the confirmation replies.
    pub fn succeed(&mut self, result: &StudyPlanResult) {
        if !self.apply(ChatEvent::Succeeded) {
            return;
        }
        self.push(
            Sender::Bot,
            &format!(
                "Your {}-week study plan for \"{}\" is ready! Scroll down to see it.",
                result.duration_weeks, result.topic
            ),
        );
        if let Some(summary) = result.calendar_events_info.as_ref().and_then(calendar_summary) {
            self.push(Sender::Bot, &summary);
        }
    }

    /// Record a failed generation; the next message is taken as a new topic.
    pub fn fail(&mut self) {
        if self.apply(ChatEvent::Failed) {
            self.push(Sender::Bot, APOLOGY);
        }
    }

    fn apply(&mut self, event: ChatEvent) -> bool {
        match transition(self.state, event) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    fn push(&mut self, sender: Sender, text: &str) {
        self.messages.push(ChatMessage {
            sender,
            text: text.to_owned(),
        });
    }
}

/// Bot message describing calendar sync, or `None` when there is nothing to say.
///
/// A top-level error comes first; any per-event outcomes follow it.
#[must_use]
pub fn calendar_summary(info: &CalendarInfo) -> Option<String> {
    let error = info.error.as_deref().filter(|e| !e.is_empty());
    let events = info.created_events.as_deref().unwrap_or_default();
    if error.is_none() && events.is_empty() {
        return None;
    }

    let mut out = String::new();
    if let Some(error) = error {
        out.push_str(&format!("I couldn't add your plan to the calendar: {error}"));
        if !events.is_empty() {
            out.push('\n');
        }
    }
    if events.is_empty() {
        return Some(out);
    }
    out.push_str("Calendar events:");
    for event in events {
        let line = match (event.html_link.as_deref(), event.error.as_deref()) {
            (_, Some(error)) => format!("\n- {}: failed ({error})", event.summary),
            (Some(link), None) => format!("\n- {}: {link}", event.summary),
            (None, None) => format!("\n- {}", event.summary),
        };
        out.push_str(&line);
    }
    Some(out)
}
