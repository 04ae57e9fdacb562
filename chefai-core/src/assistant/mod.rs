//! Scripted conversation matcher simulating a recipe assistant.
//!
//! There is no model behind this: a fixed ordered list of substring rules
//! maps user input to canned replies, with fixed delays that pace the fake
//! "thinking". The matcher never fails; input matching no rule gets the
//! generic fallback reply. Delays are presentation pacing only and are
//! surfaced as data so callers can schedule or fast-forward them.

mod rules;

pub use rules::{first_match, is_confirmation, suggestion_for, Rule, RULES};

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::{Catalog, Category, Recipe};
use crate::clock::Clock;

/// Pacing before an ordinary bot reply appears.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);
/// Pacing before the recipe payload follows the confirmation.
pub const RECIPE_DELAY: Duration = Duration::from_millis(1500);
/// Pacing before the follow-up question closes the exchange.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_millis(1200);

pub const WELCOME: &str =
    "Hi! I'm your Chef AI assistant. Tell me what ingredients you have and I'll suggest a recipe.";
const FALLBACK: &str = "I need a little more to go on. Tell me a few ingredients you have on hand, \
                        like \"I have pasta and tomatoes\".";
const FOLLOW_UP: &str = "Would you like another idea? Tell me more ingredients and we'll keep cooking.";

/// One chat message, append-only within a session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

/// Where the conversation currently is. Showing a recipe is transient:
/// once the payload is emitted the machine is awaiting input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    IngredientsIdentified,
}

/// A bot reply plus the presentation delay before showing it.
#[derive(Debug, Clone)]
pub struct Reply {
    pub message: Message,
    pub delay: Duration,
}

/// One chat session: the phase, the message log, and the last matched
/// ingredient context.
pub struct Conversation {
    phase: Phase,
    messages: Vec<Message>,
    matched: Option<&'static Rule>,
}

impl Conversation {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// The matcher itself. Holds the catalog (for recipe payloads) and the
/// clock (for message timestamps); all session state lives in
/// `Conversation`.
pub struct ConversationEngine {
    catalog: &'static Catalog,
    clock: Arc<dyn Clock>,
}

impl ConversationEngine {
    pub fn new(catalog: &'static Catalog, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    /// A fresh session, opened with the welcome message.
    pub fn new_conversation(&self) -> Conversation {
        Conversation {
            phase: Phase::AwaitingInput,
            messages: vec![self.bot_message(WELCOME.to_string())],
            matched: None,
        }
    }

    /// Append the user's message and produce the scripted replies, in
    /// order. Total: every input gets at least one reply.
    pub fn respond(&self, conversation: &mut Conversation, input: &str) -> Vec<Reply> {
        conversation.messages.push(Message {
            id: Uuid::new_v4(),
            content: input.to_string(),
            is_bot: false,
            timestamp: self.clock.now(),
        });

        let lowered = input.to_lowercase();

        let replies = if conversation.phase == Phase::IngredientsIdentified
            && rules::is_confirmation(&lowered)
        {
            self.show_recipe(conversation)
        } else if let Some(rule) = rules::first_match(&lowered) {
            conversation.phase = Phase::IngredientsIdentified;
            conversation.matched = Some(rule);
            vec![self.reply(
                format!(
                    "Sounds like you have {} to work with. Want me to suggest a recipe? (yes/show)",
                    rule.ingredients.join(", ")
                ),
                REPLY_DELAY,
            )]
        } else {
            // No rule matched: generic fallback, phase unchanged so an
            // earlier ingredient match still accepts a late confirmation.
            vec![self.reply(FALLBACK.to_string(), REPLY_DELAY)]
        };

        for reply in &replies {
            conversation.messages.push(reply.message.clone());
        }
        replies
    }

    fn show_recipe(&self, conversation: &mut Conversation) -> Vec<Reply> {
        let category = conversation
            .matched
            .map(|rule| rule.category)
            .unwrap_or(Category::Food);
        conversation.phase = Phase::AwaitingInput;
        conversation.matched = None;

        let mut replies = vec![self.reply(
            "Great! Here's a recipe that makes the most of what you have:".to_string(),
            REPLY_DELAY,
        )];

        let id = rules::suggestion_for(category);
        if let Some(recipe) = self.catalog.recipe(id) {
            // Serializing a static Recipe cannot fail; fall back to the
            // title if it somehow does rather than panicking mid-chat.
            let payload = serde_json::to_string(recipe).unwrap_or_else(|_| recipe.title.clone());
            replies.push(self.reply(payload, RECIPE_DELAY));
        }

        replies.push(self.reply(FOLLOW_UP.to_string(), FOLLOW_UP_DELAY));
        replies
    }

    fn reply(&self, content: String, delay: Duration) -> Reply {
        Reply {
            message: self.bot_message(content),
            delay,
        }
    }

    fn bot_message(&self, content: String) -> Message {
        Message {
            id: Uuid::new_v4(),
            content,
            is_bot: true,
            timestamp: self.clock.now(),
        }
    }
}

/// A bot message is a recipe card iff its content starts with `{` and
/// parses as a recipe. Anything else renders as plain text; malformed JSON
/// is not an error.
pub fn parse_recipe_payload(content: &str) -> Option<Recipe> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with('{') {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn engine() -> ConversationEngine {
        let clock = Arc::new(FixedClock::at_date(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        ));
        ConversationEngine::new(Catalog::builtin(), clock)
    }

    #[test]
    fn opens_with_welcome() {
        let engine = engine();
        let conversation = engine.new_conversation();
        assert_eq!(conversation.messages().len(), 1);
        assert!(conversation.messages()[0].is_bot);
        assert_eq!(conversation.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn unmatched_input_gets_the_fallback() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        let replies = engine.respond(&mut conversation, "hello there");
        assert_eq!(replies.len(), 1);
        assert!(replies[0].message.content.contains("more to go on"));
        assert_eq!(conversation.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn ingredient_input_identifies_ingredients() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        let replies = engine.respond(&mut conversation, "I have pasta and tomatoes");
        assert_eq!(replies.len(), 1);
        assert!(replies[0]
            .message
            .content
            .contains("pasta, tomatoes, garlic, olive oil"));
        assert_eq!(conversation.phase(), Phase::IngredientsIdentified);
    }

    #[test]
    fn confirmation_emits_recipe_payload_and_follow_up() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        engine.respond(&mut conversation, "I have pasta and tomatoes");
        let replies = engine.respond(&mut conversation, "yes");

        assert_eq!(replies.len(), 3);
        let recipe = parse_recipe_payload(&replies[1].message.content).unwrap();
        assert_eq!(recipe.id, "pasta-primavera");
        assert_eq!(replies[1].delay, RECIPE_DELAY);
        assert!(!replies[2].message.content.starts_with('{'));
        assert_eq!(conversation.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn dessert_keywords_route_to_the_dessert_suggestion() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        engine.respond(&mut conversation, "something with chocolate please");
        let replies = engine.respond(&mut conversation, "show me");
        let recipe = parse_recipe_payload(&replies[1].message.content).unwrap();
        assert_eq!(recipe.id, "chocolate-lava-cake");
    }

    #[test]
    fn confirmation_without_prior_match_falls_through_to_rules() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        let replies = engine.respond(&mut conversation, "yes");
        // "yes" in AwaitingInput is just unmatched input.
        assert_eq!(replies.len(), 1);
        assert!(replies[0].message.content.contains("more to go on"));
    }

    #[test]
    fn log_is_append_only_and_ordered() {
        let engine = engine();
        let mut conversation = engine.new_conversation();
        engine.respond(&mut conversation, "I have mango and yogurt");
        engine.respond(&mut conversation, "ok");
        // welcome + (user, bot) + (user, bot, payload, follow-up)
        assert_eq!(conversation.messages().len(), 7);
        assert!(!conversation.messages()[1].is_bot);
        assert!(conversation.messages()[6].is_bot);
    }

    #[test]
    fn malformed_payload_renders_as_plain_text() {
        assert!(parse_recipe_payload("{not json").is_none());
        assert!(parse_recipe_payload("plain text reply").is_none());
        assert!(parse_recipe_payload("{\"id\": \"missing-fields\"}").is_none());
    }
}
