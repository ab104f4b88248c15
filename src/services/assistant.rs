//! Guest-facing assistant: grounds each question in the room's context and
//! forwards the conversation to the completion client.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::clients::completion::{CompletionClient, CompletionError};
use crate::models::chat::ChatMessage;
use crate::models::context::RoomContext;
use crate::models::resident::Resident;
use crate::services::context_service::{ContextError, ContextService};
use crate::services::prompt::{PromptTemplate, PromptVars};
use crate::services::session::ChatSession;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Failed to serialize room context: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub struct Assistant {
    context: Arc<dyn ContextService>,
    completion: Arc<dyn CompletionClient>,
    template: PromptTemplate,
}

impl Assistant {
    #[must_use]
    pub fn new(
        context: Arc<dyn ContextService>,
        completion: Arc<dyn CompletionClient>,
        template: PromptTemplate,
    ) -> Self {
        Self {
            context,
            completion,
            template,
        }
    }

    #[must_use]
    pub const fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Opening line shown before the first question.
    #[must_use]
    pub fn greeting(&self, resident: Option<&Resident>) -> String {
        match resident {
            Some(resident) => format!(
                "Hi {}! I'm {}, how can I help you today?",
                resident.first_name(),
                self.template.assistant_name
            ),
            None => format!(
                "Hi! I'm {}, how can I help you today?",
                self.template.assistant_name
            ),
        }
    }

    /// Answers one guest message within `session`.
    ///
    /// The context is rebuilt on every call so the reply reflects the current
    /// state of the room. The exchange is added to the session only when the
    /// completion succeeds.
    pub async fn reply(
        &self,
        session: &mut ChatSession,
        input: &str,
    ) -> Result<String, AssistantError> {
        if session.is_expired() {
            info!(room = %session.room(), "Chat session idle too long, starting over");
            session.reset();
        }

        let context = self.context.build_context(session.room()).await?;
        let messages = self.compose(&context, session.history(), input)?;

        debug!(
            room = %session.room(),
            history = session.history().len(),
            "Sending conversation to completion client"
        );

        let reply = self.completion.complete(&messages).await?;
        session.record_exchange(input, &reply);
        Ok(reply)
    }

    /// Message order: system prompt, grounding context, prior turns, new input.
    fn compose(
        &self,
        context: &RoomContext,
        history: &[ChatMessage],
        input: &str,
    ) -> Result<Vec<ChatMessage>, AssistantError> {
        let system = self.template.render(PromptVars {
            day: &context.day,
            room: context.room.room_number.as_str(),
            location: context.hotel.as_ref().and_then(|h| h.location.as_deref()),
        });
        let grounding = context.to_grounding_text()?;

        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(ChatMessage::system(system));
        messages.push(ChatMessage::user(format!("Context:\n{grounding}")));
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(input));
        Ok(messages)
    }
}
