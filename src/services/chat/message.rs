use crate::services::chat::types::{ChatMessage, MessageUpdate};
use chrono::{DateTime, Utc};

/// Assistant text in one of two states: still streaming, or finalized with a
/// stable identity. The type makes it impossible to confuse the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantReply {
    /// Reply under construction; its text grows as updates arrive.
    Draft { content: String },
    /// Completed reply with a stable id and completion time.
    Final {
        id: String,
        content: String,
        created_at: DateTime<Utc>,
    },
}

impl AssistantReply {
    pub fn content(&self) -> &str {
        match self {
            AssistantReply::Draft { content } => content,
            AssistantReply::Final { content, .. } => content,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, AssistantReply::Draft { .. })
    }
}

/// One entry in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    User(String),
    Assistant(AssistantReply),
}

/// Ordered conversation history. Holds at most one draft reply, always the
/// last entry, so streaming updates have an unambiguous target.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends a user message and opens an empty draft reply for the
    /// assistant's answer.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.discard_draft();
        self.entries.push(TranscriptEntry::User(content.into()));
        self.entries
            .push(TranscriptEntry::Assistant(AssistantReply::Draft {
                content: String::new(),
            }));
    }

    /// Replaces the draft's text with the update's accumulated content.
    /// Ignored when no draft is open.
    pub fn apply_update(&mut self, update: &MessageUpdate) {
        if let Some(TranscriptEntry::Assistant(AssistantReply::Draft { content })) =
            self.entries.last_mut()
        {
            content.clone_from(&update.content);
        }
    }

    /// Promotes the open draft to a final reply, assigning it an id and a
    /// completion timestamp. Returns the id, or `None` when no draft is open.
    pub fn finalize(&mut self) -> Option<String> {
        if let Some(TranscriptEntry::Assistant(reply)) = self.entries.last_mut() {
            if let AssistantReply::Draft { content } = reply {
                let id = uuid::Uuid::new_v4().to_string();
                let content = std::mem::take(content);
                *reply = AssistantReply::Final {
                    id: id.clone(),
                    content,
                    created_at: Utc::now(),
                };
                return Some(id);
            }
        }
        None
    }

    /// Drops an open draft, e.g. after a failed stream.
    pub fn discard_draft(&mut self) {
        if let Some(TranscriptEntry::Assistant(AssistantReply::Draft { .. })) = self.entries.last()
        {
            self.entries.pop();
        }
    }

    /// Whether a draft reply is currently open.
    pub fn has_draft(&self) -> bool {
        matches!(
            self.entries.last(),
            Some(TranscriptEntry::Assistant(AssistantReply::Draft { .. }))
        )
    }

    /// Converts finalized history to gateway request messages. An open draft
    /// is excluded: it is not yet part of the conversation.
    pub fn to_request_messages(&self) -> Vec<ChatMessage> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::User(content) => Some(ChatMessage::user(content.clone())),
                TranscriptEntry::Assistant(AssistantReply::Final { content, .. }) => {
                    Some(ChatMessage::assistant(content.clone()))
                }
                TranscriptEntry::Assistant(AssistantReply::Draft { .. }) => None,
            })
            .collect()
    }
}
