//! The chat session controller.
//!
//! Owns one conversation run: the greeting, the in-memory transcript
//! mirror, per-turn persistence ordering, and the fallback policy when
//! the platform misbehaves.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use campusmind_core::models::chat_message::ChatMessage;
use campusmind_core::models::user_profile::UserProfile;

use crate::error::ChatError;
use crate::prompt;
use crate::stores::{CompletionService, MessageStore, ProfileStore};

/// Shown in place of a reply when persistence or invocation fails
/// mid-turn. Kept in memory only, never persisted.
pub const FALLBACK_REPLY: &str =
    "I'm having a little trouble connecting right now. Please try again in a moment.";

/// Source of session identifiers. Injected so tests can pin ids and a
/// collision-free scheme could be swapped in without touching the
/// session.
pub trait SessionIds: Send + Sync {
    fn next(&self) -> String;
}

/// Production generator: `session_<current time in milliseconds>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClockSessionIds;

impl SessionIds for WallClockSessionIds {
    fn next(&self) -> String {
        format!("session_{}", jiff::Timestamp::now().as_millisecond())
    }
}

/// One live conversation between the signed-in student and their
/// companion bot.
///
/// Sends are serialized by construction: [`ChatSession::send`] takes
/// `&mut self`, so two turns can never interleave their trailing-window
/// computation. Callers that share a session across tasks hold it behind
/// an async mutex. There is no cancellation of an in-flight turn.
pub struct ChatSession {
    profile: UserProfile,
    session_id: String,
    messages: Vec<ChatMessage>,
    typing: Arc<AtomicBool>,
    store: Arc<dyn MessageStore>,
    llm: Arc<dyn CompletionService>,
}

impl ChatSession {
    /// Open a session: fetch the current profile, mint a session id, and
    /// emit + persist the greeting.
    ///
    /// Failure here (profile fetch or greeting persistence) is fatal to
    /// chat availability for this session and propagates to the caller.
    pub async fn start(
        profiles: &dyn ProfileStore,
        store: Arc<dyn MessageStore>,
        llm: Arc<dyn CompletionService>,
        ids: &dyn SessionIds,
    ) -> Result<Self, ChatError> {
        let profile = profiles.fetch_current().await?;
        let session_id = ids.next();

        let greeting = ChatMessage::bot(profile.id, &session_id, &prompt::greeting(&profile));
        store.append(greeting.clone()).await?;

        info!(session = %session_id, user = %profile.id, "chat session started");

        Ok(Self {
            profile,
            session_id,
            messages: vec![greeting],
            typing: Arc::new(AtomicBool::new(false)),
            store,
            llm,
        })
    }

    /// Handle one user submission.
    ///
    /// Empty (after trimming) input is silently ignored. Otherwise exactly
    /// one user message and exactly one bot message — the model's reply,
    /// or [`FALLBACK_REPLY`] if anything after the optimistic append
    /// fails — join the transcript, in that order. Returns the bot
    /// message, or `None` for an ignored submission.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        let user_message = ChatMessage::user(self.profile.id, &self.session_id, text);
        self.messages.push(user_message.clone());
        self.typing.store(true, Ordering::SeqCst);

        let reply = match self.exchange(user_message, text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session = %self.session_id, error = %e, "chat turn failed, showing fallback");
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages
            .push(ChatMessage::bot(self.profile.id, &self.session_id, &reply));
        self.typing.store(false, Ordering::SeqCst);

        self.messages.last()
    }

    /// The fallible middle of a turn: persist the user message, ask the
    /// model, persist its reply. The in-memory append of the outcome is
    /// left to [`ChatSession::send`] so that a turn yields exactly one
    /// bot message whichever way it goes.
    async fn exchange(&self, user_message: ChatMessage, latest: &str) -> Result<String, ChatError> {
        self.store.append(user_message).await?;

        let prompt = prompt::build_prompt(&self.profile, &self.messages, latest);
        let reply = self.llm.complete(&prompt).await?;

        self.store
            .append(ChatMessage::bot(self.profile.id, &self.session_id, &reply))
            .await?;

        Ok(reply)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// In-memory transcript, in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is outstanding.
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::SeqCst)
    }

    /// Shared handle to the typing flag, for bindings that observe the
    /// session while a send is in flight.
    pub fn typing_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.typing)
    }
}
