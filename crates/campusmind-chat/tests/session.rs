//! Behavioral tests for the chat session lifecycle, run against
//! in-memory stores.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use campusmind_chat::error::ChatError;
use campusmind_chat::prompt::CONTEXT_WINDOW;
use campusmind_chat::session::{ChatSession, FALLBACK_REPLY, SessionIds};
use campusmind_chat::stores::{CompletionService, MessageStore, ProfileStore};
use campusmind_core::models::chat_message::{ChatMessage, Sender};
use campusmind_core::models::user_profile::{ConsentFlags, UserProfile};

const SESSION_ID: &str = "session_1700000000000";

struct FixedIds;

impl SessionIds for FixedIds {
    fn next(&self) -> String {
        SESSION_ID.to_string()
    }
}

struct FixedProfile(UserProfile);

#[async_trait]
impl ProfileStore for FixedProfile {
    async fn fetch_current(&self) -> Result<UserProfile, ChatError> {
        Ok(self.0.clone())
    }
}

/// Records every message handed to `append`; can be switched to fail.
#[derive(Default)]
struct RecordingStore {
    appended: Mutex<Vec<ChatMessage>>,
    fail: AtomicBool,
}

impl RecordingStore {
    fn appended(&self) -> Vec<ChatMessage> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageStore for RecordingStore {
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, ChatError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChatError::Store("store offline".to_string()));
        }
        self.appended.lock().unwrap().push(message.clone());
        Ok(message)
    }
}

/// Succeeds for the first `allow` appends, then fails every later one.
struct FlakyStore {
    inner: RecordingStore,
    remaining: AtomicUsize,
}

impl FlakyStore {
    fn allowing(appends: usize) -> Self {
        Self {
            inner: RecordingStore::default(),
            remaining: AtomicUsize::new(appends),
        }
    }
}

#[async_trait]
impl MessageStore for FlakyStore {
    async fn append(&self, message: ChatMessage) -> Result<ChatMessage, ChatError> {
        if self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_err()
        {
            return Err(ChatError::Store("store offline".to_string()));
        }
        self.inner.append(message).await
    }
}

/// Replies with a scripted text (or fails when unscripted) and records
/// every prompt. Optionally observes a session's typing flag at the
/// moment of invocation.
#[derive(Default)]
struct ScriptedModel {
    reply: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
    watch_typing: Mutex<Option<Arc<AtomicBool>>>,
    typing_during_call: AtomicBool,
}

impl ScriptedModel {
    fn replying(text: &str) -> Self {
        Self {
            reply: Mutex::new(Some(text.to_string())),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(flag) = self.watch_typing.lock().unwrap().as_ref() {
            self.typing_during_call
                .store(flag.load(Ordering::SeqCst), Ordering::SeqCst);
        }
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ChatError::Completion("model timed out".to_string()))
    }
}

fn sam() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        full_name: None,
        email: None,
        alias: Some("Sam".to_string()),
        chatbot_name: Some("Nova".to_string()),
        institution_id: None,
        hobbies: vec!["reading".to_string()],
        consent_flags: ConsentFlags::default(),
    }
}

fn bare_profile() -> UserProfile {
    UserProfile {
        alias: None,
        chatbot_name: None,
        hobbies: vec![],
        ..sam()
    }
}

async fn start(
    profile: UserProfile,
    store: Arc<RecordingStore>,
    model: Arc<ScriptedModel>,
) -> ChatSession {
    ChatSession::start(&FixedProfile(profile), store, model, &FixedIds)
        .await
        .expect("session should start")
}

#[tokio::test]
async fn start_emits_and_persists_exactly_one_greeting() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::failing());

    let session = start(sam(), store.clone(), model).await;

    assert_eq!(session.session_id(), SESSION_ID);
    assert_eq!(session.messages().len(), 1);

    let greeting = &session.messages()[0];
    assert_eq!(greeting.sender, Sender::Bot);
    assert!(greeting.text.contains("Sam"));
    assert!(greeting.text.contains("Nova"));

    let persisted = store.appended();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].text, greeting.text);
    assert_eq!(persisted[0].session_id, SESSION_ID);
}

#[tokio::test]
async fn start_fails_when_greeting_cannot_be_persisted() {
    let store = Arc::new(RecordingStore::default());
    store.fail.store(true, Ordering::SeqCst);

    let result = ChatSession::start(
        &FixedProfile(sam()),
        store,
        Arc::new(ScriptedModel::failing()),
        &FixedIds,
    )
    .await;

    assert!(matches!(result, Err(ChatError::Store(_))));
}

#[tokio::test]
async fn greeting_uses_placeholders_for_bare_profiles() {
    let store = Arc::new(RecordingStore::default());
    let session = start(bare_profile(), store, Arc::new(ScriptedModel::failing())).await;

    let text = &session.messages()[0].text;
    assert!(text.contains("there"));
    assert!(text.contains("your AI friend"));
}

#[tokio::test]
async fn send_appends_one_user_and_one_bot_message_in_order() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying(
        "That sounds stressful — want to talk about it?",
    ));
    let mut session = start(sam(), store.clone(), model).await;

    let reply = session
        .send("I feel anxious about exams")
        .await
        .expect("non-empty input should produce a bot turn")
        .clone();

    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(reply.text, "That sounds stressful — want to talk about it?");

    let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
    assert_eq!(session.messages()[1].text, "I feel anxious about exams");

    // Greeting, user message, and the genuine reply are all persisted.
    let persisted = store.appended();
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[1].text, "I feel anxious about exams");
    assert_eq!(persisted[2].text, "That sounds stressful — want to talk about it?");
}

#[tokio::test]
async fn blank_submissions_are_silent_no_ops() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("hi"));
    let mut session = start(sam(), store.clone(), model.clone()).await;

    assert!(session.send("").await.is_none());
    assert!(session.send("   ").await.is_none());
    assert!(session.send("\n\t").await.is_none());

    assert_eq!(session.messages().len(), 1, "no messages appended");
    assert_eq!(store.appended().len(), 1, "nothing persisted");
    assert!(model.prompts().is_empty(), "no model calls made");
}

#[tokio::test]
async fn input_is_trimmed_before_use() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("hello!"));
    let mut session = start(sam(), store, model.clone()).await;

    session.send("  hello there  ").await;

    assert_eq!(session.messages()[1].text, "hello there");
    let prompt = model.prompts().pop().unwrap();
    assert!(prompt.contains("User's latest message: \"hello there\""));
}

#[tokio::test]
async fn model_failure_yields_fallback_in_memory_only() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::failing());
    let mut session = start(sam(), store.clone(), model).await;

    let reply = session.send("rough day").await.unwrap().clone();

    assert_eq!(reply.text, FALLBACK_REPLY);
    assert_eq!(session.messages().len(), 3);
    assert!(!session.is_typing());

    // The fallback is never handed to the store: only the greeting and
    // the user message were persisted.
    let persisted = store.appended();
    assert_eq!(persisted.len(), 2);
    assert!(persisted.iter().all(|m| m.text != FALLBACK_REPLY));
}

#[tokio::test]
async fn user_persist_failure_yields_fallback_without_model_call() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("should never be asked"));
    let mut session = start(sam(), store.clone(), model.clone()).await;

    store.fail.store(true, Ordering::SeqCst);
    let reply = session.send("rough day").await.unwrap().clone();

    assert_eq!(reply.text, FALLBACK_REPLY);
    assert!(model.prompts().is_empty(), "invocation skipped after persist failure");
    assert_eq!(store.appended().len(), 1, "only the greeting was persisted");
}

#[tokio::test]
async fn bot_persist_failure_still_yields_exactly_one_bot_message() {
    // Greeting and user message persist, then the store degrades, so the
    // genuine reply's persistence is what fails mid-turn.
    let flaky = Arc::new(FlakyStore::allowing(2));
    let model = Arc::new(ScriptedModel::replying("a genuine reply"));
    let mut session = ChatSession::start(&FixedProfile(sam()), flaky.clone(), model, &FixedIds)
        .await
        .expect("greeting persists before the store degrades");

    let reply = session.send("rough day").await.unwrap().clone();

    assert_eq!(reply.text, FALLBACK_REPLY);
    let bots = session
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::Bot)
        .count();
    assert_eq!(bots, 2, "greeting plus exactly one bot turn");
    assert_eq!(flaky.inner.appended().len(), 2);
}

#[tokio::test]
async fn prompt_window_includes_the_just_sent_message() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("mm-hmm"));
    let mut session = start(sam(), store, model.clone()).await;

    session.send("first thing").await;
    session.send("second thing").await;

    let prompt = model.prompts().pop().unwrap();
    assert!(prompt.contains("user: second thing"));
    assert!(prompt.contains("user: first thing"));
    assert!(prompt.contains("bot: mm-hmm"));
}

#[tokio::test]
async fn prompt_window_is_bounded_across_a_long_conversation() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("noted"));
    let mut session = start(sam(), store, model.clone()).await;

    for i in 0..6 {
        session.send(&format!("entry number {i}")).await;
    }

    let prompt = model.prompts().pop().unwrap();
    let context = prompt
        .split("Previous conversation context:\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\nUser's latest message").next())
        .expect("prompt carries a context block");
    assert_eq!(context.lines().count(), CONTEXT_WINDOW);
    assert!(context.contains("user: entry number 5"));
    assert!(!context.contains("entry number 2"));
}

#[tokio::test]
async fn typing_flag_is_set_strictly_during_the_turn() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("hi"));
    let mut session = start(sam(), store, model.clone()).await;

    assert!(!session.is_typing(), "idle before send");
    *model.watch_typing.lock().unwrap() = Some(session.typing_flag());

    session.send("hello").await;

    assert!(
        model.typing_during_call.load(Ordering::SeqCst),
        "typing flag observed true while the model was running"
    );
    assert!(!session.is_typing(), "idle again after the reply resolved");
}

#[tokio::test]
async fn typing_flag_resets_after_a_failed_turn() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::failing());
    let mut session = start(sam(), store, model).await;

    session.send("hello").await;

    assert!(!session.is_typing());
}

#[tokio::test]
async fn turn_pairing_holds_across_mixed_outcomes() {
    let store = Arc::new(RecordingStore::default());
    let model = Arc::new(ScriptedModel::replying("ok"));
    let mut session = start(sam(), store, model.clone()).await;

    session.send("one").await;
    *model.reply.lock().unwrap() = None; // model degrades
    session.send("two").await;
    *model.reply.lock().unwrap() = Some("back".to_string());
    session.send("three").await;

    let users = session
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::User)
        .count();
    let bots = session
        .messages()
        .iter()
        .filter(|m| m.sender == Sender::Bot)
        .count();
    assert_eq!(users, 3);
    assert_eq!(bots, 4, "greeting plus one bot turn per send");
}
