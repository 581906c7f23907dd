use std::sync::Arc;

use tokio::sync::Mutex;

use campusmind_backend::client::BackendClient;
use campusmind_chat::session::ChatSession;

pub struct AppState {
    /// Platform client, present once the app is configured.
    pub client: Arc<Mutex<Option<BackendClient>>>,
    /// The open chat session, if the user is on the chat page.
    pub chat: Arc<Mutex<Option<ChatSession>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            client: Arc::new(Mutex::new(None)),
            chat: Arc::new(Mutex::new(None)),
        }
    }
}
