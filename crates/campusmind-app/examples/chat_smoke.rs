//! Smoke test for the chat flow against a live platform.
//!
//! Opens a session as the configured user, prints the greeting, then
//! relays stdin lines to the companion until EOF.
//!
//! Usage:
//!   CAMPUSMIND_BASE_URL=https://api.campusmind.app \
//!   CAMPUSMIND_API_KEY=cm_live_... \
//!   CAMPUSMIND_APP_ID=campusmind \
//!   cargo run -p campusmind-app --example chat_smoke

use campusmind_app::pages::chat;
use campusmind_backend::client::BackendClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    campusmind_app::init_tracing();

    let base_url = std::env::var("CAMPUSMIND_BASE_URL")
        .map_err(|_| eyre::eyre!("set CAMPUSMIND_BASE_URL env var"))?;
    let api_key = std::env::var("CAMPUSMIND_API_KEY")
        .map_err(|_| eyre::eyre!("set CAMPUSMIND_API_KEY env var"))?;
    let app_id = std::env::var("CAMPUSMIND_APP_ID").unwrap_or_default();

    let client = BackendClient::new(&base_url, &api_key, &app_id);

    println!("Opening chat session...");
    let mut session = chat::open_session(&client).await?;
    println!("Session: {}", session.session_id());
    println!("bot: {}", session.messages()[0].text);
    println!();
    println!("Type a message and press Enter (Ctrl-D to quit).");

    loop {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if let Some(reply) = session.send(&line).await {
            println!("bot: {}", reply.text);
        }
    }

    println!("Bye.");
    Ok(())
}
