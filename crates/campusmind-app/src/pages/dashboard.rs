//! Dashboard page: the greeting shown above the feature tiles.

use campusmind_backend::client::BackendClient;
use campusmind_backend::error::BackendError;
use campusmind_backend::users;

/// Greeting for the top of the dashboard, e.g. `Good morning, Sam.`
pub async fn load_greeting(client: &BackendClient) -> Result<String, BackendError> {
    let profile = users::me(client).await?;
    let alias = profile.alias.as_deref().unwrap_or("friend");
    let hour = jiff::Zoned::now().hour();
    Ok(format!("Good {}, {alias}.", time_of_day(hour)))
}

/// "morning" until noon, "afternoon" until 18:00, "evening" after.
pub fn time_of_day(hour: i8) -> &'static str {
    match hour {
        0..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    }
}
