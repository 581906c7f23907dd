//! Prompt and greeting assembly for the companion chat.
//!
//! Pure string functions. The safety contract lives here: every prompt
//! embeds the crisis-response instruction verbatim, and the model — not
//! this client — is responsible for recognizing crisis language and
//! answering with [`CRISIS_RESPONSE`].

use campusmind_core::models::chat_message::ChatMessage;
use campusmind_core::models::user_profile::UserProfile;

/// Bot name used in prompts when the user hasn't named their companion.
pub const DEFAULT_BOT_NAME: &str = "CampusMind AI";

/// How many trailing messages of the conversation are replayed to the
/// model as context.
pub const CONTEXT_WINDOW: usize = 5;

/// The fixed reply the model is instructed to give when user input
/// expresses self-harm, suicide ideation, or severe distress.
pub const CRISIS_RESPONSE: &str = "It sounds like you are going through a lot right now, \
and it's really brave of you to share. For immediate support, please reach out to a \
professional. You can call the crisis hotline at [Your Country's Helpline Number] or use \
the 'Booking' feature in this app to connect with a campus counsellor. Please know that \
you are not alone.";

/// Greeting the session opens with.
pub fn greeting(profile: &UserProfile) -> String {
    let bot_name = profile.chatbot_name.as_deref().unwrap_or("your AI friend");
    let alias = profile.alias.as_deref().unwrap_or("there");
    format!(
        "Hey {alias}! I'm {bot_name}. How has your day been? \
         Feel free to share anything on your mind."
    )
}

/// Assemble the completion prompt for one user turn.
///
/// `transcript` is the full in-memory conversation, already including the
/// message just appended for `latest`. Only the trailing
/// [`CONTEXT_WINDOW`] messages are replayed, rendered as `sender: text`
/// lines in arrival order.
pub fn build_prompt(profile: &UserProfile, transcript: &[ChatMessage], latest: &str) -> String {
    let bot_name = profile.chatbot_name.as_deref().unwrap_or(DEFAULT_BOT_NAME);
    let alias = profile.alias.as_deref().unwrap_or("friend");
    let hobbies = if profile.hobbies.is_empty() {
        "not specified".to_string()
    } else {
        profile.hobbies.join(", ")
    };

    let start = transcript.len().saturating_sub(CONTEXT_WINDOW);
    let context = transcript[start..]
        .iter()
        .map(|m| format!("{}: {}", m.sender, m.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a friendly, supportive, and empathetic AI friend named '{bot_name}' \
         talking to a student. Your goal is to listen, provide comfort, and offer \
         gentle, positive suggestions based on cognitive-behavioral therapy (CBT) \
         principles if appropriate. NEVER give medical advice. If the user expresses \
         thoughts of self-harm, suicide, or severe distress, you MUST respond with: \
         \"{CRISIS_RESPONSE}\"\n\n\
         The user's alias is: {alias}.\n\
         Their hobbies are: {hobbies}.\n\n\
         Previous conversation context:\n\
         {context}\n\n\
         User's latest message: \"{latest}\"\n\n\
         Your response (be concise, warm, and conversational):"
    )
}
