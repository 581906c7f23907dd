pub mod booking;
pub mod chat_message;
pub mod diary_entry;
pub mod forum_post;
pub mod resource;
pub mod user_profile;
