//! Platform collection names.
//!
//! The hosted platform stores every entity in a named collection; these
//! constants keep the client-side spelling in one place so the page
//! controllers and stores never disagree on it.

pub const CHAT_MESSAGES: &str = "ChatMessage";

pub const DIARY_ENTRIES: &str = "DiaryEntry";

pub const FORUM_POSTS: &str = "ForumPost";

pub const RESOURCES: &str = "Resource";

pub const BOOKINGS: &str = "Booking";
