//! Booking page: confidential counsellor sessions.

use jiff::civil::{Date, Weekday};
use tracing::info;

use campusmind_backend::client::BackendClient;
use campusmind_backend::entities;
use campusmind_core::collections;
use campusmind_core::models::booking::BookingRequest;
use campusmind_core::models::user_profile::UserProfile;

/// A campus counsellor in the fixed directory.
pub struct Counsellor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
}

/// The directory shown on the booking page. Maintained by the
/// counselling office and updated with releases.
pub const COUNSELLORS: &[Counsellor] = &[
    Counsellor {
        id: "1",
        name: "Dr. Anjali Sharma",
        specialty: "Anxiety & Stress",
    },
    Counsellor {
        id: "2",
        name: "Mr. Rohan Gupta",
        specialty: "Career & Academic Pressure",
    },
    Counsellor {
        id: "3",
        name: "Ms. Priya Singh",
        specialty: "Relationships & Social Issues",
    },
];

/// Sessions run on weekdays and must be requested ahead of time; the
/// current day is already too late to schedule.
pub fn is_bookable(date: Date, today: Date) -> bool {
    date > today && !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Submit a booking request. The form already constrains its inputs, so
/// a counsellor id outside the directory or an unbookable date here is a
/// caller bug and comes back as an error. Blank notes are dropped rather
/// than stored empty.
pub async fn request_session(
    client: &BackendClient,
    user: &UserProfile,
    counsellor_id: &str,
    preferred_date: Date,
    notes: Option<&str>,
    anonymous: bool,
) -> eyre::Result<BookingRequest> {
    if !COUNSELLORS.iter().any(|c| c.id == counsellor_id) {
        return Err(eyre::eyre!("unknown counsellor id: {counsellor_id}"));
    }
    if !is_bookable(preferred_date, jiff::Zoned::now().date()) {
        return Err(eyre::eyre!("{preferred_date} is not a bookable date"));
    }

    let notes = notes.map(str::trim).filter(|n| !n.is_empty());
    let request = BookingRequest::new(user.id, counsellor_id, preferred_date, notes, anonymous);
    let created = entities::create(client, collections::BOOKINGS, &request).await?;
    info!(counsellor_id, date = %preferred_date, "booking requested");
    Ok(created)
}
