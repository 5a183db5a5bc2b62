use crate::model::{User, UserId};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub const NO_USERS_MESSAGE: &str = "No users found. Add some users to get started!";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users";

/// What the user list container shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsersView {
    /// nothing loaded yet
    #[default]
    Pending,
    Empty,
    LoadFailed,
    Cards(Vec<UserCard>),
}

/// One rendered record, every field display ready.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserCard {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created: String,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created: format_date(user.created_at.as_deref()),
        }
    }
}

/// Builds the view for the cached list, in list order.
pub fn render(users: &[User]) -> UsersView {
    if users.is_empty() {
        UsersView::Empty
    } else {
        UsersView::Cards(users.iter().map(UserCard::from).collect())
    }
}

impl UsersView {
    pub fn card_count(&self) -> usize {
        match self {
            UsersView::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// A click on one of the card buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit(UserId),
    Delete(UserId),
}

const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Offset-less layouts, read as local wall time.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// `Jan 5, 2024, 03:04 PM`. Timestamps with an offset are moved to local time,
/// ones without are taken as local wall time already. A bare date is midnight
/// UTC, like the browser `Date` reads it.
pub fn format_date(timestamp: Option<&str>) -> String {
    let timestamp = match timestamp.map(str::trim) {
        Some(timestamp) if !timestamp.is_empty() => timestamp,
        _ => return "N/A".to_string(),
    };
    if let Ok(date) = DateTime::parse_from_rfc3339(timestamp) {
        return date.with_timezone(&Local).format(DATE_FORMAT).to_string();
    }
    if let Some(date) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
    {
        return date.format(DATE_FORMAT).to_string();
    }
    match NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        Ok(date) => date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
