/// Sequential primary key for vehicles, bookings, reviews, conversations,
/// and messages. Users and mechanic profiles use string UUIDs instead.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User and mechanic-profile primary keys are UUID strings.
pub type UserId = String;
