/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Stay dates carry no time zone; a night is one calendar day.
pub type StayDate = chrono::NaiveDate;
