use chrono::{DateTime, Utc};

pub fn display(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}
