//! Clock access and timestamp formatting.
//!
//! The browser clock comes from `Date.now()`; native builds (SSR, tests) use
//! the system clock. Timestamps from the API are RFC 3339 and are displayed
//! in UTC; unparseable values pass through unchanged.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i64;
        millis
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Seconds since the Unix epoch, for comparing against JWT `exp` claims.
pub fn now_secs() -> i64 {
    now_millis() / 1000
}

/// RFC 3339 rendering of a millisecond timestamp.
pub fn rfc3339_from_millis(millis: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_default()
}

/// Long form used for document creation times: `01/03/2024 10:05`.
pub fn format_timestamp(raw: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_owned();
    };
    parsed
        .format(format_description!("[day]/[month]/[year] [hour]:[minute]"))
        .unwrap_or_else(|_| raw.to_owned())
}

/// Compact form used under chat bubbles: `10:05 - 01/03/24`.
pub fn format_chat_time(raw: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return raw.to_owned();
    };
    parsed
        .format(format_description!("[hour]:[minute] - [day]/[month]/[year repr:last_two]"))
        .unwrap_or_else(|_| raw.to_owned())
}
