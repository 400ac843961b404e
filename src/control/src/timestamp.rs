//! Serde format for snapshot times: `2021-01-01T12:00`, seconds optional.

time::serde::format_description!(
    minutes,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"
);

pub use minutes::*;

/// Parse a time written in the snapshot format, e.g. a JSON map key.
pub fn parse(value: &str) -> Result<time::PrimitiveDateTime, time::error::Parse> {
    let format = time::macros::format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"
    );
    time::PrimitiveDateTime::parse(value, format)
}
