use chrono::{DateTime, Utc};
use time::OffsetDateTime;

pub fn to_offset_datetime(value: DateTime<Utc>) -> OffsetDateTime {
    let nanos = value
        .timestamp_nanos_opt()
        .map(i128::from)
        .unwrap_or_else(|| i128::from(value.timestamp_micros()).saturating_mul(1_000));
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn to_chrono(value: OffsetDateTime) -> DateTime<Utc> {
    let nanos = value.unix_timestamp_nanos();
    let secs = nanos.div_euclid(1_000_000_000) as i64;
    let subsec = nanos.rem_euclid(1_000_000_000) as u32;
    DateTime::from_timestamp(secs, subsec).unwrap_or_else(Utc::now)
}
