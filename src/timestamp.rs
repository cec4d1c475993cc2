use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, PrimitiveDateTime};

const LOCAL_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

/// Current wall clock without offset, truncated to microseconds so it
/// survives a round trip through a `TIMESTAMP` column.
pub fn now_local() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    let ts = PrimitiveDateTime::new(now.date(), now.time());
    ts.replace_nanosecond(ts.nanosecond() / 1_000 * 1_000)
        .unwrap_or(ts)
}

pub fn format_local(ts: &PrimitiveDateTime) -> String {
    ts.format(LOCAL_FORMAT)
        .unwrap_or_else(|_| ts.to_string())
}

/// `#[serde(with = "crate::timestamp::iso_local")]` for `createdAt` fields.
pub mod iso_local {
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};
    use time::PrimitiveDateTime;

    use super::LOCAL_FORMAT;

    pub fn serialize<S: Serializer>(ts: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = ts.format(LOCAL_FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PrimitiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        PrimitiveDateTime::parse(&text, LOCAL_FORMAT).map_err(D::Error::custom)
    }
}
