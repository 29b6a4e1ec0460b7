use crate::part::model::PartSummary;
use launchtrace_entity::build;
use serde::{Deserialize, Deserializer, Serialize};
use time::{
    Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::well_known::{Iso8601, Rfc3339},
};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildHead {
    pub build_id: i32,
    pub serial_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub build_date: OffsetDateTime,
}

impl From<build::Model> for BuildHead {
    fn from(value: build::Model) -> Self {
        Self {
            build_id: value.id,
            serial_number: value.serial_number,
            build_date: value.build_date.to_offset(UtcOffset::UTC),
        }
    }
}

/// A build, with the number of parts it uses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    #[serde(flatten)]
    pub head: BuildHead,
    /// Number of parts used by the build
    pub part_count: u64,
    /// Number of those parts which are currently flagged as faulty
    pub faulty_part_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildDetails {
    #[serde(flatten)]
    pub summary: BuildSummary,
    pub parts: Vec<BuildPartSummary>,
}

/// A part used by a build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildPartSummary {
    #[serde(flatten)]
    pub part: PartSummary,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildRequest {
    pub serial_number: String,
    /// RFC 3339 timestamp, values without an offset are taken as UTC
    #[serde(
        deserialize_with = "deserialize_build_date",
        serialize_with = "time::serde::rfc3339::serialize"
    )]
    pub build_date: OffsetDateTime,
    #[serde(default)]
    pub part_ids: Vec<i32>,
}

fn deserialize_build_date<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_build_date(&value).map_err(serde::de::Error::custom)
}

/// Parse a build date, accepting timestamps without an offset as UTC.
pub fn parse_build_date(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    match OffsetDateTime::parse(value, &Rfc3339) {
        Ok(date) => Ok(date),
        Err(err) => match PrimitiveDateTime::parse(value, &Iso8601::DEFAULT) {
            Ok(date) => Ok(date.assume_utc()),
            Err(_) => Err(err),
        },
    }
}

/// Convert to UTC, with the microsecond precision the database stores.
pub fn normalize_build_date(date: OffsetDateTime) -> OffsetDateTime {
    let date = date.to_offset(UtcOffset::UTC);
    date - Duration::nanoseconds((date.nanosecond() % 1_000) as i64)
}
