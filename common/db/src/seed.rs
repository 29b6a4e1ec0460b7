//! The seed document, used to provision suppliers and parts out-of-band.
//!
//! ```json
//! {
//!   "suppliers": [
//!     { "supplierId": 1, "name": "Acme", "parts": [ { "partId": 1, "name": "Widget" } ] }
//!   ],
//!   "builds": [
//!     {
//!       "buildId": 1,
//!       "serialNumber": "B001",
//!       "buildDate": "2024-01-01T00:00:00Z",
//!       "parts": [ { "partId": 1, "quantity": 5 } ]
//!     }
//!   ]
//! }
//! ```

use launchtrace_entity::part::PartStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub suppliers: Vec<SeedSupplier>,
    #[serde(default)]
    pub builds: Vec<SeedBuild>,
}

impl SeedData {
    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSupplier {
    pub supplier_id: i32,
    pub name: String,
    #[serde(default)]
    pub parts: Vec<SeedPart>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPart {
    pub part_id: i32,
    pub name: String,
    #[serde(default)]
    pub status: PartStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedBuild {
    pub build_id: i32,
    pub serial_number: String,
    #[serde(with = "time::serde::rfc3339")]
    pub build_date: OffsetDateTime,
    #[serde(default)]
    pub parts: Vec<SeedBuildPart>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedBuildPart {
    pub part_id: i32,
    #[serde(default)]
    pub quantity: i32,
}
