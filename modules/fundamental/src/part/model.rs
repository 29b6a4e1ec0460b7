use launchtrace_entity::{part, part::PartStatus, supplier};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierHead {
    pub supplier_id: i32,
    pub name: String,
}

impl From<supplier::Model> for SupplierHead {
    fn from(value: supplier::Model) -> Self {
        Self {
            supplier_id: value.id,
            name: value.name,
        }
    }
}

/// A part, together with the supplier providing it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartSummary {
    pub part_id: i32,
    pub name: String,
    pub status: PartStatus,
    pub supplier_id: i32,
    pub supplier: SupplierHead,
}

impl PartSummary {
    pub fn new(part: part::Model, supplier: SupplierHead) -> Self {
        Self {
            part_id: part.id,
            name: part.name,
            status: part.status,
            supplier_id: part.supplier_id,
            supplier,
        }
    }
}
