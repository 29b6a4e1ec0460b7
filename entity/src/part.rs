use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "part")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: PartStatus,
    pub supplier_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,

    #[sea_orm(has_many = "super::build_part::Entity")]
    BuildPart,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::build_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildPart.def()
    }
}

impl Related<super::build::Entity> for Entity {
    fn to() -> RelationDef {
        super::build_part::Relation::Build.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::build_part::Relation::Part.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The condition of a part.
///
/// Stored as an integer, serialized as `"OK"` or `"FAULTY"`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "UPPERCASE")]
pub enum PartStatus {
    #[default]
    #[sea_orm(num_value = 0)]
    Ok,
    #[sea_orm(num_value = 1)]
    Faulty,
}
