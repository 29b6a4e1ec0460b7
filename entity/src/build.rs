use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub serial_number: String,
    pub build_date: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::build_part::Entity")]
    BuildPart,
}

impl Related<super::build_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildPart.def()
    }
}

impl Related<super::part::Entity> for Entity {
    fn to() -> RelationDef {
        super::build_part::Relation::Part.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::build_part::Relation::Build.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
