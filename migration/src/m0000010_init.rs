use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supplier::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .to_owned(),
                    )
                    .col(ColumnDef::new(Supplier::Name).string().not_null().to_owned())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Part::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Part::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .to_owned(),
                    )
                    .col(ColumnDef::new(Part::Name).string().not_null().to_owned())
                    .col(
                        ColumnDef::new(Part::Status)
                            .integer()
                            .not_null()
                            .default(0)
                            .to_owned(),
                    )
                    .col(ColumnDef::new(Part::SupplierId).integer().not_null().to_owned())
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(Part::SupplierId)
                            .to(Supplier::Table, Supplier::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("part_supplier_id_idx")
                    .table(Part::Table)
                    .col(Part::SupplierId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Build::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Build::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                            .to_owned(),
                    )
                    .col(
                        ColumnDef::new(Build::SerialNumber)
                            .string()
                            .not_null()
                            .to_owned(),
                    )
                    .col(
                        ColumnDef::new(Build::BuildDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .to_owned(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BuildPart::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BuildPart::BuildId).integer().not_null().to_owned())
                    .col(ColumnDef::new(BuildPart::PartId).integer().not_null().to_owned())
                    .col(
                        ColumnDef::new(BuildPart::Quantity)
                            .integer()
                            .not_null()
                            .default(0)
                            .to_owned(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BuildPart::BuildId)
                            .col(BuildPart::PartId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(BuildPart::BuildId)
                            .to(Build::Table, Build::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(BuildPart::PartId)
                            .to(Part::Table, Part::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // the primary key covers lookups by build, impacted builds are looked up by part
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("build_part_part_id_idx")
                    .table(BuildPart::Table)
                    .col(BuildPart::PartId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BuildPart::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Build::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Part::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Supplier::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Supplier {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Part {
    Table,
    Id,
    Name,
    Status,
    SupplierId,
}

#[derive(DeriveIden)]
enum Build {
    Table,
    Id,
    SerialNumber,
    BuildDate,
}

#[derive(DeriveIden)]
enum BuildPart {
    Table,
    BuildId,
    PartId,
    Quantity,
}
