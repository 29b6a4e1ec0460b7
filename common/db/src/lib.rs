pub mod seed;

use crate::seed::SeedData;
use anyhow::Context;
use launchtrace_common::db;
use launchtrace_entity::{build, build_part, part, supplier};
use migration::Migrator;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    IntoActiveModel, TransactionTrait,
};
use sea_orm_migration::prelude::MigratorTrait;
use time::UtcOffset;
use tracing::instrument;

pub struct Database<'a>(pub &'a db::Database);

impl<'a> Database<'a> {
    /// Ensure the schema exists. Running this on an up-to-date database is a no-op.
    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        log::debug!("applying migrations");
        Migrator::up(&**self.0, None).await?;
        log::debug!("applied migrations");

        Ok(())
    }

    /// Drop and re-create the schema, losing all data.
    #[instrument(skip(self), err)]
    pub async fn refresh(&self) -> Result<(), anyhow::Error> {
        log::warn!("refreshing database schema...");
        Migrator::refresh(&**self.0).await?;
        log::warn!("refreshing database schema... done!");

        Ok(())
    }

    /// Load seed data, using the ids provided by the seed document.
    ///
    /// Either all of the data gets stored, or none of it.
    #[instrument(
        skip_all,
        fields(suppliers = data.suppliers.len(), builds = data.builds.len()),
        err
    )]
    pub async fn seed(&self, data: &SeedData) -> Result<(), anyhow::Error> {
        let tx = self.0.begin().await?;

        let suppliers = data
            .suppliers
            .iter()
            .map(|supplier| supplier::ActiveModel {
                id: Set(supplier.supplier_id),
                name: Set(supplier.name.clone()),
            })
            .collect::<Vec<_>>();
        insert_all(suppliers, &tx)
            .await
            .context("storing suppliers")?;

        let parts = data
            .suppliers
            .iter()
            .flat_map(|supplier| {
                supplier.parts.iter().map(|part| part::ActiveModel {
                    id: Set(part.part_id),
                    name: Set(part.name.clone()),
                    status: Set(part.status),
                    supplier_id: Set(supplier.supplier_id),
                })
            })
            .collect::<Vec<_>>();
        insert_all(parts, &tx)
            .await
            .context("storing parts")?;

        let builds = data
            .builds
            .iter()
            .map(|build| build::ActiveModel {
                id: Set(build.build_id),
                serial_number: Set(build.serial_number.clone()),
                build_date: Set(build.build_date.to_offset(UtcOffset::UTC)),
            })
            .collect::<Vec<_>>();
        insert_all(builds, &tx)
            .await
            .context("storing builds")?;

        let build_parts = data
            .builds
            .iter()
            .flat_map(|build| {
                build.parts.iter().map(|part| build_part::ActiveModel {
                    build_id: Set(build.build_id),
                    part_id: Set(part.part_id),
                    quantity: Set(part.quantity),
                })
            })
            .collect::<Vec<_>>();
        insert_all(build_parts, &tx)
            .await
            .context("storing build parts")?;

        if tx.get_database_backend() == DbBackend::Postgres {
            // explicit ids don't advance the sequences backing the serial columns
            for table in ["supplier", "part", "build"] {
                tx.execute_unprepared(&format!(
                    "SELECT setval(pg_get_serial_sequence('{table}', 'id'), COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
                ))
                .await?;
            }
        }

        tx.commit().await?;

        log::info!(
            "seeded {} suppliers and {} builds",
            data.suppliers.len(),
            data.builds.len()
        );

        Ok(())
    }
}

/// Rows per insert statement, keeping the bound parameters below the SQLite limit.
const INSERT_CHUNK: usize = 500;

/// Execute multi-row inserts in chunks of [`INSERT_CHUNK`] rows, returning the number of
/// rows stored.
async fn insert_all<A, C>(models: Vec<A>, connection: &C) -> Result<u64, DbErr>
where
    A: ActiveModelTrait + Clone + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut stored = 0;
    for chunk in models.chunks(INSERT_CHUNK) {
        stored += <A::Entity as EntityTrait>::insert_many(chunk.to_vec())
            .exec_without_returning(connection)
            .await?;
    }

    Ok(stored)
}
