use crate::{Error, common::ensure_page, part::model::PartSummary};
use launchtrace_common::{
    db::limiter::LimiterTrait,
    model::{Paginated, PaginatedResults},
};
use launchtrace_entity::{part, part::PartStatus, supplier};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tracing::instrument;

#[derive(Default)]
pub struct PartService {}

impl PartService {
    pub fn new() -> Self {
        Self {}
    }

    /// List parts with their supplier, ordered by part id.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_parts<C: ConnectionTrait>(
        &self,
        paginated: Paginated,
        connection: &C,
    ) -> Result<PaginatedResults<PartSummary>, Error> {
        ensure_page(&paginated)?;

        let limiter = part::Entity::find()
            .find_also_related(supplier::Entity)
            .order_by_asc(part::Column::Id)
            .limiting(connection, paginated);

        let total = limiter.total().await?;

        let items = limiter
            .fetch()
            .all(connection)
            .await?
            .into_iter()
            .map(|(part, supplier)| match supplier {
                Some(supplier) => Ok(PartSummary::new(part, supplier.into())),
                None => Err(Error::Data(format!(
                    "part {} references missing supplier {}",
                    part.id, part.supplier_id
                ))),
            })
            .collect::<Result<_, _>>()?;

        Ok(PaginatedResults { items, total })
    }

    /// Mark a part as faulty. Flagging an already faulty part is not an error.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn flag_faulty<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<(), Error> {
        let Some(part) = part::Entity::find_by_id(id).one(connection).await? else {
            return Err(Error::NotFound(format!("Part with ID {id} not found")));
        };

        if part.status != PartStatus::Faulty {
            log::info!("flagging part {id} ({}) as faulty", part.name);
        }

        let mut part = part.into_active_model();
        part.status = Set(PartStatus::Faulty);
        part.update(connection).await?;

        Ok(())
    }
}
