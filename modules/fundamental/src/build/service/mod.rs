use crate::{
    Error,
    build::model::{
        BuildDetails, BuildHead, BuildPartSummary, BuildSummary, CreateBuildRequest,
        normalize_build_date,
    },
    common::ensure_page,
    part::model::{PartSummary, SupplierHead},
};
use launchtrace_common::{
    db::limiter::LimiterTrait,
    model::{Paginated, PaginatedResults},
};
use launchtrace_entity::{build, build_part, part, part::PartStatus, supplier};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use sea_query::{Expr, Func, SimpleExpr};
use std::collections::{BTreeSet, HashSet};
use time::OffsetDateTime;
use tracing::instrument;

/// Part ids bound per statement, keeping lookups and inserts below the SQLite parameter limit.
const PART_CHUNK: usize = 500;

#[derive(Default)]
pub struct BuildService {}

/// A build, aggregated over its build parts.
#[derive(FromQueryResult)]
struct BuildRow {
    id: i32,
    serial_number: String,
    build_date: OffsetDateTime,
    part_count: i64,
    faulty_part_count: Option<i64>,
}

impl From<BuildRow> for BuildSummary {
    fn from(value: BuildRow) -> Self {
        Self {
            head: BuildHead::from(build::Model {
                id: value.id,
                serial_number: value.serial_number,
                build_date: value.build_date,
            }),
            part_count: value.part_count.max(0) as u64,
            faulty_part_count: value.faulty_part_count.unwrap_or_default().max(0) as u64,
        }
    }
}

/// A part of a build, joined with its supplier.
#[derive(FromQueryResult)]
struct BuildPartRow {
    part_id: i32,
    quantity: i32,
    name: String,
    status: PartStatus,
    supplier_id: i32,
    supplier_name: String,
}

impl From<BuildPartRow> for BuildPartSummary {
    fn from(value: BuildPartRow) -> Self {
        Self {
            part: PartSummary {
                part_id: value.part_id,
                name: value.name,
                status: value.status,
                supplier_id: value.supplier_id,
                supplier: SupplierHead {
                    supplier_id: value.supplier_id,
                    name: value.supplier_name,
                },
            },
            quantity: value.quantity,
        }
    }
}

/// Select builds, counting their parts and the faulty ones among them.
fn summaries() -> Select<build::Entity> {
    let faulty = Expr::case(part::Column::Status.eq(PartStatus::Faulty), 1).finally(0);

    build::Entity::find()
        .select_only()
        .column(build::Column::Id)
        .column(build::Column::SerialNumber)
        .column(build::Column::BuildDate)
        .column_as(
            SimpleExpr::FunctionCall(Func::count(Expr::col((
                build_part::Entity,
                build_part::Column::PartId,
            )))),
            "part_count",
        )
        .column_as(SimpleExpr::FunctionCall(Func::sum(faulty)), "faulty_part_count")
        .join(JoinType::LeftJoin, build::Relation::BuildPart.def())
        .join(JoinType::LeftJoin, build_part::Relation::Part.def())
        .group_by(build::Column::Id)
        .group_by(build::Column::SerialNumber)
        .group_by(build::Column::BuildDate)
        .order_by_asc(build::Column::Id)
}

impl BuildService {
    pub fn new() -> Self {
        Self {}
    }

    /// List builds, ordered by build id.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_builds<C: ConnectionTrait>(
        &self,
        paginated: Paginated,
        connection: &C,
    ) -> Result<PaginatedResults<BuildSummary>, Error> {
        ensure_page(&paginated)?;

        let limiter = summaries().limiting(connection, paginated);

        let total = limiter.total().await?;

        let items = limiter
            .fetch()
            .into_model::<BuildRow>()
            .all(connection)
            .await?
            .into_iter()
            .map(BuildSummary::from)
            .collect();

        Ok(PaginatedResults { items, total })
    }

    /// Fetch a single build, with the parts it uses ordered by part id.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_build<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<BuildDetails>, Error> {
        let Some(summary) = summaries()
            .filter(build::Column::Id.eq(id))
            .into_model::<BuildRow>()
            .one(connection)
            .await?
        else {
            return Ok(None);
        };

        let parts = build_part::Entity::find()
            .select_only()
            .column(build_part::Column::PartId)
            .column(build_part::Column::Quantity)
            .column(part::Column::Name)
            .column(part::Column::Status)
            .column(part::Column::SupplierId)
            .column_as(supplier::Column::Name, "supplier_name")
            .join(JoinType::InnerJoin, build_part::Relation::Part.def())
            .join(JoinType::InnerJoin, part::Relation::Supplier.def())
            .filter(build_part::Column::BuildId.eq(id))
            .order_by_asc(build_part::Column::PartId)
            .into_model::<BuildPartRow>()
            .all(connection)
            .await?;

        Ok(Some(BuildDetails {
            summary: summary.into(),
            parts: parts.into_iter().map(BuildPartSummary::from).collect(),
        }))
    }

    /// Find all builds using a part, ordered by build id.
    ///
    /// An unknown part simply is not used by any build.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_impacted_builds<C: ConnectionTrait>(
        &self,
        part_id: i32,
        connection: &C,
    ) -> Result<Vec<BuildHead>, Error> {
        Ok(build::Entity::find()
            .join(JoinType::InnerJoin, build::Relation::BuildPart.def())
            .filter(build_part::Column::PartId.eq(part_id))
            .distinct()
            .order_by_asc(build::Column::Id)
            .all(connection)
            .await?
            .into_iter()
            .map(BuildHead::from)
            .collect())
    }

    /// Create a new build, using the provided parts.
    ///
    /// All parts must exist and be unique. Either the build is stored with all of its parts, or
    /// nothing is stored. The caller is responsible for committing the transaction.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn create_build<C: ConnectionTrait>(
        &self,
        request: CreateBuildRequest,
        connection: &C,
    ) -> Result<BuildHead, Error> {
        let CreateBuildRequest {
            serial_number,
            build_date,
            part_ids,
        } = request;

        let duplicates = duplicates(&part_ids);
        if !duplicates.is_empty() {
            return Err(Error::bad_request(
                "Duplicate part IDs",
                Some(join_ids(&duplicates)),
            ));
        }

        if !part_ids.is_empty() {
            let mut known = HashSet::with_capacity(part_ids.len());
            for chunk in part_ids.chunks(PART_CHUNK) {
                known.extend(
                    part::Entity::find()
                        .select_only()
                        .column(part::Column::Id)
                        .filter(part::Column::Id.is_in(chunk.iter().copied()))
                        .into_tuple::<i32>()
                        .all(connection)
                        .await?,
                );
            }

            let unknown = part_ids
                .iter()
                .copied()
                .filter(|id| !known.contains(id))
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(Error::bad_request(
                    "Unknown part IDs",
                    Some(join_ids(&unknown)),
                ));
            }
        }

        let build = build::ActiveModel {
            serial_number: Set(serial_number),
            build_date: Set(normalize_build_date(build_date)),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        for chunk in part_ids.chunks(PART_CHUNK) {
            build_part::Entity::insert_many(chunk.iter().map(|part_id| build_part::ActiveModel {
                build_id: Set(build.id),
                part_id: Set(*part_id),
                quantity: Set(0),
            }))
            .exec_without_returning(connection)
            .await?;
        }

        log::info!(
            "created build {} ({}) with {} parts",
            build.id,
            build.serial_number,
            part_ids.len()
        );

        Ok(build.into())
    }
}

/// Ids occurring more than once, in ascending order.
fn duplicates(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.iter()
        .copied()
        .filter(|id| !seen.insert(*id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test;
