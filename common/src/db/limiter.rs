use crate::model::Paginated;
use sea_orm::{ConnectionTrait, DbErr, PaginatorTrait, QuerySelect};

/// A query with its page window held back, so that the total can be evaluated on the
/// unlimited query.
pub struct Limiter<'db, C, S>
where
    C: ConnectionTrait,
{
    db: &'db C,
    selector: S,
    paginated: Paginated,
}

impl<'db, C, S> Limiter<'db, C, S>
where
    C: ConnectionTrait,
    S: QuerySelect + PaginatorTrait<'db, C> + Clone + Send,
{
    /// Count all rows of the query, ignoring the page window.
    pub async fn total(&self) -> Result<u64, DbErr> {
        self.selector.clone().count(self.db).await
    }

    /// The query, restricted to the requested page.
    pub fn fetch(self) -> S {
        self.selector
            .offset(self.paginated.skip)
            .limit(self.paginated.take)
    }
}

pub trait LimiterTrait: QuerySelect + Sized {
    fn limiting<C: ConnectionTrait>(self, db: &C, paginated: Paginated) -> Limiter<'_, C, Self>;
}

impl<S: QuerySelect> LimiterTrait for S {
    fn limiting<C: ConnectionTrait>(self, db: &C, paginated: Paginated) -> Limiter<'_, C, Self> {
        Limiter {
            db,
            selector: self,
            paginated,
        }
    }
}
