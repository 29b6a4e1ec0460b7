use crate::Error;
use launchtrace_common::model::Paginated;

/// The largest offset or limit the database drivers can bind.
const MAX_WINDOW: u64 = i64::MAX as u64;

/// Reject a page window which is empty, or which can't be expressed in SQL.
pub(crate) fn ensure_page(paginated: &Paginated) -> Result<(), Error> {
    if paginated.take == 0 {
        return Err(Error::bad_request(
            "Invalid pagination",
            Some("take must be greater than zero"),
        ));
    }

    if paginated.take > MAX_WINDOW || paginated.skip > MAX_WINDOW {
        return Err(Error::bad_request(
            "Invalid pagination",
            Some(format!("skip and take must not exceed {MAX_WINDOW}")),
        ));
    }

    Ok(())
}
