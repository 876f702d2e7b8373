use std::future::Future;

use crate::domain::errors::FetchResult;
use crate::domain::market_data::Snapshot;

/// Where page assemblers get their one snapshot from
pub trait SnapshotRepository {
    fn fetch_snapshot(&self) -> impl Future<Output = FetchResult<Snapshot>>;
}
