//! Base worker trait

use shared_types::SearchQuery;

/// A data-producing worker.
///
/// Workers always succeed and have no side effects; the output depends only
/// on the query.
pub trait WorkerAgent {
    /// Record type this worker contributes to the payload
    type Output;

    /// Agent name/identifier used in logs
    fn name(&self) -> &'static str;

    fn run(&self, query: &SearchQuery) -> Self::Output;
}
