//! Runtime diagnostics.

use async_trait::async_trait;
use mockall::automock;

use crate::database::Db;

#[derive(Debug, Clone)]
pub struct PgDiagnosticsService {
    db: Db,
}

impl PgDiagnosticsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiagnosticsService for PgDiagnosticsService {
    async fn ping_database(&self) -> Result<(), sqlx::Error> {
        self.db.ping().await
    }
}

#[automock]
#[async_trait]
pub trait DiagnosticsService: Send + Sync {
    /// Check that the database answers a trivial query.
    async fn ping_database(&self) -> Result<(), sqlx::Error>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::diagnostics::DiagnosticsService;
    use crate::test::TestContext;

    #[tokio::test]
    async fn ping_succeeds_against_live_database() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.diagnostics.ping_database().await?;

        Ok(())
    }
}
