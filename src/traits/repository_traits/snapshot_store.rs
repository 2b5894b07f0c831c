use crate::common::*;

use crate::model::snapshot::snapshot::*;

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save_snapshot(
        &self,
        fetched_at: DateTime<Utc>,
        snapshot: &Snapshot,
    ) -> Result<PathBuf, anyhow::Error>;
    async fn list_snapshot_keys(&self) -> Result<Vec<NaiveDateTime>, anyhow::Error>;
    async fn load_snapshot(&self, key: NaiveDateTime) -> Result<Snapshot, anyhow::Error>;
}
