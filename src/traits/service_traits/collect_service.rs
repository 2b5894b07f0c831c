use crate::common::*;

use crate::model::tracked::tracked_post_list_config::*;

#[async_trait]
pub trait CollectService: Send + Sync {
    async fn run_collection(
        &self,
        tracked_post_list: &TrackedPostListConfig,
    ) -> anyhow::Result<PathBuf>;
}
