use crate::common::*;

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn get_html(&self, path: &str) -> Result<String, anyhow::Error>;
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, anyhow::Error>;
}
