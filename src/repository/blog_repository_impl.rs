use crate::common::*;

use crate::model::configs::blog_server_config::*;

use crate::traits::repository_traits::blog_repository::*;

#[derive(Debug, Clone)]
pub struct BlogRepositoryImpl {
    client: Client,
    base_url: String,
}

impl BlogRepositoryImpl {
    pub fn new(blog_config: &BlogServerConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*blog_config.timeout_sec()))
            .build()?;

        let base_url: String = blog_config.base_url().trim_end_matches('/').to_string();

        Ok(BlogRepositoryImpl { client, base_url })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryImpl {
    #[doc = "ajax 엔드포인트에서 HTML 조각을 받아오는 함수"]
    async fn get_html(&self, path: &str) -> Result<String, anyhow::Error> {
        let url: String = self.build_url(path);

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let body: String = response.text().await?;
            Ok(body)
        } else {
            Err(anyhow!(
                "[BlogRepositoryImpl->get_html] response status is failed: {} ({})",
                response.status(),
                url
            ))
        }
    }

    #[doc = "ajax 엔드포인트에 JSON 본문을 POST 하고 JSON 응답을 받아오는 함수"]
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, anyhow::Error> {
        let url: String = self.build_url(path);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .body(body.to_string())
            .send()
            .await?;

        if response.status().is_success() {
            let response_body: Value = response.json::<Value>().await?;
            Ok(response_body)
        } else {
            let error_body: String = response.text().await?;
            Err(anyhow!(
                "[BlogRepositoryImpl->post_json] response status is failed: {:?}",
                error_body
            ))
        }
    }
}
