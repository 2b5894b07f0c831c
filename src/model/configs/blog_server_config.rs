use crate::common::*;

#[doc = "수집 대상 블로그의 ajax 엔드포인트 접속 정보"]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct BlogServerConfig {
    pub base_url: String,
    pub timeout_sec: u64,
}
