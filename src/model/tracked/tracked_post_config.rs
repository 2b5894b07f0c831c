use crate::common::*;

#[doc = "통계를 수집할 게시글 하나의 설정"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TrackedPostConfig {
    pub post_id: i64,
}
