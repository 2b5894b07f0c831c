use crate::common::*;

use crate::model::tracked::tracked_post_config::*;

#[doc = "수집 대상 게시글 목록. TOML 의 [[post]] 테이블 배열에 대응한다."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TrackedPostListConfig {
    pub post: Vec<TrackedPostConfig>,
}
