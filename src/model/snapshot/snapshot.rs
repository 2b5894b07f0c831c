use crate::common::*;

use crate::model::snapshot::{blog_stats::*, news::*, post_stat::*, side_column::*};

#[doc = r#"
    한 번의 수집 실행이 만들어내는 스냅샷 레코드.

    JSON 으로 직렬화할 때의 필드 순서는 구조체 선언 순서를 그대로 따른다.
    `fetched_at` 은 UTC 기준 "%Y-%m-%dT%H:%M:%SZ" 형식이며, 파일명에 들어가는
    저장 키와 같은 시각 한 번의 읽기에서 유래한다.
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct Snapshot {
    pub fetched_at: String,
    #[serde(default)]
    pub blog_stats: BlogStats,
    #[serde(default)]
    pub news: News,
    #[serde(default)]
    pub sidecolumn: SideColumn,
    #[serde(default)]
    pub interested_blogs: Vec<PostStat>,
}
