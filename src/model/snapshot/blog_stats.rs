use crate::common::*;

#[doc = r#"
    블로그 계정 단위 카운터 블록.

    원본 HTML 에서 해당 항목을 찾지 못한 경우 각 필드는 0 으로 채워진다.
"#]
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct BlogStats {
    pub post_count: usize,
    pub article_count: usize,
    pub comment_count: usize,
    pub view_count: usize,
}
