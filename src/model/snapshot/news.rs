use crate::common::*;

#[doc = r#"
    블로그 프로필 블록.

    * `nickname` - 블로그 별명
    * `join_age` - 가입 기간 표시 문자열 (예: "1年2个月")
    * `fans` - 팔로워 수
    * `follow` - 팔로잉 수
"#]
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct News {
    pub nickname: String,
    pub join_age: String,
    pub fans: usize,
    pub follow: usize,
}
