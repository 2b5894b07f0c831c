use crate::common::*;

#[doc = r#"
    게시글 단위 통계. `GetPostStat` 배치 응답의 원소 하나에 대응한다.

    응답 JSON 의 키는 camelCase 이며, `postId` 는 필수값이고
    나머지 카운터는 누락 시 0 으로 채워진다.
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(rename_all = "camelCase")]
pub struct PostStat {
    pub post_id: i64,
    #[serde(default)]
    pub view_count: usize,
    #[serde(default)]
    pub digg_count: usize,
    #[serde(default)]
    pub bury_count: usize,
    #[serde(default)]
    pub feedback_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let post_stat: PostStat =
            serde_json::from_value(json!({ "postId": 42, "viewCount": 7 })).unwrap();

        assert_eq!(*post_stat.post_id(), 42);
        assert_eq!(*post_stat.view_count(), 7);
        assert_eq!(*post_stat.digg_count(), 0);
        assert_eq!(*post_stat.bury_count(), 0);
        assert_eq!(*post_stat.feedback_count(), 0);
    }

    #[test]
    fn missing_post_id_is_rejected() {
        let result: Result<PostStat, serde_json::Error> =
            serde_json::from_value(json!({ "viewCount": 7 }));

        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let post_stat: PostStat = PostStat::new(18313014, 100, 2, 0, 5);
        let value: Value = serde_json::to_value(&post_stat).unwrap();

        assert_eq!(value["postId"], 18313014);
        assert_eq!(value["viewCount"], 100);
        assert_eq!(value["diggCount"], 2);
        assert_eq!(value["buryCount"], 0);
        assert_eq!(value["feedbackCount"], 5);
    }
}
