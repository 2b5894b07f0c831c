use crate::common::*;

#[doc = "사이드바 영역에서 수집하는 블록. 현재는 점수/순위만 사용한다."]
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SideColumn {
    pub score_rank: ScoreRank,
}

#[doc = "블로그 점수와 전체 순위"]
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ScoreRank {
    pub score: usize,
    pub rank: usize,
}
