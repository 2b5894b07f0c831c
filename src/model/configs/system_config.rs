use crate::common::*;

#[doc = r#"
    시스템 설정 정보.

    * `data_dir` - 스냅샷 JSON 파일이 저장되는 디렉토리
    * `chart_dir` - 차트 PNG 파일이 저장되는 디렉토리
    * `monthly_gate_yn` - true 인 경우 매월 1일에만 차트를 생성한다
"#]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub data_dir: String,
    pub chart_dir: String,
    pub monthly_gate_yn: bool,
}
