use crate::common::*;

#[doc = "스냅샷 파일명에 들어가는 타임스탬프 포맷"]
pub const SNAPSHOT_KEY_FORMAT: &str = "%Y%m%d_%H%M%S";

#[doc = ""]
pub fn convert_date_to_str<Tz, TzOut>(
    time: DateTime<Tz>,
    tz: TzOut, // 출력할 타임존 (Utc, Local, FixedOffset 등)
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    TzOut: TimeZone,
    TzOut::Offset: Display,
{
    time.with_timezone(&tz)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

#[doc = r#"
    스냅샷의 저장 키(파일명 내 타임스탬프 부분)를 만들어주는 함수.

    초 단위까지만 표현하며, 자리수가 0으로 채워져 있으므로 문자열 사전순 정렬이
    시간순 정렬과 일치한다.
"#]
pub fn format_snapshot_key(key: NaiveDateTime) -> String {
    key.format(SNAPSHOT_KEY_FORMAT).to_string()
}

#[doc = r#"
    스냅샷 파일명에서 추출한 타임스탬프 문자열을 NaiveDateTime 으로 파싱하는 함수.

    # Arguments
    * `key_text` - `%Y%m%d_%H%M%S` 형식의 타임스탬프 문자열

    # Returns
    * `anyhow::Result<NaiveDateTime>` - 형식이 맞지 않으면 오류
"#]
pub fn parse_snapshot_key(key_text: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(key_text, SNAPSHOT_KEY_FORMAT).map_err(|e| {
        anyhow!(
            "[time_utils->parse_snapshot_key] invalid snapshot key '{}': {:?}",
            key_text,
            e
        )
    })
}

#[doc = "매월 1일에만 차트를 생성하도록 하는 날짜 판별 함수"]
pub fn is_monthly_chart_day(date: NaiveDate) -> bool {
    date.day() == 1
}
