use crate::common::*;

use crate::dto::daily_snapshot::*;
use crate::enums::account_metric::*;

#[doc = "계정 단위 항목 하나의 일별 시계열. 차트에 바로 넘길 수 있는 병렬 벡터 형태다."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DailySeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<i64>,
}

impl DailySeries {
    #[doc = "일별 대표 스냅샷 목록에서 지정한 항목의 값을 날짜순으로 뽑아낸다."]
    pub fn from_daily_snapshots(daily_snapshots: &[DailySnapshot], metric: AccountMetric) -> Self {
        let mut dates: Vec<NaiveDate> = Vec::new();
        let mut values: Vec<i64> = Vec::new();

        for daily in daily_snapshots {
            dates.push(daily.date);
            values.push(get_metric_value(metric, &daily.snapshot));
        }

        DailySeries::new(dates, values)
    }

    #[doc = "차트 X축 라벨용 날짜 문자열 목록"]
    pub fn x_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect()
    }
}
