use crate::common::*;

use crate::model::snapshot::snapshot::*;

#[doc = "달력상 하루를 대표하는 스냅샷. 날짜는 fetched_at 이 아니라 저장 키에서 유래한다."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub snapshot: Snapshot,
}

#[doc = r#"
    저장 키 목록을 달력상 하루당 키 하나로 줄여주는 함수.

    키를 오름차순으로 정렬한 뒤 순서대로 훑으면서 각 날짜에서 처음 만난 키만 남긴다.
    같은 날짜에 수집이 여러 번 실행된 경우 항상 가장 이른 키가 그 날을 대표한다.

    # Arguments
    * `keys` - 저장소에서 발견된 스냅샷 키 목록 (정렬 여부 무관)

    # Returns
    * `Vec<(NaiveDate, NaiveDateTime)>` - 날짜 오름차순으로 정렬된 (날짜, 대표 키) 목록
"#]
pub fn reduce_first_key_per_day(keys: &[NaiveDateTime]) -> Vec<(NaiveDate, NaiveDateTime)> {
    let mut sorted_keys: Vec<NaiveDateTime> = keys.to_vec();
    sorted_keys.sort();

    let mut reduced: Vec<(NaiveDate, NaiveDateTime)> = Vec::new();

    for key in sorted_keys {
        let date: NaiveDate = key.date();

        let is_new_date: bool = match reduced.last() {
            Some((last_date, _)) => *last_date != date,
            None => true,
        };

        if is_new_date {
            reduced.push((date, key));
        }
    }

    reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn same_day_keeps_earliest_key() {
        let keys: Vec<NaiveDateTime> =
            vec![key(2025, 10, 1, 21, 0, 0), key(2025, 10, 1, 3, 0, 0)];

        let reduced: Vec<(NaiveDate, NaiveDateTime)> = reduce_first_key_per_day(&keys);

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].0, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(reduced[0].1, key(2025, 10, 1, 3, 0, 0));
    }

    #[test]
    fn unsorted_input_reduces_in_date_order() {
        let keys: Vec<NaiveDateTime> = vec![
            key(2025, 10, 3, 8, 0, 0),
            key(2025, 10, 1, 21, 0, 0),
            key(2025, 10, 2, 12, 30, 0),
            key(2025, 10, 1, 3, 0, 0),
            key(2025, 10, 3, 7, 59, 59),
        ];

        let reduced: Vec<(NaiveDate, NaiveDateTime)> = reduce_first_key_per_day(&keys);

        assert_eq!(
            reduced,
            vec![
                (
                    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                    key(2025, 10, 1, 3, 0, 0)
                ),
                (
                    NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
                    key(2025, 10, 2, 12, 30, 0)
                ),
                (
                    NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
                    key(2025, 10, 3, 7, 59, 59)
                ),
            ]
        );
    }

    #[test]
    fn empty_input_reduces_to_empty() {
        let reduced: Vec<(NaiveDate, NaiveDateTime)> = reduce_first_key_per_day(&[]);
        assert!(reduced.is_empty());
    }
}
