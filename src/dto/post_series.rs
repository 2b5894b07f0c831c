use crate::common::*;

use crate::dto::daily_snapshot::*;

#[doc = "게시글 시계열의 한 지점. 해당 게시글이 그 날 스냅샷에 존재했을 때만 만들어진다."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct PostPoint {
    pub date: NaiveDate,
    pub view_count: i64,
    pub digg_count: i64,
    pub bury_count: i64,
    pub feedback_count: i64,
}

#[doc = r#"
    게시글 하나의 일별 시계열.

    일별 대표 스냅샷에 해당 게시글이 없는 날은 지점이 만들어지지 않는다.
    즉 빈 날을 0 으로 메꾸거나 보간하지 않는 희소 시계열이다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct PostSeries {
    pub post_id: i64,
    pub points: Vec<PostPoint>,
}

impl PostSeries {
    #[doc = r#"
        일별 대표 스냅샷 목록에서 게시글별 시계열을 만들어낸다.

        반환 목록의 순서는 게시글 ID 가 스냅샷에 처음 등장한 순서이며,
        각 시계열의 지점들은 입력이 날짜순이므로 날짜 오름차순이 된다.
    "#]
    pub fn collect_from_daily(daily_snapshots: &[DailySnapshot]) -> Vec<PostSeries> {
        let mut series_list: Vec<PostSeries> = Vec::new();

        for daily in daily_snapshots {
            for post_stat in daily.snapshot.interested_blogs() {
                let point: PostPoint = PostPoint::new(
                    daily.date,
                    *post_stat.view_count() as i64,
                    *post_stat.digg_count() as i64,
                    *post_stat.bury_count() as i64,
                    *post_stat.feedback_count() as i64,
                );

                match series_list
                    .iter_mut()
                    .find(|series| series.post_id == *post_stat.post_id())
                {
                    Some(series) => series.points.push(point),
                    None => series_list.push(PostSeries::new(*post_stat.post_id(), vec![point])),
                }
            }
        }

        series_list
    }

    #[doc = "차트 X축 라벨용 날짜 문자열 목록"]
    pub fn x_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|point| point.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn view_values(&self) -> Vec<i64> {
        self.points.iter().map(|point| point.view_count).collect()
    }

    pub fn digg_values(&self) -> Vec<i64> {
        self.points.iter().map(|point| point.digg_count).collect()
    }

    pub fn bury_values(&self) -> Vec<i64> {
        self.points.iter().map(|point| point.bury_count).collect()
    }

    pub fn feedback_values(&self) -> Vec<i64> {
        self.points.iter().map(|point| point.feedback_count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::{
        blog_stats::*, news::*, post_stat::*, side_column::*, snapshot::*,
    };

    fn daily(y: i32, m: u32, d: u32, post_stats: Vec<PostStat>) -> DailySnapshot {
        let snapshot: Snapshot = Snapshot::new(
            format!("{:04}-{:02}-{:02}T03:00:00Z", y, m, d),
            BlogStats::default(),
            News::default(),
            SideColumn::default(),
            post_stats,
        );

        DailySnapshot::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), snapshot)
    }

    #[test]
    fn sparse_series_skips_days_without_the_post() {
        let daily_snapshots: Vec<DailySnapshot> = vec![
            daily(
                2025,
                10,
                1,
                vec![
                    PostStat::new(101, 10, 1, 0, 0),
                    PostStat::new(202, 20, 0, 0, 2),
                ],
            ),
            daily(2025, 10, 2, vec![PostStat::new(202, 25, 0, 0, 3)]),
            daily(
                2025,
                10,
                3,
                vec![
                    PostStat::new(101, 13, 1, 1, 0),
                    PostStat::new(202, 30, 1, 0, 3),
                ],
            ),
        ];

        let series_list: Vec<PostSeries> = PostSeries::collect_from_daily(&daily_snapshots);

        assert_eq!(series_list.len(), 2);

        /* 첫 등장 순서 유지 */
        assert_eq!(*series_list[0].post_id(), 101);
        assert_eq!(*series_list[1].post_id(), 202);

        assert_eq!(series_list[0].x_labels(), vec!["2025-10-01", "2025-10-03"]);
        assert_eq!(series_list[0].view_values(), vec![10, 13]);
        assert_eq!(series_list[0].bury_values(), vec![0, 1]);

        assert_eq!(
            series_list[1].x_labels(),
            vec!["2025-10-01", "2025-10-02", "2025-10-03"]
        );
        assert_eq!(series_list[1].view_values(), vec![20, 25, 30]);
        assert_eq!(series_list[1].feedback_values(), vec![2, 3, 3]);
    }

    #[test]
    fn single_appearance_gives_single_point_series() {
        let daily_snapshots: Vec<DailySnapshot> = vec![
            daily(2025, 10, 1, Vec::new()),
            daily(2025, 10, 2, vec![PostStat::new(42, 7, 1, 0, 1)]),
            daily(2025, 10, 3, Vec::new()),
        ];

        let series_list: Vec<PostSeries> = PostSeries::collect_from_daily(&daily_snapshots);

        assert_eq!(series_list.len(), 1);
        assert_eq!(*series_list[0].post_id(), 42);
        assert_eq!(
            *series_list[0].points(),
            vec![PostPoint::new(
                NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
                7,
                1,
                0,
                1
            )]
        );
    }

    #[test]
    fn no_tracked_posts_gives_no_series() {
        let daily_snapshots: Vec<DailySnapshot> = vec![daily(2025, 10, 1, Vec::new())];

        let series_list: Vec<PostSeries> = PostSeries::collect_from_daily(&daily_snapshots);

        assert!(series_list.is_empty());
    }
}
