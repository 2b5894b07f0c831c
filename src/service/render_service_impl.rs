use crate::common::*;

use crate::traits::{
    repository_traits::snapshot_store::*,
    service_traits::{chart_service::*, render_service::*},
};

use crate::dto::{daily_series::*, daily_snapshot::*, post_series::*};

use crate::enums::account_metric::*;

use crate::model::snapshot::snapshot::*;

pub const INTERESTED_BLOGS_DIR: &str = "interested_blogs";

#[derive(Debug, new)]
pub struct RenderServiceImpl<S: SnapshotStore, C: ChartService> {
    snapshot_store: Arc<S>,
    chart_service: C,
    chart_dir: PathBuf,
}

impl<S, C> RenderServiceImpl<S, C>
where
    S: SnapshotStore,
    C: ChartService,
{
    #[doc = r#"
        저장소에서 스냅샷 키들을 찾아 일별 대표 스냅샷 목록으로 줄여주는 함수.

        1. 저장소에서 키 목록을 가져온다 (오름차순 정렬 상태)
        2. 날짜별로 처음 만난 키만 남긴다
        3. 남은 키에 해당하는 파일들만 실제로 읽어들인다

        걸러진 키의 파일은 아예 열지 않으므로, 같은 날짜의 뒤늦은 스냅샷이
        아무리 많아도 읽기 비용은 날짜 수에 비례한다.
    "#]
    async fn load_daily_snapshots(&self) -> anyhow::Result<Vec<DailySnapshot>> {
        let keys: Vec<NaiveDateTime> = self.snapshot_store.list_snapshot_keys().await?;

        let reduced: Vec<(NaiveDate, NaiveDateTime)> = reduce_first_key_per_day(&keys);

        let mut daily_snapshots: Vec<DailySnapshot> = Vec::new();

        for (date, key) in reduced {
            let snapshot: Snapshot = self.snapshot_store.load_snapshot(key).await?;
            daily_snapshots.push(DailySnapshot::new(date, snapshot));
        }

        Ok(daily_snapshots)
    }

    #[doc = "계정 단위 항목 7개 각각에 대해 단일 축 추이 차트를 생성하는 함수"]
    async fn render_account_charts(
        &self,
        daily_snapshots: &[DailySnapshot],
    ) -> anyhow::Result<usize> {
        let mut chart_cnt: usize = 0;

        for metric in ALL_ACCOUNT_METRICS {
            let series: DailySeries = DailySeries::from_daily_snapshots(daily_snapshots, metric);

            let output_path: PathBuf = self.chart_dir.join(get_metric_file_name(metric));

            self.chart_service
                .generate_line_chart(
                    &format!("{} Trend", get_metric_label(metric)),
                    series.x_labels(),
                    series.values().clone(),
                    &output_path,
                    "date",
                    get_metric_label(metric),
                )
                .await?;

            chart_cnt += 1;
        }

        Ok(chart_cnt)
    }

    #[doc = r#"
        관찰 대상 게시글별로 이중 축 참여 지표 차트를 생성하는 함수.

        차트 파일은 계정 단위 차트와 분리된 하위 디렉토리에 게시글 ID 를 붙여 저장한다.
        시계열이 희소하므로 게시글이 등장한 날짜만 X축에 올라간다.
    "#]
    async fn render_post_charts(&self, daily_snapshots: &[DailySnapshot]) -> anyhow::Result<usize> {
        let mut chart_cnt: usize = 0;

        for series in PostSeries::collect_from_daily(daily_snapshots) {
            let output_path: PathBuf = self
                .chart_dir
                .join(INTERESTED_BLOGS_DIR)
                .join(format!("post_{}.png", series.post_id()));

            self.chart_service
                .generate_post_engagement_chart(
                    &format!("Post {} Trend", series.post_id()),
                    series.x_labels(),
                    series.view_values(),
                    series.digg_values(),
                    series.bury_values(),
                    series.feedback_values(),
                    &output_path,
                )
                .await?;

            chart_cnt += 1;
        }

        Ok(chart_cnt)
    }
}

#[async_trait]
impl<S, C> RenderService for RenderServiceImpl<S, C>
where
    S: SnapshotStore,
    C: ChartService,
{
    #[doc = r#"
        렌더링 실행 한 번을 수행하는 함수.

        1. `gate_open` 이 false 면 탐색/집계/렌더링 없이 즉시 0을 반환한다 (정상 종료)
        2. 스냅샷 키를 모아 날짜별 첫 스냅샷만 남기고 읽어들인다
        3. 스냅샷이 하나도 없으면 차트 없이 0을 반환한다 (오류 아님)
        4. 계정 단위 차트 7개와 게시글별 차트를 차례로 생성한다

        차트 생성 중의 입출력/드로잉 실패는 그대로 상위로 전파된다.

        # Returns
        * `anyhow::Result<usize>` - 생성된 차트 파일 개수
    "#]
    async fn generate_trend_charts(&self, gate_open: bool) -> anyhow::Result<usize> {
        if !gate_open {
            info!(
                "[RenderServiceImpl->generate_trend_charts] Chart day gate is closed. Skipping chart generation."
            );
            return Ok(0);
        }

        let daily_snapshots: Vec<DailySnapshot> = self.load_daily_snapshots().await?;

        if daily_snapshots.is_empty() {
            info!(
                "[RenderServiceImpl->generate_trend_charts] No snapshots found. Nothing to render."
            );
            return Ok(0);
        }

        let account_chart_cnt: usize = self.render_account_charts(&daily_snapshots).await?;
        let post_chart_cnt: usize = self.render_post_charts(&daily_snapshots).await?;

        Ok(account_chart_cnt + post_chart_cnt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::{blog_stats::*, news::*, post_stat::*, side_column::*};
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct RecordedLineChart {
        title: String,
        x_labels: Vec<String>,
        y_data: Vec<i64>,
        output_path: PathBuf,
    }

    #[derive(Debug, Clone)]
    struct RecordedPostChart {
        title: String,
        x_labels: Vec<String>,
        view_data: Vec<i64>,
        digg_data: Vec<i64>,
        output_path: PathBuf,
    }

    #[derive(Debug, Default)]
    struct ChartRecorder {
        line_charts: Mutex<Vec<RecordedLineChart>>,
        post_charts: Mutex<Vec<RecordedPostChart>>,
    }

    #[async_trait]
    impl ChartService for Arc<ChartRecorder> {
        async fn generate_line_chart(
            &self,
            title: &str,
            x_labels: Vec<String>,
            y_data: Vec<i64>,
            output_path: &Path,
            _x_label: &str,
            _y_label: &str,
        ) -> anyhow::Result<()> {
            self.line_charts.lock().unwrap().push(RecordedLineChart {
                title: title.to_string(),
                x_labels,
                y_data,
                output_path: output_path.to_path_buf(),
            });
            Ok(())
        }

        async fn generate_post_engagement_chart(
            &self,
            title: &str,
            x_labels: Vec<String>,
            view_data: Vec<i64>,
            digg_data: Vec<i64>,
            _bury_data: Vec<i64>,
            _feedback_data: Vec<i64>,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.post_charts.lock().unwrap().push(RecordedPostChart {
                title: title.to_string(),
                x_labels,
                view_data,
                digg_data,
                output_path: output_path.to_path_buf(),
            });
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct StubSnapshotStore {
        snapshots: Vec<(NaiveDateTime, Snapshot)>,
        list_calls: Mutex<usize>,
    }

    #[async_trait]
    impl SnapshotStore for StubSnapshotStore {
        async fn save_snapshot(
            &self,
            _fetched_at: DateTime<Utc>,
            _snapshot: &Snapshot,
        ) -> Result<PathBuf, anyhow::Error> {
            Err(anyhow!("save_snapshot is not used by render tests"))
        }

        async fn list_snapshot_keys(&self) -> Result<Vec<NaiveDateTime>, anyhow::Error> {
            *self.list_calls.lock().unwrap() += 1;

            let mut keys: Vec<NaiveDateTime> =
                self.snapshots.iter().map(|(key, _)| *key).collect();
            keys.sort();

            Ok(keys)
        }

        async fn load_snapshot(&self, key: NaiveDateTime) -> Result<Snapshot, anyhow::Error> {
            self.snapshots
                .iter()
                .find(|(stored_key, _)| *stored_key == key)
                .map(|(_, snapshot)| snapshot.clone())
                .ok_or_else(|| anyhow!("no snapshot stored for key {}", key))
        }
    }

    fn key(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn snapshot(view_count: usize, post_stats: Vec<PostStat>) -> Snapshot {
        Snapshot::new(
            "2024-01-01T00:00:00Z".to_string(),
            BlogStats::new(10, 0, 20, view_count),
            News::new("XuYueming".to_string(), "1年2个月".to_string(), 12, 3),
            SideColumn::new(ScoreRank::new(100, 200)),
            post_stats,
        )
    }

    fn service(
        store: Arc<StubSnapshotStore>,
        recorder: Arc<ChartRecorder>,
    ) -> RenderServiceImpl<StubSnapshotStore, Arc<ChartRecorder>> {
        RenderServiceImpl::new(store, recorder, PathBuf::from("charts"))
    }

    #[tokio::test]
    async fn closed_gate_skips_discovery_and_rendering() {
        let store: Arc<StubSnapshotStore> = Arc::new(StubSnapshotStore {
            snapshots: vec![(key(2024, 1, 1, 3), snapshot(100, Vec::new()))],
            list_calls: Mutex::new(0),
        });
        let recorder: Arc<ChartRecorder> = Arc::new(ChartRecorder::default());

        let chart_cnt: usize = service(Arc::clone(&store), Arc::clone(&recorder))
            .generate_trend_charts(false)
            .await
            .unwrap();

        assert_eq!(chart_cnt, 0);
        assert_eq!(*store.list_calls.lock().unwrap(), 0);
        assert!(recorder.line_charts.lock().unwrap().is_empty());
        assert!(recorder.post_charts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_snapshots_render_zero_charts_without_error() {
        let store: Arc<StubSnapshotStore> = Arc::new(StubSnapshotStore::default());
        let recorder: Arc<ChartRecorder> = Arc::new(ChartRecorder::default());

        let chart_cnt: usize = service(Arc::clone(&store), Arc::clone(&recorder))
            .generate_trend_charts(true)
            .await
            .unwrap();

        assert_eq!(chart_cnt, 0);
        assert_eq!(*store.list_calls.lock().unwrap(), 1);
        assert!(recorder.line_charts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn populated_store_renders_account_and_post_charts() {
        /* 1월 1일은 03시/21시 두 번 수집되었고, 일별 집계는 03시 스냅샷을 써야 한다 */
        let store: Arc<StubSnapshotStore> = Arc::new(StubSnapshotStore {
            snapshots: vec![
                (
                    key(2024, 1, 1, 21),
                    snapshot(999, vec![PostStat::new(42, 99, 9, 0, 9)]),
                ),
                (
                    key(2024, 1, 1, 3),
                    snapshot(100, vec![PostStat::new(42, 10, 1, 0, 2)]),
                ),
                (
                    key(2024, 1, 2, 3),
                    snapshot(
                        150,
                        vec![PostStat::new(42, 25, 2, 0, 2), PostStat::new(7, 5, 0, 0, 0)],
                    ),
                ),
            ],
            list_calls: Mutex::new(0),
        });
        let recorder: Arc<ChartRecorder> = Arc::new(ChartRecorder::default());

        let chart_cnt: usize = service(Arc::clone(&store), Arc::clone(&recorder))
            .generate_trend_charts(true)
            .await
            .unwrap();

        /* 계정 단위 7개 + 게시글 2개 */
        assert_eq!(chart_cnt, 9);

        let line_charts: Vec<RecordedLineChart> =
            recorder.line_charts.lock().unwrap().clone();
        assert_eq!(line_charts.len(), 7);

        let view_chart: &RecordedLineChart = line_charts
            .iter()
            .find(|chart| chart.output_path == PathBuf::from("charts/view_count.png"))
            .unwrap();

        assert_eq!(view_chart.title, "View Count Trend");
        assert_eq!(view_chart.x_labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(view_chart.y_data, vec![100, 150]);

        let post_charts: Vec<RecordedPostChart> =
            recorder.post_charts.lock().unwrap().clone();
        assert_eq!(post_charts.len(), 2);

        let post_42: &RecordedPostChart = post_charts
            .iter()
            .find(|chart| {
                chart.output_path == PathBuf::from("charts/interested_blogs/post_42.png")
            })
            .unwrap();

        assert_eq!(post_42.title, "Post 42 Trend");
        assert_eq!(post_42.x_labels, vec!["2024-01-01", "2024-01-02"]);
        /* 1월 1일 지점은 03시 스냅샷의 값이어야 한다 */
        assert_eq!(post_42.view_data, vec![10, 25]);
        assert_eq!(post_42.digg_data, vec![1, 2]);

        let post_7: &RecordedPostChart = post_charts
            .iter()
            .find(|chart| {
                chart.output_path == PathBuf::from("charts/interested_blogs/post_7.png")
            })
            .unwrap();

        /* 하루만 등장한 게시글은 지점 하나짜리 희소 시계열이 된다 */
        assert_eq!(post_7.x_labels, vec!["2024-01-02"]);
        assert_eq!(post_7.view_data, vec![5]);
    }

    #[tokio::test]
    async fn chart_failure_propagates_to_caller() {
        #[derive(Debug, Clone, new)]
        struct FailingChartService;

        #[async_trait]
        impl ChartService for FailingChartService {
            async fn generate_line_chart(
                &self,
                _title: &str,
                _x_labels: Vec<String>,
                _y_data: Vec<i64>,
                _output_path: &Path,
                _x_label: &str,
                _y_label: &str,
            ) -> anyhow::Result<()> {
                Err(anyhow!("disk full"))
            }

            async fn generate_post_engagement_chart(
                &self,
                _title: &str,
                _x_labels: Vec<String>,
                _view_data: Vec<i64>,
                _digg_data: Vec<i64>,
                _bury_data: Vec<i64>,
                _feedback_data: Vec<i64>,
                _output_path: &Path,
            ) -> anyhow::Result<()> {
                Err(anyhow!("disk full"))
            }
        }

        let store: Arc<StubSnapshotStore> = Arc::new(StubSnapshotStore {
            snapshots: vec![(key(2024, 1, 1, 3), snapshot(100, Vec::new()))],
            list_calls: Mutex::new(0),
        });

        let render_service: RenderServiceImpl<StubSnapshotStore, FailingChartService> =
            RenderServiceImpl::new(store, FailingChartService::new(), PathBuf::from("charts"));

        let result: anyhow::Result<usize> = render_service.generate_trend_charts(true).await;

        assert!(result.is_err());
    }
}
