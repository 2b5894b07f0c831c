use crate::common::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

use crate::model::{configs::total_config::*, tracked::tracked_post_list_config::*};

use crate::env_configuration::env_config::*;

use crate::traits::service_traits::{collect_service::*, render_service::*};

#[derive(Debug, new)]
pub struct MainController<C: CollectService, R: RenderService> {
    collect_service: C,
    render_service: R,
}

impl<C: CollectService, R: RenderService> MainController<C, R> {
    #[doc = r#"
        수집 실행 한 번을 담당하는 함수.

        1. 수집 대상 게시글 목록 파일(`TRACKED_POST_LIST_PATH`)을 읽어온다
        2. 수집 서비스를 호출해서 스냅샷 하나를 만들어 저장한다
        3. 배치 호출 실패를 포함한 치명적 오류는 그대로 상위로 전파된다

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn collect_task(&self) -> anyhow::Result<()> {
        let tracked_post_list: TrackedPostListConfig =
            read_toml_from_file::<TrackedPostListConfig>(&TRACKED_POST_LIST_PATH)?;

        info!(
            "Collecting blog snapshot for {} tracked posts",
            tracked_post_list.post().len()
        );

        let saved_path: PathBuf = self
            .collect_service
            .run_collection(&tracked_post_list)
            .await?;

        info!("Blog snapshot saved: {:?}", saved_path);

        Ok(())
    }

    #[doc = r#"
        렌더링 실행 한 번을 담당하는 함수.

        실행 여부를 결정하는 게이트 값은 여기서 한 번만 계산해서 렌더 서비스에 넘긴다.
        `system.monthly_gate_yn` 이 true 면 매월 1일에만 열리고, false 면 항상 열린다.
        게이트가 닫혀 있어도 실행 자체는 정상 종료로 취급한다.

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn render_task(&self) -> anyhow::Result<()> {
        let gate_open: bool = if *get_system_config_info().monthly_gate_yn() {
            is_monthly_chart_day(Local::now().date_naive())
        } else {
            true
        };

        let chart_cnt: usize = self
            .render_service
            .generate_trend_charts(gate_open)
            .await?;

        info!("{} trend charts generated", chart_cnt);

        Ok(())
    }
}
