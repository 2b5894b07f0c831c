use crate::common::*;

#[async_trait]
pub trait RenderService: Send + Sync {
    #[doc = r#"
        저장된 스냅샷들을 일별로 집계해서 추이 차트들을 생성하는 함수.

        `gate_open` 이 false 면 탐색/집계/렌더링을 전혀 수행하지 않고 0을 반환한다.

        # Returns
        * `anyhow::Result<usize>` - 생성된 차트 파일 개수
    "#]
    async fn generate_trend_charts(&self, gate_open: bool) -> anyhow::Result<usize>;
}
