use crate::common::*;

use scraper::{ElementRef, Html, Selector};

use crate::traits::{
    repository_traits::{blog_repository::*, snapshot_store::*},
    service_traits::collect_service::*,
};

use crate::model::snapshot::{blog_stats::*, news::*, post_stat::*, side_column::*, snapshot::*};
use crate::model::tracked::tracked_post_list_config::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct CollectServiceImpl<R: BlogRepository, S: SnapshotStore> {
    blog_repository: R,
    snapshot_store: Arc<S>,
}

#[doc = "CSS 셀렉터 문자열을 파싱하는 함수. 실패하면 로그만 남기고 None 을 반환한다."]
fn parse_selector(selector_text: &str) -> Option<Selector> {
    match Selector::parse(selector_text) {
        Ok(selector) => Some(selector),
        Err(e) => {
            error!(
                "[collect_service_impl->parse_selector] invalid selector '{}': {:?}",
                selector_text, e
            );
            None
        }
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[doc = r#"
    텍스트에서 ASCII 숫자만 걸러 이어붙인 뒤 정수로 파싱하는 함수.

    "1,024" 나 "阅读 - 123,456" 같은 형태를 처리하기 위한 것으로,
    숫자가 하나도 없거나 파싱에 실패하면 0 을 반환한다.
"#]
fn extract_digits(text: &str) -> usize {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<usize>().unwrap_or(0)
}

#[doc = "id 로 지정한 요소의 텍스트에 숫자 필터를 적용해서 카운터 값을 뽑아내는 함수"]
fn extract_count_by_id(fragment: &Html, element_id: &str) -> usize {
    let selector: Selector = match parse_selector(&format!("#{}", element_id)) {
        Some(selector) => selector,
        None => return 0,
    };

    match fragment.select(&selector).next() {
        Some(element) => extract_digits(&element_text(&element)),
        None => {
            warn!(
                "[collect_service_impl->extract_count_by_id] element '{}' not found",
                element_id
            );
            0
        }
    }
}

#[doc = "범위 내 첫 번째 매칭 요소의 텍스트에 숫자 필터를 적용하는 함수"]
fn extract_digit_count(scope: &ElementRef<'_>, selector_text: &str) -> usize {
    let selector: Selector = match parse_selector(selector_text) {
        Some(selector) => selector,
        None => return 0,
    };

    match scope.select(&selector).next() {
        Some(element) => extract_digits(&element_text(&element)),
        None => 0,
    }
}

#[doc = r#"
    범위 내 첫 번째 매칭 요소의 텍스트를 그대로 정수 파싱하는 함수.

    숫자 필터 없이 통째로 파싱하므로 "12" 는 통과하고 "1.2k" 같은 축약 표기는 0 이 된다.
"#]
fn extract_strict_count(scope: &ElementRef<'_>, selector_text: &str) -> usize {
    let selector: Selector = match parse_selector(selector_text) {
        Some(selector) => selector,
        None => return 0,
    };

    match scope.select(&selector).next() {
        Some(element) => element_text(&element).parse::<usize>().unwrap_or(0),
        None => 0,
    }
}

#[doc = "blog-stats HTML 조각에서 계정 단위 카운터들을 추출하는 함수"]
fn extract_blog_stats(html_text: &str) -> BlogStats {
    let fragment: Html = Html::parse_fragment(html_text);

    BlogStats::new(
        extract_count_by_id(&fragment, "stats_post_count"),
        extract_count_by_id(&fragment, "stats_article_count"),
        extract_count_by_id(&fragment, "stats-comment_count"),
        extract_count_by_id(&fragment, "stats-total-view-count"),
    )
}

#[doc = r#"
    news HTML 조각의 `#profile_block` 에서 프로필 정보를 추출하는 함수.

    첫 번째 a 태그가 별명, 두 번째 a 태그가 가입 기간이고,
    팬 수와 팔로잉 수는 각각 클래스로 지정된 a 태그에서 가져온다.
    블록 자체가 없으면 전체를 기본값으로 채운다.
"#]
fn extract_news(html_text: &str) -> News {
    let fragment: Html = Html::parse_fragment(html_text);

    let profile_selector: Selector = match parse_selector("#profile_block") {
        Some(selector) => selector,
        None => return News::default(),
    };

    let profile_block: ElementRef<'_> = match fragment.select(&profile_selector).next() {
        Some(element) => element,
        None => {
            warn!("[collect_service_impl->extract_news] '#profile_block' not found");
            return News::default();
        }
    };

    let anchor_selector: Selector = match parse_selector("a") {
        Some(selector) => selector,
        None => return News::default(),
    };

    let anchor_texts: Vec<String> = profile_block
        .select(&anchor_selector)
        .map(|element| element_text(&element))
        .collect();

    let nickname: String = anchor_texts.first().cloned().unwrap_or_default();
    let join_age: String = anchor_texts.get(1).cloned().unwrap_or_default();

    let fans: usize = extract_strict_count(&profile_block, "a.follower-count");
    /* 실제 마크업의 클래스명 철자가 'folowing-count' 다 */
    let follow: usize = extract_strict_count(&profile_block, "a.folowing-count");

    News::new(nickname, join_age, fans, follow)
}

#[doc = "sidecolumn HTML 조각의 `#sidebar_scorerank ul` 에서 점수와 순위를 추출하는 함수"]
fn extract_sidecolumn(html_text: &str) -> SideColumn {
    let fragment: Html = Html::parse_fragment(html_text);

    let rank_selector: Selector = match parse_selector("#sidebar_scorerank ul") {
        Some(selector) => selector,
        None => return SideColumn::default(),
    };

    let rank_block: ElementRef<'_> = match fragment.select(&rank_selector).next() {
        Some(element) => element,
        None => {
            warn!("[collect_service_impl->extract_sidecolumn] '#sidebar_scorerank ul' not found");
            return SideColumn::default();
        }
    };

    let score: usize = extract_digit_count(&rank_block, "li.liScore");
    let rank: usize = extract_digit_count(&rank_block, "li.liRank");

    SideColumn::new(ScoreRank::new(score, rank))
}

#[doc = "GetPostStat 배치 응답을 게시글 통계 목록으로 역직렬화하는 함수"]
fn map_post_stats(response_body: Value) -> Result<Vec<PostStat>, anyhow::Error> {
    serde_json::from_value::<Vec<PostStat>>(response_body).map_err(|e| {
        anyhow!(
            "[collect_service_impl->map_post_stats] Failed to deserialize post stats: {:?}",
            e
        )
    })
}

impl<R, S> CollectServiceImpl<R, S>
where
    R: BlogRepository,
    S: SnapshotStore,
{
    #[doc = "계정 단위 카운터 블록 수집. 실패 시 기본값으로 대체한다."]
    async fn fetch_blog_stats(&self) -> BlogStats {
        match self.blog_repository.get_html("blog-stats").await {
            Ok(html_text) => extract_blog_stats(&html_text),
            Err(e) => {
                error!("[CollectServiceImpl->fetch_blog_stats] {:?}", e);
                BlogStats::default()
            }
        }
    }

    #[doc = "프로필 블록 수집. 실패 시 기본값으로 대체한다."]
    async fn fetch_news(&self) -> News {
        match self.blog_repository.get_html("news").await {
            Ok(html_text) => extract_news(&html_text),
            Err(e) => {
                error!("[CollectServiceImpl->fetch_news] {:?}", e);
                News::default()
            }
        }
    }

    #[doc = "점수/순위 블록 수집. 실패 시 기본값으로 대체한다."]
    async fn fetch_sidecolumn(&self) -> SideColumn {
        match self.blog_repository.get_html("sidecolumn.aspx").await {
            Ok(html_text) => extract_sidecolumn(&html_text),
            Err(e) => {
                error!("[CollectServiceImpl->fetch_sidecolumn] {:?}", e);
                SideColumn::default()
            }
        }
    }

    #[doc = r#"
        수집 대상 게시글들의 통계를 배치 호출로 가져오는 함수.

        다른 수집 단계와 달리 이 호출의 실패(전송 실패, 매핑 실패)는
        그대로 상위로 전파되어 실행 전체를 중단시킨다.
    "#]
    async fn fetch_post_stats(
        &self,
        tracked_post_list: &TrackedPostListConfig,
    ) -> anyhow::Result<Vec<PostStat>> {
        let post_ids: Vec<i64> = tracked_post_list
            .post()
            .iter()
            .map(|post| *post.post_id())
            .collect();

        let body: Value = convert_json_from_struct(&post_ids)?;

        let response_body: Value = self.blog_repository.post_json("GetPostStat", &body).await?;

        map_post_stats(response_body)
    }
}

#[async_trait]
impl<R, S> CollectService for CollectServiceImpl<R, S>
where
    R: BlogRepository,
    S: SnapshotStore,
{
    #[doc = r#"
        수집 실행 한 번을 수행하는 함수.

        1. 현재 UTC 시각을 한 번만 읽는다. fetched_at 과 저장 키가 모두 이 시각에서 유래한다
        2. blog-stats / news / sidecolumn 을 순차적으로 수집하며, 개별 실패는 기본값으로 흡수한다
        3. GetPostStat 배치 호출을 수행한다. 여기서 실패하면 스냅샷을 저장하지 않고 중단한다
        4. 스냅샷 레코드를 조립해서 저장소에 기록하고 저장된 경로를 반환한다

        # Returns
        * `anyhow::Result<PathBuf>` - 저장된 스냅샷 파일 경로
    "#]
    async fn run_collection(
        &self,
        tracked_post_list: &TrackedPostListConfig,
    ) -> anyhow::Result<PathBuf> {
        let fetched_at_utc: DateTime<Utc> = Utc::now();

        /* 1. 계정 단위 카운터 */
        let blog_stats: BlogStats = self.fetch_blog_stats().await;

        /* 2. 프로필 정보 */
        let news: News = self.fetch_news().await;

        /* 3. 점수/순위 */
        let sidecolumn: SideColumn = self.fetch_sidecolumn().await;

        /* 4. 게시글별 통계 배치 호출. 실패하면 스냅샷을 저장하지 않는다 */
        let interested_blogs: Vec<PostStat> = self.fetch_post_stats(tracked_post_list).await?;

        let snapshot: Snapshot = Snapshot::new(
            convert_date_to_str(fetched_at_utc, Utc),
            blog_stats,
            news,
            sidecolumn,
            interested_blogs,
        );

        let saved_path: PathBuf = self
            .snapshot_store
            .save_snapshot(fetched_at_utc, &snapshot)
            .await?;

        Ok(saved_path)
    }
}
