use crate::model::snapshot::snapshot::*;

#[doc = "계정 단위 추이 차트로 그려지는 항목들. article_count 는 수집만 하고 차트는 그리지 않는다."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMetric {
    PostCount,
    CommentCount,
    ViewCount,
    Score,
    Rank,
    Fans,
    Follow,
}

pub const ALL_ACCOUNT_METRICS: [AccountMetric; 7] = [
    AccountMetric::PostCount,
    AccountMetric::CommentCount,
    AccountMetric::ViewCount,
    AccountMetric::Score,
    AccountMetric::Rank,
    AccountMetric::Fans,
    AccountMetric::Follow,
];

pub fn get_metric_label(metric: AccountMetric) -> &'static str {
    match metric {
        AccountMetric::PostCount => "Post Count",
        AccountMetric::CommentCount => "Comment Count",
        AccountMetric::ViewCount => "View Count",
        AccountMetric::Score => "Score",
        AccountMetric::Rank => "Rank",
        AccountMetric::Fans => "Fans",
        AccountMetric::Follow => "Follow",
    }
}

pub fn get_metric_file_name(metric: AccountMetric) -> &'static str {
    match metric {
        AccountMetric::PostCount => "post_count.png",
        AccountMetric::CommentCount => "comment_count.png",
        AccountMetric::ViewCount => "view_count.png",
        AccountMetric::Score => "score.png",
        AccountMetric::Rank => "rank.png",
        AccountMetric::Fans => "fans.png",
        AccountMetric::Follow => "follow.png",
    }
}

pub fn get_metric_value(metric: AccountMetric, snapshot: &Snapshot) -> i64 {
    match metric {
        AccountMetric::PostCount => snapshot.blog_stats.post_count as i64,
        AccountMetric::CommentCount => snapshot.blog_stats.comment_count as i64,
        AccountMetric::ViewCount => snapshot.blog_stats.view_count as i64,
        AccountMetric::Score => snapshot.sidecolumn.score_rank.score as i64,
        AccountMetric::Rank => snapshot.sidecolumn.score_rank.rank as i64,
        AccountMetric::Fans => snapshot.news.fans as i64,
        AccountMetric::Follow => snapshot.news.follow as i64,
    }
}
