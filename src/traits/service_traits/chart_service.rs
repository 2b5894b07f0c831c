use crate::common::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a line chart from time-series data and save it as an image file
        # Arguments
        * `title` - Chart title
        * `x_labels` - Labels for X-axis (e.g., timestamps or dates)
        * `y_data` - Data points for Y-axis
        * `output_path` - Path where the chart image will be saved
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
    "]
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<i64>,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a dual-axis engagement chart for a single post and save it as an image file.
        View counts are drawn on the primary Y-axis, digg/bury/feedback counts on the secondary one.
        # Arguments
        * `title` - Chart title
        * `x_labels` - Labels for X-axis (dates the post appeared on)
        * `view_data` - View counts (primary axis)
        * `digg_data` - Digg counts (secondary axis)
        * `bury_data` - Bury counts (secondary axis)
        * `feedback_data` - Feedback counts (secondary axis)
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_post_engagement_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        view_data: Vec<i64>,
        digg_data: Vec<i64>,
        bury_data: Vec<i64>,
        feedback_data: Vec<i64>,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
