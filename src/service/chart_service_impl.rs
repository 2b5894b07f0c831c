use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

#[doc = "Helper function to format an axis value with thousands separators"]
fn format_commas(value: i64) -> String {
    let digits: String = value.to_string();
    let mut result: String = String::new();
    let mut count: i32 = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[i64]) -> (i64, i64) {
        if values.is_empty() {
            return (0, 100);
        }

        let min_val: i64 = *values.iter().min().unwrap_or(&0);
        let max_val: i64 = *values.iter().max().unwrap_or(&100);

        let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

        let y_min: i64 = (min_val - padding).max(0);
        let y_max: i64 = max_val + padding;

        (y_min, y_max)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<i64>,
        output_path: &std::path::Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()> {
        if x_labels.len() != y_data.len() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_line_chart] X labels and Y data must have the same length: {} vs {}",
                x_labels.len(),
                y_data.len()
            ));
        }

        if x_labels.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_line_chart] Cannot generate chart with empty data"
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();

        /* Calculate y_range before moving into closure */
        let (y_min, y_max) = self.calculate_y_range(&y_data);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root = BitMapBackend::new(&output_path_str, (1400, 700)).into_drawing_area();
                root.fill(&RGBColor(20, 20, 20))?;

                /* 데이터가 한 점뿐이어도 X축 범위가 퇴화하지 않도록 보정 */
                let x_max: usize = x_labels.len().max(2) - 1;

                let mut chart = ChartBuilder::on(&root)
                    .caption(
                        &title,
                        ("sans-serif", 40)
                            .into_font()
                            .color(&RGBColor(240, 240, 240)),
                    )
                    .margin(30)
                    .x_label_area_size(70)
                    .y_label_area_size(90)
                    .build_cartesian_2d(0..x_max, y_min..y_max)?;

                let line_color: RGBColor = RGBColor(0, 191, 255);
                let grid_color: RGBColor = RGBColor(60, 60, 60);
                let text_color: RGBColor = RGBColor(200, 200, 200);

                chart
                    .configure_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .x_labels(x_labels.len().min(10))
                    .y_labels(10)
                    .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
                    .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                    .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
                    .x_label_style(("sans-serif", 18).into_font().color(&text_color))
                    .y_label_style(("sans-serif", 30).into_font().color(&text_color))
                    .x_label_formatter(&|x| {
                        if *x < x_labels.len() {
                            x_labels[*x].clone()
                        } else {
                            String::new()
                        }
                    })
                    .y_label_formatter(&|y| format_commas(*y))
                    .draw()?;

                chart.draw_series(LineSeries::new(
                    y_data.iter().enumerate().map(|(i, &y)| (i, y)),
                    ShapeStyle::from(&line_color).stroke_width(3),
                ))?;

                /* 날짜별 지점을 눈에 띄게 표시 */
                chart.draw_series(
                    y_data
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| Circle::new((i, y), 4, line_color.filled())),
                )?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_line_chart] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_post_engagement_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        view_data: Vec<i64>,
        digg_data: Vec<i64>,
        bury_data: Vec<i64>,
        feedback_data: Vec<i64>,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        let series_len: usize = x_labels.len();

        if view_data.len() != series_len
            || digg_data.len() != series_len
            || bury_data.len() != series_len
            || feedback_data.len() != series_len
        {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_post_engagement_chart] all series must have the same length as X labels: {}",
                series_len
            ));
        }

        if x_labels.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_post_engagement_chart] Cannot generate chart with empty data"
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();

        /* 주축은 조회수, 보조축은 나머지 참여 지표 전체를 덮는 범위로 잡는다 */
        let (view_min, view_max) = self.calculate_y_range(&view_data);

        let mut engagement_all: Vec<i64> = Vec::new();
        engagement_all.extend_from_slice(&digg_data);
        engagement_all.extend_from_slice(&bury_data);
        engagement_all.extend_from_slice(&feedback_data);
        let (engage_min, engage_max) = self.calculate_y_range(&engagement_all);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (1400, 700)).into_drawing_area();
                root.fill(&RGBColor(20, 20, 20))?;

                let x_max: usize = x_labels.len().max(2) - 1;

                let mut chart = ChartBuilder::on(&root)
                    .caption(
                        &title,
                        ("sans-serif", 40)
                            .into_font()
                            .color(&RGBColor(240, 240, 240)),
                    )
                    .margin(30)
                    .x_label_area_size(70)
                    .y_label_area_size(90)
                    .right_y_label_area_size(90)
                    .build_cartesian_2d(0..x_max, view_min..view_max)?
                    .set_secondary_coord(0..x_max, engage_min..engage_max);

                let view_color: RGBColor = RGBColor(0, 191, 255);
                let digg_color: RGBColor = RGBColor(255, 99, 71);
                let bury_color: RGBColor = RGBColor(60, 179, 113);
                let feedback_color: RGBColor = RGBColor(255, 165, 0);
                let grid_color: RGBColor = RGBColor(60, 60, 60);
                let text_color: RGBColor = RGBColor(200, 200, 200);

                chart
                    .configure_mesh()
                    .x_desc("date")
                    .y_desc("view count")
                    .x_labels(x_labels.len().min(10))
                    .y_labels(10)
                    .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
                    .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                    .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
                    .x_label_style(("sans-serif", 18).into_font().color(&text_color))
                    .y_label_style(("sans-serif", 24).into_font().color(&text_color))
                    .x_label_formatter(&|x| {
                        if *x < x_labels.len() {
                            x_labels[*x].clone()
                        } else {
                            String::new()
                        }
                    })
                    .y_label_formatter(&|y| format_commas(*y))
                    .draw()?;

                chart
                    .configure_secondary_axes()
                    .y_desc("digg / bury / feedback")
                    .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
                    .label_style(("sans-serif", 24).into_font().color(&text_color))
                    .y_label_formatter(&|y| format_commas(*y))
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(
                        view_data.iter().enumerate().map(|(i, &y)| (i, y)),
                        ShapeStyle::from(&view_color).stroke_width(3),
                    ))?
                    .label("view")
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], view_color)
                    });

                chart.draw_series(
                    view_data
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| Circle::new((i, y), 4, view_color.filled())),
                )?;

                chart
                    .draw_secondary_series(LineSeries::new(
                        digg_data.iter().enumerate().map(|(i, &y)| (i, y)),
                        ShapeStyle::from(&digg_color).stroke_width(2),
                    ))?
                    .label("digg")
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], digg_color)
                    });

                chart.draw_secondary_series(
                    digg_data
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| Circle::new((i, y), 3, digg_color.filled())),
                )?;

                chart
                    .draw_secondary_series(LineSeries::new(
                        bury_data.iter().enumerate().map(|(i, &y)| (i, y)),
                        ShapeStyle::from(&bury_color).stroke_width(2),
                    ))?
                    .label("bury")
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], bury_color)
                    });

                chart.draw_secondary_series(
                    bury_data
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| Circle::new((i, y), 3, bury_color.filled())),
                )?;

                chart
                    .draw_secondary_series(LineSeries::new(
                        feedback_data.iter().enumerate().map(|(i, &y)| (i, y)),
                        ShapeStyle::from(&feedback_color).stroke_width(2),
                    ))?
                    .label("feedback")
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], feedback_color)
                    });

                chart.draw_secondary_series(
                    feedback_data
                        .iter()
                        .enumerate()
                        .map(|(i, &y)| Circle::new((i, y), 3, feedback_color.filled())),
                )?;

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(RGBColor(40, 40, 40))
                    .border_style(RGBColor(120, 120, 120))
                    .label_font(("sans-serif", 20).into_font().color(&text_color))
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_post_engagement_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_post_engagement_chart] drawing/present failed")?;

        info!("Post engagement chart generated successfully: {:?}", output_path);

        Ok(())
    }
}
