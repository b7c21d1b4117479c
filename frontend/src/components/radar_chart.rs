//! Canvas radar chart comparing the user's competency scores with the company
//! averages.

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::constants::*;
use crate::models::CompetencyResult;
use crate::utils::truncate_label;

const RING_COUNT: u32 = 5;
const LEGEND_HEIGHT: f64 = 36.0;
const LABEL_PADDING: f64 = 56.0;
const POINT_RADIUS: f64 = 3.0;

/// Labels plus two parallel series, one entry per user competency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub user_scores: Vec<f64>,
    pub company_scores: Vec<f64>,
}

impl RadarData {
    /// Build the chart series from `/competencies/results`. The company series
    /// follows the user's competencies; items without an average plot at 0.
    pub fn from_results(results: &CompetencyResult) -> Self {
        let labels = results
            .user_competencies
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let user_scores = results.user_competencies.iter().map(|c| c.score).collect();
        let company_scores = results
            .user_competencies
            .iter()
            .map(|c| {
                results
                    .company_averages
                    .iter()
                    .find(|avg| avg.competency_item_id == c.competency_item_id)
                    .map(|avg| avg.average_score)
                    .unwrap_or(0.0)
            })
            .collect();

        Self { labels, user_scores, company_scores }
    }
}

/// Position of the `index`-th of `count` spokes at `value` on a `0..=max`
/// scale. Spoke 0 points straight up, the rest follow clockwise.
pub fn vertex(
    index: usize,
    count: usize,
    value: f64,
    max: f64,
    center: (f64, f64),
    radius: f64,
) -> (f64, f64) {
    if count == 0 || max <= 0.0 {
        return center;
    }
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count as f64;
    let scaled = radius * value.clamp(0.0, max) / max;
    (center.0 + scaled * angle.cos(), center.1 + scaled * angle.sin())
}

/// Create the `<canvas>` inside `parent` and draw `data` on it.
pub fn mount(document: &Document, parent: &Element, data: &RadarData) -> Result<(), JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(ID_RADAR_CANVAS);
    canvas.set_width(RADAR_CANVAS_WIDTH);
    canvas.set_height(RADAR_CANVAS_HEIGHT);
    canvas.set_class_name("radar-canvas");
    parent.append_child(&canvas)?;

    draw(&canvas, data)
}

pub fn draw(canvas: &HtmlCanvasElement, data: &RadarData) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    context.clear_rect(0.0, 0.0, width, height);

    let plot_height = height - LEGEND_HEIGHT;
    let center = (width / 2.0, plot_height / 2.0);
    let radius = (width.min(plot_height) / 2.0 - LABEL_PADDING).max(10.0);
    let count = data.labels.len();
    let max = MAX_SCORE as f64;

    draw_grid(&context, count, center, radius, max);

    draw_series(&context, &data.company_scores, center, radius, max, COMPANY_SERIES_FILL, COMPANY_SERIES_STROKE);
    draw_series(&context, &data.user_scores, center, radius, max, USER_SERIES_FILL, USER_SERIES_STROKE);

    draw_labels(&context, &data.labels, center, radius, max)?;
    draw_legend(&context, width, height)?;
    Ok(())
}

fn draw_grid(context: &CanvasRenderingContext2d, count: usize, center: (f64, f64), radius: f64, max: f64) {
    context.save();
    context.set_stroke_style_str(RADAR_GRID_COLOR);
    context.set_line_width(1.0);

    for ring in 1..=RING_COUNT {
        let level = max * ring as f64 / RING_COUNT as f64;
        context.begin_path();
        for i in 0..count.max(1) {
            let (x, y) = vertex(i, count, level, max, center, radius);
            if i == 0 {
                context.move_to(x, y);
            } else {
                context.line_to(x, y);
            }
        }
        context.close_path();
        context.stroke();
    }

    for i in 0..count {
        let (x, y) = vertex(i, count, max, max, center, radius);
        context.begin_path();
        context.move_to(center.0, center.1);
        context.line_to(x, y);
        context.stroke();
    }

    context.restore();
}

fn draw_series(
    context: &CanvasRenderingContext2d,
    values: &[f64],
    center: (f64, f64),
    radius: f64,
    max: f64,
    fill: &str,
    stroke: &str,
) {
    if values.is_empty() {
        return;
    }
    let count = values.len();

    context.save();
    context.set_fill_style_str(fill);
    context.set_stroke_style_str(stroke);
    context.set_line_width(2.0);

    context.begin_path();
    for (i, value) in values.iter().enumerate() {
        let (x, y) = vertex(i, count, *value, max, center, radius);
        if i == 0 {
            context.move_to(x, y);
        } else {
            context.line_to(x, y);
        }
    }
    context.close_path();
    context.fill();
    context.stroke();

    context.set_fill_style_str(stroke);
    for (i, value) in values.iter().enumerate() {
        let (x, y) = vertex(i, count, *value, max, center, radius);
        context.begin_path();
        let _ = context.arc(x, y, POINT_RADIUS, 0.0, 2.0 * PI);
        context.fill();
    }

    context.restore();
}

fn draw_labels(
    context: &CanvasRenderingContext2d,
    labels: &[String],
    center: (f64, f64),
    radius: f64,
    max: f64,
) -> Result<(), JsValue> {
    let count = labels.len();
    context.save();
    context.set_fill_style_str(RADAR_LABEL_COLOR);
    context.set_font("12px sans-serif");
    context.set_text_baseline("middle");

    for (i, label) in labels.iter().enumerate() {
        let (x, y) = vertex(i, count, max, max, center, radius + 16.0);
        let align = if (x - center.0).abs() < 1.0 {
            "center"
        } else if x > center.0 {
            "left"
        } else {
            "right"
        };
        context.set_text_align(align);
        context.fill_text(&truncate_label(label, RADAR_LABEL_MAX_GRAPHEMES), x, y)?;
    }

    context.restore();
    Ok(())
}

fn draw_legend(context: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    let entries = [
        (USER_SERIES_LABEL, USER_SERIES_STROKE),
        (COMPANY_SERIES_LABEL, COMPANY_SERIES_STROKE),
    ];

    context.save();
    context.set_font("12px sans-serif");
    context.set_text_baseline("middle");
    context.set_text_align("left");

    let swatch = 12.0;
    let gap = 24.0;
    let widths: Vec<f64> = entries
        .iter()
        .map(|(label, _)| context.measure_text(label).map(|m| m.width()))
        .collect::<Result<_, _>>()?;
    let total: f64 = widths.iter().map(|w| swatch + 6.0 + w).sum::<f64>()
        + gap * (entries.len() - 1) as f64;

    let y = height - LEGEND_HEIGHT / 2.0;
    let mut x = (width - total) / 2.0;
    for ((label, color), text_width) in entries.iter().zip(widths) {
        context.set_fill_style_str(color);
        context.fill_rect(x, y - swatch / 2.0, swatch, swatch);
        context.set_fill_style_str(RADAR_LABEL_COLOR);
        context.fill_text(label, x + swatch + 6.0, y)?;
        x += swatch + 6.0 + text_width + gap;
    }

    context.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyAverageCompetency, CompetencyItem, UserCompetency};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn first_spoke_points_up() {
        let p = vertex(0, 4, 5.0, 5.0, (100.0, 100.0), 50.0);
        assert!(close(p, (100.0, 50.0)));
    }

    #[test]
    fn second_of_four_spokes_points_right() {
        let p = vertex(1, 4, 2.5, 5.0, (0.0, 0.0), 100.0);
        assert!(close(p, (50.0, 0.0)));
    }

    #[test]
    fn values_are_clamped() {
        let over = vertex(0, 3, 9.0, 5.0, (0.0, 0.0), 10.0);
        let at_max = vertex(0, 3, 5.0, 5.0, (0.0, 0.0), 10.0);
        assert!(close(over, at_max));
        assert!(close(vertex(2, 3, -1.0, 5.0, (3.0, 4.0), 10.0), (3.0, 4.0)));
    }

    #[test]
    fn degenerate_inputs_collapse_to_center() {
        assert!(close(vertex(0, 0, 3.0, 5.0, (1.0, 2.0), 10.0), (1.0, 2.0)));
        assert!(close(vertex(0, 3, 3.0, 0.0, (1.0, 2.0), 10.0), (1.0, 2.0)));
    }

    #[test]
    fn company_series_follows_user_competencies() {
        let results = CompetencyResult {
            user_competencies: vec![
                UserCompetency {
                    id: 1,
                    user_id: 9,
                    competency_item_id: 3,
                    score: 4.0,
                    calculated_at: None,
                    competency_item: Some(CompetencyItem {
                        id: 3,
                        name: "Problem solving".into(),
                        description: None,
                        order: 0,
                        created_at: None,
                        updated_at: None,
                    }),
                },
                UserCompetency {
                    id: 2,
                    user_id: 9,
                    competency_item_id: 1,
                    score: 2.0,
                    calculated_at: None,
                    competency_item: None,
                },
            ],
            company_averages: vec![CompanyAverageCompetency {
                id: 1,
                competency_item_id: 3,
                average_score: 3.5,
                total_users: 10,
                calculated_at: None,
                competency_item: None,
            }],
        };

        let data = RadarData::from_results(&results);
        assert_eq!(data.labels, vec!["Problem solving".to_string(), String::new()]);
        assert_eq!(data.user_scores, vec![4.0, 2.0]);
        assert_eq!(data.company_scores, vec![3.5, 0.0]);
    }
}
