use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const REVENUE_COLOR: RGBColor = RGBColor(56, 142, 60);
const EXPENSE_COLOR: RGBColor = RGBColor(211, 47, 47);

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRange {
    Last30Days,
    Last90Days,
    LastYear,
}

impl ReportRange {
    fn to_days(&self) -> i64 {
        match self {
            ReportRange::Last30Days => 30,
            ReportRange::Last90Days => 90,
            ReportRange::LastYear => 365,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReportRange::Last30Days => "30 Days",
            ReportRange::Last90Days => "90 Days",
            ReportRange::LastYear => "1 Year",
        }
    }
}

/// Parse the wire series into dated points, dropping entries with malformed
/// dates and sorting chronologically.
fn parse_points(points: &[TrendPoint]) -> Vec<(NaiveDate, f64, f64)> {
    let mut series: Vec<(NaiveDate, f64, f64)> = points
        .iter()
        .filter_map(|point| {
            NaiveDate::parse_from_str(&point.date, "%Y-%m-%d")
                .ok()
                .map(|date| (date, point.revenue, point.expense))
        })
        .collect();
    series.sort_by_key(|entry| entry.0);
    series
}

/// Keep the trailing window of `days`, measured from the newest data point.
fn filter_by_range(series: &[(NaiveDate, f64, f64)], days: i64) -> Vec<(NaiveDate, f64, f64)> {
    let last = match series.last() {
        Some(entry) => entry.0,
        None => return Vec::new(),
    };
    let cutoff = last - Duration::days(days);
    series
        .iter()
        .copied()
        .filter(|(date, _, _)| *date >= cutoff)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub points: Vec<TrendPoint>,
    pub loading: bool,
}

pub enum Msg {
    SetRange(ReportRange),
}

pub struct TrendChart {
    canvas_ref: NodeRef,
    selected_range: ReportRange,
}

impl Component for TrendChart {
    type Message = Msg;
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            selected_range: ReportRange::Last30Days,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetRange(range) => {
                self.selected_range = range;
                self.draw_chart(&ctx.props().points);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().points != old_props.points {
            self.draw_chart(&ctx.props().points);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().points.is_empty() {
            self.draw_chart(&ctx.props().points);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let point_count = ctx.props().points.len();
        let loading = ctx.props().loading;
        let link = ctx.link();

        html! {
            <div class="trend-chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Revenue & Expense Trend"}</h3>

                    <div class="chart-range-selector">
                        {for [ReportRange::Last30Days, ReportRange::Last90Days, ReportRange::LastYear].iter().map(|range| {
                            let is_active = *range == self.selected_range;
                            let range_clone = range.clone();
                            let onclick = link.callback(move |_| Msg::SetRange(range_clone.clone()));

                            html! {
                                <button
                                    class={if is_active { "range-button active" } else { "range-button" }}
                                    onclick={onclick}
                                >
                                    {range.label()}
                                </button>
                            }
                        })}
                    </div>
                </div>

                {if point_count == 0 && loading {
                    html! {
                        <div class="chart-loading">
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if point_count == 0 {
                    html! {
                        <div class="chart-empty">
                            <p>{"No trend data available yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="trend-chart-canvas"
                                width="800"
                                height="350"
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl TrendChart {
    fn draw_chart(&self, points: &[TrendPoint]) {
        if points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(800);
        canvas.set_height(350);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let series = parse_points(points);
        let visible = filter_by_range(&series, self.selected_range.to_days());
        if visible.is_empty() {
            return;
        }

        // Pad one day each side so a single-day series still has a range
        let min_date = visible[0].0 - Duration::days(1);
        let max_date = visible[visible.len() - 1].0 + Duration::days(1);

        let max_value = visible
            .iter()
            .map(|(_, revenue, expense)| revenue.max(*expense))
            .fold(0.0_f64, f64::max);
        let y_max = (max_value * 1.1).max(1.0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(min_date..max_date, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Amount ($)")
            .x_desc("Date")
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&|d| d.format("%m/%d").to_string())
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(6)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        let revenue_line = LineSeries::new(
            visible.iter().map(|&(date, revenue, _)| (date, revenue)),
            REVENUE_COLOR.stroke_width(3),
        );
        match chart.draw_series(revenue_line) {
            Ok(series) => {
                series.label("Revenue").legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], REVENUE_COLOR.stroke_width(3))
                });
            }
            Err(_) => return,
        }

        let expense_line = LineSeries::new(
            visible.iter().map(|&(date, _, expense)| (date, expense)),
            EXPENSE_COLOR.stroke_width(3),
        );
        match chart.draw_series(expense_line) {
            Ok(series) => {
                series.label("Expense").legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], EXPENSE_COLOR.stroke_width(3))
                });
            }
            Err(_) => return,
        }

        if chart
            .configure_series_labels()
            .border_style(&RGBColor(230, 230, 230))
            .background_style(&WHITE.mix(0.8))
            .draw()
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, revenue: f64, expense: f64) -> TrendPoint {
        TrendPoint {
            date: date.to_string(),
            revenue,
            expense,
        }
    }

    #[test]
    fn test_trend_chart_compiles() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
            selected_range: ReportRange::Last30Days,
        };
        assert_eq!(chart.selected_range, ReportRange::Last30Days);
    }

    #[test]
    fn test_draw_chart_with_empty_points() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
            selected_range: ReportRange::Last30Days,
        };
        // Must not panic with no data
        chart.draw_chart(&[]);
    }

    #[test]
    fn test_parse_points_skips_invalid_dates_and_sorts() {
        let points = vec![
            point("2026-07-02", 20.0, 5.0),
            point("not-a-date", 99.0, 99.0),
            point("2026-07-01", 10.0, 3.0),
        ];

        let series = parse_points(&points);
        assert_eq!(series.len(), 2);
        assert!(series[0].0 < series[1].0);
        assert_eq!(series[0].1, 10.0);
    }

    #[test]
    fn test_filter_by_range_keeps_trailing_window() {
        let points = vec![
            point("2026-01-01", 1.0, 1.0),
            point("2026-05-15", 2.0, 2.0),
            point("2026-07-01", 3.0, 3.0),
        ];
        let series = parse_points(&points);

        let last_30 = filter_by_range(&series, 30);
        assert_eq!(last_30.len(), 1);

        let last_year = filter_by_range(&series, 365);
        assert_eq!(last_year.len(), 3);
    }

    #[test]
    fn test_filter_by_range_on_empty_series() {
        assert!(filter_by_range(&[], 30).is_empty());
    }

    #[test]
    fn test_range_to_days() {
        assert_eq!(ReportRange::Last30Days.to_days(), 30);
        assert_eq!(ReportRange::Last90Days.to_days(), 90);
        assert_eq!(ReportRange::LastYear.to_days(), 365);
    }
}

// Integration tests that require wasm-bindgen-test
#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_component_creation_in_wasm() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
            selected_range: ReportRange::Last30Days,
        };

        // Must handle an empty series without panicking in a browser too
        chart.draw_chart(&[]);
    }
}
