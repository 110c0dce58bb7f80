//! Inline SVG line chart: buying and selling series over labelled time slots.
//!
//! Locale-specific nodes (x labels, legend, axis title, point tooltips) are
//! emitted once per locale and tagged `l-en` / `l-zh`; the page stylesheet
//! shows only the active one, so switching language needs no new request.

use super::escape;
use super::i18n::Strings;
use crate::domain::chart::{AxisDomain, ChartData};
use crate::shared::fmt::num::display_rate;
use crate::shared::Locale;

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 420.0;

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 88.0;
const Y_TICKS: usize = 5;

pub const BUYING_COLOR: &str = "#2563eb";
pub const SELLING_COLOR: &str = "#dc2626";

/// Maps data coordinates into the plot area.
#[derive(Debug, Clone, Copy)]
struct Scale {
    count: usize,
    axis: AxisDomain,
}

impl Scale {
    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return MARGIN_LEFT + Self::plot_width() / 2.0;
        }
        MARGIN_LEFT + Self::plot_width() * index as f64 / (self.count - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.axis.span().max(1) as f64;
        MARGIN_TOP + Self::plot_height() * (self.axis.max as f64 - value) / span
    }
}

/// Render the chart as a standalone `<svg>` element.
pub fn line_chart(chart: &ChartData) -> String {
    let scale = Scale {
        count: chart.records.len(),
        axis: chart.axis,
    };
    let mut out = format!(
        r#"<svg class="rate-chart" viewBox="0 0 {w} {h}" width="100%" role="img" xmlns="http://www.w3.org/2000/svg">"#,
        w = WIDTH,
        h = HEIGHT
    );

    push_grid(&mut out, &scale);
    push_axis_title(&mut out);
    push_x_labels(&mut out, chart, &scale);
    push_series(&mut out, chart, &scale, |r| r.buying_rate, BUYING_COLOR, "buying");
    push_series(&mut out, chart, &scale, |r| r.selling_rate, SELLING_COLOR, "selling");
    push_points(&mut out, chart, &scale);
    push_legend(&mut out);

    out.push_str("</svg>");
    out
}

fn push_grid(out: &mut String, scale: &Scale) {
    let right = WIDTH - MARGIN_RIGHT;
    let span = scale.axis.span().max(1) as f64;
    for step in 0..Y_TICKS {
        let value = scale.axis.min as f64 + span * step as f64 / (Y_TICKS - 1) as f64;
        let y = scale.y(value);
        out.push_str(&format!(
            r##"<line class="grid" x1="{MARGIN_LEFT:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#e5e7eb"/>"##
        ));
        out.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{ty:.1}" text-anchor="end">{label}</text>"#,
            x = MARGIN_LEFT - 8.0,
            ty = y + 4.0,
            label = display_rate(value, 2)
        ));
    }
    let bottom = HEIGHT - MARGIN_BOTTOM;
    out.push_str(&format!(
        r##"<line class="axis" x1="{MARGIN_LEFT:.1}" y1="{MARGIN_TOP:.1}" x2="{MARGIN_LEFT:.1}" y2="{bottom:.1}" stroke="#6b7280"/>"##
    ));
    out.push_str(&format!(
        r##"<line class="axis" x1="{MARGIN_LEFT:.1}" y1="{bottom:.1}" x2="{right:.1}" y2="{bottom:.1}" stroke="#6b7280"/>"##
    ));
}

fn push_axis_title(out: &mut String) {
    let x = 16.0;
    let y = MARGIN_TOP + Scale::plot_height() / 2.0;
    for locale in Locale::ALL {
        out.push_str(&format!(
            r#"<text class="axis-title l-{loc}" x="{x:.1}" y="{y:.1}" transform="rotate(-90 {x:.1} {y:.1})" text-anchor="middle">{label}</text>"#,
            loc = locale.as_str(),
            label = escape(Strings::for_locale(locale).axis_label)
        ));
    }
}

fn push_x_labels(out: &mut String, chart: &ChartData, scale: &Scale) {
    let y = HEIGHT - MARGIN_BOTTOM + 16.0;
    for locale in Locale::ALL {
        for (index, point) in chart.points(locale).iter().enumerate() {
            let x = scale.x(index);
            out.push_str(&format!(
                r#"<text class="x-label l-{loc}" x="{x:.1}" y="{y:.1}" transform="rotate(-35 {x:.1} {y:.1})" text-anchor="end">{label}</text>"#,
                loc = locale.as_str(),
                label = escape(&point.label)
            ));
        }
    }
}

fn push_series(
    out: &mut String,
    chart: &ChartData,
    scale: &Scale,
    value: impl Fn(&crate::domain::rate::RateRecord) -> f64,
    color: &str,
    name: &str,
) {
    let coords: Vec<String> = chart
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| format!("{:.1},{:.1}", scale.x(index), scale.y(value(record))))
        .collect();
    out.push_str(&format!(
        r#"<polyline class="series-{name}" fill="none" stroke="{color}" stroke-width="2" points="{points}"/>"#,
        points = coords.join(" ")
    ));
}

fn push_points(out: &mut String, chart: &ChartData, scale: &Scale) {
    for locale in Locale::ALL {
        let strings = Strings::for_locale(locale);
        out.push_str(&format!(r#"<g class="points l-{}">"#, locale.as_str()));
        for (index, point) in chart.points(locale).iter().enumerate() {
            let x = scale.x(index);
            for (rate, label, color) in [
                (point.buying_rate, strings.buying_label, BUYING_COLOR),
                (point.selling_rate, strings.selling_label, SELLING_COLOR),
            ] {
                out.push_str(&format!(
                    r#"<circle cx="{x:.1}" cy="{y:.1}" r="3.5" fill="{color}"><title>{date_label}: {time}&#10;{label}: {rate}</title></circle>"#,
                    y = scale.y(rate),
                    date_label = escape(strings.tooltip_date_label),
                    time = escape(&point.label),
                    label = escape(label),
                    rate = display_rate(rate, 4)
                ));
            }
        }
        out.push_str("</g>");
    }
}

fn push_legend(out: &mut String) {
    let y = MARGIN_TOP - 16.0;
    for locale in Locale::ALL {
        let strings = Strings::for_locale(locale);
        out.push_str(&format!(r#"<g class="legend l-{}">"#, locale.as_str()));
        let mut x = MARGIN_LEFT;
        for (label, color) in [
            (strings.buying_label, BUYING_COLOR),
            (strings.selling_label, SELLING_COLOR),
        ] {
            out.push_str(&format!(
                r#"<rect x="{x:.1}" y="{ry:.1}" width="14" height="4" fill="{color}"/><text x="{tx:.1}" y="{y:.1}">{label}</text>"#,
                ry = y - 6.0,
                tx = x + 20.0,
                label = escape(label)
            ));
            x += 160.0;
        }
        out.push_str("</g>");
    }
}
