//! Inline SVG rendering for the two dashboard charts.

use super::charts::{BarChart, PieChart};
use std::f64::consts::PI;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;

const PIE_CX: f64 = 150.0;
const PIE_CY: f64 = 180.0;
const PIE_RADIUS: f64 = 110.0;

const PLOT_LEFT: f64 = 60.0;
const PLOT_TOP: f64 = 50.0;
const PLOT_WIDTH: f64 = 390.0;
const PLOT_HEIGHT: f64 = 210.0;

/// Escapes text for use in HTML/SVG content and attribute values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn open_svg(out: &mut String, class: &str, title: &str) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" viewBox="0 0 {WIDTH} {HEIGHT}" role="img">"#
    ));
    out.push_str(&format!(
        r#"<text class="chart-title" x="{x}" y="28" text-anchor="middle">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape(title),
    ));
}

fn no_data(out: &mut String) {
    out.push_str(&format!(
        r#"<text class="chart-empty" x="{x}" y="{y}" text-anchor="middle">No data</text></svg>"#,
        x = WIDTH / 2.0,
        y = HEIGHT / 2.0,
    ));
}

fn point_on_circle(angle: f64) -> (f64, f64) {
    (
        PIE_CX + PIE_RADIUS * angle.cos(),
        PIE_CY + PIE_RADIUS * angle.sin(),
    )
}

pub fn render_pie(chart: &PieChart) -> String {
    let mut out = String::new();
    open_svg(&mut out, "pie-chart", chart.title);

    if chart.is_empty() {
        no_data(&mut out);
        return out;
    }

    // Wedges run clockwise from twelve o'clock.
    let mut angle = -PI / 2.0;
    for slice in chart.slices.iter().filter(|slice| slice.share > 0.0) {
        let label = escape(&slice.label);
        if slice.share >= 1.0 {
            out.push_str(&format!(
                r#"<circle cx="{PIE_CX}" cy="{PIE_CY}" r="{PIE_RADIUS}" fill="{color}"><title>{label}</title></circle>"#,
                color = slice.color,
            ));
            continue;
        }

        let sweep = slice.share * 2.0 * PI;
        let (x0, y0) = point_on_circle(angle);
        let (x1, y1) = point_on_circle(angle + sweep);
        let large_arc = u8::from(sweep > PI);
        out.push_str(&format!(
            r#"<path d="M {PIE_CX} {PIE_CY} L {x0:.2} {y0:.2} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x1:.2} {y1:.2} Z" fill="{color}"><title>{label}</title></path>"#,
            color = slice.color,
        ));
        angle += sweep;
    }

    for (index, slice) in chart.slices.iter().enumerate() {
        let y = 80.0 + index as f64 * 24.0;
        out.push_str(&format!(
            r#"<rect x="310" y="{ry}" width="14" height="14" fill="{color}"/><text class="legend" x="332" y="{ty}">{label} ({pct:.1}%)</text>"#,
            ry = y - 11.0,
            ty = y,
            color = slice.color,
            label = escape(&slice.label),
            pct = slice.share * 100.0,
        ));
    }

    out.push_str("</svg>");
    out
}

pub fn render_bar(chart: &BarChart) -> String {
    let mut out = String::new();
    open_svg(&mut out, "bar-chart", chart.title);

    if chart.is_empty() {
        no_data(&mut out);
        return out;
    }

    let baseline = PLOT_TOP + PLOT_HEIGHT;
    for tick in (0..=100u8).step_by(20) {
        let y = baseline - PLOT_HEIGHT * f64::from(tick) / 100.0;
        out.push_str(&format!(
            r##"<line class="grid" x1="{PLOT_LEFT}" y1="{y}" x2="{x2}" y2="{y}" stroke="#e5e5e5"/><text class="tick" x="{tx}" y="{ty}" text-anchor="end">{tick}</text>"##,
            x2 = PLOT_LEFT + PLOT_WIDTH,
            tx = PLOT_LEFT - 8.0,
            ty = y + 4.0,
        ));
    }

    let slot = PLOT_WIDTH / chart.bars.len() as f64;
    let bar_width = slot * 0.6;
    for (index, bar) in chart.bars.iter().enumerate() {
        let height = PLOT_HEIGHT * f64::from(bar.value) / 100.0;
        let x = PLOT_LEFT + slot * index as f64 + (slot - bar_width) / 2.0;
        let label = escape(&bar.label);
        out.push_str(&format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{color}"><title>{label}: {value}%</title></rect><text class="tick" x="{lx:.2}" y="{ly}" text-anchor="middle">{label}</text>"#,
            y = baseline - height,
            color = bar.color,
            value = bar.value,
            lx = x + bar_width / 2.0,
            ly = baseline + 18.0,
        ));
    }

    out.push_str(&format!(
        r#"<text class="axis-title" x="{x}" y="{y}" text-anchor="middle">{x_label}</text><text class="axis-title" x="16" y="{my}" text-anchor="middle" transform="rotate(-90 16 {my})">{y_label}</text></svg>"#,
        x = PLOT_LEFT + PLOT_WIDTH / 2.0,
        y = HEIGHT - 12.0,
        my = PLOT_TOP + PLOT_HEIGHT / 2.0,
        x_label = escape(chart.x_label),
        y_label = escape(chart.y_label),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::charts::{bar_chart, pie_chart};
    use crate::dashboard::domain::DemandRecord;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"C++ & <"R">'"#), "C++ &amp; &lt;&quot;R&quot;&gt;&#39;");
    }

    #[test]
    fn empty_charts_render_placeholder() {
        let pie = render_pie(&pie_chart(&[]));
        assert!(pie.contains("Skill Demand Distribution"));
        assert!(pie.contains("No data"));
        assert!(!pie.contains("<path"));

        let bar = render_bar(&bar_chart(&[]));
        assert!(bar.contains("No data"));
        assert!(!bar.contains("<rect"));
    }

    #[test]
    fn single_slice_renders_full_circle() {
        let rows = vec![DemandRecord::new("Engineering", "Matlab", 50)];
        let filtered: Vec<&DemandRecord> = rows.iter().collect();
        let svg = render_pie(&pie_chart(&filtered));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("Matlab (100.0%)"));
    }

    #[test]
    fn bars_and_wedges_match_row_count() {
        let rows = vec![
            DemandRecord::new("Computer Science", "Python", 75),
            DemandRecord::new("Computer Science", "JavaScript", 65),
        ];
        let filtered: Vec<&DemandRecord> = rows.iter().collect();

        let pie = render_pie(&pie_chart(&filtered));
        assert_eq!(pie.matches("<path").count(), 2);

        let bar = render_bar(&bar_chart(&filtered));
        assert!(bar.contains("Python: 75%"));
        assert!(bar.contains("JavaScript: 65%"));
        assert!(bar.ends_with("</svg>"));
    }

    #[test]
    fn every_chart_is_one_closed_svg_element() {
        let rows = vec![
            DemandRecord::new("Engineering", "Matlab", 50),
            DemandRecord::new("Engineering", "C++", 40),
        ];
        let filtered: Vec<&DemandRecord> = rows.iter().collect();

        for svg in [
            render_pie(&pie_chart(&filtered)),
            render_bar(&bar_chart(&filtered)),
            render_pie(&pie_chart(&[])),
            render_bar(&bar_chart(&[])),
        ] {
            assert!(svg.starts_with("<svg "));
            assert!(svg.ends_with("</svg>"));
            assert_eq!(svg.matches("<svg").count(), 1);
            assert_eq!(svg.matches("</svg>").count(), 1);
        }
    }

    #[test]
    fn labels_are_escaped_in_output() {
        let rows = vec![DemandRecord::new("Art", "<script>", 30)];
        let filtered: Vec<&DemandRecord> = rows.iter().collect();
        let svg = render_bar(&bar_chart(&filtered));
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }
}
