use super::controls::{ControlPanel, Dropdown, Slider};
use super::svg::escape;
use super::update::DashboardView;
use super::UPDATE_PATH;

pub const PAGE_TITLE: &str = "Youth Education and skill gap analysis";

fn render_dropdown(dropdown: &Dropdown) -> String {
    let options: String = dropdown
        .options
        .iter()
        .map(|option| {
            let selected = if option.value == dropdown.value {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = escape(&option.value),
                label = escape(&option.label),
            )
        })
        .collect();

    format!(
        r#"<div class="control dropdown"><label for="{id}">{label}</label><select id="{id}">{options}</select></div>"#,
        id = dropdown.id,
        label = escape(dropdown.label),
    )
}

fn render_slider(slider: &Slider) -> String {
    let marks: String = slider
        .marks
        .iter()
        .map(|mark| {
            format!(
                r#"<option value="{value}" label="{label}"></option>"#,
                value = mark.value,
                label = escape(&mark.label),
            )
        })
        .collect();

    format!(
        r#"<div class="control slider"><label for="{id}">{label} <output id="{id}-value">{value}%</output></label><input type="range" id="{id}" min="{min}" max="{max}" step="{step}" value="{value}" list="{id}-marks"><datalist id="{id}-marks">{marks}</datalist></div>"#,
        id = slider.id,
        label = escape(slider.label),
        value = slider.value,
        min = slider.min,
        max = slider.max,
        step = slider.step,
    )
}

/// Full page with the initial selection already rendered; the inline script
/// re-posts every control value whenever one of them changes.
pub fn render_page(panel: &ControlPanel, initial: &DashboardView) -> String {
    let field = &panel.education_field;
    let skill = &panel.skill_needed;
    let threshold = &panel.demand_threshold;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
  body {{ font-family: system-ui, -apple-system, "Segoe UI", sans-serif; margin: 24px; color: #1f2933; }}
  .control {{ display: inline-block; vertical-align: top; margin-right: 20px; }}
  .dropdown {{ width: 30%; }}
  .dropdown select {{ width: 100%; padding: 6px; }}
  .slider {{ display: block; width: 80%; padding: 20px; }}
  .slider input {{ width: 100%; }}
  .charts {{ display: flex; flex-direction: row; justify-content: space-between; }}
  .charts svg {{ width: 48%; height: auto; }}
  .chart-title {{ font-size: 16px; font-weight: 600; }}
  .chart-empty {{ fill: #7f8ba0; }}
  .tick, .legend, .axis-title {{ font-size: 12px; }}
  #prediction-result {{ padding: 20px; font-size: 20px; color: blue; }}
  #future-projection {{ padding: 20px; font-size: 18px; color: green; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="controls">
{field_control}
{skill_control}
</div>
{threshold_control}
<div class="charts">
<div id="pie-chart">{pie_svg}</div>
<div id="bar-chart">{bar_svg}</div>
</div>
<div id="prediction-result">{prediction}</div>
<div id="future-projection">{projection}</div>
<script>
(function () {{
  const field = document.getElementById("{field_id}");
  const skill = document.getElementById("{skill_id}");
  const threshold = document.getElementById("{threshold_id}");
  const thresholdValue = document.getElementById("{threshold_id}-value");

  async function refresh() {{
    thresholdValue.textContent = threshold.value + "%";
    const response = await fetch("{update_path}", {{
      method: "POST",
      headers: {{ "Content-Type": "application/json" }},
      body: JSON.stringify({{
        education_field: field.value,
        skill_needed: skill.value,
        demand_threshold: Number(threshold.value)
      }})
    }});
    if (!response.ok) {{
      return;
    }}
    const view = await response.json();
    document.getElementById("pie-chart").innerHTML = view.pie_svg;
    document.getElementById("bar-chart").innerHTML = view.bar_svg;
    document.getElementById("prediction-result").textContent = view.prediction;
    document.getElementById("future-projection").textContent = view.projection;
  }}

  field.addEventListener("change", refresh);
  skill.addEventListener("change", refresh);
  threshold.addEventListener("input", refresh);
}})();
</script>
</body>
</html>
"#,
        title = escape(PAGE_TITLE),
        field_control = render_dropdown(field),
        skill_control = render_dropdown(skill),
        threshold_control = render_slider(threshold),
        pie_svg = initial.pie_svg,
        bar_svg = initial.bar_svg,
        prediction = escape(&initial.update.prediction),
        projection = escape(&initial.update.projection),
        field_id = field.id,
        skill_id = skill.id,
        threshold_id = threshold.id,
        update_path = UPDATE_PATH,
    )
}
