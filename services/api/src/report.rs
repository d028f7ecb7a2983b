use crate::infra::load_dataset;
use clap::Args;
use skill_gap::dashboard::{
    update_dashboard, ControlPanel, DashboardSelection, DashboardUpdate, DEFAULT_THRESHOLD,
};
use skill_gap::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct UpdateArgs {
    /// Education field to inspect
    #[arg(long)]
    pub(crate) field: String,
    /// Skill to predict demand for
    #[arg(long)]
    pub(crate) skill: String,
    /// Minimum demand (%) a row needs to appear in the charts
    #[arg(
        long,
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub(crate) threshold: u8,
    /// CSV demand table to use instead of the built-in sample
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ControlsArgs {
    /// CSV demand table to use instead of the built-in sample
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) fn run_update(args: UpdateArgs) -> Result<(), AppError> {
    let UpdateArgs {
        field,
        skill,
        threshold,
        dataset,
    } = args;

    let dataset = load_dataset(dataset)?;
    let selection = DashboardSelection::new(field, skill, threshold);
    selection.validate()?;

    let update = update_dashboard(&dataset, &selection);
    print!("{}", render_update(&selection, &update));
    Ok(())
}

pub(crate) fn run_controls(args: ControlsArgs) -> Result<(), AppError> {
    let dataset = load_dataset(args.dataset)?;
    let panel = ControlPanel::from_dataset(&dataset);

    println!("{}", panel.education_field.label);
    for option in &panel.education_field.options {
        println!("- {}", option.label);
    }
    println!("\n{}", panel.skill_needed.label);
    for option in &panel.skill_needed.options {
        println!("- {}", option.label);
    }
    let slider = &panel.demand_threshold;
    println!(
        "\n{} {}-{}% in steps of {} (default {}%)",
        slider.label, slider.min, slider.max, slider.step, slider.value
    );
    Ok(())
}

fn render_update(selection: &DashboardSelection, update: &DashboardUpdate) -> String {
    let mut out = format!(
        "Skill demand for {} (threshold {}%)\n",
        selection.education_field, selection.demand_threshold
    );

    if update.filtered.is_empty() {
        out.push_str("\nNo rows meet the threshold\n");
    } else {
        out.push_str(&format!("\n{}\n", update.pie_chart.title));
        for slice in &update.pie_chart.slices {
            out.push_str(&format!(
                "- {}: {}% of total demand\n",
                slice.label,
                format_share(slice.share)
            ));
        }

        out.push_str(&format!("\n{}\n", update.bar_chart.title));
        for bar in &update.bar_chart.bars {
            out.push_str(&format!("- {}: {}%\n", bar.label, bar.value));
        }
    }

    out.push_str(&format!("\n{}\n", update.prediction));
    if !update.projection.is_empty() {
        out.push_str(&format!("{}\n", update.projection));
    }
    out
}

fn format_share(share: f64) -> String {
    format!("{:.1}", share * 100.0)
}
