use super::domain::DemandRecord;
use serde::Serialize;

pub const PIE_TITLE: &str = "Skill Demand Distribution";
pub const BAR_TITLE: &str = "Skill Demand by Skill Needed";
pub const SKILL_AXIS: &str = "Skill Needed";
pub const DEMAND_AXIS: &str = "Skill Demand (%)";

/// Qualitative palette; skills take colours in order of first appearance.
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Keeps the skill -> colour assignment stable across both charts.
#[derive(Debug, Default)]
struct SkillColors<'a> {
    assigned: Vec<&'a str>,
}

impl<'a> SkillColors<'a> {
    fn color_for(&mut self, skill: &'a str) -> &'static str {
        let index = match self.assigned.iter().position(|known| *known == skill) {
            Some(index) => index,
            None => {
                self.assigned.push(skill);
                self.assigned.len() - 1
            }
        };
        PALETTE[index % PALETTE.len()]
    }
}

/// Demand summed per skill, then expressed as a share of the total.
pub fn pie_chart(filtered: &[&DemandRecord]) -> PieChart {
    let mut colors = SkillColors::default();
    let mut slices: Vec<PieSlice> = Vec::new();

    for record in filtered {
        let value = u32::from(record.demand_percent);
        match slices
            .iter_mut()
            .find(|slice| slice.label == record.skill_needed)
        {
            Some(slice) => slice.value += value,
            None => slices.push(PieSlice {
                label: record.skill_needed.clone(),
                value,
                share: 0.0,
                color: colors.color_for(&record.skill_needed),
            }),
        }
    }

    let total: u32 = slices.iter().map(|slice| slice.value).sum();
    if total > 0 {
        for slice in &mut slices {
            slice.share = f64::from(slice.value) / f64::from(total);
        }
    }

    PieChart {
        title: PIE_TITLE,
        slices,
    }
}

/// One bar per distinct skill; the first row wins if a skill repeats.
pub fn bar_chart(filtered: &[&DemandRecord]) -> BarChart {
    let mut colors = SkillColors::default();
    let mut bars: Vec<Bar> = Vec::new();

    for record in filtered {
        if bars.iter().any(|bar| bar.label == record.skill_needed) {
            continue;
        }
        bars.push(Bar {
            label: record.skill_needed.clone(),
            value: record.demand_percent,
            color: colors.color_for(&record.skill_needed),
        });
    }

    BarChart {
        title: BAR_TITLE,
        x_label: SKILL_AXIS,
        y_label: DEMAND_AXIS,
        bars,
    }
}
