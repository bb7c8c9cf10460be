use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::capacity::CapacityType;
use crate::domain::plan::TrainingPlan;
use crate::services::distribution::{RoundingPolicy, bucket_volume_share_with, count_by_category};
use crate::services::evaluation_summary::{category_distribution, performance_rows};
use crate::services::volume_calculation::{PERIOD_TAGS, PeriodAverage, period_averages};

const STAGE_COLORS: [&str; 4] = ["#3b82f6", "#60a5fa", "#93c5fd", "#bfdbfe"];
const CATEGORY_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// `{name, value, color}` record consumed by pie and bar charts.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: Option<u64>,
    pub color: String,
}

/// Volume share slice, carrying the absolute volume next to its percentage.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VolumeSlice {
    pub name: String,
    pub value: Option<u64>,
    pub volume: u64,
    pub color: String,
}

/// `{x, series...}` row for the weekly line and area charts.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeeklyPoint {
    pub x: String,
    pub volume: u32,
    pub intensity: u32,
    pub fatigue: u32,
    pub performance: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PeriodAveragePoint {
    pub period: String,
    pub avg_volume: Option<u64>,
    pub avg_intensity: Option<u64>,
    pub weeks: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PerformancePoint {
    pub name: String,
    #[serde(flatten)]
    pub results: BTreeMap<String, u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartData {
    pub period_weights: Vec<ChartSlice>,
    pub stage_weeks: Vec<ChartSlice>,
    pub volume_distribution: Vec<VolumeSlice>,
    pub type_distribution: Vec<ChartSlice>,
    pub weekly_series: Vec<WeeklyPoint>,
    pub period_averages: Vec<PeriodAveragePoint>,
    pub category_distribution: Vec<ChartSlice>,
    pub performance: Vec<PerformancePoint>,
}

pub fn build_chart_data(plan: &TrainingPlan, policy: RoundingPolicy) -> ChartData {
    let macrocycle = plan.macrocycle();

    let period_weights = macrocycle
        .periods
        .iter()
        .map(|p| ChartSlice {
            name: p.name.clone(),
            value: Some(u64::from(p.percent_weight)),
            color: period_color(&p.color_tag).to_string(),
        })
        .collect();

    let stage_weeks = macrocycle
        .stages
        .iter()
        .enumerate()
        .map(|(idx, s)| ChartSlice {
            name: s.name.clone(),
            value: Some(u64::from(s.weeks)),
            color: STAGE_COLORS[idx % STAGE_COLORS.len()].to_string(),
        })
        .collect();

    let shares = bucket_volume_share_with(plan.capacities(), plan.total_weeks(), policy);
    let volume_distribution = shares
        .into_iter()
        .map(|share| VolumeSlice {
            name: share.name,
            value: share.percent,
            volume: share.volume,
            color: share.color,
        })
        .collect();

    let type_distribution = count_by_category(plan.capacities(), &CapacityType::ALL, |c, t| {
        c.capacity_type == *t
    })
    .into_iter()
    .map(|count| ChartSlice {
        name: count.category.label().to_string(),
        value: Some(count.count as u64),
        color: count.category.chart_color().to_string(),
    })
    .collect();

    let weekly_series = plan
        .weekly_records()
        .iter()
        .map(|r| WeeklyPoint {
            x: r.label(),
            volume: r.volume,
            intensity: r.intensity,
            fatigue: r.fatigue,
            performance: r.performance,
        })
        .collect();

    let period_averages = period_averages(plan.weekly_records(), &PERIOD_TAGS)
        .into_iter()
        .map(period_average_point)
        .collect();

    let category_distribution = category_distribution(plan.evaluations())
        .into_iter()
        .enumerate()
        .map(|(idx, count)| ChartSlice {
            name: count.category.to_string(),
            value: Some(count.count as u64),
            color: CATEGORY_COLORS[idx % CATEGORY_COLORS.len()].to_string(),
        })
        .collect();

    let performance = performance_rows(plan.evaluations())
        .into_iter()
        .map(|row| PerformancePoint {
            name: row.name,
            results: row.results,
        })
        .collect();

    ChartData {
        period_weights,
        stage_weeks,
        volume_distribution,
        type_distribution,
        weekly_series,
        period_averages,
        category_distribution,
        performance,
    }
}

fn period_average_point(average: PeriodAverage) -> PeriodAveragePoint {
    PeriodAveragePoint {
        period: average.period_tag,
        avg_volume: average.avg_volume,
        avg_intensity: average.avg_intensity,
        weeks: average.week_count,
    }
}

fn period_color(color_tag: &str) -> &'static str {
    match color_tag {
        "bg-blue-500" => "#3b82f6",
        "bg-emerald-500" => "#10b981",
        _ => "#8b5cf6",
    }
}

pub fn chart_data_to_json(data: &ChartData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_plan::template_plan;

    #[test]
    fn chart_data_has_stable_shapes_for_template_plan() {
        let plan = template_plan();
        let data = build_chart_data(&plan, RoundingPolicy::Independent);

        assert_eq!(data.period_weights.len(), 2);
        assert_eq!(data.period_weights[0].color, "#3b82f6");
        assert_eq!(data.period_weights[1].color, "#10b981");
        assert_eq!(data.stage_weeks.len(), 4);
        assert_eq!(data.volume_distribution.len(), plan.capacities().len());
        assert_eq!(data.type_distribution.len(), 5);
        assert_eq!(data.type_distribution[0].name, "Física");
        assert_eq!(data.weekly_series.len(), 26);
        assert_eq!(data.weekly_series[0].x, "S1");
        assert_eq!(data.period_averages.len(), 3);
        assert_eq!(data.period_averages[2].weeks, 0);
        assert_eq!(data.category_distribution.len(), 5);
    }

    #[test]
    fn largest_remainder_policy_sums_volume_shares_to_one_hundred() {
        let plan = template_plan();
        let data = build_chart_data(&plan, RoundingPolicy::LargestRemainder);
        let total: u64 = data
            .volume_distribution
            .iter()
            .filter_map(|slice| slice.value)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn json_uses_stable_field_names() {
        let plan = template_plan();
        let json = chart_data_to_json(&build_chart_data(&plan, RoundingPolicy::Independent))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first_slice = &value["volume_distribution"][0];
        assert!(first_slice.get("name").is_some());
        assert!(first_slice.get("value").is_some());
        assert!(first_slice.get("volume").is_some());
        assert!(first_slice.get("color").is_some());
        assert_eq!(value["weekly_series"][0]["x"], "S1");
        assert!(value["performance"][0].get("velocidad").is_some());
    }

    #[test]
    fn unknown_period_color_tags_fall_back_to_violet() {
        assert_eq!(period_color("bg-pink-500"), "#8b5cf6");
    }
}
