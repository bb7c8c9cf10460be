use crate::domain::capacity::CapacityType;
use crate::domain::plan::TrainingPlan;
use crate::services::distribution::{RoundingPolicy, bucket_volume_share_with, count_by_category};
use crate::services::evaluation_summary::evaluation_stats;
use crate::services::volume_calculation::{
    PERIOD_TAGS, mesocycle_stats, microcycle_stats, period_averages, weekly_volume,
};

const MISSING: &str = "—";

fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn percent_or_missing(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v}%"))
}

pub fn format_plan_report(plan: &TrainingPlan, policy: RoundingPolicy) -> String {
    let macrocycle = plan.macrocycle();
    let stats = mesocycle_stats(plan);

    let mut lines = Vec::new();
    lines.push("Training Plan Report".to_string());
    lines.push(format!("Start date: {}", macrocycle.start_date));
    lines.push(format!(
        "Total weeks: {} ({} months)",
        stats.total_weeks, stats.months
    ));
    lines.push(format!("Capacities: {}", stats.capacity_count));
    lines.push(format!("Capacity types: {}", stats.distinct_types));
    lines.push(format!("Total volume: {}", stats.total_volume));
    lines.push(format!(
        "Average weekly volume: {}",
        or_missing(stats.avg_weekly_volume)
    ));

    lines.push(String::new());
    lines.push("Periods:".to_string());
    lines.push("Period | Weeks | Range | Weight".to_string());
    lines.push("-------|-------|-------|-------".to_string());
    for (period, range) in macrocycle.periods.iter().zip(macrocycle.period_ranges()) {
        lines.push(format!(
            "{} | {} | {} | {}%",
            period.name,
            period.weeks,
            or_missing(range),
            period.percent_weight
        ));
    }

    lines.push(String::new());
    lines.push("Stages:".to_string());
    lines.push("Stage | Weeks | Range".to_string());
    lines.push("------|-------|------".to_string());
    for (stage, range) in macrocycle.stages.iter().zip(macrocycle.stage_ranges()) {
        lines.push(format!(
            "{} | {} | {}",
            stage.name,
            stage.weeks,
            or_missing(range)
        ));
    }

    lines.push(String::new());
    lines.push("Volume distribution:".to_string());
    lines.push("Capacity | Type | Weekly | Total | Share".to_string());
    lines.push("---------|------|--------|-------|------".to_string());
    let shares = bucket_volume_share_with(plan.capacities(), plan.total_weeks(), policy);
    for (capacity, share) in plan.capacities().iter().zip(shares) {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            capacity.name,
            capacity.capacity_type,
            weekly_volume(capacity),
            share.volume,
            percent_or_missing(share.percent)
        ));
    }

    lines.push(String::new());
    lines.push("Capacity type distribution:".to_string());
    for count in count_by_category(plan.capacities(), &CapacityType::ALL, |c, t| {
        c.capacity_type == *t
    }) {
        lines.push(format!("{}: {}", count.category, count.count));
    }

    lines.push(String::new());
    lines.push("Period averages:".to_string());
    lines.push("Period | Weeks | Avg volume | Avg intensity".to_string());
    lines.push("-------|-------|------------|--------------".to_string());
    for average in period_averages(plan.weekly_records(), &PERIOD_TAGS) {
        lines.push(format!(
            "{} | {} | {} | {}",
            average.period_tag,
            average.week_count,
            or_missing(average.avg_volume),
            percent_or_missing(average.avg_intensity)
        ));
    }

    lines.push(String::new());
    match microcycle_stats(plan.weekly_records()) {
        Ok(micro) => lines.push(format!(
            "Weekly records: {} | Avg volume: {} | Avg intensity: {}% | Avg performance: {}%",
            micro.week_count, micro.avg_volume, micro.avg_intensity, micro.avg_performance
        )),
        Err(_) => lines.push(format!("Weekly records: 0 | Avg volume: {MISSING}")),
    }

    let evaluations = evaluation_stats(plan.evaluations());
    lines.push(format!(
        "Evaluations: {} | Completed: {} | Pending: {} | Average score: {}",
        evaluations.total,
        evaluations.completed,
        evaluations.pending,
        or_missing(evaluations.average_score)
    ));

    let warnings = plan.consistency_warnings();
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in warnings {
            lines.push(format!("- {warning}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_plan::{empty_plan, template_plan, template_start_date};

    #[test]
    fn format_plan_report_includes_header_and_tables() {
        let output = format_plan_report(&template_plan(), RoundingPolicy::Independent);

        assert!(output.contains("Training Plan Report"));
        assert!(output.contains("Start date: 2024-04-01"));
        assert!(output.contains("Total weeks: 26 (6 months)"));
        assert!(output.contains("Capacities: 5"));
        assert!(output.contains("Total volume: 103038"));
        assert!(output.contains("Average weekly volume: 3963"));
        assert!(output.contains("P. PREPARATORIO | 13 | 1-13 | 60%"));
        assert!(output.contains("P. COMPETITIVO | 13 | 14-26 | 40%"));
        assert!(output.contains("E. ESPECIAL | 5 | 9-13"));
        assert!(output.contains("Coordinación General | Física | 750 | 19500 | 19%"));
        assert!(output.contains("Táctica: 1"));
        assert!(output.contains("P. TRANSICIÓN | 0 | — | —"));
        assert!(output.contains("Weekly records: 26"));
        assert!(output.contains("Evaluations: 4 | Completed: 3 | Pending: 1 | Average score: 86"));
        assert!(!output.contains("Warnings:"));
    }

    #[test]
    fn format_plan_report_uses_placeholder_for_undefined_figures() {
        let output = format_plan_report(
            &empty_plan(template_start_date()),
            RoundingPolicy::Independent,
        );

        assert!(output.contains("Total weeks: 0 (0 months)"));
        assert!(output.contains("Average weekly volume: —"));
        assert!(output.contains("Weekly records: 0 | Avg volume: —"));
        assert!(output.contains("Average score: —"));
    }

    #[test]
    fn format_plan_report_lists_consistency_warnings() {
        let mut plan = template_plan();
        plan.set_period_weeks(1, 10).unwrap();

        let output = format_plan_report(&plan, RoundingPolicy::Independent);
        assert!(output.contains("Warnings:"));
        assert!(output.contains("- stages cover 26 weeks but periods cover 23 weeks"));
    }

    #[test]
    fn zero_week_periods_have_no_range() {
        let mut plan = template_plan();
        plan.set_period_weeks(1, 0).unwrap();

        let output = format_plan_report(&plan, RoundingPolicy::Independent);
        assert!(output.contains("P. COMPETITIVO | 0 | — | 40%"));
        assert!(output.contains("Coordinación General | Física | 750 | 9750 | 19%"));
    }
}
