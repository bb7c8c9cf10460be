use std::collections::BTreeSet;

use crate::domain::capacity::Capacity;
use crate::domain::error::PlanError;
use crate::domain::plan::TrainingPlan;
use crate::domain::weekly_record::WeeklyRecord;

/// Reference period tags used by the per-period summary.
pub const PERIOD_TAGS: [&str; 3] = ["P. PREPARATORIO", "P. COMPETITIVO", "P. TRANSICIÓN"];

/// Saturates at `u64::MAX`; capacities built through `CapacityFields` stay
/// within `MAX_WEEKLY_VOLUME`.
pub fn weekly_volume(capacity: &Capacity) -> u64 {
    capacity.checked_weekly_volume().unwrap_or(u64::MAX)
}

pub fn total_volume(capacity: &Capacity, total_weeks: u32) -> u64 {
    let total = u128::from(weekly_volume(capacity)) * u128::from(total_weeks);
    u64::try_from(total).unwrap_or(u64::MAX)
}

/// Summed in `u128` so any number of capacities cannot overflow.
pub fn aggregate_total_volume(capacities: &[Capacity], total_weeks: u32) -> u128 {
    capacities
        .iter()
        .map(|capacity| u128::from(total_volume(capacity, total_weeks)))
        .sum()
}

pub fn average_weekly_volume(capacities: &[Capacity], total_weeks: u32) -> Result<f64, PlanError> {
    if total_weeks == 0 {
        return Err(PlanError::DivisionUndefined(
            "average weekly volume of a plan with zero weeks".to_string(),
        ));
    }
    Ok(aggregate_total_volume(capacities, total_weeks) as f64 / f64::from(total_weeks))
}

/// Mean of `count` values summing to `sum`, rounded half up.
pub fn rounded_mean(sum: u64, count: u64) -> Option<u64> {
    if count == 0 {
        return None;
    }
    Some((2 * sum + count) / (2 * count))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodAverage {
    pub period_tag: String,
    /// `None` when no week carries the tag.
    pub avg_volume: Option<u64>,
    pub avg_intensity: Option<u64>,
    pub week_count: usize,
}

pub fn period_average(records: &[WeeklyRecord], period_tag: &str) -> PeriodAverage {
    let matched: Vec<&WeeklyRecord> = records
        .iter()
        .filter(|record| record.period_tag == period_tag)
        .collect();
    let count = matched.len() as u64;
    let volume_sum: u64 = matched.iter().map(|r| u64::from(r.volume)).sum();
    let intensity_sum: u64 = matched.iter().map(|r| u64::from(r.intensity)).sum();

    PeriodAverage {
        period_tag: period_tag.to_string(),
        avg_volume: rounded_mean(volume_sum, count),
        avg_intensity: rounded_mean(intensity_sum, count),
        week_count: matched.len(),
    }
}

pub fn period_averages(records: &[WeeklyRecord], period_tags: &[&str]) -> Vec<PeriodAverage> {
    period_tags
        .iter()
        .map(|tag| period_average(records, tag))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesocycleStats {
    pub capacity_count: usize,
    pub total_volume: u128,
    /// `None` when the plan has zero weeks.
    pub avg_weekly_volume: Option<u64>,
    pub distinct_types: usize,
    pub total_weeks: u32,
    pub months: u32,
}

pub fn mesocycle_stats(plan: &TrainingPlan) -> MesocycleStats {
    let total_weeks = plan.total_weeks();
    let capacities = plan.capacities();
    let distinct_types: BTreeSet<_> = capacities.iter().map(|c| c.capacity_type).collect();

    MesocycleStats {
        capacity_count: capacities.len(),
        total_volume: aggregate_total_volume(capacities, total_weeks),
        avg_weekly_volume: average_weekly_volume(capacities, total_weeks)
            .ok()
            .map(|avg| avg.round() as u64),
        distinct_types: distinct_types.len(),
        total_weeks,
        months: plan.macrocycle().duration_in_months(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrocycleStats {
    pub week_count: usize,
    pub avg_volume: u64,
    pub avg_intensity: u64,
    pub avg_performance: u64,
}

pub fn microcycle_stats(records: &[WeeklyRecord]) -> Result<MicrocycleStats, PlanError> {
    let count = records.len() as u64;
    let mean = |field: fn(&WeeklyRecord) -> u32| {
        let sum: u64 = records.iter().map(|r| u64::from(field(r))).sum();
        rounded_mean(sum, count).ok_or_else(|| {
            PlanError::DivisionUndefined("weekly averages without weekly records".to_string())
        })
    };

    Ok(MicrocycleStats {
        week_count: records.len(),
        avg_volume: mean(|r| r.volume)?,
        avg_intensity: mean(|r| r.intensity)?,
        avg_performance: mean(|r| r.performance)?,
    })
}
