use clap::ValueEnum;

use crate::domain::capacity::Capacity;
use crate::domain::error::PlanError;
use crate::services::volume_calculation::{aggregate_total_volume, total_volume};

/// How per-entry percentages are rounded when a whole is split into shares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RoundingPolicy {
    /// Each share is rounded on its own; totals may drift away from 100.
    #[default]
    Independent,
    /// Floors every share, then hands the missing points to the largest
    /// remainders (earlier entries win ties) so shares sum to exactly 100.
    LargestRemainder,
}

/// `round(value / total * 100)`, rounding half up.
pub fn percentage_share(value: u128, total: u128) -> Result<u64, PlanError> {
    if total == 0 {
        return Err(PlanError::DivisionUndefined(
            "percentage share of a zero total".to_string(),
        ));
    }
    let share = value.saturating_mul(200).saturating_add(total) / total.saturating_mul(2);
    Ok(u64::try_from(share).unwrap_or(u64::MAX))
}

/// Splits 100% across `values`. Returns `None` when the values sum to zero.
pub fn distribute_shares(values: &[u64], policy: RoundingPolicy) -> Option<Vec<u64>> {
    let total: u128 = values.iter().map(|v| u128::from(*v)).sum();
    if total == 0 {
        return None;
    }
    match policy {
        RoundingPolicy::Independent => values
            .iter()
            .map(|value| percentage_share(u128::from(*value), total).ok())
            .collect(),
        RoundingPolicy::LargestRemainder => Some(largest_remainder_shares(values, total)),
    }
}

fn largest_remainder_shares(values: &[u64], total: u128) -> Vec<u64> {
    let scaled: Vec<u128> = values.iter().map(|v| u128::from(*v) * 100).collect();
    let mut shares: Vec<u64> = scaled.iter().map(|s| (s / total) as u64).collect();
    let assigned: u64 = shares.iter().sum();

    let mut by_remainder: Vec<usize> = (0..values.len()).collect();
    // Stable sort keeps input order among equal remainders.
    by_remainder.sort_by(|a, b| (scaled[*b] % total).cmp(&(scaled[*a] % total)));

    let missing = 100u64.saturating_sub(assigned) as usize;
    for idx in by_remainder.into_iter().take(missing) {
        shares[idx] += 1;
    }
    shares
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount<K> {
    pub category: K,
    pub count: usize,
}

/// Counts items per category, following the order of `categories`.
/// Categories with no items are kept with a count of zero.
pub fn count_by_category<T, K: Clone>(
    items: &[T],
    categories: &[K],
    belongs_to: impl Fn(&T, &K) -> bool,
) -> Vec<CategoryCount<K>> {
    categories
        .iter()
        .map(|category| CategoryCount {
            category: category.clone(),
            count: items.iter().filter(|item| belongs_to(item, category)).count(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeShare {
    pub id: u64,
    pub name: String,
    /// `None` when the plan has no volume at all.
    pub percent: Option<u64>,
    pub volume: u64,
    pub color: String,
}

pub fn bucket_volume_share(capacities: &[Capacity], total_weeks: u32) -> Vec<VolumeShare> {
    bucket_volume_share_with(capacities, total_weeks, RoundingPolicy::Independent)
}

/// Volume share of every capacity, in input order.
pub fn bucket_volume_share_with(
    capacities: &[Capacity],
    total_weeks: u32,
    policy: RoundingPolicy,
) -> Vec<VolumeShare> {
    let volumes: Vec<u64> = capacities
        .iter()
        .map(|capacity| total_volume(capacity, total_weeks))
        .collect();
    debug_assert_eq!(
        volumes.iter().map(|v| u128::from(*v)).sum::<u128>(),
        aggregate_total_volume(capacities, total_weeks)
    );
    let shares = distribute_shares(&volumes, policy);

    capacities
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(idx, (capacity, volume))| VolumeShare {
            id: capacity.id,
            name: capacity.name.clone(),
            percent: shares.as_ref().and_then(|s| s.get(idx).copied()),
            volume,
            color: capacity.color.clone(),
        })
        .collect()
}
