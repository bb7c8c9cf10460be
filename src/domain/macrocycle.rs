use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::domain::error::PlanError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub name: String,
    pub percent_weight: u32,
    pub weeks: u32,
    pub color_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    pub weeks: u32,
}

/// Inclusive, 1-based range of plan weeks covered by a period or stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub first: u32,
    pub last: u32,
}

impl WeekRange {
    pub fn contains(&self, week: u32) -> bool {
        week >= self.first && week <= self.last
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// The season timeline: ordered periods and a finer, independently authored
/// partition into stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macrocycle {
    pub start_date: NaiveDate,
    pub periods: Vec<Period>,
    pub stages: Vec<Stage>,
}

impl Macrocycle {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            periods: Vec::new(),
            stages: Vec::new(),
        }
    }

    /// Sum of period weeks. Always computed from the current periods.
    pub fn total_weeks(&self) -> u32 {
        saturating_sum(self.periods.iter().map(|p| p.weeks))
    }

    pub fn total_stage_weeks(&self) -> u32 {
        saturating_sum(self.stages.iter().map(|s| s.weeks))
    }

    pub fn total_percent_weight(&self) -> u32 {
        saturating_sum(self.periods.iter().map(|p| p.percent_weight))
    }

    /// Fails when period weeks, stage weeks or period weights sum past `u32::MAX`.
    pub fn validate_totals(&self) -> Result<(), PlanError> {
        checked_sum("period weeks", self.periods.iter().map(|p| p.weeks))?;
        checked_sum("stage weeks", self.stages.iter().map(|s| s.weeks))?;
        checked_sum(
            "percent weights",
            self.periods.iter().map(|p| p.percent_weight),
        )?;
        Ok(())
    }

    /// Week ranges of each period, `None` for periods with zero weeks.
    pub fn period_ranges(&self) -> Vec<Option<WeekRange>> {
        week_ranges(self.periods.iter().map(|p| p.weeks))
    }

    pub fn stage_ranges(&self) -> Vec<Option<WeekRange>> {
        week_ranges(self.stages.iter().map(|s| s.weeks))
    }

    pub fn period_for_week(&self, week: u32) -> Option<&Period> {
        self.period_ranges()
            .iter()
            .position(|range| range.is_some_and(|r| r.contains(week)))
            .and_then(|idx| self.periods.get(idx))
    }

    pub fn stage_for_week(&self, week: u32) -> Option<&Stage> {
        self.stage_ranges()
            .iter()
            .position(|range| range.is_some_and(|r| r.contains(week)))
            .and_then(|idx| self.stages.get(idx))
    }

    /// First day of the given 1-based plan week.
    pub fn week_start_date(&self, week: u32) -> Option<NaiveDate> {
        let offset = i64::from(week.checked_sub(1)?) * 7;
        self.start_date.checked_add_signed(Duration::days(offset))
    }

    /// Number of calendar months spanned by the plan, using 4.345 weeks per month.
    pub fn duration_in_months(&self) -> u32 {
        (f64::from(self.total_weeks()) / 4.345).round() as u32
    }
}

fn saturating_sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

fn checked_sum(field: &str, mut values: impl Iterator<Item = u32>) -> Result<u32, PlanError> {
    values
        .try_fold(0u32, |total, value| total.checked_add(value))
        .ok_or_else(|| PlanError::invalid_argument(field, "sum exceeds u32::MAX"))
}

fn week_ranges(weeks: impl Iterator<Item = u32>) -> Vec<Option<WeekRange>> {
    let mut next_week: u32 = 1;
    weeks
        .map(|count| {
            if count == 0 {
                return None;
            }
            let range = WeekRange {
                first: next_week,
                last: next_week.saturating_add(count - 1),
            };
            next_week = next_week.saturating_add(count);
            Some(range)
        })
        .collect()
}
