use std::fmt;

use crate::domain::capacity::{Capacity, CapacityFields, CapacityFilter};
use crate::domain::error::{PlanError, non_negative};
use crate::domain::evaluation::EvaluationRoster;
use crate::domain::macrocycle::Macrocycle;
use crate::domain::weekly_record::{WeeklyRecord, WeeklyRecordFields};

/// Inconsistencies the plan tolerates but reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanWarning {
    PeriodWeightSum { total: u32 },
    StageWeeksMismatch { stage_weeks: u32, total_weeks: u32 },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::PeriodWeightSum { total } => {
                write!(f, "period weights sum to {total}% instead of 100%")
            }
            PlanWarning::StageWeeksMismatch {
                stage_weeks,
                total_weeks,
            } => write!(
                f,
                "stages cover {stage_weeks} weeks but periods cover {total_weeks} weeks"
            ),
        }
    }
}

/// Owns all editable plan data. Derived figures are never stored here; they
/// are recomputed from these fields on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    macrocycle: Macrocycle,
    capacities: Vec<Capacity>,
    weekly_records: Vec<WeeklyRecord>,
    evaluations: EvaluationRoster,
}

impl TrainingPlan {
    pub fn new(macrocycle: Macrocycle) -> Self {
        Self {
            macrocycle,
            capacities: Vec::new(),
            weekly_records: Vec::new(),
            evaluations: EvaluationRoster::new(),
        }
    }

    pub fn from_parts(
        macrocycle: Macrocycle,
        capacities: Vec<Capacity>,
        weekly_records: Vec<WeeklyRecord>,
        evaluations: EvaluationRoster,
    ) -> Self {
        Self {
            macrocycle,
            capacities,
            weekly_records,
            evaluations,
        }
    }

    pub fn macrocycle(&self) -> &Macrocycle {
        &self.macrocycle
    }

    pub fn capacities(&self) -> &[Capacity] {
        &self.capacities
    }

    pub fn weekly_records(&self) -> &[WeeklyRecord] {
        &self.weekly_records
    }

    pub fn evaluations(&self) -> &EvaluationRoster {
        &self.evaluations
    }

    pub fn evaluations_mut(&mut self) -> &mut EvaluationRoster {
        &mut self.evaluations
    }

    pub fn total_weeks(&self) -> u32 {
        self.macrocycle.total_weeks()
    }

    pub fn capacity(&self, id: u64) -> Option<&Capacity> {
        self.capacities.iter().find(|c| c.id == id)
    }

    pub fn filtered_capacities(&self, filter: &CapacityFilter) -> Vec<&Capacity> {
        self.capacities.iter().filter(|c| filter.matches(c)).collect()
    }

    pub fn add_capacity(&mut self, fields: CapacityFields) -> Result<&Capacity, PlanError> {
        let last_id = self.capacities.iter().map(|c| c.id).max().unwrap_or(0);
        let id = last_id
            .checked_add(1)
            .ok_or_else(|| PlanError::invalid_argument("id", last_id))?;
        let capacity = fields.into_capacity(id)?;
        tracing::debug!(id, name = %capacity.name, "capacity added");
        self.capacities.push(capacity);
        Ok(&self.capacities[self.capacities.len() - 1])
    }

    pub fn update_capacity(
        &mut self,
        id: u64,
        fields: CapacityFields,
    ) -> Result<&Capacity, PlanError> {
        let capacity = self
            .capacities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(PlanError::NotFound { id })?;
        fields.apply_to(capacity)?;
        tracing::debug!(id, "capacity updated");
        Ok(capacity)
    }

    /// Removes the capacity with `id`. Unknown ids are ignored and weekly
    /// records are left untouched.
    pub fn remove_capacity(&mut self, id: u64) {
        let before = self.capacities.len();
        self.capacities.retain(|c| c.id != id);
        if self.capacities.len() != before {
            tracing::debug!(id, "capacity removed");
        }
    }

    pub fn set_period_weeks(&mut self, index: usize, weeks: i64) -> Result<(), PlanError> {
        let len = self.macrocycle.periods.len();
        let mut candidate = self.macrocycle.clone();
        let period = candidate
            .periods
            .get_mut(index)
            .ok_or(PlanError::OutOfRange { index, len })?;
        period.weeks = non_negative("weeks", weeks)?;
        candidate.validate_totals()?;
        self.macrocycle = candidate;
        tracing::debug!(index, weeks, "period weeks updated");
        Ok(())
    }

    pub fn set_stage_weeks(&mut self, index: usize, weeks: i64) -> Result<(), PlanError> {
        let len = self.macrocycle.stages.len();
        let mut candidate = self.macrocycle.clone();
        let stage = candidate
            .stages
            .get_mut(index)
            .ok_or(PlanError::OutOfRange { index, len })?;
        stage.weeks = non_negative("weeks", weeks)?;
        candidate.validate_totals()?;
        self.macrocycle = candidate;
        tracing::debug!(index, weeks, "stage weeks updated");
        Ok(())
    }

    pub fn consistency_warnings(&self) -> Vec<PlanWarning> {
        let mut warnings = Vec::new();
        let total_weight = self.macrocycle.total_percent_weight();
        if !self.macrocycle.periods.is_empty() && total_weight != 100 {
            warnings.push(PlanWarning::PeriodWeightSum {
                total: total_weight,
            });
        }
        let stage_weeks = self.macrocycle.total_stage_weeks();
        let total_weeks = self.total_weeks();
        if !self.macrocycle.stages.is_empty() && stage_weeks != total_weeks {
            warnings.push(PlanWarning::StageWeeksMismatch {
                stage_weeks,
                total_weeks,
            });
        }
        warnings
    }

    pub fn replace_weekly_records(&mut self, records: Vec<WeeklyRecord>) {
        self.weekly_records = records;
    }

    /// Appends a record for the week after the last one. Period, stage and
    /// date default to what the macrocycle assigns to that week.
    pub fn add_weekly_record(
        &mut self,
        fields: WeeklyRecordFields,
    ) -> Result<&WeeklyRecord, PlanError> {
        let last_week = self.weekly_records.iter().map(|r| r.week).max().unwrap_or(0);
        let week = last_week
            .checked_add(1)
            .ok_or_else(|| PlanError::invalid_argument("week", last_week))?;
        let date = self
            .macrocycle
            .week_start_date(week)
            .unwrap_or(self.macrocycle.start_date);
        let mut record = WeeklyRecord::new(week, date);
        if let Some(period) = self.macrocycle.period_for_week(week) {
            record.period_tag = period.name.clone();
        }
        if let Some(stage) = self.macrocycle.stage_for_week(week) {
            record.stage_tag = stage.name.clone();
        }
        fields.apply_to(&mut record)?;
        self.weekly_records.push(record);
        Ok(&self.weekly_records[self.weekly_records.len() - 1])
    }

    pub fn update_weekly_record(
        &mut self,
        week: u32,
        fields: WeeklyRecordFields,
    ) -> Result<&WeeklyRecord, PlanError> {
        let record = self
            .weekly_records
            .iter_mut()
            .find(|r| r.week == week)
            .ok_or(PlanError::NotFound { id: u64::from(week) })?;
        fields.apply_to(record)?;
        Ok(record)
    }

    pub fn remove_weekly_record(&mut self, week: u32) {
        self.weekly_records.retain(|r| r.week != week);
    }
}
