use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::error::PlanError;

pub const EVALUATION_CATEGORIES: [&str; 5] = ["Sub-15", "Sub-17", "Sub-19", "Senior", "Élite"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationStatus {
    Completada,
    Pendiente,
    Cancelada,
}

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStatus::Completada => "completada",
            EvaluationStatus::Pendiente => "pendiente",
            EvaluationStatus::Cancelada => "cancelada",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationStatus {
    type Err = PlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "completada" => Ok(EvaluationStatus::Completada),
            "pendiente" => Ok(EvaluationStatus::Pendiente),
            "cancelada" => Ok(EvaluationStatus::Cancelada),
            _ => Err(PlanError::invalid_argument("status", value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub id: u64,
    pub athlete_name: String,
    pub category: String,
    pub date: NaiveDate,
    pub evaluation_type: String,
    pub status: EvaluationStatus,
    /// Metric name to percentage score.
    pub results: BTreeMap<String, u32>,
    pub notes: String,
}

impl Evaluation {
    /// Arithmetic mean of all metric results, `None` when nothing was measured.
    pub fn aggregate_score(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        let sum: u64 = self.results.values().map(|v| u64::from(*v)).sum();
        Some(sum as f64 / self.results.len() as f64)
    }

    pub fn first_name(&self) -> &str {
        self.athlete_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.athlete_name)
    }
}

/// Everything needed to author a new evaluation; the roster assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationDraft {
    pub athlete_name: String,
    pub category: String,
    pub date: NaiveDate,
    pub evaluation_type: String,
    pub status: EvaluationStatus,
    pub results: BTreeMap<String, i64>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationRoster {
    evaluations: Vec<Evaluation>,
}

impl EvaluationRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_evaluations(evaluations: Vec<Evaluation>) -> Self {
        Self { evaluations }
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn add(&mut self, draft: EvaluationDraft) -> Result<&Evaluation, PlanError> {
        let results = draft
            .results
            .into_iter()
            .map(|(metric, value)| match u32::try_from(value) {
                Ok(score) if score <= 100 => Ok((metric, score)),
                _ => Err(PlanError::invalid_argument(&metric, value)),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let id = self.next_id()?;
        self.evaluations.push(Evaluation {
            id,
            athlete_name: draft.athlete_name,
            category: draft.category,
            date: draft.date,
            evaluation_type: draft.evaluation_type,
            status: draft.status,
            results,
            notes: draft.notes,
        });
        tracing::debug!(id, "evaluation added");
        Ok(&self.evaluations[self.evaluations.len() - 1])
    }

    /// Removes the evaluation with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.evaluations.retain(|e| e.id != id);
    }

    pub fn filtered(&self, filter: &EvaluationFilter) -> Vec<&Evaluation> {
        self.evaluations.iter().filter(|e| filter.matches(e)).collect()
    }

    fn next_id(&self) -> Result<u64, PlanError> {
        let last_id = self.evaluations.iter().map(|e| e.id).max().unwrap_or(0);
        last_id
            .checked_add(1)
            .ok_or_else(|| PlanError::invalid_argument("id", last_id))
    }
}

/// Athlete search plus optional category and evaluation type restrictions.
#[derive(Debug, Clone, Default)]
pub struct EvaluationFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub evaluation_type: Option<String>,
}

impl EvaluationFilter {
    pub fn matches(&self, evaluation: &Evaluation) -> bool {
        let matches_search = match &self.search {
            Some(term) => evaluation
                .athlete_name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|c| *c == evaluation.category);
        let matches_type = self
            .evaluation_type
            .as_ref()
            .is_none_or(|t| *t == evaluation.evaluation_type);
        matches_search && matches_category && matches_type
    }
}
