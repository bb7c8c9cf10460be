use std::fmt;
use std::str::FromStr;

use crate::domain::error::{PlanError, non_negative};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapacityType {
    Fisica,
    Tecnica,
    Tactica,
    Mental,
    Estrategica,
}

impl CapacityType {
    /// Reference ordering used for chart axes.
    pub const ALL: [CapacityType; 5] = [
        CapacityType::Fisica,
        CapacityType::Tecnica,
        CapacityType::Tactica,
        CapacityType::Mental,
        CapacityType::Estrategica,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CapacityType::Fisica => "Física",
            CapacityType::Tecnica => "Técnica",
            CapacityType::Tactica => "Táctica",
            CapacityType::Mental => "Mental",
            CapacityType::Estrategica => "Estratégica",
        }
    }

    pub fn chart_color(&self) -> &'static str {
        match self {
            CapacityType::Fisica => "#3b82f6",
            CapacityType::Tecnica => "#10b981",
            CapacityType::Tactica => "#8b5cf6",
            CapacityType::Mental => "#f59e0b",
            CapacityType::Estrategica => "#ef4444",
        }
    }
}

impl fmt::Display for CapacityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CapacityType {
    type Err = PlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "física" | "fisica" => Ok(CapacityType::Fisica),
            "técnica" | "tecnica" => Ok(CapacityType::Tecnica),
            "táctica" | "tactica" => Ok(CapacityType::Tactica),
            "mental" => Ok(CapacityType::Mental),
            "estratégica" | "estrategica" => Ok(CapacityType::Estrategica),
            _ => Err(PlanError::invalid_argument("type", value)),
        }
    }
}

/// A mesocycle entry: one trained capacity and its weekly load parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capacity {
    pub id: u64,
    pub name: String,
    pub unit: String,
    pub exercises: u32,
    pub reps: u32,
    pub series: u32,
    /// Sessions per week.
    pub freq: u32,
    pub capacity_type: CapacityType,
    pub color: String,
}

impl Capacity {
    /// `exercises × reps × series × freq`, or `None` when the product does not fit in `u64`.
    pub fn checked_weekly_volume(&self) -> Option<u64> {
        checked_product(self.exercises, self.reps, self.series, self.freq)
    }
}

pub const DEFAULT_UNIT: &str = "Repeticiones";
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Largest weekly volume a capacity may have. With total weeks bounded by
/// `u32`, every per-capacity total then fits in `u64`.
pub const MAX_WEEKLY_VOLUME: u64 = u32::MAX as u64;

fn checked_product(exercises: u32, reps: u32, series: u32, freq: u32) -> Option<u64> {
    u64::from(exercises)
        .checked_mul(u64::from(reps))?
        .checked_mul(u64::from(series))?
        .checked_mul(u64::from(freq))
}

/// Field values supplied by a caller for creating or editing a capacity.
///
/// Counts are signed so that negative input reaches validation instead of
/// being lost at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityFields {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub exercises: Option<i64>,
    pub reps: Option<i64>,
    pub series: Option<i64>,
    pub freq: Option<i64>,
    pub capacity_type: Option<CapacityType>,
    pub color: Option<String>,
}

impl CapacityFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a capacity from these fields merged over the documented defaults.
    pub fn into_capacity(self, id: u64) -> Result<Capacity, PlanError> {
        let mut capacity = Capacity {
            id,
            name: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            exercises: 0,
            reps: 0,
            series: 0,
            freq: 0,
            capacity_type: CapacityType::Fisica,
            color: DEFAULT_COLOR.to_string(),
        };
        self.apply_to(&mut capacity)?;
        Ok(capacity)
    }

    /// Shallow merge of the supplied fields. Validation happens before any
    /// field is written, so on error `capacity` is left untouched.
    pub fn apply_to(self, capacity: &mut Capacity) -> Result<(), PlanError> {
        let exercises = self
            .exercises
            .map(|v| non_negative("exercises", v))
            .transpose()?;
        let reps = self.reps.map(|v| non_negative("reps", v)).transpose()?;
        let series = self.series.map(|v| non_negative("series", v)).transpose()?;
        let freq = self.freq.map(|v| non_negative("freq", v)).transpose()?;

        let (e, r, s, f) = (
            exercises.unwrap_or(capacity.exercises),
            reps.unwrap_or(capacity.reps),
            series.unwrap_or(capacity.series),
            freq.unwrap_or(capacity.freq),
        );
        if checked_product(e, r, s, f).is_none_or(|volume| volume > MAX_WEEKLY_VOLUME) {
            return Err(PlanError::invalid_argument(
                "weekly_volume",
                format!("{e} x {r} x {s} x {f}"),
            ));
        }

        if let Some(name) = self.name {
            capacity.name = name;
        }
        if let Some(unit) = self.unit {
            capacity.unit = unit;
        }
        if let Some(exercises) = exercises {
            capacity.exercises = exercises;
        }
        if let Some(reps) = reps {
            capacity.reps = reps;
        }
        if let Some(series) = series {
            capacity.series = series;
        }
        if let Some(freq) = freq {
            capacity.freq = freq;
        }
        if let Some(capacity_type) = self.capacity_type {
            capacity.capacity_type = capacity_type;
        }
        if let Some(color) = self.color {
            capacity.color = color;
        }
        Ok(())
    }
}

/// Name search plus optional type restriction, as used by the capacity list.
#[derive(Debug, Clone, Default)]
pub struct CapacityFilter {
    pub search: Option<String>,
    pub capacity_type: Option<CapacityType>,
}

impl CapacityFilter {
    pub fn matches(&self, capacity: &Capacity) -> bool {
        let matches_search = match &self.search {
            Some(term) => capacity
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        let matches_type = self
            .capacity_type
            .is_none_or(|t| t == capacity.capacity_type);
        matches_search && matches_type
    }
}
