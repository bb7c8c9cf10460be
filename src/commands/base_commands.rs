use std::collections::BTreeMap;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::capacity::{CapacityFields, CapacityType};
use crate::domain::error::PlanError;
use crate::domain::evaluation::{EvaluationDraft, EvaluationStatus};
use crate::domain::weekly_record::WeeklyRecordFields;
use crate::services::distribution::RoundingPolicy;
use crate::services::sample_plan::TEMPLATE_SEED;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new plan YAML from the sample season or an empty template
    Init {
        /// Output plan YAML file
        #[arg(short, long)]
        output: String,
        /// Start from an empty plan instead of the sample season
        #[arg(long)]
        empty: bool,
        /// Plan start date (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: Option<String>,
        /// Seed for the synthetic weekly records of the sample season
        #[arg(long, default_value_t = TEMPLATE_SEED)]
        seed: u64,
    },
    /// Print the plan report with volumes, distributions and averages
    Summary {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
        /// How volume shares are rounded
        #[arg(short, long, value_enum, default_value_t = RoundingPolicy::Independent)]
        rounding: RoundingPolicy,
        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List capacities with their weekly and total volumes
    Capacities {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Only list capacities of this type
        #[arg(long = "type")]
        capacity_type: Option<String>,
    },
    /// Add a capacity to the plan
    AddCapacity {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        #[command(flatten)]
        fields: CapacityArgs,
    },
    /// Change fields of an existing capacity
    UpdateCapacity {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Capacity id
        #[arg(long)]
        id: u64,
        #[command(flatten)]
        fields: CapacityArgs,
    },
    /// Remove a capacity from the plan
    RemoveCapacity {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Capacity id
        #[arg(long)]
        id: u64,
    },
    /// Set the number of weeks of a period
    SetPeriodWeeks {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Zero-based period index
        #[arg(long)]
        index: usize,
        /// New number of weeks
        #[arg(long, allow_negative_numbers = true)]
        weeks: i64,
    },
    /// Set the number of weeks of a stage
    SetStageWeeks {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Zero-based stage index
        #[arg(long)]
        index: usize,
        /// New number of weeks
        #[arg(long, allow_negative_numbers = true)]
        weeks: i64,
    },
    /// List weekly records
    Weeks {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
    },
    /// Append a weekly record after the last recorded week
    AddWeek {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        #[command(flatten)]
        fields: WeekArgs,
    },
    /// Change fields of an existing weekly record
    UpdateWeek {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Week number
        #[arg(long)]
        week: u32,
        #[command(flatten)]
        fields: WeekArgs,
    },
    /// Remove a weekly record
    RemoveWeek {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Week number
        #[arg(long)]
        week: u32,
    },
    /// Replace all weekly records with synthetic ones for every plan week
    GenerateWeeks {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Seed for the synthetic loads
        #[arg(long, default_value_t = TEMPLATE_SEED)]
        seed: u64,
    },
    /// List athlete evaluations
    Evaluations {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
        /// Case-insensitive athlete name search
        #[arg(long)]
        search: Option<String>,
        /// Only list evaluations of this category
        #[arg(long)]
        category: Option<String>,
        /// Only list evaluations of this type
        #[arg(long = "type")]
        evaluation_type: Option<String>,
    },
    /// Add an athlete evaluation
    AddEvaluation {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        #[command(flatten)]
        fields: EvaluationArgs,
    },
    /// Remove an athlete evaluation
    RemoveEvaluation {
        /// Plan YAML file, updated in place
        #[arg(short, long)]
        input: String,
        /// Evaluation id
        #[arg(long)]
        id: u64,
    },
    /// Export chart series as JSON
    ChartData {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
        /// How volume shares are rounded
        #[arg(short, long, value_enum, default_value_t = RoundingPolicy::Independent)]
        rounding: RoundingPolicy,
    },
    /// Plot weekly volume and intensity into a PNG chart
    PlotVolume {
        /// Plan YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct CapacityArgs {
    /// Capacity name
    #[arg(long)]
    pub name: Option<String>,
    /// Unit label
    #[arg(long)]
    pub unit: Option<String>,
    /// Exercises per session
    #[arg(long, allow_negative_numbers = true)]
    pub exercises: Option<i64>,
    /// Repetitions per series
    #[arg(long, allow_negative_numbers = true)]
    pub reps: Option<i64>,
    /// Series per exercise
    #[arg(long, allow_negative_numbers = true)]
    pub series: Option<i64>,
    /// Sessions per week
    #[arg(long, allow_negative_numbers = true)]
    pub freq: Option<i64>,
    /// Física, Técnica, Táctica, Mental or Estratégica
    #[arg(long = "type")]
    pub capacity_type: Option<String>,
    /// Display color
    #[arg(long)]
    pub color: Option<String>,
}

impl CapacityArgs {
    pub fn into_fields(self) -> Result<CapacityFields, PlanError> {
        Ok(CapacityFields {
            name: self.name,
            unit: self.unit,
            exercises: self.exercises,
            reps: self.reps,
            series: self.series,
            freq: self.freq,
            capacity_type: self
                .capacity_type
                .as_deref()
                .map(str::parse::<CapacityType>)
                .transpose()?,
            color: self.color,
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct WeekArgs {
    /// Weekly load volume
    #[arg(long, allow_negative_numbers = true)]
    pub volume: Option<i64>,
    /// Intensity percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub intensity: Option<i64>,
    /// Fatigue percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub fatigue: Option<i64>,
    /// Performance percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub performance: Option<i64>,
    /// Period tag, defaults to the period covering the week
    #[arg(long)]
    pub period: Option<String>,
    /// Stage tag, defaults to the stage covering the week
    #[arg(long)]
    pub stage: Option<String>,
    /// Week date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

impl WeekArgs {
    pub fn into_fields(self) -> Result<WeeklyRecordFields, PlanError> {
        Ok(WeeklyRecordFields {
            volume: self.volume,
            intensity: self.intensity,
            fatigue: self.fatigue,
            performance: self.performance,
            period_tag: self.period,
            stage_tag: self.stage,
            date: self.date.as_deref().map(parse_arg_date).transpose()?,
        })
    }
}

#[derive(Args, Debug)]
pub struct EvaluationArgs {
    /// Athlete full name
    #[arg(long)]
    pub athlete: String,
    /// Category, e.g. Sub-17 or Senior
    #[arg(long)]
    pub category: String,
    /// Evaluation date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Evaluation type
    #[arg(long = "type")]
    pub evaluation_type: String,
    /// completada, pendiente or cancelada
    #[arg(long, default_value = "pendiente")]
    pub status: String,
    /// Metric score as METRIC=SCORE, repeatable
    #[arg(long = "result", value_name = "METRIC=SCORE")]
    pub results: Vec<String>,
    /// Free-form notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl EvaluationArgs {
    pub fn into_draft(self) -> Result<EvaluationDraft, PlanError> {
        let results = self
            .results
            .iter()
            .map(|raw| {
                let (metric, score) = raw
                    .split_once('=')
                    .ok_or_else(|| PlanError::invalid_argument("result", raw))?;
                let score = score
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| PlanError::invalid_argument("result", raw))?;
                Ok((metric.trim().to_string(), score))
            })
            .collect::<Result<BTreeMap<_, _>, PlanError>>()?;

        Ok(EvaluationDraft {
            athlete_name: self.athlete,
            category: self.category,
            date: parse_arg_date(&self.date)?,
            evaluation_type: self.evaluation_type,
            status: self.status.parse::<EvaluationStatus>()?,
            results,
            notes: self.notes,
        })
    }
}

fn parse_arg_date(value: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PlanError::invalid_argument("date", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_to_independent_rounding() {
        let args = CliArgs::parse_from(["cycleplan", "summary", "-i", "plan.yaml"]);

        if let Commands::Summary {
            rounding, output, ..
        } = args.command
        {
            assert_eq!(rounding, RoundingPolicy::Independent);
            assert_eq!(output, None);
        } else {
            panic!("expected summary command");
        }
    }

    #[test]
    fn rounding_policy_accepts_largest_remainder() {
        let args = CliArgs::parse_from([
            "cycleplan",
            "chart-data",
            "-i",
            "plan.yaml",
            "-o",
            "charts.json",
            "--rounding",
            "largest-remainder",
        ]);

        if let Commands::ChartData { rounding, .. } = args.command {
            assert_eq!(rounding, RoundingPolicy::LargestRemainder);
        } else {
            panic!("expected chart-data command");
        }
    }

    #[test]
    fn negative_weeks_reach_the_command() {
        let args = CliArgs::parse_from([
            "cycleplan",
            "set-period-weeks",
            "-i",
            "plan.yaml",
            "--index",
            "0",
            "--weeks",
            "-4",
        ]);

        if let Commands::SetPeriodWeeks { weeks, .. } = args.command {
            assert_eq!(weeks, -4);
        } else {
            panic!("expected set-period-weeks command");
        }
    }

    #[test]
    fn init_uses_template_seed_by_default() {
        let args = CliArgs::parse_from(["cycleplan", "init", "-o", "plan.yaml"]);

        if let Commands::Init { seed, empty, .. } = args.command {
            assert_eq!(seed, TEMPLATE_SEED);
            assert!(!empty);
        } else {
            panic!("expected init command");
        }
    }

    #[test]
    fn capacity_args_parse_type_labels() {
        let args = CapacityArgs {
            name: Some("Juego".to_string()),
            capacity_type: Some("Táctica".to_string()),
            ..CapacityArgs::default()
        };
        let fields = args.into_fields().unwrap();
        assert_eq!(fields.capacity_type, Some(CapacityType::Tactica));

        let bad = CapacityArgs {
            capacity_type: Some("Cardio".to_string()),
            ..CapacityArgs::default()
        };
        assert!(bad.into_fields().is_err());
    }

    #[test]
    fn week_args_parse_dates_and_keep_negative_numbers() {
        let args = CliArgs::parse_from([
            "cycleplan",
            "update-week",
            "-i",
            "plan.yaml",
            "--week",
            "3",
            "--volume",
            "-10",
            "--date",
            "2024-04-15",
        ]);

        let Commands::UpdateWeek { week, fields, .. } = args.command else {
            panic!("expected update-week command");
        };
        assert_eq!(week, 3);
        let fields = fields.into_fields().unwrap();
        assert_eq!(fields.volume, Some(-10));
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2024, 4, 15));

        let bad = WeekArgs {
            date: Some("15/04/2024".to_string()),
            ..WeekArgs::default()
        };
        assert_eq!(
            bad.into_fields().unwrap_err(),
            PlanError::invalid_argument("date", "15/04/2024")
        );
    }

    #[test]
    fn evaluation_args_collect_repeated_results() {
        let args = CliArgs::parse_from([
            "cycleplan",
            "add-evaluation",
            "-i",
            "plan.yaml",
            "--athlete",
            "Sofía Ruiz",
            "--category",
            "Sub-17",
            "--date",
            "2024-02-01",
            "--type",
            "Física Básica",
            "--result",
            "velocidad=80",
            "--result",
            "fuerza = 70",
        ]);

        let Commands::AddEvaluation { fields, .. } = args.command else {
            panic!("expected add-evaluation command");
        };
        let draft = fields.into_draft().unwrap();
        assert_eq!(draft.status, EvaluationStatus::Pendiente);
        assert_eq!(draft.results.get("velocidad"), Some(&80));
        assert_eq!(draft.results.get("fuerza"), Some(&70));
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn evaluation_args_reject_malformed_results() {
        let args = EvaluationArgs {
            athlete: "Sofía Ruiz".to_string(),
            category: "Sub-17".to_string(),
            date: "2024-02-01".to_string(),
            evaluation_type: "Física Básica".to_string(),
            status: "pendiente".to_string(),
            results: vec!["velocidad:80".to_string()],
            notes: String::new(),
        };
        assert_eq!(
            args.into_draft().unwrap_err(),
            PlanError::invalid_argument("result", "velocidad:80")
        );
    }
}
