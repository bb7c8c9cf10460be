use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::plan_yaml::update_plan_yaml_file;

pub fn set_period_weeks_command(cmd: Commands) -> ExitCode {
    let Commands::SetPeriodWeeks {
        input,
        index,
        weeks,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.set_period_weeks(index, weeks)?;
        Ok((plan.total_weeks(), plan.consistency_warnings()))
    }) {
        Ok((total_weeks, warnings)) => {
            println!(
                "Period {index} set to {weeks} weeks in {input} \
                 (plan now spans {total_weeks} weeks)"
            );
            for warning in warnings {
                eprintln!("Warning: {warning}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to set period weeks: {e:?}");
            ExitCode::FAILURE
        }
    }
}

pub fn set_stage_weeks_command(cmd: Commands) -> ExitCode {
    let Commands::SetStageWeeks {
        input,
        index,
        weeks,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    match update_plan_yaml_file(&input, |plan| {
        plan.set_stage_weeks(index, weeks)?;
        Ok(plan.consistency_warnings())
    }) {
        Ok(warnings) => {
            println!("Stage {index} set to {weeks} weeks in {input}");
            for warning in warnings {
                eprintln!("Warning: {warning}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to set stage weeks: {e:?}");
            ExitCode::FAILURE
        }
    }
}
