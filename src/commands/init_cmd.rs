use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::plan_yaml::{parse_date, save_plan_to_yaml_file};
use crate::services::sample_plan::{empty_plan, template_plan_from, template_start_date};

pub fn init_command(cmd: Commands) -> ExitCode {
    let Commands::Init {
        output,
        empty,
        start_date,
        seed,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let start_date = match start_date.as_deref().map(parse_date).transpose() {
        Ok(date) => date.unwrap_or_else(template_start_date),
        Err(e) => {
            eprintln!("Failed to parse start date: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let plan = if empty {
        empty_plan(start_date)
    } else {
        template_plan_from(start_date, seed)
    };

    match save_plan_to_yaml_file(&output, &plan) {
        Ok(()) => {
            println!("Plan written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write plan: {e:?}");
            ExitCode::FAILURE
        }
    }
}
