use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_plan_report;
use crate::services::plan_yaml::load_plan_from_yaml_file;

pub async fn summary_command(cmd: Commands) -> ExitCode {
    let Commands::Summary {
        input,
        rounding,
        output,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let plan = match load_plan_from_yaml_file(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load plan: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let report = format_plan_report(&plan, rounding);
    println!("{report}");

    if let Some(output) = output {
        if let Err(e) = tokio::fs::write(&output, format!("{report}\n")).await {
            eprintln!("Failed to write report: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Report written to {output}");
    }
    ExitCode::SUCCESS
}
