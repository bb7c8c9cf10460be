pub mod chart_data;
pub mod distribution;
pub mod evaluation_summary;
pub mod plan_yaml;
pub mod sample_plan;
pub mod volume_calculation;
pub mod volume_plot;
