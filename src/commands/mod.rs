pub mod base_commands;
pub mod capacity_cmd;
pub mod chart_data_cmd;
pub mod evaluation_cmd;
pub mod init_cmd;
pub mod period_cmd;
pub mod plot_volume_cmd;
pub mod report_format;
pub mod summary_cmd;
pub mod week_cmd;
