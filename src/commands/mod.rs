pub mod analyze_cmd;
pub mod base_commands;
