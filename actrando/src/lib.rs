pub mod patch;
pub mod randomize;
pub mod settings;
pub mod spoiler_log;

pub const VERSION: &str = include!("../../VERSION");
