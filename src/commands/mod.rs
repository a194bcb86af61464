pub mod check;
mod context;
pub mod init;
pub mod rules;

pub use check::{exit_code, run_check, run_check_impl};
pub use context::load_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules_json, format_rules_text, run_rules, run_rules_impl};
