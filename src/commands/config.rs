use std::path::Path;

use crate::config::{self, Config};

/// Describe the config file location and the effective configuration
pub fn format_config(cfg: &Config, path: Option<&Path>) -> String {
    let (path_str, exists) = match path {
        Some(path) => (path.display().to_string(), path.exists()),
        None => ("Unable to determine config path".to_string(), false),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Configuration File: {} (Exists: {})\n",
        path_str,
        if exists { "yes" } else { "no" }
    ));
    output.push('\n');
    output.push_str("Current Configuration:\n");
    output.push_str("=====================\n");
    output.push_str(&format!("log_level: {}\n", cfg.log_level));
    output.push_str(&format!("log_file: {}\n", cfg.log_file));
    output.push('\n');
    output.push_str("[display]\n");
    output.push_str(&format!("use_unicode: {}\n", cfg.display.use_unicode));
    output.push_str(&format!("selection_fg: {:?}\n", cfg.display.selection_fg));
    output.push_str(&format!(
        "unfocused_selection_fg: {:?}{}\n",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    ));
    output.push_str(&format!("bar_fg: {:?}\n", cfg.display.bar_fg));
    output.push_str(&format!("error_fg: {:?}\n", cfg.display.error_fg));
    output
}

pub fn run(cfg: &Config) {
    let path = config::get_config_path();
    print!("{}", format_config(cfg, path.as_deref()));
}
