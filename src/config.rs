use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use ratatui::style::Color;
use thiserror::Error;

use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color")]
    pub bar_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
    /// Derived from `use_unicode` after loading
    #[serde(skip)]
    pub box_chars: BoxChars,
}

/// Failure to load the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
            bar_fg: Color::Rgb(79, 70, 229), // Indigo
            error_fg: Color::Red,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl DisplayConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl Config {
    /// Parse a config document and derive the box characters
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
        Ok(config)
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        // Named colors are left alone
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", "indigo", etc.
/// - Hex colors: "#4F46E5", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightyellow" => return Some(Color::LightYellow),
        "lightblue" => return Some(Color::LightBlue),
        "lightmagenta" => return Some(Color::LightMagenta),
        "lightcyan" => return Some(Color::LightCyan),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        "indigo" => return Some(Color::Rgb(79, 70, 229)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load the config at `path`
///
/// A missing file is not an error and yields the defaults.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the user's config
///
/// Without a config directory the defaults are used.
pub fn read() -> Result<Config, ConfigError> {
    match get_config_path() {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

/// Report a config that failed to load
///
/// Call after logging is set up; the warning also goes to stderr since the
/// default log file discards it.
pub fn report_load_error(err: &ConfigError) {
    tracing::warn!("Using default configuration: {}", err);
    eprintln!("Warning: using default configuration: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("blue"), Some(Color::Blue));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("indigo"), Some(Color::Rgb(79, 70, 229)));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("Indigo"), Some(Color::Rgb(79, 70, 229)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#4F46E5"), Some(Color::Rgb(79, 70, 229)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255,165,0"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn test_unfocused_selection_defaults_to_darker() {
        let display = DisplayConfig::default();
        assert_eq!(display.unfocused_selection_fg(), Color::Rgb(127, 82, 0));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert!(config.display.use_unicode);
        assert_eq!(config.display.box_chars, BoxChars::unicode());
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = Config::from_toml(
            r##"
log_level = "debug"

[display]
selection_fg = "cyan"
bar_fg = "#00FF00"
            "##,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.display.selection_fg, Color::Cyan);
        assert_eq!(config.display.bar_fg, Color::Rgb(0, 255, 0));
        assert_eq!(config.display.error_fg, Color::Red);
    }

    #[test]
    fn test_config_from_toml_ascii_box_chars() {
        let config = Config::from_toml(
            r#"
[display]
use_unicode = false
            "#,
        )
        .unwrap();

        assert_eq!(config.display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_config_from_toml_bad_color() {
        let result = Config::from_toml(
            r#"
[display]
selection_fg = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("ipl-config-test-does-not-exist.toml");
        let config = load(&path).unwrap();
        assert_eq!(config.log_level, "info");
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_malformed_file_is_reported_as_warning() {
        let path = std::env::temp_dir().join(format!("ipl-config-bad-color-{}.toml", std::process::id()));
        fs::write(&path, "log_file = \"/tmp/ipl.log\"\n[display]\nselection_fg = \"notacolor\"\n").unwrap();
        let err = load(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || report_load_error(&err));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Using default configuration"));
        assert!(output.contains(&path.display().to_string()));
        assert!(output.contains("notacolor"));
    }

    #[test]
    fn test_load_parse_error() {
        let path = std::env::temp_dir().join(format!("ipl-config-test-{}.toml", std::process::id()));
        fs::write(&path, "log_level = [").unwrap();
        let result = load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
