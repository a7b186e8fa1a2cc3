//! Console log level handling for the shell

use log::LevelFilter;

/// Level used until the shell asks for another one. Save attempts and their
/// outcomes are logged at info.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name such as `"debug"` or `"warn"` (case-insensitive).
pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level: {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_log_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_log_level(" WARN "), Ok(LevelFilter::Warn));
        assert_eq!(parse_log_level("off"), Ok(LevelFilter::Off));
    }

    #[test]
    fn rejects_unknown_level() {
        assert_eq!(
            parse_log_level("verbose"),
            Err("invalid log level: verbose".to_string())
        );
    }
}
