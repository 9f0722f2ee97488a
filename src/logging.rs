use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Debug topics accepted by `--debug-filter`.
pub const DEBUG_TOPICS: [&str; 4] = ["board", "turn", "dice", "input"];

// Custom logger structure
#[derive(Debug)]
struct BoardLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

// Implement the log::Log trait for our custom logger
impl log::Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow debug and trace output
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = tile_context(&message);

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        // Add module path if available and different from target
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Every "tile N" mentioned in a message, in order of appearance.
fn tile_mentions(message: &str) -> Vec<usize> {
    message
        .match_indices("tile ")
        .filter_map(|(at, word)| {
            let digits: String = message[at + word.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .collect()
}

/// Context prefix such as `[tile 01,05] `, or empty when no tile is mentioned.
fn tile_context(message: &str) -> String {
    let tiles = tile_mentions(message);
    if tiles.is_empty() {
        return String::new();
    }
    let list: Vec<String> = tiles.iter().map(|tile| format!("{:02}", tile)).collect();
    format!("[tile {}] ", list.join(","))
}

static LOGGER: OnceLock<BoardLogger> = OnceLock::new();

/// Installs the logger. `RUST_LOG` in the environment hands control to env_logger.
pub fn init_logger(
    level: LevelFilter,
    debug_filter: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env().try_init()?;
        return Ok(());
    }

    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    });
    if let Some(filters) = &debug_filters {
        for unknown in filters.iter().filter(|f| !DEBUG_TOPICS.contains(&f.as_str())) {
            eprintln!("Warning: unknown debug topic '{}'", unknown);
        }
    }

    let logger = LOGGER.get_or_init(|| BoardLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_board {
    ($($arg:tt)*) => {
        log::debug!(target: "board", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_turn {
    ($($arg:tt)*) => {
        log::debug!(target: "turn", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_dice {
    ($($arg:tt)*) => {
        log::debug!(target: "dice", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", "{}", format_args!($($arg)*))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn logger(level: LevelFilter, filter: Option<&[&str]>) -> BoardLogger {
        BoardLogger {
            level,
            debug_filters: filter.map(|f| f.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn metadata(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_level_threshold() {
        let l = logger(LevelFilter::Info, None);
        assert!(l.enabled(&metadata(log::Level::Warn, "turn")));
        assert!(!l.enabled(&metadata(log::Level::Debug, "turn")));
    }

    #[test]
    fn test_debug_topic_filter() {
        let l = logger(LevelFilter::Trace, Some(&["turn"]));
        assert!(l.enabled(&metadata(log::Level::Debug, "turn")));
        assert!(!l.enabled(&metadata(log::Level::Debug, "dice")));
        // Filters never hide info and above
        assert!(l.enabled(&metadata(log::Level::Info, "dice")));
    }

    #[test]
    fn test_tile_context() {
        assert_eq!(tile_mentions("Moved Forward 4 from tile 1 to tile 5"), vec![1, 5]);
        assert_eq!(
            tile_context("Moved Forward 4 from tile 1 to tile 5"),
            "[tile 01,05] "
        );
        assert_eq!(tile_context("Roll started from tile 12"), "[tile 12] ");
        assert_eq!(tile_context("Rolled 3"), "");
        assert_eq!(tile_context("tile x"), "");
        assert_eq!(tile_mentions("tile x then tile 7"), vec![7]);
    }
}
