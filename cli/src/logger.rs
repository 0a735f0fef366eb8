use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};
use windowmanager_core::paths;

pub struct WMLogger {
    quiet: AtomicBool,
    verbose: AtomicBool,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, usize>>,
    next_color_index: AtomicUsize,
}

impl WMLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self::with_log_file(quiet, verbose, open_log_file())
    }

    pub fn with_log_file(quiet: bool, verbose: bool, log_file: Option<File>) -> Self {
        Self {
            quiet: AtomicBool::new(quiet),
            verbose: AtomicBool::new(verbose),
            log_file: Mutex::new(log_file),
            target_colors: Mutex::new(HashMap::new()),
            next_color_index: AtomicUsize::new(0),
        }
    }

    fn color_for_target(&self, target: &str) -> String {
        let colors: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
        ];

        let color_index = match self.target_colors.lock() {
            Ok(mut target_colors) => *target_colors
                .entry(target.to_string())
                .or_insert_with(|| {
                    self.next_color_index.fetch_add(1, Ordering::SeqCst) % colors.len()
                }),
            Err(_) => 0,
        };

        colors[color_index](target).to_string()
    }

    fn level_str(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target<'a>(record: &'a Record) -> Option<&'a str> {
        let target = record.target();
        if target.is_empty() {
            return None;
        }
        Some(target.rsplit("::").next().unwrap_or(target))
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = Self::level_str(record.level());
        let target = Self::short_target(record)
            .map(|t| format!("[{}] ", self.color_for_target(t).dimmed()))
            .unwrap_or_default();

        let message = format!("{} {}{}", level_str, target, record.args());

        // Warnings and errors are coloured whole, other levels only on the level tag
        match record.level() {
            Level::Error => message.red().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            level => {
                let colored_level = match level {
                    Level::Info => level_str.green().bold(),
                    Level::Debug => level_str.blue().bold(),
                    _ => level_str.white().bold(),
                };
                message.replacen(level_str, &colored_level.to_string(), 1)
            }
        }
    }

    fn format_log_plain(&self, record: &Record) -> String {
        let target = Self::short_target(record)
            .map(|t| format!("[{t}] "))
            .unwrap_or_default();

        format!(
            "{} {}{}",
            Self::level_str(record.level()),
            target,
            record.args()
        )
    }
}

fn open_log_file() -> Option<File> {
    paths::ensure_data_dir()?;
    let path = paths::log_file_path()?;
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
    {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
            None
        }
    }
}

impl Log for WMLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if self.quiet.load(Ordering::SeqCst) {
            metadata.level() <= Level::Info
        } else if self.verbose.load(Ordering::SeqCst) {
            metadata.level() <= Level::Trace
        } else {
            metadata.level() <= Level::Debug
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!("{}", self.format_log(record));

        let plain_message = self.format_log_plain(record);
        if let Ok(mut file_opt) = self.log_file.lock() {
            if let Some(file) = file_opt.as_mut() {
                let _ = writeln!(file, "{}", plain_message);
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = WMLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("test").build()
    }

    #[test]
    fn test_default_level_filter() {
        let logger = WMLogger::with_log_file(false, false, None);
        assert!(logger.enabled(&metadata(Level::Debug)));
        assert!(!logger.enabled(&metadata(Level::Trace)));
    }

    #[test]
    fn test_quiet_level_filter() {
        let logger = WMLogger::with_log_file(true, false, None);
        assert!(logger.enabled(&metadata(Level::Error)));
        assert!(logger.enabled(&metadata(Level::Info)));
        assert!(!logger.enabled(&metadata(Level::Debug)));
    }

    #[test]
    fn test_verbose_level_filter() {
        let logger = WMLogger::with_log_file(false, true, None);
        assert!(logger.enabled(&metadata(Level::Trace)));
    }

    #[test]
    fn test_plain_format() {
        let logger = WMLogger::with_log_file(false, false, None);
        let line = logger.format_log_plain(
            &Record::builder()
                .args(format_args!("Using platform X11"))
                .level(Level::Info)
                .target("windowmanager_core::platform")
                .build(),
        );
        assert_eq!(line, "[I] [platform] Using platform X11");
    }

    #[test]
    fn test_plain_format_without_target() {
        let logger = WMLogger::with_log_file(false, false, None);
        let line = logger.format_log_plain(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Warn)
                .target("")
                .build(),
        );
        assert_eq!(line, "[W] hello");
    }

    #[test]
    fn test_target_colors_are_stable() {
        let logger = WMLogger::with_log_file(false, false, None);
        let first = logger.color_for_target("config");
        logger.color_for_target("platform");
        assert_eq!(logger.color_for_target("config"), first);
    }
}
