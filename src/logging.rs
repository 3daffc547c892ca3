use std::fs::{self, File};
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::AppError;

/// Routes `log` output to `path`, creating parent directories when needed.
///
/// The terminal is in raw alternate-screen mode while the game runs, so
/// nothing may be logged to stdout or stderr.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    open_and_install(path, level).map_err(|source| AppError::Logger {
        path: path.to_path_buf(),
        source,
    })
}

fn open_and_install(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use log::LevelFilter;

    use crate::error::AppError;

    use super::init_file_logger;

    fn unique_test_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("bogie-vs-chicken-{name}-{nanos}"))
    }

    #[test]
    fn disabled_level_touches_nothing() {
        let path = unique_test_path("off").join("game.log");

        init_file_logger(&path, LevelFilter::Off).expect("off level never fails");

        assert!(!path.exists());
    }

    #[test]
    fn unwritable_log_path_reports_logger_error() {
        let blocker = unique_test_path("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker file");
        let path = blocker.join("game.log");

        let result = init_file_logger(&path, LevelFilter::Info);

        assert!(matches!(result, Err(AppError::Logger { path: ref p, .. }) if *p == path));
        let _ = fs::remove_file(blocker);
    }
}
