use fern::Dispatch;
use snafu::ResultExt;

use crate::errors::{CustomResult, IoSnafu, LoggingSnafu};
use crate::modules::settings::Settings;

pub fn setup_logging(settings: &Settings) -> CustomResult<()> {
    let base_config = Dispatch::new().level(settings.logging_level);

    let file_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(fern::log_file(&settings.log_file).context(IoSnafu)?);

    base_config
        .chain(file_logger_config)
        .apply()
        .map_err(fern::InitError::SetLoggerError)
        .context(LoggingSnafu)?;

    Ok(())
}
