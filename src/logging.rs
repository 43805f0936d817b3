use crate::error::{BallsError, BallsResult};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {m}{n}";

/// Console logging for the whole program.
pub fn init_logging(level: LevelFilter) -> BallsResult<Handle> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| BallsError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| BallsError::Logging(e.to_string()))
}
