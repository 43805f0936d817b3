use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

pub type BallsResult<T> = Result<T, BallsError>;

#[derive(Error, Debug)]
pub enum BallsError {
    /// SDL reports most failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Failed to build window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("Failed to build canvas: {0}")]
    Canvas(#[from] IntegerOrSdlError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger setup failed: {0}")]
    Logging(String),
}
