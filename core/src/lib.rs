pub mod geometry;
pub mod segment;
pub mod region;
pub mod editor;
pub mod storage;
pub mod config;

pub use config::{EditorConfig, MAX_SEGMENTS};
pub use editor::{Editor, EngineError, EngineResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
