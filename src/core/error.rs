use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColonyError {
    #[error("Memory payload malformed: {0}")]
    MemoryCodec(#[from] serde_json::Error),

    #[error("Terrain grid shape mismatch: {width}x{height} needs {expected} cells, got {got}")]
    TerrainShape { width: i32, height: i32, expected: usize, got: usize },

    #[error("Unknown role tag: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, ColonyError>;
