mod chunker;
mod reader;

pub use chunker::{ChunkReader, DEFAULT_CHUNK_SIZE};
pub use reader::InputReader;
