pub mod entry;
pub mod id;
pub mod store;
pub mod validate;

pub use entry::TranscriptEntry;
pub use id::{IdGenerator, SequentialIdGen, UuidIdGen};
pub use store::{EditError, TranscriptStore};
pub use validate::is_valid_word;
