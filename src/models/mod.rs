pub mod job;
pub mod loaders;
pub mod media;
pub mod summary;

pub use job::{Job, JobOutcome};
pub use loaders::{load_entries, parse_entries};
pub use media::{AudioExtension, Extension, FormatClass, MediaFormat, MediaTarget, VideoExtension};
pub use summary::{RunStatus, RunSummary};
