pub mod entry_loader;

pub use entry_loader::{load_entries, parse_entries};
