pub mod dependency_check;
pub mod fetch_command;
pub mod output_dir;
pub mod url_probe;
pub mod validator;

pub use dependency_check::{check_dependencies, ensure_dependencies, DependencyReport};
pub use fetch_command::{build_fetch_invocation, build_probe_invocation};
pub use output_dir::{ensure_output_dir, DirStatus};
pub use url_probe::{ProbeReport, UrlProbe};
pub use validator::validate;
