pub mod job_flow;

pub use job_flow::{JobExecutor, RETRY_BACKOFF};
