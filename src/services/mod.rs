pub mod code_block;
pub mod failure_writer;
pub mod report;
pub mod resolver;
pub mod submission;

pub use code_block::extract;
pub use failure_writer::FailureWriter;
pub use report::{assemble, assemble_outcome};
pub use resolver::{describe_status, resolve_language, resolve_status};
pub use submission::{PollPolicy, SubmissionService};
