pub mod catalog;
pub mod judge;
pub mod loaders;
pub mod outcome;
pub mod record;
pub mod report;

pub use catalog::{Catalogs, Language, LanguageCatalog, LanguageId, Status, StatusCatalog, StatusId};
pub use judge::{CreateSubmissionRequest, SubmissionResponse, SubmissionResult, SubmissionToken};
pub use loaders::rows_to_records;
pub use outcome::TrackOutcome;
pub use record::{CodeAnswer, CodeBlock, ColumnLayout, Record};
pub use report::{ReportRow, TrackColumns, REPORT_HEADER};
