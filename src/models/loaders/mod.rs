pub mod sheet_loader;

pub use sheet_loader::{row_to_record, rows_to_records};
