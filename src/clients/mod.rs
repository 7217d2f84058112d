pub mod auth;
pub mod http;
pub mod judge_client;
pub mod sheets_client;

pub use auth::ServiceAccountAuth;
pub use judge_client::{JudgeApi, JudgeClient};
pub use sheets_client::{SheetsClient, SpreadsheetApi};
