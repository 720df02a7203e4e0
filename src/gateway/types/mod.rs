pub mod response;

pub use response::{ApiError, ApiJson, ApiResult, ErrorBody, parse_id};
