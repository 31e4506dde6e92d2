mod extract_error;
mod response_extractor;
mod shape_check;

pub use extract_error::ExtractError;
pub use response_extractor::ResponseExtractor;
