// Word search: request validation, the filter pipeline, and result presentation.
// The pipeline is pure; handlers own vocabulary access and response shaping.

pub mod export;
pub mod filter;
pub mod handlers;
pub mod highlight;
pub mod request;
