//! Response command handlers.
//!
//! Write-side handlers for recording and removing survey responses.

mod delete_response;
mod submit_response;

pub use delete_response::{DeleteResponseCommand, DeleteResponseHandler};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};
