//! Request and Response models for the line protocol
//!
//! Typed commands built from parsed lines and the replies written back.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Request;
pub use responses::Response;
