pub mod api;
mod response;

pub use response::Response;
