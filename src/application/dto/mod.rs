/// Data Transfer Objects for the application layer
mod graph_request;
mod graph_response;

pub use graph_request::GraphRequest;
pub use graph_response::GraphResponse;
