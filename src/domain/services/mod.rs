mod registry;
mod validator;

pub use registry::VersionRegistry;
pub use validator::validate_endpoint;
