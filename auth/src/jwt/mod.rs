pub mod bearer;
pub mod claims;
pub mod errors;
pub mod handler;

pub use bearer::extract_bearer;
pub use claims::Claims;
pub use claims::TOKEN_TTL_HOURS;
pub use errors::JwtError;
pub use handler::JwtHandler;
