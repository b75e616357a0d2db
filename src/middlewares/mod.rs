pub mod optional_jwt;
pub mod require_jwt;

pub use optional_jwt::OptionalJWT;
pub use require_jwt::RequireJWT;
