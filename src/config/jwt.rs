pub use lifelink_auth::JwtConfig;
