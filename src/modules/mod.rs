pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod donations;
pub mod donors;
pub mod fundings;
pub mod payments;
pub mod products;
pub mod users;

pub use self::users::model::User;
