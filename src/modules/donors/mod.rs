pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::init_donors_router;
pub use service::normalize_blood_group;
