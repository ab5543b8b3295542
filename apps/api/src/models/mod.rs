pub mod analysis;
pub mod profile;
pub mod resume;
pub mod stats;
pub mod user;
