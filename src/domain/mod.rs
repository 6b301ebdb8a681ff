pub mod credentials;
pub mod food;
