// Handlers module
pub mod deployments;
pub mod health;
pub mod images;
