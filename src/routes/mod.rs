pub mod api;
pub mod deployments;
pub mod health;
pub mod images;
