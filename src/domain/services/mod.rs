pub mod password_service;
pub mod strength_policy;
