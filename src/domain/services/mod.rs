pub mod auth_service;
pub mod certificates;
pub mod defaults;
pub mod pdf;
pub mod roster;
