pub mod auth;
pub mod certificate;
pub mod event;
pub mod health;
pub mod participant;
pub mod search;
