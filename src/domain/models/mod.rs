pub mod certificate;
pub mod event;
pub mod participant;
pub mod roster;
pub mod session;
pub mod user;
