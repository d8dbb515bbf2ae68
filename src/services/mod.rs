pub mod booking;
pub mod catalog;
pub mod conversation;
pub mod intent;
pub mod sessions;
