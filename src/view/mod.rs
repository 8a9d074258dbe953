pub mod components;
pub mod error;
pub mod game;
pub mod home;
pub mod layout;
