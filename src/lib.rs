pub mod client;
pub mod constants;
pub mod error;
pub mod game;
pub mod net;
