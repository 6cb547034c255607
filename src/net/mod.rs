pub mod codec;
pub mod messages;
pub mod registry;
pub mod relay;
pub mod session;
pub mod ws;
