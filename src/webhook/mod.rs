//! Messenger webhook: verification handshake, signed callbacks, event dispatch.

pub mod dispatch;
pub mod payload;
pub mod server;
pub mod signature;
