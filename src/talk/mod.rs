//! Conversation logic: what the engine says back to a message.

pub mod filler;
pub mod matcher;
pub mod openings;
pub mod payload;
pub mod players;
pub mod prompts;
pub mod registry;
pub mod router;
pub mod rules;
pub mod topic;
