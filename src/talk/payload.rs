//! Quick-reply payloads that come back to us as message text.
//!
//! Prompt builders put these on buttons and the priority table recognises
//! them again, compared case-insensitively against the lowercased message.

pub const PLAY_YES: &str = "Yes, I want to play a game";
pub const PLAY_NO: &str = "No, thank you, I don't want to play";
pub const LEARN_RULES: &str = "I want to learn how to play";

pub const TALK_OPENINGS: &str = "lets talk openings";
pub const TALK_PLAYERS: &str = "lets talk players";
pub const TALK_SOMETHING_ELSE: &str = "lets talk something else";

pub const OTHER_OPENINGS: &str = "other openings";
pub const OTHER_PLAYERS: &str = "other players";

/// Closes every topic menu.
pub const NONE_THANKS: &str = "None, thanks";

/// True if the lowercased message is exactly the given payload.
pub fn is(message: &str, payload: &str) -> bool {
    message.eq_ignore_ascii_case(payload)
}
