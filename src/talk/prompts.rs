use crate::chat::Reply;
use crate::talk::payload;

/// Fixed menus that keep the conversation going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Hello,
    PlayGame,
    TalkOpenings,
    TalkPlayers,
}

impl Prompt {
    pub fn reply(self) -> Reply {
        match self {
            Prompt::Hello => Reply::menu(
                "Hello I am The Talking Chess Engine. Talk to me about some chess openings or players.",
                &[
                    ("Openings", payload::TALK_OPENINGS),
                    ("Players", payload::TALK_PLAYERS),
                    ("Something else", payload::TALK_SOMETHING_ELSE),
                ],
            ),
            Prompt::PlayGame => Reply::menu(
                "Would you like to play a game?",
                &[
                    ("Yes", payload::PLAY_YES),
                    ("No", payload::PLAY_NO),
                    ("Teach me rules", payload::LEARN_RULES),
                ],
            ),
            Prompt::TalkOpenings => Reply::menu(
                "I really like Spanish and Sicilian, maybe I can tell you more about one of them?",
                &[
                    ("Sicilian", "sicilian"),
                    ("Spanish", "spanish"),
                    ("French", "french"),
                    ("Other openings", payload::OTHER_OPENINGS),
                ],
            ),
            Prompt::TalkPlayers => Reply::menu(
                "I really like Stockfish and Fritz, but you probably prefer humans. \
                 Maybe we can talk about Garry Kasparov or Magnus Carlsen?",
                &[
                    ("Kasparov", "kasparov"),
                    ("Carlsen", "carlsen"),
                    ("Other players", payload::OTHER_PLAYERS),
                ],
            ),
        }
    }
}
