use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

pub const OPENING_FOLLOW_UPS: &[&str] = &[
    "I hope that was useful, maybe you can ask me about another variation?",
    "Would you like to learn about some other openings?",
    "What is your favourite opening?",
    "Openings are interesting, but who is your favourite player? Perhaps Carlsen or Kasparov?",
    "I hope you will remember all that! What else would you like to ask me?",
    "Was that what you were looking for? Ask me about something else!",
];

pub const PLAYER_FOLLOW_UPS: &[&str] = &[
    "I hope that was fun! Maybe you would like to ask me about some openings?",
    "What else would you like to talk about?",
    "Do you have a favourite opening?",
];

pub const NOT_UNDERSTOOD: &[&str] = &[
    "I did not understand you- I am just a chess engine after all! Talk to me about some chess openings or players.",
    "I did not get it. I am still learning. Your feedback is welcome.",
    "Thank you for being patient with me- can you try something else? Another player or opening?",
    "I did not know about that yet. I am still learning and will probably know it in a few days.",
    "I did not quite understand. How about you ask me about Sicilian? I know a lot about that!",
];

/// Picks the random closing lines. One generator, seeded once, shared by all requests.
pub struct Filler {
    rng: Mutex<StdRng>,
}

impl Filler {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform pick from `lines`; empty input yields an empty string.
    pub fn pick(&self, lines: &'static [&'static str]) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        lines.choose(&mut *rng).copied().unwrap_or_default()
    }
}
