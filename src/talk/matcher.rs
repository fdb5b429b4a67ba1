/// Predicate over an already lowercased message.
///
/// Built entirely from `'static` data so rule tables and topic variations can
/// live in `static` items.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Message contains at least one of the words.
    Contains(&'static [&'static str]),
    /// Message is exactly one of the strings.
    Equals(&'static [&'static str]),
    /// Every inner matcher accepts.
    All(&'static [Matcher]),
    /// At least one inner matcher accepts.
    Any(&'static [Matcher]),
}

impl Matcher {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Matcher::Contains(words) => words.iter().any(|w| message.contains(w)),
            Matcher::Equals(candidates) => candidates.iter().any(|c| message == *c),
            Matcher::All(inner) => inner.iter().all(|m| m.matches(message)),
            Matcher::Any(inner) => inner.iter().any(|m| m.matches(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FAVOURITE_PLAYER: Matcher = Matcher::All(&[
        Matcher::Contains(&["favourite", "favorite", "best"]),
        Matcher::Contains(&["player"]),
    ]);

    static GREETING: Matcher = Matcher::Any(&[
        Matcher::Contains(&["hello", "hey", "how are you"]),
        Matcher::Equals(&["hi"]),
    ]);

    #[test]
    fn contains_is_substring_based() {
        let m = Matcher::Contains(&["kann"]);
        assert!(m.matches("what about caro-kann?"));
        assert!(!m.matches("what about caro?"));
    }

    #[test]
    fn equals_requires_the_whole_message() {
        assert!(GREETING.matches("hi"));
        assert!(!Matcher::Equals(&["hi"]).matches("hi there"));
        // "this" contains "hi" but is not equal to it and has no greeting word
        assert!(!GREETING.matches("this"));
    }

    #[test]
    fn all_needs_every_part() {
        assert!(FAVOURITE_PLAYER.matches("who is your best player?"));
        assert!(FAVOURITE_PLAYER.matches("favorite player"));
        assert!(!FAVOURITE_PLAYER.matches("favourite opening"));
        assert!(!FAVOURITE_PLAYER.matches("player"));
    }

    #[test]
    fn empty_combinators() {
        assert!(Matcher::All(&[]).matches("anything"));
        assert!(!Matcher::Any(&[]).matches("anything"));
        assert!(!Matcher::Contains(&[]).matches("anything"));
    }
}
