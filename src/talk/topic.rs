use crate::chat::Reply;
use crate::talk::matcher::Matcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicKind {
    Opening,
    Player,
}

/// One sub-topic a user can ask about, e.g. the Najdorf.
#[derive(Debug)]
pub struct Variation {
    pub matcher: Matcher,
    /// Sent in order; long lines are split on the way out.
    pub lines: &'static [&'static str],
}

/// A chess opening or player the engine can talk about.
///
/// Topics are plain data: adding one means writing another `static Topic`
/// and registering it, nothing in the router changes.
#[derive(Debug)]
pub struct Topic {
    pub name: &'static str,
    pub kind: TopicKind,
    /// Lowercase substrings that bring up the intro, in priority order.
    pub keywords: &'static [&'static str],
    pub overview: &'static str,
    pub menu_text: &'static str,
    /// `(label, payload)` pairs; payloads are matched by `variations`.
    pub menu: &'static [(&'static str, &'static str)],
    pub variations: &'static [Variation],
}

impl Topic {
    pub fn mentioned_in(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k))
    }

    /// Overview line followed by the variation menu.
    pub fn intro(&self) -> Vec<Reply> {
        vec![
            Reply::text(self.overview),
            Reply::menu(self.menu_text, self.menu),
        ]
    }

    /// Detail lines for the first variation `message` asks for.
    pub fn details(&self, message: &str) -> Option<Vec<Reply>> {
        self.variations
            .iter()
            .find(|v| v.matcher.matches(message))
            .map(|v| v.lines.iter().copied().map(Reply::text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENGLISH: Topic = Topic {
        name: "English",
        kind: TopicKind::Opening,
        keywords: &["english", "c4"],
        overview: "The English: 1.c4",
        menu_text: "Which English?",
        menu: &[("Symmetrical", "I want to learn symmetrical English")],
        variations: &[
            Variation {
                matcher: Matcher::All(&[
                    Matcher::Contains(&["english"]),
                    Matcher::Contains(&["symmetrical"]),
                ]),
                lines: &["1.c4 c5", "Symmetry for a while."],
            },
            Variation {
                matcher: Matcher::Contains(&["symmetrical"]),
                lines: &["never reached for english"],
            },
        ],
    };

    #[test]
    fn intro_is_overview_then_menu() {
        let replies = ENGLISH.intro();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], Reply::text("The English: 1.c4"));
        assert_eq!(
            replies[1],
            Reply::menu(
                "Which English?",
                &[("Symmetrical", "I want to learn symmetrical English")]
            )
        );
    }

    #[test]
    fn first_matching_variation_wins() {
        let details = ENGLISH
            .details("i want to learn symmetrical english")
            .unwrap();
        assert_eq!(
            details,
            vec![Reply::text("1.c4 c5"), Reply::text("Symmetry for a while.")]
        );
    }

    #[test]
    fn no_variation_no_details() {
        assert!(ENGLISH.details("tell me about the english").is_none());
    }

    #[test]
    fn keywords_are_substrings() {
        assert!(ENGLISH.mentioned_in("1.c4 is nice"));
        assert!(!ENGLISH.mentioned_in("1.d4 is nice"));
        assert!(ENGLISH.mentioned_in("the english opening"));
    }
}
