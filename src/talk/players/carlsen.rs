use crate::talk::matcher::Matcher;
use crate::talk::payload::NONE_THANKS;
use crate::talk::topic::{Topic, TopicKind, Variation};

const CARLSEN_OR_MAGNUS: Matcher = Matcher::Contains(&["carlsen", "magnus"]);

pub static CARLSEN: Topic = Topic {
    name: "Carlsen",
    kind: TopicKind::Player,
    keywords: &["carlsen", "magnus"],
    overview: "Magnus is great by definition. A lot what he knows he learned from me!",
    menu_text: "What would you like me to tell you about Magnus Carlsen?",
    menu: &[
        ("Biography", "i want to know more about magnus carlsen"),
        ("Openings", "i want to know magnus carlsen openings"),
        ("Games", "i want to see some magnus carlsen games"),
        ("Nothing, thanks", NONE_THANKS),
    ],
    variations: &[
        Variation {
            matcher: Matcher::All(&[CARLSEN_OR_MAGNUS, Matcher::Contains(&["more"])]),
            lines: &[
                "Sven Magnus Øen Carlsen (born 30 November 1990) is a Norwegian chess grandmaster, and the \
                 current World Chess Champion. Carlsen was a child chess prodigy who became a chess grandmaster \
                 in 2004, at the age of 13 years and 148 days. This made him the third-youngest grandmaster in \
                 history. In November 2013 Carlsen became World Champion by defeating Viswanathan Anand in the \
                 World Chess Championship 2013. On the May 2014 FIDE rating list, Carlsen reached his peak \
                 rating of 2882, which is the highest in history. He successfully defended his title in \
                 November 2014, once again defeating Anand. In 2014, Carlsen also won the World Rapid \
                 Championship and the World Blitz Championship, thus holding all three world championship \
                 titles. In November 2016 he defended his world title against Sergey Karjakin.",
            ],
        },
        Variation {
            matcher: Matcher::All(&[CARLSEN_OR_MAGNUS, Matcher::Contains(&["openings"])]),
            lines: &[
                "Carlsen most played openings with White were: Sicilian, Ruy Lopez, Slav, Nimzo Indian",
                "His most played openings with black were: Sicilian, Ruy Lopez, Queen's Indian and Nimzo \
                 Indian.",
            ],
        },
        Variation {
            matcher: Matcher::All(&[CARLSEN_OR_MAGNUS, Matcher::Contains(&["games"])]),
            lines: &[
                "Carlsen played many beautiful games. Browsing the web I found this amazing collection of some \
                 of his best games: http://www.chessgames.com/perl/chesscollection?cid=1007147",
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_payload_has_its_own_variation() {
        let biography = CARLSEN.details("i want to know more about magnus carlsen").unwrap();
        let openings = CARLSEN.details("i want to know magnus carlsen openings").unwrap();
        let games = CARLSEN.details("i want to see some magnus carlsen games").unwrap();
        assert_eq!(biography.len(), 1);
        assert_eq!(openings.len(), 2);
        assert_eq!(games.len(), 1);
        assert_ne!(biography, games);
    }

    #[test]
    fn name_alone_is_an_intro_not_details() {
        assert!(CARLSEN.details("carlsen").is_none());
        assert!(CARLSEN.details("magnus").is_none());
        assert!(CARLSEN.mentioned_in("carlsen"));
    }

    #[test]
    fn magnus_works_without_surname() {
        assert!(CARLSEN.details("tell me more about magnus").is_some());
    }
}
