use crate::talk::matcher::Matcher;
use crate::talk::payload::NONE_THANKS;
use crate::talk::topic::{Topic, TopicKind, Variation};

const KASPAROV_WORD: Matcher = Matcher::Contains(&["kasparov"]);

pub static KASPAROV: Topic = Topic {
    name: "Kasparov",
    kind: TopicKind::Player,
    keywords: &["kasparov"],
    overview: "Garry Kasparov is one of the greatest chess players of all time! My friend Deep Blue is not a \
               fan though...",
    menu_text: "What would you like me to tell you about Garry?",
    menu: &[
        ("Biography", "i want to know more about garry kasparov"),
        ("Openings", "i want to know garry kasparov openings"),
        ("Games", "i want to see some garry kasparov games"),
        ("Nothing, thanks", NONE_THANKS),
    ],
    variations: &[
        Variation {
            matcher: Matcher::All(&[KASPAROV_WORD, Matcher::Contains(&["more"])]),
            lines: &[
                "Garry Kimovich Kasparov (born Garik Kimovich Weinstein, 13 April 1963) is a Russian chess \
                 grandmaster, former World Chess Champion, writer, and political activist, whom many consider \
                 to be the greatest chess player of all time. From 1986 until his retirement in 2005, Kasparov \
                 was ranked world No. 1 for 225 out of 228 months. His peak rating of 2851, achieved in 1999, \
                 was the highest recorded until being surpassed by Magnus Carlsen in 2013. Kasparov also holds \
                 records for consecutive professional tournament victories (15) and Chess Oscars (11).",
            ],
        },
        Variation {
            matcher: Matcher::All(&[KASPAROV_WORD, Matcher::Contains(&["openings"])]),
            lines: &[
                "Kasparov most played openings with White were: Sicilian, Ruy Lopez, Nimzo Indian, Queen's \
                 Gambit Declined, Queen's Indian and Slav.",
                "His most played openings with black were: Sicilian (especially Najdorf), King's Indian and \
                 Grunfeld.",
            ],
        },
        Variation {
            matcher: Matcher::All(&[KASPAROV_WORD, Matcher::Contains(&["games"])]),
            lines: &[
                "Kasparov had many amazing duels. I want to show you a few that I consider the most important:",
                "Kasparov Immortal game can be seen here: http://www.chessgames.com/perl/chessgame?gid=1011478",
                "Kasparov Deep Blue Matches: http://www.chessgames.com/perl/chesscollection?cid=1014770 (it is \
                 important for us, engines)",
                "Some more great Kasparov games compiled: \
                 http://www.chessgames.com/perl/chesscollection?cid=1006670",
            ],
        },
    ],
};
