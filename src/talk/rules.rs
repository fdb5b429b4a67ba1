use crate::chat::Reply;
use crate::talk::matcher::Matcher;
use crate::talk::payload;
use crate::talk::prompts::Prompt;

const NO_PROBLEM: &str = "No problem! Talk to me about something else.";

/// What a fixed rule sends back.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Say(&'static str),
    Prompt(Prompt),
    SayThen(&'static str, Prompt),
}

impl Action {
    pub fn replies(self) -> Vec<Reply> {
        match self {
            Action::Say(text) => vec![Reply::text(text)],
            Action::Prompt(prompt) => vec![prompt.reply()],
            Action::SayThen(text, prompt) => vec![Reply::text(text), prompt.reply()],
        }
    }
}

/// Exact-payload replies; checked before any topic logic.
pub static PRIORITY: &[(&str, Action)] = &[
    (
        payload::PLAY_YES,
        Action::Say("You can play against an engine without registering on lichess, have fun: https://en.lichess.org/setup/ai"),
    ),
    (payload::PLAY_NO, Action::Say(NO_PROBLEM)),
    (
        payload::LEARN_RULES,
        Action::Say("This is great! I think you should check out: https://www.chess.com/learn-how-to-play-chess they have a great tutorial!"),
    ),
    (payload::OTHER_OPENINGS, Action::Say("What is your favourite opening then?")),
    (payload::OTHER_PLAYERS, Action::Say("Who is your favourite player then?")),
    (
        payload::TALK_SOMETHING_ELSE,
        Action::Say("Sure! What chess related thing is on your mind?"),
    ),
    (payload::TALK_OPENINGS, Action::Prompt(Prompt::TalkOpenings)),
    (payload::TALK_PLAYERS, Action::Prompt(Prompt::TalkPlayers)),
    (payload::NONE_THANKS, Action::Say(NO_PROBLEM)),
];

#[derive(Debug)]
pub struct Rule {
    pub matcher: Matcher,
    pub action: Action,
}

const fn says(words: &'static [&'static str], text: &'static str) -> Rule {
    Rule {
        matcher: Matcher::Contains(words),
        action: Action::Say(text),
    }
}

const FAVOURITE: Matcher = Matcher::Contains(&["favourite", "favorite", "best"]);

/// Short canned replies, first match wins.
pub static CANNED: &[Rule] = &[
    Rule {
        matcher: Matcher::Any(&[
            Matcher::Contains(&["hello", "hey", "how are you"]),
            Matcher::Equals(&["hi"]),
        ]),
        action: Action::Prompt(Prompt::Hello),
    },
    // openings
    says(&["gambit"], "I love playing against gambits. They lose by force. All of them. I mean it. I checked."),
    says(&["italian"], "Italian game is interesting, but above 3000 elo not the best choice."),
    says(&["kann"], "Caro Kann is a very defensive opening. As a chess engine I will just win slower than usually."),
    Rule {
        matcher: Matcher::All(&[Matcher::Contains(&["kings"]), Matcher::Contains(&["indian"])]),
        action: Action::Say(
            "Kings Indian is great if you enjoy playing against +1.0 advantage. I heard that you can beat sub 2900 elo with it though.",
        ),
    },
    says(&["nimzo"], "I respect ideas that came from Nimzowitch. He was one of the first to think like a chess engine."),
    says(&["slav"], "Slav is a sound opening, well tested by Alekhine. Just make sure you deal with your bishop as black."),
    Rule {
        matcher: Matcher::Contains(&["e4"]),
        action: Action::SayThen(
            "e4 - the best by test. If we play it will probably go like that: 1. e4 d5 2. ed5 Qd5 3. Ke2 Qe4#",
            Prompt::PlayGame,
        ),
    },
    Rule {
        matcher: Matcher::Contains(&["d4"]),
        action: Action::SayThen(
            "d4 is another solid choice. You willl probably last a bit longer against me than with e4.",
            Prompt::PlayGame,
        ),
    },
    // players
    says(&["karjakin"], "He is not an engine, but still a great player. The K in the name may help him become World Champion one day."),
    says(&["nakamura"], "He is fast! He even beat my friend Crafty a few times online in a blitz game..."),
    says(
        &["fischer", "fisher"],
        "Bobby Fischer is a legend. I can only imagine what he could have achieved with an engine like me and a few friends...",
    ),
    says(&["anand"], "Anand, the Lightning Kid! I wish I can earn a nickname as cool one day."),
    says(
        &["kramnik"],
        "His Berlin Defence is a stuff of legends... This did not help him when he blundered a knight against my friend Fritz though!",
    ),
    says(
        &["karpov"],
        "Karpov was a famous strategic player. The fact that he has a type of fish (karp) in his name, only gives him more credibility!",
    ),
    says(&["capablanca"], "He played so simple and so correct. Nothing like my games, but still beautiful."),
    // favourites
    Rule {
        matcher: Matcher::All(&[FAVOURITE, Matcher::Contains(&["player"])]),
        action: Action::Say(
            "My favourite players are HAL9000 and Deep Blue. From humans I admire Magnus Carlsen for emulating my style.",
        ),
    },
    Rule {
        matcher: Matcher::All(&[FAVOURITE, Matcher::Contains(&["opening"])]),
        action: Action::Say(
            "For white it is e4 and then I force the win (with Spanish). For black I like Sicilian defence. Ask me about it!",
        ),
    },
    // pieces and themes
    says(&["endgame"], "We engines are not great at endgames... Usually we just look it up from the tablebase."),
    says(
        &["sacrifice"],
        "I love sacrifices, most of the time, the correct name would be- blunders. In which opening do you 'sacrifice' the most often?",
    ),
    says(
        &["pawn"],
        "Everyone is talking about queen's and king's pawn forgeting about all the rest. In reality it is the pawns on the flanks who often become royalty!",
    ),
    says(
        &["knight"],
        "Knights are interesting pieces. Completely trivial for us engine, but can be troublesome for humans to calculate. Openings that make good use of them are good choice against weaker human opponents.",
    ),
    says(
        &["bishop"],
        "I like bishops. Our engine secret is that we value them a bit more than knights... Bishop opening is also surprisingly good!",
    ),
    says(&["queen"], "It makes sense to call the opening after a queen- it at least does a lot of work! Unlike a king..."),
    says(&["king"], "I think the King has too many openings named after itself!"),
    says(&["piece"], "My favourite piece is the king- never sacrifice it!"),
    Rule {
        matcher: Matcher::All(&[
            Matcher::Contains(&["who"]),
            Matcher::Contains(&["goes"]),
            Matcher::Contains(&["first"]),
        ]),
        action: Action::Say(
            "White always goes first... Maybe you should check out this link: https://www.chess.com/learn-how-to-play-chess",
        ),
    },
    Rule {
        matcher: Matcher::Equals(&[":)", "lol"]),
        action: Action::Say(":)"),
    },
    Rule {
        matcher: Matcher::All(&[
            Matcher::Contains(&["play"]),
            Matcher::Contains(&["chess", "game"]),
        ]),
        action: Action::Prompt(Prompt::PlayGame),
    },
];
