use crate::chat::Reply;
use crate::entity::RecipientId;
use crate::interface::messenger::Outbound;
use crate::talk::filler::{Filler, NOT_UNDERSTOOD, OPENING_FOLLOW_UPS, PLAYER_FOLLOW_UPS};
use crate::talk::payload;
use crate::talk::registry::TopicRegistry;
use crate::talk::rules::{CANNED, PRIORITY};
use crate::talk::topic::Topic;
use tracing::debug;

/// Which rule group answered a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Priority,
    TopicDetail,
    TopicIntro,
    Canned,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tier: Tier,
    /// Matched topic for the two topic tiers.
    pub topic: Option<&'static str>,
    pub replies: Vec<Reply>,
}

impl Resolution {
    fn new(tier: Tier, replies: Vec<Reply>) -> Self {
        Self {
            tier,
            topic: None,
            replies,
        }
    }

    fn for_topic(tier: Tier, topic: &Topic, replies: Vec<Reply>) -> Self {
        Self {
            tier,
            topic: Some(topic.name),
            replies,
        }
    }
}

/// Turns one inbound text into the scripted replies and sends them.
///
/// Holds no per-user state; one instance serves every conversation.
pub struct Router {
    topics: TopicRegistry,
    filler: Filler,
    outbound: Outbound,
}

impl Router {
    pub fn new(topics: TopicRegistry, outbound: Outbound) -> Self {
        Self::with_filler(topics, outbound, Filler::from_entropy())
    }

    pub fn with_filler(topics: TopicRegistry, outbound: Outbound, filler: Filler) -> Self {
        Self {
            topics,
            filler,
            outbound,
        }
    }

    pub async fn route(&self, sender: &RecipientId, raw_text: &str) {
        let resolution = self.resolve(raw_text);
        debug!(
            "Routed message from '{}' via {:?} (topic: {:?}, {} replies, first: {:?})",
            sender,
            resolution.tier,
            resolution.topic,
            resolution.replies.len(),
            resolution.replies.first().map(Reply::body)
        );
        self.outbound.dispatch(sender, &resolution.replies).await;
    }

    /// Decides the replies without sending anything.
    pub fn resolve(&self, raw_text: &str) -> Resolution {
        let message = raw_text.to_lowercase();

        if let Some((_, action)) = PRIORITY.iter().find(|(p, _)| payload::is(&message, p)) {
            return Resolution::new(Tier::Priority, action.replies());
        }

        if let Some(resolution) = self.topic_details(&message) {
            return resolution;
        }

        if let Some(topic) = self.topics.all().find(|t| t.mentioned_in(&message)) {
            return Resolution::for_topic(Tier::TopicIntro, topic, topic.intro());
        }

        if let Some(rule) = CANNED.iter().find(|r| r.matcher.matches(&message)) {
            return Resolution::new(Tier::Canned, rule.action.replies());
        }

        Resolution::new(
            Tier::Fallback,
            vec![Reply::text(self.filler.pick(NOT_UNDERSTOOD))],
        )
    }

    fn topic_details(&self, message: &str) -> Option<Resolution> {
        let follow_ups = [
            (self.topics.openings(), OPENING_FOLLOW_UPS),
            (self.topics.players(), PLAYER_FOLLOW_UPS),
        ];

        for (topics, lines) in follow_ups {
            for topic in topics {
                if let Some(mut replies) = topic.details(message) {
                    replies.push(Reply::text(self.filler.pick(lines)));
                    return Some(Resolution::for_topic(Tier::TopicDetail, topic, replies));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::QuickReply;
    use crate::interface::messenger::testing::RecordingMessenger;
    use crate::talk::prompts::Prompt;
    use std::sync::Arc;

    fn router() -> (Router, Arc<RecordingMessenger>) {
        let messenger = Arc::new(RecordingMessenger::default());
        let outbound = Outbound::new(messenger.clone());
        let router = Router::with_filler(TopicRegistry::standard(), outbound, Filler::seeded(11));
        (router, messenger)
    }

    fn texts(replies: &[Reply]) -> Vec<&str> {
        replies.iter().map(Reply::body).collect()
    }

    /// Every payload on every button any resolution can emit.
    fn payloads(replies: &[Reply]) -> Vec<String> {
        replies
            .iter()
            .filter_map(|r| match r {
                Reply::Menu { options, .. } => Some(options),
                Reply::Text(_) => None,
            })
            .flatten()
            .filter_map(|o| o.payload().map(str::to_string))
            .collect()
    }

    #[test]
    fn hello_gets_the_hello_menu() {
        let (router, _) = router();
        let resolution = router.resolve("Hello");
        assert_eq!(resolution.tier, Tier::Canned);
        assert_eq!(resolution.replies, vec![Prompt::Hello.reply()]);
    }

    #[test]
    fn lets_talk_openings_is_a_priority_payload() {
        let (router, _) = router();
        let resolution = router.resolve("lets talk openings");
        assert_eq!(resolution.tier, Tier::Priority);
        let Reply::Menu { text, options } = &resolution.replies[0] else {
            panic!("expected a menu");
        };
        assert_eq!(
            text,
            "I really like Spanish and Sicilian, maybe I can tell you more about one of them?"
        );
        let titles: Vec<_> = options
            .iter()
            .map(|o| match o {
                QuickReply::Text { title, .. } => title.as_str(),
                QuickReply::Location => "location",
            })
            .collect();
        assert_eq!(titles, vec!["Sicilian", "Spanish", "French", "Other openings"]);
    }

    #[test]
    fn topic_mention_brings_up_the_intro() {
        let (router, _) = router();
        let resolution = router.resolve("Tell me about Sicilian please");
        assert_eq!(resolution.tier, Tier::TopicIntro);
        assert_eq!(resolution.topic, Some("Sicilian"));
        assert_eq!(
            texts(&resolution.replies),
            vec![
                "Sicialian defense, great opening. If you play it against me as black, you may even get me to +0.3.",
                "Which Sicilian variation would you like to learn more about?",
            ]
        );
        assert_eq!(payloads(&resolution.replies).len(), 8);
    }

    #[test]
    fn detail_request_beats_the_intro() {
        let (router, _) = router();
        let resolution = router.resolve("I want to learn Sicilian Najdorf");
        assert_eq!(resolution.tier, Tier::TopicDetail);
        assert_eq!(resolution.topic, Some("Sicilian"));

        let texts = texts(&resolution.replies);
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0], "Najdorf goes: 1.e4 c5 2.Nf3 d6 3.d4 cxd4 4.Nxd4 Nf6 5.Nc3 a6");
        assert!(texts[1].starts_with("The Najdorf Variation"));
        assert_eq!(
            texts[2],
            "To learn more visit: https://en.wikipedia.org/wiki/Sicilian_Defence"
        );
        assert!(OPENING_FOLLOW_UPS.contains(&texts[3]));
    }

    #[test]
    fn player_details_end_with_a_player_follow_up() {
        let (router, _) = router();
        let resolution = router.resolve("i want to see some garry kasparov games");
        assert_eq!(resolution.topic, Some("Kasparov"));
        let last = resolution.replies.last().unwrap().body();
        assert!(PLAYER_FOLLOW_UPS.contains(&last));
    }

    #[test]
    fn e4_offers_a_game() {
        let (router, _) = router();
        let resolution = router.resolve("e4");
        assert_eq!(resolution.tier, Tier::Canned);
        assert_eq!(resolution.replies.len(), 2);
        assert!(resolution.replies[0].body().starts_with("e4 - the best by test."));
        assert!(resolution.replies[0].body().ends_with("Qe4#"));
        assert_eq!(resolution.replies[1], Prompt::PlayGame.reply());
    }

    #[test]
    fn gibberish_falls_back() {
        let (router, _) = router();
        let resolution = router.resolve("xyzzy");
        assert_eq!(resolution.tier, Tier::Fallback);
        assert_eq!(resolution.replies.len(), 1);
        assert!(NOT_UNDERSTOOD.contains(&resolution.replies[0].body()));
    }

    #[test]
    fn priority_beats_substring_rules() {
        let (router, _) = router();
        // contains "play" and "game", but the exact payload wins
        let resolution = router.resolve("Yes, I want to play a game");
        assert_eq!(resolution.tier, Tier::Priority);
        assert!(resolution.replies[0].body().contains("lichess"));
    }

    #[test]
    fn every_priority_payload_resolves_in_any_case() {
        let (router, _) = router();
        for (key, action) in PRIORITY {
            for typed in [key.to_string(), key.to_uppercase()] {
                let resolution = router.resolve(&typed);
                assert_eq!(resolution.tier, Tier::Priority, "{:?}", typed);
                assert_eq!(resolution.replies, action.replies(), "{:?}", typed);
            }
        }
    }

    #[test]
    fn topics_beat_canned_quips() {
        let (router, _) = router();
        // "hello" would be the hello menu, but the Spanish mention comes first
        let resolution = router.resolve("hello, what about the ruy lopez?");
        assert_eq!(resolution.tier, Tier::TopicIntro);
        assert_eq!(resolution.topic, Some("Spanish"));
    }

    #[test]
    fn openings_are_checked_before_players() {
        let (router, _) = router();
        let resolution = router.resolve("does kasparov play the sicilian?");
        assert_eq!(resolution.topic, Some("Sicilian"));
    }

    #[test]
    fn same_text_same_replies_apart_from_filler() {
        let (router, _) = router();
        let a = router.resolve("I want to learn Sicilian Dragon");
        let b = router.resolve("I want to learn Sicilian Dragon");
        assert_eq!(a.tier, b.tier);
        let n = a.replies.len();
        assert_eq!(a.replies[..n - 1], b.replies[..n - 1]);
    }

    #[test]
    fn every_button_leads_somewhere_deterministic() {
        let (router, _) = router();

        let mut seen = std::collections::HashSet::new();
        let mut queue: Vec<String> = vec![
            "hello".into(),
            "e4".into(),
            "lets talk openings".into(),
            "lets talk players".into(),
        ];

        while let Some(input) = queue.pop() {
            if !seen.insert(input.clone()) {
                continue;
            }
            let resolution = router.resolve(&input);
            assert_ne!(resolution.tier, Tier::Fallback, "{:?} fell through", input);
            queue.extend(payloads(&resolution.replies));
        }

        // hello menu, play menu, both talk menus, five topic menus and their payloads
        assert!(seen.len() > 30);
    }

    #[tokio::test]
    async fn route_sends_replies_in_order() {
        let (router, messenger) = router();
        let sender = RecipientId::new("user-1");
        router.route(&sender, "e4").await;

        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|m| m.recipient == sender));
        assert!(sent[0].text.starts_with("e4 - the best by test."));
        assert!(sent[0].quick_replies.is_empty());
        assert_eq!(sent[1].text, "Would you like to play a game?");
        assert_eq!(sent[1].quick_replies.last(), Some(&QuickReply::Location));
    }

    #[tokio::test]
    async fn route_splits_long_detail_paragraphs() {
        let (router, messenger) = router();
        router
            .route(&RecipientId::new("user-2"), "I want to learn Sicilian Najdorf")
            .await;

        let sent = messenger.sent();
        assert!(sent.len() > 4);
        assert!(sent.iter().all(|m| m.text.chars().count() <= 298));
        assert_eq!(
            sent[0].text,
            "Najdorf goes: 1.e4 c5 2.Nf3 d6 3.d4 cxd4 4.Nxd4 Nf6 5.Nc3 a6"
        );
    }
}
