use crate::talk::openings::{FRENCH, SICILIAN, SPANISH};
use crate::talk::players::{CARLSEN, KASPAROV};
use crate::talk::topic::{Topic, TopicKind};

/// Openings and players, each in dispatch priority order.
#[derive(Debug, Default)]
pub struct TopicRegistry {
    openings: Vec<&'static Topic>,
    players: Vec<&'static Topic>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything the engine ships with.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for topic in [&SICILIAN, &SPANISH, &FRENCH, &KASPAROV, &CARLSEN] {
            registry.register(topic);
        }
        registry
    }

    /// Appends `topic` to the collection matching its kind.
    pub fn register(&mut self, topic: &'static Topic) {
        match topic.kind {
            TopicKind::Opening => self.openings.push(topic),
            TopicKind::Player => self.players.push(topic),
        }
    }

    pub fn openings(&self) -> &[&'static Topic] {
        &self.openings
    }

    pub fn players(&self) -> &[&'static Topic] {
        &self.players
    }

    /// Openings first, then players.
    pub fn all(&self) -> impl Iterator<Item = &'static Topic> + '_ {
        self.openings.iter().chain(self.players.iter()).copied()
    }
}
