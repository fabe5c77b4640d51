use std::fmt;
use std::sync::Arc;

/// Gameplay notifications emitted during a tick; drained by the frame loop
/// (the demo binary logs them, a real embedder could route them to audio/UI).
#[derive(Debug, Clone)]
pub enum GameEvent {
    JumpStarted { velocity: f32 },
    Landed { position_y: f32 },
    ClipStarted { clip: Arc<str> },
    ClipStopped { clip: Arc<str> },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::JumpStarted { velocity } => write!(f, "JumpStarted velocity={velocity:.2}"),
            GameEvent::Landed { position_y } => write!(f, "Landed y={position_y:.2}"),
            GameEvent::ClipStarted { clip } => write!(f, "ClipStarted clip={clip}"),
            GameEvent::ClipStopped { clip } => write!(f, "ClipStopped clip={clip}"),
        }
    }
}

#[derive(Default)]
pub struct EventBus {
    events: Vec<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_bus() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::JumpStarted { velocity: 8.0 });
        bus.push(GameEvent::Landed { position_y: 0.0 });
        let drained = bus.drain();
        assert_eq!(drained.len(), 2);
        assert!(bus.is_empty());
    }

    #[test]
    fn display_formats_are_stable() {
        let event = GameEvent::ClipStarted { clip: Arc::from("Walk") };
        assert_eq!(event.to_string(), "ClipStarted clip=Walk");
    }
}
