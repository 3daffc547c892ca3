use log::info;

use crate::game::GameEvent;

/// Reacts to side-effect events with logging and, optionally, the terminal bell.
#[derive(Debug, Clone, Copy)]
pub struct EventSink {
    terminal_bell: bool,
}

impl EventSink {
    #[must_use]
    pub fn new(terminal_bell: bool) -> Self {
        Self { terminal_bell }
    }

    /// Handles one tick's events, calling `ring` once when any of them wants a bell.
    pub fn dispatch(&self, events: &[GameEvent], mut ring: impl FnMut()) {
        for event in events {
            match event {
                GameEvent::OverlayStart { first_time } => {
                    info!("cue: overlay start (first time: {first_time})");
                }
                GameEvent::OverlayLoopComplete => {}
                other => info!("cue: {other:?}"),
            }
        }

        if self.terminal_bell && events.iter().copied().any(wants_bell) {
            ring();
        }
    }
}

fn wants_bell(event: GameEvent) -> bool {
    matches!(
        event,
        GameEvent::Eat | GameEvent::Collision | GameEvent::Timeout | GameEvent::Win
    )
}

#[cfg(test)]
mod tests {
    use crate::game::GameEvent;

    use super::EventSink;

    #[test]
    fn bell_rings_once_per_tick() {
        let sink = EventSink::new(true);
        let mut rings = 0;

        sink.dispatch(&[GameEvent::Eat, GameEvent::Win], || rings += 1);

        assert_eq!(rings, 1);
    }

    #[test]
    fn overlay_events_and_disabled_bell_stay_silent() {
        let mut rings = 0;

        EventSink::new(true).dispatch(&[GameEvent::OverlayLoopComplete], || rings += 1);
        EventSink::new(false).dispatch(&[GameEvent::Collision], || rings += 1);

        assert_eq!(rings, 0);
    }
}
