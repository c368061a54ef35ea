//! Observers: narration and recording of what happens in a game.
//!
//! Observers only listen. They cannot influence the engine, and the engine
//! never reads anything back from them.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Placement, PlayerId};

/// Why the table was cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearReason {
    /// Four of one rank reached the table.
    FourOfAKind,
    /// Everyone else passed back to the pass marker.
    AllPassed,
}

/// A state change reported to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cards were dealt; hand sizes in seat order.
    Dealt { hand_sizes: Vec<usize> },
    /// An action was committed.
    ActionTaken(ActionRecord),
    /// The pile was emptied; `leader` plays next.
    BoardCleared { reason: ClearReason, leader: PlayerId },
    /// A player emptied their hand.
    PlayerFinished(Placement),
    /// One player remains; the full finishing order.
    GameOver { finish_order: Vec<PlayerId> },
}

/// Receives every `GameEvent` the engine emits.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Narrates the game through the `log` facade at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Dealt { hand_sizes } => {
                log::info!("dealt {} hands {:?}", hand_sizes.len(), hand_sizes);
            }
            GameEvent::ActionTaken(record) => {
                log::info!(
                    "{:<4} {} plays {} ({})",
                    record.turn,
                    record.player,
                    record.play,
                    record.outcome
                );
            }
            GameEvent::BoardCleared { reason, leader } => match reason {
                ClearReason::FourOfAKind => log::info!("board cleared, {} leads", leader),
                ClearReason::AllPassed => {
                    log::info!("everyone passed, board cleared, {} leads", leader)
                }
            },
            GameEvent::PlayerFinished(Placement { player, place }) => {
                log::info!("{} has cleared their hand (place {})", player, place);
            }
            GameEvent::GameOver { finish_order } => {
                let order: Vec<String> = finish_order.iter().map(|p| p.to_string()).collect();
                log::info!("game over: {}", order.join(", "));
            }
        }
    }
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of board clears for the given reason.
    #[must_use]
    pub fn clears(&self, reason: ClearReason) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::BoardCleared { reason: r, .. } if *r == reason))
            .count()
    }
}

impl Observer for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::Dealt { hand_sizes: vec![13; 4] });
        log.on_event(&GameEvent::BoardCleared {
            reason: ClearReason::AllPassed,
            leader: PlayerId::new(2),
        });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.clears(ClearReason::AllPassed), 1);
        assert_eq!(log.clears(ClearReason::FourOfAKind), 0);
    }

    #[test]
    fn test_observer_through_mut_ref() {
        fn notify<O: Observer>(mut observer: O) {
            observer.on_event(&GameEvent::GameOver { finish_order: vec![PlayerId::new(1)] });
        }

        let mut log = EventLog::new();
        notify(&mut log);
        assert_eq!(log.events().len(), 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PlayerFinished(Placement { player: PlayerId::new(3), place: 1 });
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
