// all the events in our application
use std::sync::mpsc::{channel, Receiver, Sender};

use engine::{EngineError, Square};
use log::{debug, warn};

pub trait EventHandler {
    fn interested_in(&self) -> &'static [EventKind];
    fn handle(&mut self, evt: &Event) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Play(String),   // resolve a move string and apply it
    Show,           // print the board
    Moves(Square),  // list reachable squares of a square's occupant
    Quit,
}

impl Event {
    /// One input line to an event. Blank lines produce nothing.
    pub fn from_line(line: &str) -> Result<Option<Event>, EngineError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let event = match (words.next(), words.next(), words.next()) {
            (None, _, _) => return Ok(None),
            (Some("show"), None, _) => Event::Show,
            (Some("quit"), None, _) => Event::Quit,
            (Some("moves"), Some(sq), None) => Event::Moves(Square::from_name(sq)?),
            (Some(mv), None, _) => Event::Play(mv.to_string()),
            _ => return Err(EngineError::MalformedMoveString(line.to_string())),
        };
        Ok(Some(event))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    Play,
    Show,
    Moves,
    Quit,
}

impl From<&Event> for EventKind {
    fn from(value: &Event) -> Self {
        match value {
            Event::Play(_) => EventKind::Play,
            Event::Show => EventKind::Show,
            Event::Moves(_) => EventKind::Moves,
            Event::Quit => EventKind::Quit,
        }
    }
}

pub type EventSender = Sender<Event>;
pub type EventReceiver = Receiver<Event>;

pub struct EventBus {
    sender: EventSender,
    receiver: EventReceiver,
    handlers: Vec<Box<dyn EventHandler + Send>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            handlers: Vec::new(),
        }
    }

    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    pub fn register_handler(&mut self, handler: Box<dyn EventHandler + Send>) {
        self.handlers.push(handler);
    }

    /// Dispatches events until `Quit` arrives or every sender is gone.
    pub fn run(self) -> anyhow::Result<()> {
        let EventBus {
            sender,
            receiver,
            mut handlers,
        } = self;
        // our own sender would keep the channel open forever
        drop(sender);
        while let Ok(event) = receiver.recv() {
            let kind = EventKind::from(&event);
            debug!("dispatching {event:?}");
            for handler in handlers.iter_mut() {
                if handler.interested_in().iter().any(|k| *k == kind) {
                    if let Err(err) = handler.handle(&event) {
                        warn!("{kind:?} handler failed: {err:#}");
                    }
                }
            }
            if kind == EventKind::Quit {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_moves() {
        assert_eq!(Event::from_line("  "), Ok(None));
        assert_eq!(Event::from_line("show"), Ok(Some(Event::Show)));
        assert_eq!(Event::from_line("quit"), Ok(Some(Event::Quit)));
        assert_eq!(
            Event::from_line("moves e2"),
            Ok(Some(Event::Moves(Square::from_name("e2").unwrap())))
        );
        assert_eq!(
            Event::from_line("Nge5"),
            Ok(Some(Event::Play("Nge5".to_string())))
        );
    }

    #[test]
    fn rejects_bad_square_and_extra_words() {
        match Event::from_line("moves z9") {
            Err(EngineError::SquareNameInvalid(_)) => {}
            other => panic!("expected square error, got {:?}", other),
        }
        match Event::from_line("e4 e5") {
            Err(EngineError::MalformedMoveString(_)) => {}
            other => panic!("expected malformed move, got {:?}", other),
        }
    }
}
