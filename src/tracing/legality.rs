// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{collections::HashMap, fmt::Debug, io::Write, sync::Mutex, time::SystemTime};

use derive_more::From;
use serde::{Deserialize, Serialize};
use tracing::{
    field::{Field, Visit},
    span::Attributes,
    Event, Id, Subscriber,
};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use crate::tracing::constants;

#[derive(Debug, Serialize, Deserialize)]
pub struct LegalityEvent {
    pub timestamp: SystemTime,
    pub kind: LegalityEventKind,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, From)]
pub enum LegalityEventKind {
    QueryStart(QueryStartEvent),
    CheckDetected(CheckDetectedEvent),
    MoveRejected(MoveRejectedEvent),
    QueryComplete(QueryCompleteEvent),
    QueryEnd(QueryEndEvent),
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStartEvent {
    pub id: u64,
    pub fen: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDetectedEvent {
    pub checks: u64,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRejectedEvent {
    pub mov: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCompleteEvent {
    pub legal_moves: u64,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEndEvent {
    pub id: u64,
}

/// The LegalityLogLayer is a Layer that understands the instrumentation in `GameState::valid_moves` and writes a
/// record of every legality query, one JSON object per line, to the given sink. It does no analysis of its own.
pub struct LegalityLogLayer {
    writer: Box<Mutex<dyn Write + Send + Sync>>,
}

impl LegalityLogLayer {
    pub fn new<W: Write + 'static + Send + Sync>(dest: W) -> LegalityLogLayer {
        LegalityLogLayer {
            writer: Box::new(Mutex::new(dest)),
        }
    }

    fn record_event<T: Into<LegalityEventKind>>(&self, kind: T) {
        let event = LegalityEvent {
            timestamp: SystemTime::now(),
            kind: kind.into(),
        };

        // A layer has nowhere to report a failed write; the event is dropped.
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if serde_json::to_writer(&mut *writer, &event).is_ok() {
            let _ = writeln!(&mut *writer);
        }
    }

    fn on_valid_moves_enter(&self, attrs: &Attributes<'_>, id: &Id) {
        let attrs = attrs.extract_fields();
        self.record_event(QueryStartEvent {
            id: id.into_u64(),
            fen: attrs.get("pos").cloned().unwrap_or_default(),
        });
    }

    fn on_valid_moves_exit(&self, id: &Id) {
        self.record_event(QueryEndEvent { id: id.into_u64() });
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writer.flush();
    }
}

impl<S: Subscriber> Layer<S> for LegalityLogLayer
where
    S: for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
        if attrs.metadata().name() == constants::VALID_MOVES {
            self.on_valid_moves_enter(attrs, id);
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(&id) {
            if span.name() == constants::VALID_MOVES {
                self.on_valid_moves_exit(&id);
            }
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let attrs = event.extract_fields();
        // Not all events have `event` keys (e.g. mundane logs from other modules).
        // Ignore the ones we don't care about.
        let event_str = match attrs.get("event") {
            Some(event_str) => event_str,
            None => return,
        };

        let number = |key: &str| attrs.get(key).and_then(|v| v.parse().ok()).unwrap_or(0);
        match event_str.as_ref() {
            constants::CHECK_DETECTED => self.record_event(CheckDetectedEvent {
                checks: number("checks"),
            }),
            constants::MOVE_REJECTED => self.record_event(MoveRejectedEvent {
                mov: attrs.get("mov").cloned().unwrap_or_default(),
            }),
            constants::VALID_MOVES_COMPLETE => self.record_event(QueryCompleteEvent {
                legal_moves: number("count"),
            }),
            _ => {}
        }
    }
}

trait HasExtractableFields {
    fn extract_fields(&self) -> HashMap<String, String>;
}

impl HasExtractableFields for Attributes<'_> {
    fn extract_fields(&self) -> HashMap<String, String> {
        let mut extractor = HashMapExtractor(HashMap::new());
        self.record(&mut extractor);
        extractor.0
    }
}

impl HasExtractableFields for Event<'_> {
    fn extract_fields(&self) -> HashMap<String, String> {
        let mut extractor = HashMapExtractor(HashMap::new());
        self.record(&mut extractor);
        extractor.0
    }
}

struct HashMapExtractor(HashMap<String, String>);
impl Visit for HashMapExtractor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0
            .insert(field.name().to_owned(), format!("{:?}", value));
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::prelude::*;

    use super::*;
    use crate::game::GameState;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record<F: FnOnce()>(f: F) -> Vec<LegalityEventKind> {
        let buffer = SharedBuffer::default();
        let subscriber =
            tracing_subscriber::registry().with(LegalityLogLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<LegalityEvent>(line).unwrap().kind)
            .collect()
    }

    #[test]
    fn records_quiet_query() {
        let events = record(|| {
            GameState::new().valid_moves();
        });

        assert_eq!(events.len(), 3);
        let id = match &events[0] {
            LegalityEventKind::QueryStart(start) => {
                assert_eq!(
                    start.fen,
                    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
                );
                start.id
            }
            other => panic!("unexpected first event: {:?}", other),
        };
        assert_eq!(
            events[1],
            LegalityEventKind::QueryComplete(QueryCompleteEvent { legal_moves: 20 })
        );
        assert_eq!(events[2], LegalityEventKind::QueryEnd(QueryEndEvent { id }));
    }

    #[test]
    fn records_checks() {
        let events = record(|| {
            GameState::from_fen("4k3/8/8/4R3/8/8/8/4K3 b - - 0 1")
                .unwrap()
                .valid_moves();
        });

        assert!(events.contains(&LegalityEventKind::CheckDetected(CheckDetectedEvent {
            checks: 1
        })));
        assert!(events.contains(&LegalityEventKind::QueryComplete(QueryCompleteEvent {
            legal_moves: 4
        })));
    }

    #[test]
    fn records_rejections() {
        let events = record(|| {
            tracing::debug!(event = constants::MOVE_REJECTED, mov = "e2e4");
            tracing::info!("unrelated");
        });

        assert_eq!(
            events,
            vec![LegalityEventKind::MoveRejected(MoveRejectedEvent {
                mov: "e2e4".to_owned()
            })]
        );
    }
}
