//! Callback interface (spec §6) for UI integration, grounded on
//! `mitigation-node/src/events.rs`'s `SecurityEvent`/`EventSystem`
//! pattern — a typed event per kind, published through one sink — but
//! in-process rather than `async-nats`-backed: the process-wide task
//! orchestrator that would need fleet-wide fan-out is explicitly out of
//! scope for the engine core (spec §9).

use std::collections::BTreeMap;

use crate::goal::GenType;

/// One of the five fixed-shape callback kinds. `Submit`/`TestFormInput`
/// are never emitted by the engine itself — they exist so an external
/// form-submitter or field-prober can publish onto the same stream a
/// caller wires up for `PrepareFull`/`GenerateFull`/`GenerateInner`.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Fires once after the primers and outer-pattern selector have run.
    PrepareFull {
        context: BTreeMap<String, String>,
        will_echo: bool,
    },
    /// Fires once per user-facing `full_generate` call that succeeds.
    GenerateFull {
        gen_type: GenType,
        payload: String,
        will_echo: bool,
    },
    /// Fires per successfully generated inner subgoal, at any recursion
    /// depth, during a `generate` search.
    GenerateInner {
        gen_type: GenType,
        args: String,
        payload: String,
    },
    /// External: an out-of-scope form submitter reporting a completed
    /// submission.
    Submit { form: String, response_status: u16 },
    /// External: an out-of-scope field-prober reporting a probe result.
    TestFormInput {
        ok: bool,
        test_success: bool,
        will_echo: bool,
    },
}

/// Receives [`EngineEvent`]s as they occur. Implementations must not
/// block significantly — events are emitted inline on the generation
/// call path (spec §5: the engine has no other suspension points than
/// oracle calls, and event delivery must not add one).
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &EngineEvent);
}

/// Default sink: discards every event. Used when a caller has no UI
/// integration to wire up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &EngineEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: &EngineEvent) {
            self.events.lock().unwrap().push(format!("{event:?}"));
        }
    }

    #[test]
    fn test_null_sink_is_a_noop() {
        let sink = NullSink;
        sink.emit(&EngineEvent::Submit {
            form: "f".to_string(),
            response_status: 200,
        });
    }

    #[test]
    fn test_recording_sink_captures_events() {
        let sink = RecordingSink::default();
        sink.emit(&EngineEvent::GenerateInner {
            gen_type: GenType::Integer,
            args: "5".to_string(),
            payload: "(1+1+1+1+1)".to_string(),
        });
        assert_eq!(sink.events.lock().unwrap().len(), 1);
    }
}
