//! Full-payload assembler (C7, spec §4.6/§4.7): the engine's public
//! entry point, `PayloadEngine`. Sequences the primers and outer-pattern
//! selector exactly once per oracle, then delegates each user goal to the
//! generator core and splices the result into the chosen wrapper.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::{info, instrument, warn};

use crate::cache::GenerationCache;
use crate::config::EngineConfig;
use crate::context::Context;
use crate::events::{EngineEvent, EventSink, NullSink};
use crate::generator;
use crate::goal::Goal;
use crate::oracle::Oracle;
use crate::outer::{self, OuterPattern};
use crate::primers::{int_primer, string_primer};

/// The assembler's three-state lifecycle (spec §4.7), made explicit
/// rather than the single `prepared: bool` the original source uses, per
/// `DESIGN.md`'s resolution of Design Note (2).
enum AssemblerState {
    Fresh,
    Prepared(PreparedData),
    Failed,
}

struct PreparedData {
    priming_prefix: String,
    context: Context,
    outer: OuterPattern,
}

/// Owns the oracle, the engine-wide configuration, the generation cache,
/// and the assembler's one-time preparation state. Safe to share across
/// threads: the only mutable state is the state machine and the
/// generation cache, both mutex-guarded (spec §5).
pub struct PayloadEngine<O: Oracle> {
    oracle: O,
    config: EngineConfig,
    cache: GenerationCache,
    state: Mutex<AssemblerState>,
    sink: Box<dyn EventSink>,
}

impl<O: Oracle> PayloadEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, EngineConfig::default())
    }

    pub fn with_config(oracle: O, config: EngineConfig) -> Self {
        Self::with_sink(oracle, config, Box::new(NullSink))
    }

    pub fn with_sink(oracle: O, config: EngineConfig, sink: Box<dyn EventSink>) -> Self {
        Self {
            oracle,
            config,
            cache: GenerationCache::new(),
            state: Mutex::new(AssemblerState::Fresh),
            sink,
        }
    }

    /// Run C4 → C5 → C6 exactly once. Subsequent calls are no-ops that
    /// report the cached outcome (spec §4.7's Fresh → Prepared/Failed
    /// transition, Prepared/Failed both terminal thereafter).
    fn prepare(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        match &*state {
            AssemblerState::Prepared(_) => return true,
            AssemblerState::Failed => return false,
            AssemblerState::Fresh => {}
        }

        let (int_prefix, int_context) = int_primer::prime(&self.oracle, &self.config);
        let (str_prefix, str_context) = string_primer::prime(&self.oracle);

        let mut context = int_context;
        context.extend(str_context);
        let priming_prefix = format!("{int_prefix}{str_prefix}");

        match outer::select(&self.oracle) {
            Some(pattern) => {
                if pattern.will_echo {
                    info!(outer = pattern.probe, bound_vars = context.iter().count(), "prepared");
                } else {
                    warn!(
                        outer = pattern.probe,
                        "prepared with a non-echoing outer wrapper; generated payloads will not surface their result"
                    );
                }

                let context_map: BTreeMap<String, String> = context
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                self.sink.emit(&EngineEvent::PrepareFull {
                    context: context_map,
                    will_echo: pattern.will_echo,
                });

                *state = AssemblerState::Prepared(PreparedData {
                    priming_prefix,
                    context,
                    outer: pattern,
                });
                true
            }
            None => {
                warn!("preparation failed: every outer wrapper was rejected by the oracle");
                *state = AssemblerState::Failed;
                false
            }
        }
    }

    /// Synthesize a full payload for `goal`: `(payload, will_echo)`, or
    /// `None` if preparation or generation failed.
    #[instrument(skip(self), fields(goal = ?goal))]
    pub fn full_generate(&self, goal: Goal) -> Option<(String, bool)> {
        if !self.prepare() {
            return None;
        }

        let state = self.state.lock().unwrap();
        let prepared = match &*state {
            AssemblerState::Prepared(p) => p,
            _ => return None,
        };

        let gen_type = goal.gen_type();
        let on_inner = |g: &Goal, payload: &str| {
            self.sink.emit(&EngineEvent::GenerateInner {
                gen_type: g.gen_type(),
                args: format!("{g:?}"),
                payload: payload.to_string(),
            });
        };

        let inner = generator::generate_with_events(
            &goal,
            &prepared.context,
            &self.config,
            &self.oracle,
            &self.cache,
            Some(&on_inner),
        );

        let inner = match inner {
            Some(inner) => inner,
            None => {
                warn!("bypassing WAF failed for this goal");
                return None;
            }
        };

        let payload = format!("{}{}", prepared.priming_prefix, prepared.outer.wrap(&inner));

        self.sink.emit(&EngineEvent::GenerateFull {
            gen_type,
            payload: payload.clone(),
            will_echo: prepared.outer.will_echo,
        });

        Some((payload, prepared.outer.will_echo))
    }

    /// Convenience wrapper discarding the `will_echo` flag.
    pub fn generate(&self, goal: Goal) -> Option<String> {
        self.full_generate(goal).map(|(payload, _)| payload)
    }
}
