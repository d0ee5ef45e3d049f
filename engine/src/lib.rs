//! `ssti_engine`: a rule-based payload generation engine for server-side
//! template injection under a black-box WAF oracle.
//!
//! The public entry point is [`assembler::PayloadEngine`]. Construct one
//! over an [`oracle::Oracle`] (any `Fn(&str) -> bool` closure qualifies),
//! then call [`assembler::PayloadEngine::full_generate`] with a
//! [`goal::Goal`] describing what the payload should evaluate to.
//!
//! ```no_run
//! use ssti_engine::{Goal, PayloadEngine};
//!
//! let denylist = |fragment: &str| !fragment.contains("__import__");
//! let engine = PayloadEngine::new(denylist);
//! if let Some((payload, will_echo)) =
//!     engine.full_generate(Goal::OsPopenRead("id".to_string()))
//! {
//!     println!("{payload} (echoes: {will_echo})");
//! }
//! ```

pub mod assembler;
pub mod cache;
pub mod canonical;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod generator;
pub mod goal;
pub mod oracle;
pub mod outer;
pub mod primers;
pub mod rule;
mod rules;

pub use assembler::PayloadEngine;
pub use config::{EngineConfig, LoggingConfig};
pub use context::Context;
pub use error::{EngineError, Result};
pub use events::{EngineEvent, EventSink, NullSink};
pub use goal::{GenType, Goal};
pub use oracle::{MemoizingOracle, Oracle};
pub use outer::OuterPattern;
