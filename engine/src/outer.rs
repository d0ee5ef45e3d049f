//! Outer-pattern selector (C6, spec §4.5): picks the statement shell the
//! inner expression fragment gets spliced into.

use tracing::debug;

use crate::oracle::Oracle;

/// A candidate outer wrapper: a fixed probe literal, a template with a
/// single `PAYLOAD` substitution slot, and whether the server's
/// evaluation of that slot is echoed into the response (spec §13's
/// `will_print` flags, renamed `will_echo` per spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OuterPattern {
    pub probe: &'static str,
    pub template: &'static str,
    pub will_echo: bool,
}

impl OuterPattern {
    pub fn wrap(&self, inner: &str) -> String {
        self.template.replacen("PAYLOAD", inner, 1)
    }
}

/// Fixed probe order, exact literals and `will_echo` flags reproduced
/// from `original_source/fenjing/full_payload_gen.py::get_outer_pattern`.
const PATTERNS: [OuterPattern; 4] = [
    OuterPattern {
        probe: "{{}}",
        template: "{{PAYLOAD}}",
        will_echo: true,
    },
    OuterPattern {
        probe: "{%print()%}",
        template: "{%print(PAYLOAD)%}",
        will_echo: true,
    },
    OuterPattern {
        probe: "{%if()%}{%endif%}",
        template: "{%if(PAYLOAD)%}{%endif%}",
        will_echo: false,
    },
    OuterPattern {
        probe: "{% set x= %}",
        template: "{% set x=PAYLOAD %}",
        will_echo: false,
    },
];

/// Probe each pattern in order, returning the first the oracle accepts.
/// `None` means preparation fails (spec §4.5).
pub fn select(oracle: &dyn Oracle) -> Option<OuterPattern> {
    for pattern in PATTERNS {
        if oracle.check(pattern.probe) {
            debug!(probe = pattern.probe, "outer pattern accepted");
            return Some(pattern);
        }
    }
    None
}
