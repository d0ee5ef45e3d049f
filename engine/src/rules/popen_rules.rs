//! `OsPopenRead`/`ModuleOsPopenRead` rule family (spec §4.1).

use super::shared::{globals_via_lipsum, globals_via_subclass_walk, module_via_globals, popen_read_from};
use crate::goal::Goal;
use crate::rule::RuleApplication;

/// `ModuleOsPopenRead` goes through the explicit `Import("os")` goal — a
/// config-object-globals-style module lookup — per `DESIGN.md`'s
/// resolution of the spec's terminology overlap between the two goals.
pub fn applicable_module(cmd: &str) -> Vec<RuleApplication> {
    vec![RuleApplication::passthrough(
        "module_os_popen_read",
        0,
        popen_read_from(Goal::Import("os".to_string()), cmd),
    )]
}

/// `OsPopenRead` gets its own independent alternatives rather than being a
/// thin wrapper around `ModuleOsPopenRead` (graceful degradation, spec
/// §4.1's design rationale): the cheap `lipsum.__globals__['os']`
/// shortcut first, falling back to the more portable subclass walk.
pub fn applicable_direct(cmd: &str) -> Vec<RuleApplication> {
    vec![
        RuleApplication::passthrough(
            "os_popen_read_via_lipsum",
            0,
            popen_read_from(module_via_globals(globals_via_lipsum(), "os"), cmd),
        ),
        RuleApplication::passthrough(
            "os_popen_read_via_subclass_walk",
            10,
            popen_read_from(module_via_globals(globals_via_subclass_walk(), "os"), cmd),
        ),
    ]
}
