//! Canonical wire-exact literal strings the rule set and primers must
//! reproduce bit-for-bit (spec §6), sourced from
//! `original_source/fenjing/full_payload_gen.py::get_str_context`.

/// Yields `"_"`.
pub const UNDERSCORE_EXPR: &str = "(lipsum|escape|batch(22)|list|first|last)";

/// Yields `"%"`.
pub const PERCENT_EXPR: &str = "(lipsum[(lipsum|escape|batch(22)|list|first|last)*2+dict(globals=x)|join+(lipsum|escape|batch(22)|list|first|last)*2][(lipsum|escape|batch(22)|list|first|last)*2+dict(builtins=x)|join+(lipsum|escape|batch(22)|list|first|last)*2][dict(chr=x)|join](37))";
