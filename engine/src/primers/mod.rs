//! Context-priming layer (C4, C5): runs once per oracle, binding reusable
//! auxiliary variables so deeper rules can satisfy goals by variable
//! reference rather than re-derivation.

pub mod int_primer;
pub mod string_primer;
