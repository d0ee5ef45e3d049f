//! `Import` rule family: obtain a module reference by indexing the
//! globals dict of some already-loaded class (spec §4.1's `ClassAttribute
//! → __mro__[…] → __subclasses__()[…] → __init__.__globals__` walk).

use super::shared::{globals_via_lipsum, globals_via_subclass_walk, module_via_globals};
use crate::rule::RuleApplication;

pub fn applicable(module: &str) -> Vec<RuleApplication> {
    vec![
        RuleApplication::passthrough(
            "import_via_lipsum_globals",
            0,
            module_via_globals(globals_via_lipsum(), module),
        ),
        RuleApplication::passthrough(
            "import_via_subclass_walk",
            10,
            module_via_globals(globals_via_subclass_walk(), module),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_alternatives_in_priority_order() {
        let rules = applicable("os");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "import_via_lipsum_globals");
        assert!(rules[1].priority > rules[0].priority);
    }
}
