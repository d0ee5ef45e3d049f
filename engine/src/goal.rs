/// A semantic target the generator core must synthesize a fragment for.
///
/// Two equal-valued goals are interchangeable (spec §3): `Goal` derives
/// `PartialEq`/`Eq`/`Hash` so it can be used directly as a cache key
/// component, and `Clone` because rules recurse into owned sub-goals.
///
/// `Call` and `AttrChain` are internal composition helpers, not part of the
/// public generation-type surface in [`crate::goal::GenType`] — the rule set
/// uses them to build deeper goal trees (e.g. `os.popen(cmd).read()`) out of
/// the closed set of public types, the same way the rule set composes
/// `Attribute`/`Item` goals out of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Emit `s` verbatim; terminal, probed directly against the oracle.
    Literal(String),
    /// A fragment evaluating to the non-negative integer `n`.
    UnsignedInt(u64),
    /// A fragment evaluating to the (possibly negative) integer `n`.
    Int(i64),
    /// A fragment evaluating to the exact string `s`.
    Str(String),
    /// A non-negative integer meant for use as a sequence index.
    PositiveIntIndex(u64),
    /// `obj.name` with `name` a static identifier.
    Attribute(Box<Goal>, String),
    /// `obj[key]`.
    Item(Box<Goal>, Box<Goal>),
    /// Convenience composite: a chain of attribute accesses off of `obj`.
    AttrChain(Box<Goal>, Vec<String>),
    /// `obj.__class__`.
    ClassAttribute(Box<Goal>),
    /// Obtain a reference to the named module.
    Import(String),
    /// Obtain a reference to the `eval` builtin.
    EvalFunc,
    /// Invoke `eval` on the string `expr`.
    Eval(String),
    /// Reach the Flask `config` global.
    Config,
    /// Run `cmd` through an explicitly-imported `os` module and read its
    /// output.
    ModuleOsPopenRead(String),
    /// Run `cmd` via a path that does not require an explicit import, and
    /// read its output.
    OsPopenRead(String),
    /// Some positive/non-special single character (caller does not care
    /// which).
    PositiveChar,
    /// A fragment evaluating to the single character `c`.
    Char(char),
    /// Internal: call `callee(args...)`.
    Call(Box<Goal>, Vec<Goal>),
}

impl Goal {
    pub fn attribute(obj: Goal, name: impl Into<String>) -> Goal {
        Goal::Attribute(Box::new(obj), name.into())
    }

    pub fn item(obj: Goal, key: Goal) -> Goal {
        Goal::Item(Box::new(obj), Box::new(key))
    }

    pub fn attr_chain(obj: Goal, names: impl IntoIterator<Item = &'static str>) -> Goal {
        Goal::AttrChain(Box::new(obj), names.into_iter().map(String::from).collect())
    }

    pub fn call(callee: Goal, args: Vec<Goal>) -> Goal {
        Goal::Call(Box::new(callee), args)
    }

    /// The stable public generation-type identifier this goal corresponds
    /// to, per spec §6. `Call` and `AttrChain` are internal and have no
    /// public identifier; they fold into [`GenType::ChainedAttributeItem`]
    /// since they only ever appear nested inside a chained-access goal tree.
    pub fn gen_type(&self) -> GenType {
        match self {
            Goal::Literal(_) => GenType::Literal,
            Goal::UnsignedInt(_) => GenType::UnsignedInteger,
            Goal::Int(_) => GenType::Integer,
            Goal::Str(_) => GenType::String,
            Goal::PositiveIntIndex(_) => GenType::PositiveIntIndex,
            Goal::Attribute(_, _) => GenType::Attribute,
            Goal::Item(_, _) => GenType::Item,
            Goal::AttrChain(_, _) => GenType::ChainedAttributeItem,
            Goal::ClassAttribute(_) => GenType::ClassAttribute,
            Goal::Import(_) => GenType::ImportFunc,
            Goal::EvalFunc => GenType::EvalFunc,
            Goal::Eval(_) => GenType::Eval,
            Goal::Config => GenType::Config,
            Goal::ModuleOsPopenRead(_) => GenType::ModuleOsPopenRead,
            Goal::OsPopenRead(_) => GenType::OsPopenRead,
            Goal::PositiveChar => GenType::PositiveChar,
            Goal::Char(_) => GenType::Char,
            Goal::Call(_, _) => GenType::ChainedAttributeItem,
        }
    }
}

/// The closed, stable set of generation-type identifiers from spec §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenType {
    UnsignedInteger,
    Integer,
    String,
    PositiveIntIndex,
    Attribute,
    Item,
    ClassAttribute,
    ChainedAttributeItem,
    ImportFunc,
    EvalFunc,
    Eval,
    Config,
    ModuleOsPopenRead,
    OsPopenRead,
    PositiveChar,
    Char,
    Literal,
}
