//! Reserved keywords and built-in names
//!
//! Both are plain data tables so that adding a keyword or a built-in is a
//! one-line change; the grammar consults them and never hard-codes names.

use std::fmt;

/// Words that can never be used as unquoted labels.
///
/// A backtick-quoted label may still spell one of these.
pub const KEYWORDS: &[&str] = &[
    "if", "then", "else", "let", "in", "using", "missing", "assert", "as", "Infinity", "NaN",
    "merge", "Some", "toMap", "forall",
];

pub fn is_keyword(label: &str) -> bool {
    KEYWORDS.contains(&label)
}

/// The built-in names of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    NaturalFold,
    NaturalBuild,
    NaturalIsZero,
    NaturalEven,
    NaturalOdd,
    NaturalToInteger,
    NaturalShow,
    NaturalSubtract,
    IntegerToDouble,
    IntegerShow,
    IntegerNegate,
    IntegerClamp,
    DoubleShow,
    ListBuild,
    ListFold,
    ListLength,
    ListHead,
    ListLast,
    ListIndexed,
    ListReverse,
    OptionalFold,
    OptionalBuild,
    TextShow,
    Bool,
    True,
    False,
    Optional,
    /// `None`
    OptionalNone,
    Natural,
    Integer,
    Double,
    Text,
    List,
    Type,
    Kind,
    Sort,
}

/// Built-in spellings, longest alternative first.
///
/// No entry is a prefix of an entry that follows it, so a first-match scan
/// never lets `Natural` shadow `Natural/show`.
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("Natural/toInteger", Builtin::NaturalToInteger),
    ("Natural/subtract", Builtin::NaturalSubtract),
    ("Natural/isZero", Builtin::NaturalIsZero),
    ("Natural/build", Builtin::NaturalBuild),
    ("Natural/fold", Builtin::NaturalFold),
    ("Natural/even", Builtin::NaturalEven),
    ("Natural/show", Builtin::NaturalShow),
    ("Natural/odd", Builtin::NaturalOdd),
    ("Integer/toDouble", Builtin::IntegerToDouble),
    ("Integer/negate", Builtin::IntegerNegate),
    ("Integer/clamp", Builtin::IntegerClamp),
    ("Integer/show", Builtin::IntegerShow),
    ("Double/show", Builtin::DoubleShow),
    ("List/indexed", Builtin::ListIndexed),
    ("List/reverse", Builtin::ListReverse),
    ("List/length", Builtin::ListLength),
    ("List/build", Builtin::ListBuild),
    ("List/fold", Builtin::ListFold),
    ("List/head", Builtin::ListHead),
    ("List/last", Builtin::ListLast),
    ("Optional/build", Builtin::OptionalBuild),
    ("Optional/fold", Builtin::OptionalFold),
    ("Text/show", Builtin::TextShow),
    ("Optional", Builtin::Optional),
    ("Natural", Builtin::Natural),
    ("Integer", Builtin::Integer),
    ("Double", Builtin::Double),
    ("False", Builtin::False),
    ("Bool", Builtin::Bool),
    ("True", Builtin::True),
    ("None", Builtin::OptionalNone),
    ("Text", Builtin::Text),
    ("List", Builtin::List),
    ("Type", Builtin::Type),
    ("Kind", Builtin::Kind),
    ("Sort", Builtin::Sort),
];

impl Builtin {
    /// Looks up a complete label in the built-in table.
    pub fn from_label(label: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, builtin)| *builtin)
    }

    pub fn as_str(self) -> &'static str {
        BUILTINS
            .iter()
            .find(|(_, builtin)| *builtin == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

pub fn is_builtin(label: &str) -> bool {
    Builtin::from_label(label).is_some()
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
