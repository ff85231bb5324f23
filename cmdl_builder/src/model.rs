use std::ops::Deref;

/// The parsing policy of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A single positional value.
    Argument,
    /// A run of positional values, optionally bounded.
    ArgumentList,
    /// A flag without values.
    Switch,
    /// A flag followed by one value, at most once.
    Scalar,
    /// A flag followed by one value, repeatable.
    Collection,
    /// A flag followed by a fixed number of values, at most once.
    Tuple,
    /// A flag followed by a fixed number of values, repeatable.
    TupleCollection,
}

impl Kind {
    /// Whether this kind binds by position (rather than by flag name).
    pub fn is_positional(&self) -> bool {
        matches!(self, Kind::Argument | Kind::ArgumentList)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The names by which an option is matched on the command line.
///
/// Names are matched verbatim against whole tokens, so they include their dashes (ex: `-v` and `--verbose`).
/// An empty name is treated as absent.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::Flag;
///
/// let flag = Flag::from(("-v", "--verbose"));
/// assert!(flag.matches("-v"));
/// assert!(flag.matches("--verbose"));
/// assert!(!flag.matches("-verbose"));
///
/// // A single name is classified by its prefix.
/// assert_eq!(Flag::from("--count"), Flag::long("--count"));
/// assert_eq!(Flag::from("-c"), Flag::short("-c"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Flag {
    short: Option<String>,
    long: Option<String>,
}

impl Flag {
    /// Create a flag with both a short and a long name.
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: non_empty(short.into()),
            long: non_empty(long.into()),
        }
    }

    /// Create a flag with only a short name.
    pub fn short(name: impl Into<String>) -> Self {
        Self {
            short: non_empty(name.into()),
            long: None,
        }
    }

    /// Create a flag with only a long name.
    pub fn long(name: impl Into<String>) -> Self {
        Self {
            short: None,
            long: non_empty(name.into()),
        }
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long name, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Whether `token` is precisely one of the names of this flag.
    pub fn matches(&self, token: &str) -> bool {
        self.names().any(|name| name == token)
    }

    /// Whether this flag has no names at all.
    pub fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.short.iter().chain(self.long.iter()).map(String::as_str)
    }
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

impl From<&str> for Flag {
    fn from(value: &str) -> Self {
        if value.starts_with("--") {
            Flag::long(value)
        } else {
            Flag::short(value)
        }
    }
}

impl From<String> for Flag {
    fn from(value: String) -> Self {
        Flag::from(value.as_str())
    }
}

impl From<(&str, &str)> for Flag {
    fn from(value: (&str, &str)) -> Self {
        Flag::new(value.0, value.1)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names().collect::<Vec<&str>>().join("/"))
    }
}

/// The value of a bound parameter, along with whether it was actually present on the command line.
///
/// When `found` is false, the value is the default supplied at declaration.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{CommandLine, Scalar};
///
/// let mut cli = CommandLine::new("program", &["--count", "3"]);
/// let count = cli.add(Scalar::new("--count", 0u32));
/// let width = cli.add(Scalar::new("--width", 80u32));
///
/// assert_eq!((*count.value(), count.is_found()), (3, true));
/// assert_eq!((*width.value(), width.is_found()), (80, false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    value: T,
    found: bool,
}

impl<T> Parsed<T> {
    /// Create a parsed value.
    pub fn new(value: T, found: bool) -> Self {
        Self { value, found }
    }

    /// The parsed (or default) value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether at least one matching token was consumed.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Take the parsed (or default) value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Take the value and presence flag together.
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.found)
    }
}

impl<T> Deref for Parsed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Argument, true)]
    #[case(Kind::ArgumentList, true)]
    #[case(Kind::Switch, false)]
    #[case(Kind::Scalar, false)]
    #[case(Kind::Collection, false)]
    #[case(Kind::Tuple, false)]
    #[case(Kind::TupleCollection, false)]
    fn kind_class(#[case] kind: Kind, #[case] positional: bool) {
        assert_eq!(kind.is_positional(), positional);
    }

    #[rstest]
    #[case(Flag::from("-v"), Some("-v"), None)]
    #[case(Flag::from("--verbose"), None, Some("--verbose"))]
    #[case(Flag::from(("-v", "--verbose")), Some("-v"), Some("--verbose"))]
    #[case(Flag::from(("", "--verbose")), None, Some("--verbose"))]
    #[case(Flag::from(("-v", "")), Some("-v"), None)]
    #[case(Flag::from(("", "")), None, None)]
    fn flag_names(
        #[case] flag: Flag,
        #[case] short: Option<&str>,
        #[case] long: Option<&str>,
    ) {
        assert_eq!(flag.short_name(), short);
        assert_eq!(flag.long_name(), long);
        assert_eq!(flag.is_empty(), short.is_none() && long.is_none());
    }

    #[test]
    fn flag_matches() {
        let flag = Flag::new("-v", "--verbose");
        assert!(flag.matches("-v"));
        assert!(flag.matches("--verbose"));
        assert!(!flag.matches("v"));
        assert!(!flag.matches("-V"));
        assert!(!flag.matches(""));
        assert!(!Flag::default().matches(""));
    }

    #[test]
    fn flag_display() {
        assert_eq!(Flag::new("-v", "--verbose").to_string(), "-v/--verbose");
        assert_eq!(Flag::long("--verbose").to_string(), "--verbose");
        assert_eq!(Flag::default().to_string(), "");
    }

    #[test]
    fn parsed() {
        let parsed = Parsed::new(vec![1, 2], true);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.value(), &vec![1, 2]);
        assert!(parsed.is_found());
        assert_eq!(parsed.into_parts(), (vec![1, 2], true));
    }
}
