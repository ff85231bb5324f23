use std::str::FromStr;

use crate::api::capture::{capture, capture_tuple, Descriptor, InvalidCapture};
use crate::model::{Flag, Kind, Parsed};
use crate::parser::{Metadata, ParseError, Position, Token, TokenStream};
use crate::prelude::TupleValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

fn malformed(token: &Token, reason: InvalidCapture) -> ParseError {
    ParseError::MalformedValue {
        token: token.value().to_string(),
        offset: token.offset(),
        reason,
    }
}

fn capture_token<T: FromStr>(token: &Token) -> Result<T, ParseError> {
    capture(token.value()).map_err(|reason| malformed(token, reason))
}

/// One occurrence of a flag along with the value tokens which follow it.
#[derive(Debug)]
struct Occurrence {
    position: Position,
    flag: Token,
    values: Vec<Token>,
}

impl Occurrence {
    fn find(stream: &TokenStream, flag: &Flag, from: Position) -> Option<Position> {
        stream
            .scan_from(from)
            .find(|(_, token)| flag.matches(token.value()))
            .map(|(position, _)| position)
    }

    /// The first occurrence of `flag`, with its `arity` values.
    fn first(
        stream: &TokenStream,
        flag: &Flag,
        arity: usize,
    ) -> Result<Option<Occurrence>, ParseError> {
        match Self::find(stream, flag, Position::FRONT) {
            Some(position) => Ok(Some(Self::gather(stream, position, arity)?)),
            None => Ok(None),
        }
    }

    /// Every occurrence of `flag`, with their `arity` values.
    /// The values of one occurrence are never treated as the flag of another.
    fn all(stream: &TokenStream, flag: &Flag, arity: usize) -> Result<Vec<Occurrence>, ParseError> {
        let mut occurrences = Vec::default();
        let mut from = Position::FRONT;

        while let Some(position) = Self::find(stream, flag, from) {
            let occurrence = Self::gather(stream, position, arity)?;
            from = position.skip(occurrence.width());
            occurrences.push(occurrence);
        }

        Ok(occurrences)
    }

    fn gather(stream: &TokenStream, position: Position, arity: usize) -> Result<Self, ParseError> {
        let flag = stream
            .value_at(position)
            .cloned()
            .expect("internal error - the flag position must be valid");
        let values: Vec<Token> = (1..=arity)
            .map_while(|i| stream.value_at(position.skip(i)).cloned())
            .collect();
        let occurrence = Self {
            position,
            flag,
            values,
        };

        match occurrence.values.len() {
            0 if arity > 0 => Err(ParseError::MissingValue {
                flag: occurrence.flag.value().to_string(),
                offset: occurrence.flag.offset(),
            }),
            provided if provided < arity => Err(ParseError::IncompleteTuple {
                flag: occurrence.flag.value().to_string(),
                provided,
                expected: arity,
                offset: occurrence.flag.offset(),
            }),
            _ => Ok(occurrence),
        }
    }

    fn width(&self) -> usize {
        1 + self.values.len()
    }

    fn capture<T: FromStr>(&self) -> Result<T, ParseError> {
        let token = self
            .values
            .first()
            .expect("internal error - occurrence must have a value");
        capture_token(token)
    }

    fn capture_tuple<T: TupleValue>(&self) -> Result<T, ParseError> {
        let fields: Vec<&str> = self.values.iter().map(Token::value).collect();
        capture_tuple(&fields).map_err(|reason| {
            // Blame the value token which failed, falling back to the first.
            let token = self
                .values
                .iter()
                .find(|token| token.value() == reason.token())
                .unwrap_or(&self.values[0]);
            malformed(token, reason)
        })
    }

    /// Fail when `flag` occurs again after this occurrence.
    fn ensure_unique(&self, stream: &TokenStream, flag: &Flag) -> Result<(), ParseError> {
        match Self::find(stream, flag, self.position.skip(self.width())) {
            Some(position) => {
                let duplicate = stream
                    .value_at(position)
                    .expect("internal error - the duplicate position must be valid");
                Err(ParseError::DuplicateArgument {
                    flag: duplicate.value().to_string(),
                    offset: duplicate.offset(),
                })
            }
            None => Ok(()),
        }
    }

    fn span(&self) -> (Position, usize) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Consuming '{}' at offset {} with {} value(s).",
                self.flag.value(),
                self.flag.offset(),
                self.values.len()
            );
        }

        (self.position, self.width())
    }

    fn remove(self, stream: &mut TokenStream) {
        let (position, count) = self.span();
        stream.remove_span(position, count);
    }
}

// Occurrences are gathered front to back, so their spans are ordered and disjoint.
fn remove_all(occurrences: Vec<Occurrence>, stream: &mut TokenStream) {
    let spans: Vec<(Position, usize)> = occurrences.iter().map(Occurrence::span).collect();
    stream.remove_spans(&spans);
}

/// A positional parameter that takes the front token of the command line.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{Argument, CommandLine};
///
/// let mut cli = CommandLine::new("program", &["1", "2"]);
/// let a = cli.add(Argument::new(0u32));
/// let b = cli.add(Argument::new(0u32));
/// let c = cli.add(Argument::new(0u32));
///
/// assert_eq!((*a, *b, *c), (1, 2, 0));
/// assert!(!c.is_found());
/// ```
pub struct Argument<T> {
    default: T,
    help: Option<String>,
}

impl<T> Argument<T> {
    /// Create a positional parameter, with the value `default` when the command line is exhausted.
    pub fn new(default: T) -> Self {
        Self {
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: FromStr> Descriptor for Argument<T> {
    type Value = T;

    fn metadata(&self) -> Metadata {
        Metadata::new(Kind::Argument, Flag::default(), self.help.clone(), 1)
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<T>, ParseError> {
        let Some((position, token)) = stream.front() else {
            return Ok(Parsed::new(self.default, false));
        };
        let value = capture_token(token)?;
        stream.remove(position);
        Ok(Parsed::new(value, true))
    }
}

/// A positional parameter that takes a run of front tokens, up to a maximum.
///
/// A `maximum` of `0` takes every remaining token.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{ArgumentList, CommandLine};
///
/// let mut cli = CommandLine::new("program", &["a", "b", "c"]);
/// let first = cli.add(ArgumentList::new(Vec::<String>::default(), 2));
/// let rest = cli.add(ArgumentList::new(Vec::<String>::default(), 0));
///
/// assert_eq!(*first, vec!["a", "b"]);
/// assert_eq!(*rest, vec!["c"]);
/// ```
pub struct ArgumentList<T> {
    default: Vec<T>,
    maximum: usize,
    help: Option<String>,
}

impl<T> ArgumentList<T> {
    /// Create a positional list parameter, with the value `default` when nothing is collected.
    pub fn new(default: Vec<T>, maximum: usize) -> Self {
        Self {
            default,
            maximum,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: FromStr> Descriptor for ArgumentList<T> {
    type Value = Vec<T>;

    fn metadata(&self) -> Metadata {
        Metadata::new(
            Kind::ArgumentList,
            Flag::default(),
            self.help.clone(),
            self.maximum,
        )
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<Vec<T>>, ParseError> {
        let limit = if self.maximum == 0 {
            usize::MAX
        } else {
            self.maximum
        };
        let values = stream
            .scan()
            .take(limit)
            .map(|(_, token)| capture_token(token))
            .collect::<Result<Vec<T>, ParseError>>()?;

        if values.is_empty() {
            return Ok(Parsed::new(self.default, false));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Consuming {} positional value(s).", values.len());
        }

        stream.remove_span(Position::FRONT, values.len());
        Ok(Parsed::new(values, true))
    }
}

/// An option parameter that takes no values; its presence inverts the default.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{CommandLine, Switch};
///
/// let mut cli = CommandLine::new("program", &["--verbose"]);
/// let verbose = cli.add(Switch::new(("-v", "--verbose"), false));
/// let color = cli.add(Switch::new("--no-color", true));
///
/// assert!(*verbose);
/// assert!(*color);
/// ```
pub struct Switch {
    flag: Flag,
    default: bool,
    help: Option<String>,
}

impl Switch {
    /// Create a switch parameter.
    pub fn new(flag: impl Into<Flag>, default: bool) -> Self {
        Self {
            flag: flag.into(),
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl Descriptor for Switch {
    type Value = bool;

    fn metadata(&self) -> Metadata {
        Metadata::new(Kind::Switch, self.flag.clone(), self.help.clone(), 0)
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<bool>, ParseError> {
        match Occurrence::first(stream, &self.flag, 0)? {
            Some(occurrence) => {
                occurrence.ensure_unique(stream, &self.flag)?;
                occurrence.remove(stream);
                Ok(Parsed::new(!self.default, true))
            }
            None => Ok(Parsed::new(self.default, false)),
        }
    }
}

/// An option parameter that takes a single value (precisely 1), at most once.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{CommandLine, Scalar};
///
/// let mut cli = CommandLine::new("program", &["-vad", "1.1", "-vai", "-2"]);
/// let vad = cli.add(Scalar::new(("-vad", "--va-double"), 0.0f64));
/// let vai = cli.add(Scalar::new(("-vai", "--va-int"), 0i32));
///
/// assert_eq!(*vad, 1.1);
/// assert_eq!(*vai, -2);
/// assert!(cli.remaining().is_empty());
/// ```
pub struct Scalar<T> {
    flag: Flag,
    default: T,
    help: Option<String>,
}

impl<T> Scalar<T> {
    /// Create a scalar parameter.
    pub fn new(flag: impl Into<Flag>, default: T) -> Self {
        Self {
            flag: flag.into(),
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: FromStr> Descriptor for Scalar<T> {
    type Value = T;

    fn metadata(&self) -> Metadata {
        Metadata::new(Kind::Scalar, self.flag.clone(), self.help.clone(), 1)
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<T>, ParseError> {
        match Occurrence::first(stream, &self.flag, 1)? {
            Some(occurrence) => {
                let value = occurrence.capture()?;
                occurrence.ensure_unique(stream, &self.flag)?;
                occurrence.remove(stream);
                Ok(Parsed::new(value, true))
            }
            None => Ok(Parsed::new(self.default, false)),
        }
    }
}

/// An option parameter that takes a single value per occurrence, any number of times.
///
/// When the flag never occurs, the value is precisely one `default`.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{Collection, CommandLine};
///
/// let mut cli = CommandLine::new("program", &["-i", "1", "x", "-i", "2"]);
/// let includes = cli.add(Collection::new("-i", 0u32));
/// let excludes = cli.add(Collection::new("-e", 0u32));
///
/// assert_eq!(*includes, vec![1, 2]);
/// assert_eq!(*excludes, vec![0]);
/// assert_eq!(cli.remaining(), vec!["x"]);
/// ```
pub struct Collection<T> {
    flag: Flag,
    default: T,
    help: Option<String>,
}

impl<T> Collection<T> {
    /// Create a collection parameter.
    pub fn new(flag: impl Into<Flag>, default: T) -> Self {
        Self {
            flag: flag.into(),
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: FromStr> Descriptor for Collection<T> {
    type Value = Vec<T>;

    fn metadata(&self) -> Metadata {
        Metadata::new(Kind::Collection, self.flag.clone(), self.help.clone(), 1)
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<Vec<T>>, ParseError> {
        let occurrences = Occurrence::all(stream, &self.flag, 1)?;

        if occurrences.is_empty() {
            return Ok(Parsed::new(vec![self.default], false));
        }

        let values = occurrences
            .iter()
            .map(Occurrence::capture)
            .collect::<Result<Vec<T>, ParseError>>()?;
        remove_all(occurrences, stream);
        Ok(Parsed::new(values, true))
    }
}

/// An option parameter that takes a fixed number of heterogeneous values, at most once.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{CommandLine, Tuple};
///
/// let mut cli = CommandLine::new("program", &["-t3", "4.4", "4", "str"]);
/// let t3 = cli.add(Tuple::new(("-t3", "--tuple3"), (0.0f64, 0i32, "string".to_string())));
///
/// assert_eq!(*t3, (4.4, 4, "str".to_string()));
/// ```
pub struct Tuple<T> {
    flag: Flag,
    default: T,
    help: Option<String>,
}

impl<T> Tuple<T> {
    /// Create a tuple parameter.
    pub fn new(flag: impl Into<Flag>, default: T) -> Self {
        Self {
            flag: flag.into(),
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: TupleValue> Descriptor for Tuple<T> {
    type Value = T;

    fn metadata(&self) -> Metadata {
        Metadata::new(Kind::Tuple, self.flag.clone(), self.help.clone(), T::ARITY)
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<T>, ParseError> {
        match Occurrence::first(stream, &self.flag, T::ARITY)? {
            Some(occurrence) => {
                let value = occurrence.capture_tuple()?;
                occurrence.ensure_unique(stream, &self.flag)?;
                occurrence.remove(stream);
                Ok(Parsed::new(value, true))
            }
            None => Ok(Parsed::new(self.default, false)),
        }
    }
}

/// An option parameter that takes a fixed number of heterogeneous values per occurrence, any number of times.
///
/// When the flag never occurs, the value is precisely one `default`.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{CommandLine, TupleCollection};
///
/// let mut cli = CommandLine::new("program", &["-mt3", "5.5", "5", "str1", "-mt3", "6.6", "6", "str2"]);
/// let mt3 = cli.add(TupleCollection::new("-mt3", (0.0f64, 0i32, String::default())));
///
/// assert_eq!(
///     *mt3,
///     vec![(5.5, 5, "str1".to_string()), (6.6, 6, "str2".to_string())]
/// );
/// ```
pub struct TupleCollection<T> {
    flag: Flag,
    default: T,
    help: Option<String>,
}

impl<T> TupleCollection<T> {
    /// Create a tuple collection parameter.
    pub fn new(flag: impl Into<Flag>, default: T) -> Self {
        Self {
            flag: flag.into(),
            default,
            help: None,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }
}

impl<T: TupleValue> Descriptor for TupleCollection<T> {
    type Value = Vec<T>;

    fn metadata(&self) -> Metadata {
        Metadata::new(
            Kind::TupleCollection,
            self.flag.clone(),
            self.help.clone(),
            T::ARITY,
        )
    }

    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<Vec<T>>, ParseError> {
        let occurrences = Occurrence::all(stream, &self.flag, T::ARITY)?;

        if occurrences.is_empty() {
            return Ok(Parsed::new(vec![self.default], false));
        }

        let values = occurrences
            .iter()
            .map(Occurrence::capture_tuple)
            .collect::<Result<Vec<T>, ParseError>>()?;
        remove_all(occurrences, stream);
        Ok(Parsed::new(values, true))
    }
}
