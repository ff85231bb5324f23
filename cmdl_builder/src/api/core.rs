use std::io;

use crate::api::capture::Descriptor;
use crate::constant::{GUIDANCE, TERMINAL};
use crate::model::{Kind, Parsed};
use crate::parser::{
    ConfigError, ConsoleInterface, Error, ErrorContext, Metadata, ParseError, Printer, RecordId,
    Registry, TokenStream, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

enum Failure {
    Exit,
    #[cfg_attr(not(any(test, feature = "unit_test")), allow(dead_code))]
    Panic,
}

/// A descriptor which has been registered with a [`CommandLine`], but not yet bound.
///
/// Produced by [`CommandLine::declare`]; consumed by [`CommandLine::bind`] or [`CommandLine::withdraw`].
pub struct Declared<D> {
    id: RecordId,
    descriptor: D,
}

impl<D> Declared<D> {
    /// The registry identity of this declaration.
    pub fn id(&self) -> RecordId {
        self.id
    }
}

/// The parsing context: owns the unconsumed command line and the registry of declared parameters.
///
/// Parameters are bound one at a time, in the order of the host's choosing.
/// Each bind immediately consumes its matching tokens, so later parameters only see what earlier ones left behind.
/// Since positional parameters take whatever is at the front of the command line, bind option parameters first.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// use cmdl::{Argument, ArgumentList, CommandLine, Switch};
///
/// let mut cli = CommandLine::new("program", &["1", "-v", "a", "b"]);
/// let verbose = cli.add(Switch::new(("-v", "--verbose"), false).help("Print more."));
/// let count = cli.add(Argument::new(0u32).help("The count."));
/// let names = cli.add(ArgumentList::new(Vec::<String>::default(), 0).help("The names."));
///
/// assert!(*verbose);
/// assert_eq!(*count, 1);
/// assert_eq!(*names, vec!["a", "b"]);
/// assert!(cli.remaining().is_empty());
/// ```
pub struct CommandLine {
    program: String,
    input: Vec<String>,
    stream: TokenStream,
    registry: Registry,
    user_interface: Box<dyn UserInterface>,
    failure: Failure,
}

impl CommandLine {
    /// Create a command line from the process arguments; the first argument is the program name.
    pub fn from_env() -> Self {
        let mut arguments = std::env::args();
        let program = arguments.next().unwrap_or_default();
        Self::with_interface(
            program,
            arguments.collect(),
            Box::new(ConsoleInterface::default()),
        )
    }

    /// Create a command line for `program` from `tokens`.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::CommandLine;
    ///
    /// let cli = CommandLine::new("program", &["a", "--", "b"]);
    /// assert_eq!(cli.program(), "program");
    /// assert_eq!(cli.remaining(), vec!["a"]);
    /// ```
    pub fn new(program: impl Into<String>, tokens: &[&str]) -> Self {
        Self::with_interface(
            program,
            tokens.iter().map(|t| t.to_string()).collect(),
            Box::new(ConsoleInterface::default()),
        )
    }

    /// Create a command line from whitespace delimited text; the first word is the program name.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::CommandLine;
    ///
    /// let cli = CommandLine::from_command_line("program  -x 1");
    /// assert_eq!(cli.program(), "program");
    /// assert_eq!(cli.remaining(), vec!["-x", "1"]);
    /// assert_eq!(cli.command_line(), "program -x 1");
    /// ```
    pub fn from_command_line(command_line: &str) -> Self {
        let mut words = command_line.split_whitespace();
        let program = words.next().unwrap_or_default();
        Self::with_interface(
            program,
            words.map(str::to_string).collect(),
            Box::new(ConsoleInterface::default()),
        )
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a command line for use in testing.
    /// Instead of exiting the process, [`CommandLine::add`] panics on failure.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::{CommandLine, Scalar};
    ///
    /// // Function under test.
    /// fn setup(cli: &mut CommandLine) -> u32 {
    ///     cli.add(Scalar::new("--value", 1u32)).into_value()
    /// }
    ///
    /// let mut cli = CommandLine::test_dummy(&["--value", "2"]);
    /// assert_eq!(setup(&mut cli), 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(tokens: &[&str]) -> Self {
        let mut command_line = Self::new("test-dummy", tokens);
        command_line.failure = Failure::Panic;
        command_line
    }

    pub(crate) fn with_interface(
        program: impl Into<String>,
        input: Vec<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        let stream = TokenStream::new(input.iter().cloned());
        Self {
            program: program.into(),
            input,
            stream,
            registry: Registry::default(),
            user_interface,
            failure: Failure::Exit,
        }
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The original command line, reconstructed from the program name and the input tokens.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.input.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// The unconsumed tokens, up to the terminal marker `--`.
    pub fn remaining(&self) -> Vec<&str> {
        self.stream.remaining()
    }

    /// Register a parameter, without binding it.
    /// The parameter appears in the help message from this point on.
    ///
    /// Fails when the declaration is invalid:
    /// * an option parameter must have at least one name,
    /// * no name may be the terminal marker `--`,
    /// * a tuple must have at least one field.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::{CommandLine, Scalar};
    ///
    /// let mut cli = CommandLine::new("program", &["-x", "1"]);
    /// let declared = cli.declare(Scalar::new("-x", 0u32)).unwrap();
    /// assert_eq!(cli.help(), "Usage: program -[option] <option-arg>\n   -x");
    ///
    /// let x = cli.bind(declared).unwrap();
    /// assert_eq!(*x, 1);
    ///
    /// assert!(cli.declare(Scalar::new("--", 0u32)).is_err());
    /// ```
    pub fn declare<D: Descriptor>(&mut self, descriptor: D) -> Result<Declared<D>, ConfigError> {
        let metadata = descriptor.metadata();
        validate(&metadata)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Declaring {} '{}'.", metadata.kind(), metadata.flag());
        }

        let id = self.registry.register(metadata);
        Ok(Declared { id, descriptor })
    }

    /// Bind a declared parameter, consuming its tokens from the command line.
    /// On failure, the command line is left as it was.
    pub fn bind<D: Descriptor>(
        &mut self,
        declared: Declared<D>,
    ) -> Result<Parsed<D::Value>, ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Binding {:?} against {:?}.", declared.id, self.stream.remaining());
        }

        declared.descriptor.consume(&mut self.stream)
    }

    /// Remove a declared (and not yet bound) parameter from the registry, returning its descriptor.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::{CommandLine, Switch};
    ///
    /// let mut cli = CommandLine::new("program", &[]);
    /// let declared = cli.declare(Switch::new("-s", false)).unwrap();
    /// cli.withdraw(declared);
    /// assert_eq!(cli.help(), "Usage: program");
    /// ```
    pub fn withdraw<D>(&mut self, declared: Declared<D>) -> D {
        let Declared { id, descriptor } = declared;
        self.registry.remove(id);
        descriptor
    }

    /// Declare and bind a parameter, as a Result.
    pub fn try_add<D: Descriptor>(&mut self, descriptor: D) -> Result<Parsed<D::Value>, Error> {
        let declared = self.declare(descriptor)?;
        Ok(self.bind(declared)?)
    }

    /// Declare and bind a parameter.
    /// If an error is encountered, it is reported and the process exits with error code `1` (via [`std::process::exit`]).
    pub fn add<D: Descriptor>(&mut self, descriptor: D) -> Parsed<D::Value> {
        match self.try_add(descriptor) {
            Ok(parsed) => parsed,
            Err(error) => {
                self.report(&error);

                match self.failure {
                    Failure::Exit => std::process::exit(1),
                    Failure::Panic => panic!("{error}"),
                }
            }
        }
    }

    /// Report an error through the user interface: the message, the command line context, and guidance.
    pub fn report(&self, error: &Error) {
        self.user_interface.print_error(error.clone());

        if let Error::Parse(parse_error) = error {
            // Offsets count input tokens, while the context also shows the program.
            self.user_interface.print_error_context(ErrorContext::new(
                parse_error.offset() + 1,
                std::iter::once(self.program.clone())
                    .chain(self.input.iter().cloned())
                    .collect(),
            ));
        }

        self.user_interface.print_guidance(GUIDANCE);
    }

    /// The help message for the parameters declared so far, wrapped to the terminal width (if any).
    pub fn help(&self) -> String {
        self.render_help(&Printer::terminal())
    }

    /// Write the help message to `writer`.
    ///
    /// ### Example
    /// ```
    /// # use cmdl_builder as cmdl;
    /// use cmdl::{Argument, CommandLine};
    ///
    /// let mut cli = CommandLine::new("program", &[]);
    /// cli.add(Argument::new(0u32).help("count"));
    ///
    /// let mut buffer = Vec::default();
    /// cli.write_help(&mut buffer).unwrap();
    /// assert!(String::from_utf8(buffer).unwrap().starts_with("Usage: program <arg-1>\n"));
    /// ```
    pub fn write_help(&self, writer: &mut impl io::Write) -> io::Result<()> {
        writeln!(writer, "{}", self.help())
    }

    /// Print the help message through the user interface.
    pub fn print_help(&self) {
        self.user_interface.print(self.help());
    }

    fn render_help(&self, printer: &Printer) -> String {
        printer
            .render(&self.program, self.registry.records())
            .join("\n")
    }
}

fn validate(metadata: &Metadata) -> Result<(), ConfigError> {
    let kind = metadata.kind();
    let flag = metadata.flag();

    if !kind.is_positional() && flag.is_empty() {
        return Err(ConfigError(format!(
            "{kind} option must have at least one name."
        )));
    }

    if let Some(name) = flag.names().find(|name| *name == TERMINAL) {
        return Err(ConfigError(format!(
            "'{name}' is reserved as the terminal marker."
        )));
    }

    if matches!(kind, Kind::Tuple | Kind::TupleCollection) && metadata.arity() == 0 {
        return Err(ConfigError(format!(
            "{kind} '{flag}' must have at least one field."
        )));
    }

    Ok(())
}
