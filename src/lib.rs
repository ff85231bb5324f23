//! `cmdl` is a declarative command line parser for Rust.
//!
//! A program declares its parameters one at a time against a [`CommandLine`].
//! Each parameter, when bound, scans the unconsumed command line and removes the tokens it matches.
//! Later parameters only ever see what earlier ones left behind.
//! Once bound, a parameter holds its typed value (or the supplied default) along with whether it was actually present.
//!
//! `cmdl` prioritizes the following design concerns:
//! * *Type directed parsing*:
//! Every value is converted via [`std::str::FromStr`]; the user never calls `&str -> T` conversions directly.
//! * *Composable consumption*:
//! Many parameters operate on one shared command line without corrupting each other's view.
//! A failed bind leaves the command line exactly as it was.
//! * *Basic UX*:
//! A usage line plus a parameter table, and errors which point at the offending token.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_numbers_d.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_numbers.rs")]
//! ```
//!
//! ```console
//! $ demo_numbers -h
//! Usage: demo_numbers <arg-1...> -[option] <option-arg>
//!    <arg-1...>      The items to sum.
//!    -h    --help               Show this message.
//!    -v    --verbose            Show each item.
//!    -s    --scale              Multiply the sum.
//!
//! $ demo_numbers 1 2 3 -s 2
//! Sum: 12
//!
//! $ demo_numbers 1 blah
//! Parse error: Malformed value: cannot convert 'blah' to f64.
//! demo_numbers 1 blah
//!                ^
//! Try --help!
//! ```
//!
//! # Builder Api
//! Start from a [`CommandLine`] (usually [`CommandLine::from_env`]) and `add` parameters.
//! There are two classes of parameters:
//! * *Positional* parameters take tokens from the front of the command line, whatever their text.
//! * *Option* parameters are found by name anywhere in the command line, along with the values which follow them.
//!
//! Names are matched verbatim against whole tokens (ex: `-v` or `--verbose`); there is no clustering of short names.
//!
//! ### Parameters
//! * [`Argument`]: a single positional value.
//! * [`ArgumentList`]: a run of positional values, up to a `maximum` (`0` meaning all of them).
//! * [`Switch`]: a flag without values; its presence inverts the default.
//! * [`Scalar`]: a flag followed by one value, at most once.
//! * [`Collection`]: a flag followed by one value, any number of times.
//! * [`Tuple`]: a flag followed by a fixed number of values, at most once.
//! * [`TupleCollection`]: a flag followed by a fixed number of values, any number of times.
//!
//! The tuple parameters accept any [`TupleValue`](./prelude/trait.TupleValue.html): tuples of 1 to 8 fields, or arrays `[T; N]`.
//! A tuple is converted atomically: either every field converts, or the bind fails.
//!
//! When a repeatable option never occurs, its value is the single default it was declared with.
//!
//! ### Binding order
//! Bind order is consumption order.
//! Since positional parameters take whatever sits at the front of the command line, bind options first:
//! ```
//! # use cmdl::*;
//! let mut cli = CommandLine::new("program", &["-x", "1", "2"]);
//! let x = cli.add(Scalar::new("-x", 0u32));
//! let a = cli.add(Argument::new(0u32));
//! assert_eq!((*x, *a), (1, 2));
//!
//! let mut cli = CommandLine::new("program", &["-x", "1", "2"]);
//! let a = cli.add(Argument::new(String::default()));
//! assert_eq!(*a, "-x");
//! ```
//!
//! ### Terminal marker
//! The token `--` ends the consumable command line.
//! Nothing at or beyond it is ever matched; see [`CommandLine::remaining`].
//!
//! ### Two phase declaration
//! [`CommandLine::add`] declares and binds in one step, exiting the process on failure.
//! For finer control, [`CommandLine::declare`] registers a parameter (so that it appears in the help message) and [`CommandLine::bind`] consumes its tokens later.
//! A declaration may also be [withdrawn](CommandLine::withdraw) from the help message.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_two_phase.rs")]
//! ```
//!
//! ### Tuples
//! ```no_run
#![doc = include_str!("../demos/demo_tuples.rs")]
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while binding.
pub mod derive;

pub use cmdl_builder::*;
