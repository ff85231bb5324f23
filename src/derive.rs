//! Derive Api for `cmdl` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a parameter struct `S` with `#[derive(Default, CmdlParser)]`.
//! This generates two functions:
//! * `S::cmdl_parse() -> S` parses the process arguments, reporting and exiting on failure.
//! * `S::cmdl_bind(&mut CommandLine) -> Result<S, Error>` binds against any [`CommandLine`](crate::CommandLine).
//!
//! Every field starts from the value in `S::default()`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_numbers_d.rs")]
//! ```
//!
//! ### Parameter Configuration
//! The implicit inference uses the following rules:
//! ```console
//! Type      | Named (short/long) | Parameter
//! ---------------------------------------------
//! bool      | either             | Switch
//! Vec<T>    | no                 | ArgumentList (maximum = 0)
//! Vec<T>    | yes                | Collection
//! T         | no                 | Argument
//! T         | yes                | Scalar
//! ```
//!
//! The inference may be overridden with one of the following field attributes:
//! `#[cmdl(argument)]`, `#[cmdl(argument_list)]`, `#[cmdl(switch)]`, `#[cmdl(option)]`,
//! `#[cmdl(collection)]`, `#[cmdl(tuple)]`, or `#[cmdl(tuple_collection)]`.
//!
//! Further field attributes:
//! * `#[cmdl(short = "-s")]` and `#[cmdl(long = "--name")]` set the option names.
//! An option without either is named after its field (ex: `max_depth` becomes `--max-depth`).
//! * `#[cmdl(help = "..")]` documents the parameter.
//! * `#[cmdl(maximum = N)]` bounds an argument list.
//!
//! Options are bound before positionals, each in field order.
//! A repeatable option which never occurs keeps the field's default.
//!
//! ```
//! use cmdl::{derive::*, CommandLine};
//!
//! #[derive(Debug, Default, CmdlParser)]
//! struct Parameters {
//!     #[cmdl(tuple, short = "-p")]
//!     point: (i32, i32),
//!     #[cmdl(short = "-t")]
//!     tags: Vec<String>,
//!     #[cmdl(maximum = 2)]
//!     names: Vec<String>,
//!     rest: Vec<String>,
//! }
//!
//! let mut cli = CommandLine::new("program", &["a", "-p", "1", "-2", "b", "c", "-t", "x"]);
//! let parameters = Parameters::cmdl_bind(&mut cli).unwrap();
//! assert_eq!(parameters.point, (1, -2));
//! assert_eq!(parameters.tags, vec!["x"]);
//! assert_eq!(parameters.names, vec!["a", "b"]);
//! assert_eq!(parameters.rest, vec!["c"]);
//! ```
pub use cmdl_derive::*;
