/// The reserved token which marks the end of the consumable command line.
pub const TERMINAL: &str = "--";

pub(crate) const USAGE: &str = "Usage:";
pub(crate) const OPTION_SUMMARY: &str = "-[option] <option-arg>";
pub(crate) const GUIDANCE: &str = "Try --help!";

// Fixed column widths of the help tables.
pub(crate) const INDENT: usize = 3;
pub(crate) const ARGUMENT_WIDTH: usize = 15;
pub(crate) const SHORT_WIDTH: usize = 5;
pub(crate) const LONG_WIDTH: usize = 20;
pub(crate) const HELP_WIDTH: usize = 50;
