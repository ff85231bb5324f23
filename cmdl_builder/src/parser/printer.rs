use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::Kind;
use crate::parser::Record;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;

/// The help renderer.
/// Pure over a registry snapshot; produces the usage line followed by the positional and option rows.
#[derive(Debug)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// Produce a printer which wraps to the width of the controlling terminal, if there is one.
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn render(&self, program: &str, records: &[Record]) -> Vec<String> {
        let placeholders = placeholders(records);
        let mut usage = format!("{USAGE} {program}");

        for placeholder in &placeholders {
            usage.push(' ');
            usage.push_str(placeholder);
        }

        if records.iter().any(|r| !r.metadata().kind().is_positional()) {
            usage.push(' ');
            usage.push_str(OPTION_SUMMARY);
        }

        let mut out = vec![usage];
        let positionals = records.iter().filter(|r| r.metadata().kind().is_positional());

        for (record, placeholder) in positionals.zip(placeholders.iter()) {
            let left = format!("{:INDENT$}{placeholder:<ARGUMENT_WIDTH$} ", "");
            out.extend(self.row(left, record.metadata().help()));
        }

        for record in records
            .iter()
            .filter(|r| !r.metadata().kind().is_positional())
        {
            let flag = record.metadata().flag();
            let left = format!(
                "{:INDENT$}{:<SHORT_WIDTH$} {:<LONG_WIDTH$} ",
                "",
                flag.short_name().unwrap_or_default(),
                flag.long_name().unwrap_or_default(),
            );
            out.extend(self.row(left, record.metadata().help()));
        }

        out
    }

    fn row(&self, left: String, help: Option<&str>) -> Vec<String> {
        let help = help.unwrap_or_default();
        let left_width = left.chars().count();

        let lines = match self.help_width(left_width) {
            Some(width) => chunk(help, width),
            None => vec![help.to_string()],
        };

        if lines.is_empty() {
            return vec![left.trim_end().to_string()];
        }

        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let row = if i == 0 {
                    format!("{left}{line}")
                } else {
                    format!("{:left_width$}{line}", "")
                };
                row.trim_end().to_string()
            })
            .collect()
    }

    fn help_width(&self, left_width: usize) -> Option<usize> {
        let total_width = self.terminal_width?;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

        if left_width + HELP_WIDTH <= target_total_width {
            // Everything fits, so wrapping happens only beyond the nominal help width.
            Some(target_total_width - left_width)
        } else if left_width < target_total_width {
            let width = std::cmp::max(target_total_width - left_width, MINIMUM_HELP_WIDTH);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help column narrowed to {width} within the target total {target_total_width}.");
            }
            Some(width)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {left_width} do not fit within the target total {target_total_width}.  Selecting help width: {MINIMUM_HELP_WIDTH}.");
            }
            Some(MINIMUM_HELP_WIDTH)
        }
    }
}

// Shares a running counter across the positionals, in registration order.
fn placeholders(records: &[Record]) -> Vec<String> {
    let mut counter = 0;
    let mut out = Vec::default();

    for record in records {
        let metadata = record.metadata();

        match metadata.kind() {
            Kind::Argument => {
                counter += 1;
                out.push(format!("<arg-{counter}>"));
            }
            Kind::ArgumentList if metadata.arity() == 0 => {
                counter += 1;
                out.push(format!("<arg-{counter}...>"));
            }
            Kind::ArgumentList => {
                counter += 1;
                let start = counter;
                counter += metadata.arity();
                out.push(format!("<arg-{start}...{counter}>"));
            }
            _ => {}
        }
    }

    out
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
        let length = word.chars().count();

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + length + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The command line with a caret under the token at `index`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(index: usize, tokens: Vec<String>) -> Self {
        Self { index, tokens }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column = if self.index < self.tokens.len() {
            self.tokens[..self.index]
                .iter()
                .map(|token| token.chars().count() + 1)
                .sum()
        } else {
            projection.chars().count()
        };

        write!(f, "{projection}\n{:column$}^", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Flag;
    use crate::parser::{Metadata, Registry};
    use crate::test::assert_contains;
    use rstest::rstest;

    fn registry(metadata: Vec<Metadata>) -> Registry {
        let mut registry = Registry::default();

        for m in metadata {
            registry.register(m);
        }

        registry
    }

    fn positional(kind: Kind, help: &str, arity: usize) -> Metadata {
        Metadata::new(kind, Flag::default(), Some(help.to_string()), arity)
    }

    fn option(kind: Kind, flag: impl Into<Flag>, help: &str, arity: usize) -> Metadata {
        Metadata::new(kind, flag.into(), Some(help.to_string()), arity)
    }

    #[test]
    fn render_empty() {
        // Setup
        let printer = Printer::new(None);

        // Execute
        let lines = printer.render("program", &[]);

        // Verify
        assert_eq!(lines, vec!["Usage: program"]);
    }

    #[test]
    fn render() {
        // Setup
        let registry = registry(vec![
            positional(Kind::Argument, "the first", 1),
            option(Kind::Scalar, ("-x", "--xxx"), "an option", 1),
            positional(Kind::ArgumentList, "some more", 3),
            option(Kind::Switch, "--quiet", "be quiet", 0),
            positional(Kind::ArgumentList, "the rest", 0),
        ]);
        let printer = Printer::new(None);

        // Execute
        let message = printer.render("program", registry.records()).join("\n");

        // Verify
        assert_eq!(
            message,
            r#"Usage: program <arg-1> <arg-2...5> <arg-6...> -[option] <option-arg>
   <arg-1>         the first
   <arg-2...5>     some more
   <arg-6...>      the rest
   -x    --xxx                an option
         --quiet              be quiet"#
        );
    }

    #[test]
    fn render_positionals_only() {
        let registry = registry(vec![
            positional(Kind::Argument, "a", 1),
            positional(Kind::Argument, "b", 1),
        ]);

        let lines = Printer::new(None).render("p", registry.records());

        assert_eq!(lines, vec!["Usage: p <arg-1> <arg-2>", "   <arg-1>         a", "   <arg-2>         b"]);
    }

    #[test]
    fn render_options_only() {
        let registry = registry(vec![
            option(Kind::Collection, "-i", "include", 1),
            option(Kind::Tuple, ("-t", "--tuple"), "tuple", 2),
        ]);

        let lines = Printer::new(None).render("p", registry.records());

        assert_eq!(
            lines,
            vec![
                "Usage: p -[option] <option-arg>",
                "   -i                         include",
                "   -t    --tuple              tuple",
            ]
        );
    }

    #[test]
    fn render_without_help() {
        let registry = registry(vec![
            Metadata::new(Kind::Argument, Flag::default(), None, 1),
            Metadata::new(Kind::Switch, Flag::from("-s"), None, 0),
        ]);

        let lines = Printer::new(None).render("p", registry.records());

        assert_eq!(
            lines,
            vec!["Usage: p <arg-1> -[option] <option-arg>", "   <arg-1>", "   -s"]
        );
    }

    #[test]
    fn render_long_names_overflow() {
        let registry = registry(vec![option(
            Kind::Scalar,
            ("-abcdefg", "--a-very-long-name-indeed"),
            "message",
            1,
        )]);

        let lines = Printer::new(None).render("p", registry.records());

        assert_eq!(lines[1], "   -abcdefg --a-very-long-name-indeed message");
    }

    #[test]
    fn render_wrapped() {
        // Setup
        let registry = registry(vec![
            positional(Kind::Argument, "one two three four five six", 1),
            option(Kind::Switch, "-v", "seven eight nine ten eleven", 0),
        ]);
        let printer = Printer::new(Some(60));

        // Execute
        let message = printer.render("program", registry.records()).join("\n");

        // Verify
        assert_eq!(
            message,
            r#"Usage: program <arg-1> -[option] <option-arg>
   <arg-1>         one two three four five six
   -v                         seven eight nine ten eleven"#
        );

        let printer = Printer::new(Some(50));
        let message = printer.render("program", registry.records()).join("\n");
        assert_eq!(
            message,
            r#"Usage: program <arg-1> -[option] <option-arg>
   <arg-1>         one two three four five six
   -v                         seven eight nine
                              ten eleven"#
        );
    }

    #[test]
    fn render_wrapped_hyphenated() {
        let registry = registry(vec![option(
            Kind::Switch,
            "-v",
            "abcdefghijklmnopqrstuvwxyz",
            0,
        )]);

        let lines = Printer::new(Some(10)).render("p", registry.records());

        assert_eq!(
            lines,
            vec![
                "Usage: p -[option] <option-arg>",
                "   -v                         abcdefghijklmnop-",
                "                              qrstuvwxyz",
            ]
        );
    }

    #[test]
    fn render_terminal() {
        let registry = registry(vec![positional(Kind::Argument, "message", 1)]);

        let message = Printer::terminal()
            .render("program", registry.records())
            .join("\n");

        assert_contains!(message, "Usage: program <arg-1>");
        assert_contains!(message, "message");
    }

    #[rstest]
    #[case("", 5, vec![])]
    #[case("a b c", 5, vec!["a b c"])]
    #[case("a  b   c", 5, vec!["a b c"])]
    #[case("abc def", 5, vec!["abc", "def"])]
    #[case("abcdefgh", 5, vec!["abcd-", "efgh"])]
    #[case("abcdefghi", 5, vec!["abcd-", "efghi"])]
    #[case("ab abcdefghij", 5, vec!["ab", "abcd-", "efgh-", "ij"])]
    #[case("ééé ééé", 5, vec!["ééé", "ééé"])]
    fn chunk_cases(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case(0, vec![], "\n^")]
    #[case(3, vec![], "\n^")]
    #[case(0, vec!["abc"], "abc\n^")]
    #[case(1, vec!["abc"], "abc\n   ^")]
    #[case(0, vec!["abc", "123"], "abc 123\n^")]
    #[case(1, vec!["abc", "123"], "abc 123\n    ^")]
    #[case(2, vec!["abc", "123"], "abc 123\n       ^")]
    #[case(2, vec!["p", "-x", "one"], "p -x one\n     ^")]
    fn error_context(#[case] index: usize, #[case] values: Vec<&str>, #[case] expected: &str) {
        assert_eq!(ErrorContext::new(index, tokens(&values)).to_string(), expected);
    }
}
