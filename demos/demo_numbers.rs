use cmdl::{ArgumentList, CommandLine, Scalar, Switch};

fn main() {
    let mut cli = CommandLine::from_env();
    let help = cli.add(Switch::new(("-h", "--help"), false).help("Show this message."));
    let verbose = cli.add(Switch::new(("-v", "--verbose"), false).help("Show each item."));
    let scale = cli.add(Scalar::new(("-s", "--scale"), 1.0f64).help("Multiply the sum."));
    let items = cli.add(ArgumentList::new(Vec::<f64>::default(), 0).help("The items to sum."));

    if *help || items.is_empty() {
        cli.print_help();
        return;
    }

    if *verbose {
        for item in items.iter() {
            println!("Item: {item}");
        }
    }

    let sum: f64 = items.iter().sum();
    println!("Sum: {}", sum * *scale);
}
