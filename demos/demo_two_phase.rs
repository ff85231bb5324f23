use cmdl::{Argument, CommandLine, Error, Scalar, Switch};

fn main() {
    let mut cli = CommandLine::from_env();

    if let Err(error) = run(&mut cli) {
        cli.report(&error);
        std::process::exit(1);
    }
}

fn run(cli: &mut CommandLine) -> Result<(), Error> {
    // Declare everything up front, so the help message is complete before anything is bound.
    let help = cli.declare(Switch::new(("-h", "--help"), false).help("Show this help message."))?;
    let count =
        cli.declare(Scalar::new(("-c", "--count"), 1u32).help("The number of greetings."))?;
    let name = cli.declare(Argument::new("world".to_string()).help("Who to greet."))?;

    if *cli.bind(help)? {
        cli.print_help();
        return Ok(());
    }

    let count = cli.bind(count)?;
    let name = cli.bind(name)?;

    for _ in 0..*count {
        println!("Hello, {}!", *name);
    }

    Ok(())
}
