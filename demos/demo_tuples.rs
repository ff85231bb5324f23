use cmdl::{Collection, CommandLine, Tuple, TupleCollection};

fn main() {
    let mut cli = CommandLine::from_env();
    let origin = cli.add(
        Tuple::new(("-o", "--origin"), (0.0f64, 0.0f64)).help("The starting point, as 'x y'."),
    );
    let moves = cli.add(
        TupleCollection::new(("-m", "--move"), (String::default(), 0.0f64))
            .help("A direction (n, s, e, w) and a distance."),
    );
    let labels = cli.add(Collection::new(("-l", "--label"), String::default()).help("A label."));

    let (mut x, mut y) = *origin;

    if moves.is_found() {
        for (direction, distance) in moves.iter() {
            match direction.as_str() {
                "n" => y += distance,
                "s" => y -= distance,
                "e" => x += distance,
                "w" => x -= distance,
                _ => {
                    eprintln!("Unknown direction '{direction}'.");
                    std::process::exit(1);
                }
            }
        }
    }

    if labels.is_found() {
        println!("Labels: {}", labels.join(", "));
    }

    println!("Position: ({x}, {y})");

    if !cli.remaining().is_empty() {
        eprintln!("Ignored: {}", cli.remaining().join(" "));
    }
}
