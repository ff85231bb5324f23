use cmdl::derive::*;

#[derive(Default, CmdlParser)]
struct Parameters {
    #[cmdl(short = "-v", long = "--verbose", help = "Show each item.")]
    verbose: bool,
    #[cmdl(option, short = "-s", help = "Multiply the sum.")]
    scale: f64,
    #[cmdl(help = "The items to sum.")]
    items: Vec<f64>,
}

fn main() {
    let parameters = Parameters::cmdl_parse();

    if parameters.verbose {
        for item in &parameters.items {
            println!("Item: {item}");
        }
    }

    let scale = if parameters.scale == 0.0 {
        1.0
    } else {
        parameters.scale
    };
    let sum: f64 = parameters.items.iter().sum();
    println!("Sum: {}", sum * scale);
}
