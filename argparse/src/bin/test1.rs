// Test runner: parses its own command line and prints what landed where.

use argparse::*;
use argparse::destination;

#[derive(Debug, Default)]
struct Args {
    by: String,
    count: Option<i32>,
    ratio: f64,
    verbose: bool,
    level: Option<u8>,
    flags: Vec<String>,
    mode: String,
    tags: Vec<String>,
    inputs: Vec<String>,
    output: Option<String>,
}

destination!(Args { by, count, ratio, verbose, level, flags, mode, tags, inputs, output });

fn parser() -> ArgumentParser {
    let mut parser =
        ArgumentParser::new("Prints the fields filled in from its command line.").prog("test1");
    parser
        .option(
            Opt::new("by")
                .short('b')
                .dest("by")
                .nargs(NArgs::Exact(1))
                .action(Store)
                .help("A string value."),
        )
        .option(
            Opt::new("count")
                .short('n')
                .dest("count")
                .nargs(NArgs::Exact(1))
                .action(Store)
                .metavar("N")
                .help("An integer, base prefixes allowed."),
        )
        .option(
            Opt::new("ratio")
                .dest("ratio")
                .nargs(NArgs::Exact(1))
                .action(Store)
                .help("A float."),
        )
        .option(
            Opt::new("verbose")
                .short('v')
                .dest("verbose")
                .help("Set the verbose flag."),
        )
        .option(
            Opt::new("level")
                .short('l')
                .dest("level")
                .nargs(NArgs::Optional)
                .action(Store)
                .help("Optional level, 0 to 255."),
        )
        .option(Opt::new("").short('a').dest("flags").action(AppendConst::new("aflag")))
        .option(Opt::new("").short('c').dest("flags").action(AppendConst::new("cflag")))
        .option(
            Opt::new("mode")
                .short('m')
                .dest("mode")
                .nargs(NArgs::Exact(1))
                .action(Choice::new(Store, &["fast", "slow"]))
                .help("One of fast, slow."),
        )
        .option(
            Opt::new("tag")
                .short('t')
                .dest("tags")
                .nargs(NArgs::OneOrMore)
                .action(Append)
                .help("Tags, may be repeated."),
        )
        .option(Opt::new("broken").dest("missing").help("Bound to no field."))
        .argument(
            Arg::new("inputs")
                .nargs(NArgs::OneOrMore)
                .metavar("INPUT")
                .help("Input names."),
        )
        .argument(Arg::new("output").nargs(NArgs::Optional).help("Output name."));
    parser
}

fn main() {
    env_logger::init();

    let parser = parser();
    let mut args = Args::default();
    let rest = parser.parse_or_exit(&mut args);

    print!("by: {:?}", args.by);
    if let Some(n) = args.count {
        print!(" count: {}", n);
    }
    if args.ratio != 0.0 {
        print!(" ratio: {}", args.ratio);
    }
    if args.verbose {
        print!(" verbose");
    }
    if let Some(l) = args.level {
        print!(" level: {}", l);
    }
    if !args.flags.is_empty() {
        print!(" flags: {}", args.flags.join(","));
    }
    if !args.mode.is_empty() {
        print!(" mode: {}", args.mode);
    }
    if !args.tags.is_empty() {
        print!(" tags: {}", args.tags.join(","));
    }
    print!(" inputs: {}", args.inputs.join(","));
    if let Some(ref o) = args.output {
        print!(" output: {}", o);
    }
    if !rest.is_empty() {
        print!(" rest:");
        for arg in &rest {
            print!(" {}", arg);
        }
    }
    println!();
}
