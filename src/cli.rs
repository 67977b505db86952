use std::env;
use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub file: Option<PathBuf>,
    pub json: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "f",
        "file",
        "Read the search page from a saved HTML file instead of the web",
        "PATH",
    );
    opts.optflag(
        "j",
        "json",
        "Print the extracted lift times as JSON instead of the calendar",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    if let Some(extra) = matches.free.first() {
        eprintln!("Unexpected argument '{extra}'");
        process::exit(1);
    }

    Args {
        file: matches.opt_str("file").map(PathBuf::from),
        json: matches.opt_present("json"),
    }
}
