use std::{env, process};

use anyhow::Result;
use lift_parser::build_lift_calendar;

mod cli;
mod fetch;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "warn");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let lift_times = match fetch::build_lift_times(args.file.as_deref()).await {
        Ok(lift_times) => lift_times,
        Err(err) if fetch::is_fetch_error(&err) => {
            eprintln!("{}", fetch::fatal_message(&err, args.file.is_some()));
            process::exit(1);
        }
        Err(err) => return Err(err),
    };
    log::info!("Found {} lift times", lift_times.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lift_times)?);
        return Ok(());
    }

    build_lift_calendar(lift_times).display();

    Ok(())
}
