//! Command line front end: fetch a url and print the text of each match
//!
//! `page-scraper <url> <selector> [--config <file.json>] [--json]`
use log::debug;
use page_scraper::{ClientOptions, PageScraper, ScrapeError};
use std::process::ExitCode;

const USAGE: &str = "usage: page-scraper <url> <selector> [--config <file.json>] [--json]";

#[derive(Debug)]
struct Args {
    url: String,
    selector: String,
    config: Option<String>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut json = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                config = Some(args.next().ok_or("--config needs a path")?);
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => positional.push(arg),
        }
    }
    let [url, selector]: [String; 2] = positional
        .try_into()
        .map_err(|_| USAGE.to_string())?;
    Ok(Args {
        url,
        selector,
        config,
        json,
    })
}

fn run(args: Args) -> Result<(), ScrapeError> {
    let options = match &args.config {
        Some(path) => ClientOptions::from_file(path)?,
        None => ClientOptions::default(),
    };
    debug!("options: {:?}", options);
    let scraper = PageScraper::with_options(args.url, options)?;
    let html = scraper.fetch()?;
    let texts = scraper.parse(&html, &args.selector);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&texts)?);
    } else {
        for text in texts {
            println!("{}", text);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
