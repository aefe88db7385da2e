//! Weft - declarative HTML rendering
//!
//! Usage: weft [OPTIONS]

use std::env;
use std::fs;
use std::process::ExitCode;

use log::info;

use weft_elements::{
    a, article, footer, h1, header, li, main as main_tag, nav, p, time, title, ul, AttributeExt,
};
use weft_html::{
    document, render_to_string_with, text, Config, Html, MediaQuery, Pseudo, Style,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = Config::compact();
    let mut output: Option<String> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            "--version" | "-V" => {
                println!("Weft {}", VERSION);
                return ExitCode::SUCCESS;
            }
            "--compact" => config = Config::compact(),
            "--pretty" => config = Config::pretty(),
            "--email" => config = Config::email(),
            "--out" | "-o" => match iter.next() {
                Some(path) => output = Some(path.clone()),
                None => {
                    eprintln!("Error: --out requires a path");
                    return ExitCode::FAILURE;
                }
            },
            other => {
                eprintln!("Error: unknown option '{}'", other);
                print_usage(&args[0]);
                return ExitCode::FAILURE;
            }
        }
    }

    match run_demo(config, output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Weft {} - declarative HTML rendering

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help        Print this help message
    -V, --version     Print version information
    --compact         Render without whitespace (default)
    --pretty          Render with indentation and newlines
    --email           Render for mail clients (forces !important)
    -o, --out <PATH>  Write output to a file instead of stdout

EXAMPLES:
    {} --pretty
    {} --email --out newsletter.html
"#,
        VERSION, program, program, program
    );
}

/// Render the built-in demo page.
fn run_demo(config: Config, output: Option<&str>) -> Result<(), String> {
    let page = demo_page();
    let html = render_to_string_with(&page, config).map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            fs::write(path, &html).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            info!("wrote {} bytes to {}", html.len(), path);
        }
        None => println!("{}", html),
    }
    Ok(())
}

/// A small page exercising elements, attributes, and inline styles.
fn demo_page() -> impl Html {
    document(
        title("Weft demo"),
        main_tag((
            header(nav(ul((
                li(a(text("Home")).href("/")),
                li(a(text("About")).href("/about")),
            ))
            .attribute("class", "nav-list")))
            .styled(
                Style::new("background-color", "#1d2021").media(MediaQuery::dark()),
            )
            .inline_style("padding", "1rem"),
            article((
                h1(text("Woven, not written")),
                time(text("2025-08-06")).attribute("datetime", "2025-08-06"),
                p(text("Weft builds HTML as a tree of typed nodes and collects \
                        inline styles into a deduplicated stylesheet.")),
                p(text("Repeated declarations share one generated class."))
                    .inline_style("color", "#555"),
                a(text("Read the source"))
                    .href("https://github.com/weft-rs/weft")
                    .inline_style("color", "#07a")
                    .styled(Style::new("text-decoration", "underline").pseudo(Pseudo::hover())),
            )),
            footer(p(text("© 2025 Weft contributors"))).inline_style("color", "#555"),
        )),
    )
}
