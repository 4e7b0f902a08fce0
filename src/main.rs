use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use thermosync::calculator::{Calculator, CalculatorView};
use thermosync::config::Config;
use thermosync::convert::Scale;
use thermosync::render::{render_text, BoilingVerdict, CalculatorTree};
use thermosync::ThermoError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thermosync")]
#[command(about = "Linked Celsius/Fahrenheit inputs with a boiling-point verdict", long_about = None)]
struct Cli {
    /// TOML config file (precision, parse policy, initial scale)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type an amount into one field and show both fields
    Convert {
        /// Text typed into the field (need not be a number)
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Field the amount is typed into (c, f, celsius, fahrenheit)
        #[arg(short, long, default_value = "celsius")]
        scale: String,

        /// Print the derived view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: "c <text>" or "f <text>" edits a field
    Session {
        /// Print each new view as a JSON line instead of text
        #[arg(long)]
        json: bool,
    },

    /// Say whether water boils at the given Celsius temperature
    Verdict {
        /// Temperature in Celsius
        #[arg(allow_negative_numbers = true)]
        celsius: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert {
            amount,
            scale,
            json,
        } => convert(&config, &amount, &scale, json),
        Commands::Session { json } => run_session(&config, json),
        Commands::Verdict { celsius } => {
            println!("{}", BoilingVerdict::new(celsius));
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout carries the rendered output, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<Config, ThermoError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::empty()),
    }
}

fn convert(config: &Config, amount: &str, scale: &str, json: bool) -> Result<(), ThermoError> {
    let scale: Scale = scale.parse()?;
    let calculator = Calculator::with_config(config);
    calculator.on_edit(amount, scale);

    if json {
        println!("{}", serde_json::to_string_pretty(&calculator.view())?);
    } else {
        println!("{}", render_text(&calculator.render()));
    }

    Ok(())
}

/// One line of session input
#[derive(Debug, PartialEq)]
enum SessionCommand {
    Edit(Scale, String),
    Show,
    Reset,
    Quit,
    Unknown(String),
}

fn parse_session_line(line: &str) -> SessionCommand {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (line, ""),
    };

    match head.trim() {
        "show" => SessionCommand::Show,
        "reset" => SessionCommand::Reset,
        "quit" | "exit" => SessionCommand::Quit,
        other => match other.parse::<Scale>() {
            Ok(scale) => SessionCommand::Edit(scale, rest.to_string()),
            Err(_) => SessionCommand::Unknown(line.to_string()),
        },
    }
}

fn print_view(view: &CalculatorView, json: bool) {
    if json {
        match serde_json::to_string(view) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!(error = %e, "failed to serialize view"),
        }
    } else {
        println!("{}\n", render_text(&CalculatorTree::detached(view)));
    }
}

fn run_session(config: &Config, json: bool) -> Result<(), ThermoError> {
    let calculator = Calculator::with_config(config);
    let _renderer = calculator.subscribe(move |view| print_view(view, json));

    if !json {
        println!("Type \"c <amount>\" or \"f <amount>\" to edit a field, \"quit\" to leave.\n");
        println!("{}\n", render_text(&calculator.render()));
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_session_line(&line) {
            // Routed through the rendered input, like a UI change event
            SessionCommand::Edit(scale, text) => calculator.render().input(scale).handle_change(&text),
            SessionCommand::Show => print_view(&calculator.view(), json),
            SessionCommand::Reset => calculator.reset(),
            SessionCommand::Quit => break,
            SessionCommand::Unknown(line) => {
                tracing::warn!(%line, "unrecognized session command");
                eprintln!("Unrecognized command: {}", line);
            }
        }
        stdout.flush()?;
    }

    tracing::debug!(reading = ?calculator.reading(), "session ended");
    Ok(())
}
