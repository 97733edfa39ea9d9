use clap::{Parser as ClapParser, Subcommand};
use quang::cli::{self, CliError, TranslateOptions};
use quang::BackendKind;
use std::io::{self, BufRead};

#[derive(ClapParser)]
#[command(name = "quang")]
#[command(about = "Quang - translate filter expressions into native database filters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a filter expression
    Translate {
        /// The filter to translate (reads one filter per line from stdin if not provided)
        expression: Option<String>,

        /// Target backend
        #[arg(short, long, default_value = "mongo")]
        backend: String,

        /// Treat GT as an alias of EQ, as older releases did
        #[arg(long)]
        legacy_gt: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the filter operators
    Operators,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate {
            expression,
            backend,
            legacy_gt,
            pretty,
        } => run_translate(expression, &backend, legacy_gt, pretty),
        Commands::Operators => {
            print!("{}", cli::get_operator_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(
    expression: Option<String>,
    backend: &str,
    legacy_gt: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let backend: BackendKind = backend.parse()?;

    let expressions = match expression {
        Some(e) => vec![e],
        None if !atty::is(atty::Stream::Stdin) => io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?,
        None => return Err(CliError::NoInput),
    };

    let options = TranslateOptions {
        expressions,
        backend,
        legacy_gt,
        pretty,
    };

    for filter in cli::execute_translate(&options)? {
        println!("{}", filter);
    }
    Ok(())
}
