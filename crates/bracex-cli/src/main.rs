#![doc = include_str!("../README.md")]

use std::fmt::Write as _;
use std::io::{self, Read};

use bracex_parse::{
    Expression, ParseError, Token, expressions, parse_expression, requires_extended_handling,
    tokenize,
};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

// ============================================================================
// Exit codes
// ============================================================================

const EXIT_SYNTAX_ERROR: i32 = 1;
const EXIT_IO_ERROR: i32 = 3;

// ============================================================================
// CLI arguments
// ============================================================================

/// Show how a template splits into literal text and `{...}` expressions.
#[derive(Parser, Debug)]
#[command(name = "bracex", version)]
struct Args {
    /// Input file path (or "-" for stdin)
    #[arg(default_value = "-")]
    input: String,

    /// Treat the whole input as one expression instead of a template
    #[arg(long)]
    expr: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Only report whether the input needs keyed or conditional handling
    #[arg(long, conflicts_with = "json")]
    check: bool,
}

fn main() {
    init_tracing();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            match &e {
                CliError::Parse {
                    error,
                    source,
                    filename,
                } => error.write_report(filename, source, io::stderr()),
                CliError::Io(_) => eprintln!("error: {e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<String, CliError> {
    let source = read_input(&args.input)?;
    let filename = if args.input == "-" {
        "<stdin>"
    } else {
        args.input.as_str()
    };
    debug!("Read {} bytes from {}", source.len(), filename);

    let diagnostic = |error: ParseError| CliError::Parse {
        error,
        source: source.clone(),
        filename: filename.to_string(),
    };

    let tokens = if args.expr {
        vec![Token::Expression(
            parse_expression(&source).map_err(diagnostic)?,
        )]
    } else {
        tokenize(&source).map_err(diagnostic)?
    };

    if args.check {
        Ok(render_check(&tokens))
    } else if args.json {
        render_json(&tokens, args.expr, args.pretty)
    } else {
        Ok(render_dump(&tokens))
    }
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

// ============================================================================
// Output
// ============================================================================

/// One line per token, items indented below their expression.
fn render_dump(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        let span = token.span();
        match token {
            Token::Text { text, .. } => {
                let _ = writeln!(out, "text {}..{} {:?}", span.start, span.end, text);
            }
            Token::Expression(expr) => {
                let kind = if expr.is_keyed_set() { "keyed" } else { "list" };
                let _ = writeln!(out, "{kind} {}..{} {}", span.start, span.end, expr);
                for item in &expr.items {
                    let _ = write!(out, "  value={:?}", item.value);
                    if let Some(key) = item.key {
                        let _ = write!(out, " key={key:?}");
                    }
                    if let Some(condition) = &item.normalized_condition {
                        let _ = write!(out, " condition={condition:?}");
                    }
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn render_json(tokens: &[Token<'_>], single: bool, pretty: bool) -> Result<String, CliError> {
    let mut json = match (single, tokens) {
        (true, [Token::Expression(expr)]) => to_json(expr, pretty),
        _ => to_json(tokens, pretty),
    }
    .map_err(|e| CliError::Io(io::Error::other(e)))?;
    json.push('\n');
    Ok(json)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn render_check(tokens: &[Token<'_>]) -> String {
    let exprs: Vec<&Expression<'_>> = expressions(tokens).collect();
    let keyed = exprs.iter().filter(|expr| expr.is_keyed_set()).count();
    format!(
        "expressions: {}\nkeyed sets: {}\nrequires extended handling: {}\n",
        exprs.len(),
        keyed,
        requires_extended_handling(tokens)
    )
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Parse {
        error: ParseError,
        source: String,
        filename: String,
    },
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => EXIT_IO_ERROR,
            CliError::Parse { .. } => EXIT_SYNTAX_ERROR,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Parse { error, .. } => write!(f, "{error}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
