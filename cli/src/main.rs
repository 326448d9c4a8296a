use std::error::Error;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use lenient_json::{Document, Indent, ParseOptions, WriteOptions, SAMPLE_DOCUMENT};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ljson", version, about = "Lenient JSON loader")]
struct Args {
    /// Input file path. Omit to load the built-in sample, use '-' for stdin.
    input: Option<String>,

    /// Key to read from the root object.
    #[arg(short, long, default_value = "some")]
    key: String,

    /// Label printed before the value.
    #[arg(short, long, default_value = "Some")]
    label: String,

    /// Reject single quotes, unquoted keys, comments and trailing commas.
    #[arg(long)]
    strict: bool,

    /// Print the whole document as JSON instead of a single field.
    #[arg(long)]
    dump: bool,

    /// Indentation for --dump (0 writes compact JSON).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Maximum nesting depth accepted by the parser (capped at 512).
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,
}

enum InputSource {
    Sample,
    Stdin,
    File(String),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => f.write_str("sample"),
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => f.write_str(path),
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input, input_source) = read_input(args.input.as_deref())?;
    tracing::debug!(source = %input_source, bytes = input.len(), "loaded input");

    let mut options = ParseOptions::new().with_strict(args.strict);
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    let doc = Document::parse_slice(&input, &options)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.dump {
        let indent = (args.indent > 0).then(|| Indent::spaces(args.indent));
        let json = doc.to_json_string(&WriteOptions::new().with_indent(indent));
        writeln!(handle, "{json}")?;
    } else {
        lenient_json::write_field(&mut handle, &args.label, doc.get(&args.key))?;
    }
    handle.flush()?;
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(Vec<u8>, InputSource), Box<dyn Error>> {
    match input {
        None => Ok((SAMPLE_DOCUMENT.as_bytes().to_vec(), InputSource::Sample)),
        Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}
