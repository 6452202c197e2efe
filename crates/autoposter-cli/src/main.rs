use autoposter::render::{FontBook, FontOptions, PosterGenerator, load_photo};
use autoposter::{CarQuery, FallbackKnowledgeBase};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    NoPoster,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoPoster => write!(f, "No poster produced"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    car: Option<String>,
    text: Option<String>,
    heading: Option<String>,
    photo: Option<PathBuf>,
    output: Option<PathBuf>,
    fonts: FontOptions,
    json: bool,
}

fn usage() -> &'static str {
    "autoposter-cli\n\
\n\
USAGE:\n\
  autoposter-cli --car <name> [--text <path>|-] [--heading <text>] [--photo <path>] [--output <path>] [--font <path>]... [--font-family <name>] [--no-system-fonts] [--json]\n\
\n\
NOTES:\n\
  - Without --text the poster is built from the fallback knowledge base alone.\n\
  - --output defaults to poster_<car>.png; a .jpg/.jpeg extension writes JPEG.\n\
  - --json prints the completed spec to stdout instead of rendering.\n\
  - Log verbosity follows RUST_LOG (default: info); logs go to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let mut value = || it.next().cloned().ok_or(CliError::Usage(usage()));
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--car" => args.car = Some(value()?),
            "--text" => args.text = Some(value()?),
            "--heading" => args.heading = Some(value()?),
            "--photo" => args.photo = Some(PathBuf::from(value()?)),
            "--output" | "--out" => args.output = Some(PathBuf::from(value()?)),
            "--font" => args.fonts.font_files.push(PathBuf::from(value()?)),
            "--font-family" => args.fonts.family = value()?,
            "--no-system-fonts" => args.fonts.load_system_fonts = false,
            "--json" => args.json = true,
            _ => return Err(CliError::Usage(usage())),
        }
    }

    match args.car.as_deref().map(str::trim) {
        Some(car) if !car.is_empty() => Ok(args),
        _ => Err(CliError::Usage(usage())),
    }
}

fn read_text(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None => Ok(String::new()),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let car = args.car.as_deref().unwrap_or_default();
    let query = CarQuery::new(car);
    let text = read_text(args.text.as_deref())?;

    let mut generator = PosterGenerator::new(FallbackKnowledgeBase::builtin());
    if args.json {
        let spec = generator.build_spec(&query, args.heading.as_deref(), &text);
        serde_json::to_writer_pretty(std::io::stdout().lock(), &spec)?;
        println!();
        return Ok(());
    }

    let fonts = FontBook::load(&args.fonts);
    if fonts.is_empty() {
        tracing::warn!("no fonts available; text is laid out by estimate and not drawn");
    } else {
        generator = generator.with_fonts(fonts);
    }

    let photo = match args.photo.as_deref().map(load_photo).transpose() {
        Ok(photo) => photo,
        Err(err) => {
            tracing::warn!(%err, "continuing without photo");
            None
        }
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(query.default_output_name()));
    let written = generator
        .generate(
            &query,
            args.heading.as_deref(),
            &text,
            photo.as_ref(),
            Some(output.as_path()),
        )
        .ok_or(CliError::NoPoster)?;
    println!("{}", written.display());
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging();

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoPoster) => {
            eprintln!("{}", CliError::NoPoster);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
