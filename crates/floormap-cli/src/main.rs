use floormap::error::LoadError;
use floormap::{
    HttpProductSource, JsonFileSource, MapOptions, ProductMarker, ProductSource, SvgSurface,
    WarehouseMap,
};
use std::io::Write as _;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
floormap-cli: render the warehouse floor map to SVG

Usage:
  floormap-cli [--url <URL> | --input <FILE>] [options]

Input (one of):
  --url <URL>             Product-location endpoint (GET, JSON array).
                          Defaults to the FLOORMAP_URL environment variable.
  --input <FILE>          Read the product list from a JSON file instead.

Options:
  --out <FILE>            Write the SVG here instead of stdout.
  --detail-prefix <PATH>  Marker click-through path prefix (default: /product/).
  -h, --help              Show this help.
";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    url: Option<String>,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    detail_prefix: Option<String>,
}

fn parse_args(mut argv: std::env::Args) -> Result<Option<Args>, CliError> {
    let _ = argv.next();
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--url" => {
                args.url = Some(argv.next().ok_or(CliError::Usage("--url needs a value"))?);
            }
            "--input" => {
                args.input = Some(
                    argv.next()
                        .ok_or(CliError::Usage("--input needs a value"))?
                        .into(),
                );
            }
            "--out" => {
                args.out = Some(
                    argv.next()
                        .ok_or(CliError::Usage("--out needs a value"))?
                        .into(),
                );
            }
            "--detail-prefix" => {
                args.detail_prefix = Some(
                    argv.next()
                        .ok_or(CliError::Usage("--detail-prefix needs a value"))?,
                );
            }
            _ => return Err(CliError::Usage("unrecognized argument (see --help)")),
        }
    }
    if args.url.is_some() && args.input.is_some() {
        return Err(CliError::Usage("--url and --input are mutually exclusive"));
    }
    Ok(Some(args))
}

enum CliSource {
    Http(HttpProductSource),
    File(JsonFileSource),
}

impl ProductSource for CliSource {
    async fn fetch(&self) -> Result<Vec<ProductMarker>, LoadError> {
        match self {
            CliSource::Http(source) => source.fetch().await,
            CliSource::File(source) => source.fetch().await,
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let source = if let Some(path) = args.input {
        CliSource::File(JsonFileSource::new(path))
    } else {
        let url = args
            .url
            .or_else(|| std::env::var("FLOORMAP_URL").ok())
            .ok_or(CliError::Usage(
                "no product source: pass --url/--input or set FLOORMAP_URL",
            ))?;
        CliSource::Http(HttpProductSource::new(url))
    };

    let mut options = MapOptions::default();
    if let Some(prefix) = args.detail_prefix {
        options.detail_path_prefix = prefix;
    }

    let mut map = WarehouseMap::with_options(Some(SvgSurface::new()), source, options);
    map.initialize().await;
    if let Some(err) = map.last_error() {
        // The map degrades to layout-plus-annotation; still worth a heads-up.
        eprintln!("warning: {err}");
    }

    let Some(svg) = map.surface().map(|surface| surface.to_svg()) else {
        return Err(CliError::Usage("no rendering surface"));
    };

    match args.out {
        Some(path) => std::fs::write(path, svg)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
