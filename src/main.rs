use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use supermarket_finder::config::{
    DEFAULT_NOMINATIM_URL, DEFAULT_OVERPASS_URL, DEFAULT_USER_AGENT,
};
use supermarket_finder::{server, FinderConfig, SupermarketFinder};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Supermarket Finder — list supermarkets and grocery shops in a city
///
/// Resolves the city to a bounding box (Nominatim, then a built-in table of
/// major Iranian cities) and asks OpenStreetMap's Overpass API for shops
/// inside it. Prints a single JSON document on stdout.
///
/// Examples:
///   supermarket-finder Tehran
///   supermarket-finder "شیراز"
///   supermarket-finder --offline Isfahan
///   supermarket-finder --serve --port 3000
#[derive(Parser)]
#[command(name = "supermarket-finder", version, about, long_about = None)]
struct Cli {
    /// City name. Prompted for on stdin when omitted.
    #[arg(index = 1)]
    city: Option<String>,

    /// Print single-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Offline mode: skip Nominatim, only use the built-in city table.
    #[arg(long)]
    offline: bool,

    /// Debug logging on stderr.
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Run the HTTP API instead of a single lookup.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for --serve.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Nominatim base URL.
    #[arg(long, default_value = DEFAULT_NOMINATIM_URL)]
    nominatim_url: String,

    /// Overpass base URL.
    #[arg(long, default_value = DEFAULT_OVERPASS_URL)]
    overpass_url: String,

    /// User-Agent sent to both services.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-attempt geocoding timeout, in seconds.
    #[arg(long, default_value_t = 8)]
    geocode_timeout: u64,

    /// Overpass request timeout, in seconds.
    #[arg(long, default_value_t = 40)]
    overpass_timeout: u64,
}

impl Cli {
    fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            nominatim_url: self.nominatim_url.clone(),
            overpass_url: self.overpass_url.clone(),
            user_agent: self.user_agent.clone(),
            geocode_timeout: Duration::from_secs(self.geocode_timeout),
            overpass_timeout: Duration::from_secs(self.overpass_timeout),
        }
    }
}

fn setup_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.serve {
        Level::INFO
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(&cli);

    let mut finder = SupermarketFinder::new(&cli.finder_config());
    finder.set_offline(cli.offline);

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: cannot start runtime: {}", e);
            std::process::exit(1);
        });
        if let Err(e) = runtime.block_on(server::start(&cli.host, cli.port, finder)) {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let city = match cli.city {
        Some(ref city) => city.clone(),
        None => prompt_city(),
    };

    let envelope = finder.run(&city);
    match envelope.to_json(!cli.compact) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: cannot serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

/// Ask for a city on stderr and read one line from stdin.
/// Read failures and EOF yield an empty name.
fn prompt_city() -> String {
    eprint!("city: ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        tracing::warn!(error = %e, "could not read city from stdin");
        line.clear();
    }
    line
}
