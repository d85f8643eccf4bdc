use agrivision_config::Config;
use agrivision_format::{
    Dialect, FieldConditions, FormatOptions, Formatter, PredictionView, RecommendationView,
    decode_prediction, decode_recommendation, render_error,
};
use anyhow::{Context, Result};
use std::{
    env, io,
    path::{Path, PathBuf},
    process,
};

mod preview;

const USAGE: &str = "Usage: agrivision [--dialect plain|treatment|recommendation] \
                     [--prediction | --recommendation [--request FORM]] [--status CODE] \
                     [--preview] [--save-config] [FILE]";

/// What to do with the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    /// Print the input formatted as HTML.
    #[default]
    Format,
    /// Show the parsed input in the terminal.
    Preview,
    /// Input is a `/api/predict` response body.
    Prediction,
    /// Input is a `/api/fertilizer-recommendation` response body.
    Recommendation,
}

impl Mode {
    fn flag(self) -> &'static str {
        match self {
            Mode::Format => "",
            Mode::Preview => "--preview",
            Mode::Prediction => "--prediction",
            Mode::Recommendation => "--recommendation",
        }
    }

    /// Dialect of the web page whose response this mode reads.
    fn default_dialect(self) -> Option<Dialect> {
        match self {
            Mode::Prediction => Some(Dialect::Treatment),
            Mode::Recommendation => Some(Dialect::Recommendation),
            Mode::Format | Mode::Preview => None,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    dialect: Option<Dialect>,
    mode: Mode,
    status: u16,
    /// Saved recommendation request form (JSON).
    request: Option<PathBuf>,
    save_config: bool,
    input: Option<PathBuf>,
}

fn set_mode(parsed: &mut Args, mode: Mode) -> Result<(), String> {
    if parsed.mode != Mode::Format && parsed.mode != mode {
        return Err(format!(
            "{} and {} cannot be combined",
            parsed.mode.flag(),
            mode.flag()
        ));
    }
    parsed.mode = mode;
    Ok(())
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args {
        status: 200,
        ..Args::default()
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dialect" | "-d" => {
                let value = args.next().ok_or("--dialect needs a value")?;
                parsed.dialect = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "--prediction" => set_mode(&mut parsed, Mode::Prediction)?,
            "--recommendation" => set_mode(&mut parsed, Mode::Recommendation)?,
            "--preview" => set_mode(&mut parsed, Mode::Preview)?,
            "--status" => {
                let value = args.next().ok_or("--status needs a value")?;
                parsed.status = value
                    .parse()
                    .map_err(|_| format!("invalid status code '{value}'"))?;
            }
            "--request" => {
                let value = args.next().ok_or("--request needs a file")?;
                parsed.request = Some(PathBuf::from(value));
            }
            "--save-config" => parsed.save_config = true,
            "-" => parsed.input = None,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => {
                if parsed.input.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }
    if parsed.request.is_some() && parsed.mode != Mode::Recommendation {
        return Err("--request only applies to --recommendation".to_string());
    }
    Ok(parsed)
}

/// Formatter options for this run: the config file's settings, with the
/// mode's dialect standing in for the file's when `--dialect` is absent.
fn effective_options(config: &Config, args: &Args) -> FormatOptions {
    let mut config = config.clone();
    match (args.dialect, args.mode.default_dialect()) {
        (Some(dialect), _) | (None, Some(dialect)) => config.dialect = dialect,
        (None, None) => {}
    }
    config.format_options()
}

fn prediction_html(status: u16, body: &str, formatter: &Formatter) -> String {
    match decode_prediction(status, body.as_bytes()) {
        Ok(result) => PredictionView::with_formatter(&result, formatter).to_html(),
        Err(e) => {
            log::warn!("Prediction response rejected: {e}");
            render_error(&e)
        }
    }
}

fn recommendation_html(
    status: u16,
    body: &str,
    conditions: Option<FieldConditions>,
    formatter: &Formatter,
) -> String {
    match decode_recommendation(status, body.as_bytes()) {
        Ok(text) => RecommendationView::with_formatter(&text, conditions, formatter).to_html(),
        Err(e) => {
            log::warn!("Recommendation response rejected: {e}");
            render_error(&e)
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read standard input"),
    }
}

fn read_request(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read request form '{}'", path.display()))
}

fn main() -> Result<()> {
    // Info by default; RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    // Config file supplies defaults; flags override
    let mut config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    if let Some(dialect) = args.dialect {
        config.dialect = dialect;
    }

    if args.save_config {
        config.save().context("Failed to save config file")?;
        log::info!("Saved config to {}", Config::config_path().display());
        return Ok(());
    }

    let formatter = Formatter::new(effective_options(&config, &args));
    let text = read_input(args.input.as_ref())?;

    match args.mode {
        Mode::Format => println!("{}", formatter.format(Some(&text))),
        Mode::Preview => {
            let doc = formatter.parse(&text);
            return preview::run(&text, &doc);
        }
        Mode::Prediction => println!("{}", prediction_html(args.status, &text, &formatter)),
        Mode::Recommendation => {
            let conditions = match args.request.as_deref() {
                Some(path) => match FieldConditions::from_json(&read_request(path)?) {
                    Ok(form) => Some(form),
                    Err(e) => {
                        log::warn!("Request form rejected: {e}");
                        println!("{}", render_error(&e));
                        return Ok(());
                    }
                },
                None => None,
            };
            println!(
                "{}",
                recommendation_html(args.status, &text, conditions, &formatter)
            );
        }
    }
    Ok(())
}
