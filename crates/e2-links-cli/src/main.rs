use anyhow::{Context, Result, bail};
use e2_links_config::Config;
use e2_links_engine::{HtmlRenderer, tokenize};
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: e2links [--json] [--config <path>] [file]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    json: bool,
    config: Option<PathBuf>,
    input: Option<PathBuf>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    parsed.config = Some(Config::resolve_path(Path::new(&path)));
                }
                "-" => parsed.input = None,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if parsed.input.is_some() {
                        bail!("only one input file is accepted");
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => bail!("config file {} not found", config_path.display()),
        None => {
            log::info!("No config file found, using default renderer options");
            Ok(Config::default())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render(input: &str, config: &Config, json: bool) -> Result<String> {
    let segments = tokenize(input);
    log::debug!("{} segments", segments.len());

    if json {
        Ok(serde_json::to_string_pretty(&segments)?)
    } else {
        Ok(HtmlRenderer::new(config.html.clone()).render(&segments))
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let output = render(&input, &config, args.json)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if args.json {
        writeln!(stdout)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
