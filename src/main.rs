//! iengine CLI: answer the query of a TELL/ASK file with one inference method.

use iengine::{EngineConfig, EngineError, Session};

const USAGE: &str = "Usage: iengine <TT|FC|BC> <file> [--format text|json]";

fn parse_args(args: &[String]) -> Result<(EngineConfig, String), EngineError> {
    let mut positional = Vec::new();
    let mut config = EngineConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" => {
                let value = iter.next().ok_or_else(|| {
                    EngineError::Configuration("--format needs a value".to_string())
                })?;
                config.format = value.parse()?;
            }
            flag if flag.starts_with("--") => {
                return Err(EngineError::Configuration(format!("unknown flag `{}`", flag)))
            }
            _ => positional.push(arg.clone()),
        }
    }

    match positional.as_slice() {
        [method, file] => {
            config.method = method.parse()?;
            Ok((config, file.clone()))
        }
        _ => Err(EngineError::Configuration(
            "expected a method and a file".to_string(),
        )),
    }
}

fn run(args: &[String]) -> Result<String, EngineError> {
    let (config, file) = parse_args(args)?;
    let mut session = Session::with_config(config);
    session.load_file(&file)?;
    let outcome = session.ask()?;
    session.render(&outcome)
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, EngineError::Configuration(_)) {
                eprintln!("{}", USAGE);
            }
            std::process::exit(1);
        }
    }
}
