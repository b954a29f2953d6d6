mod demo;
mod settings;

use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use cjk_review_core::{event::Action, hooks::HookTable, hooks::InstalledHooks, session::ReviewSession};
use cjk_review_dict::{DescriptionDictionary, DictError};
use demo::{Demo, DemoHost, HELP, Line, command_help, format_action, parse_line};
use settings::SettingsError;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct Args {
    dict: PathBuf,
    config: Option<PathBuf>,
    locale: String,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    let dictionary = DescriptionDictionary::from_dir(&args.dict)?;
    let config_path = match args.config {
        Some(path) => path,
        None => settings::default_path()?,
    };
    let config = settings::load(&config_path);

    let mut table = HookTable::default();
    let hooks = InstalledHooks::install(&mut table);
    let session = ReviewSession::activate(args.locale.clone(), config);
    let mut demo = Demo::new(session, DemoHost::new(args.locale), dictionary);

    let result = repl(&mut demo, &hooks, &config_path, &args.dict);

    let config = demo.into_session().deactivate();
    if let Err(e) = settings::save(&config_path, &config) {
        warn!("退出时保存设置失败：{e}");
    }
    hooks.release();
    result
}

fn parse_args() -> Args {
    let mut parsed = Args {
        dict: default_dict_path(),
        config: None,
        locale: "zh_TW".to_owned(),
    };
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--dict" => {
                if let Some(p) = args.next() {
                    parsed.dict = PathBuf::from(p);
                }
            }
            "--config" => parsed.config = args.next().map(PathBuf::from),
            "--locale" => {
                if let Some(l) = args.next() {
                    parsed.locale = l;
                }
            }
            "--help" | "-h" => print_help(),
            _ => {}
        }
    }
    parsed
}

fn print_help() -> ! {
    println!("用法：cjk_review_cli [--dict <dir>] [--config <file>] [--locale <tag>]\n\n{HELP}");
    std::process::exit(0);
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset")
}

fn repl(demo: &mut Demo, hooks: &HookTable, config_path: &Path, dict_path: &Path) -> Result<(), CliError> {
    let mut out = io::stdout();
    let mut line = String::new();
    writeln!(out, "cjk-review demo | dict: {}", dict_path.display())?;
    writeln!(out, "输入 :help 查看命令，:q 退出。")?;
    out.flush()?;

    loop {
        line.clear();
        print!("review> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().is_empty() {
            continue;
        }
        let parsed = parse_line(input);
        match parsed {
            Line::Quit => break,
            Line::Help => {
                writeln!(out, "{HELP}\n\n{}", command_help())?;
                continue;
            }
            _ => {}
        }
        for action in demo.execute(hooks, parsed) {
            if let Action::StoreConfig(config) = &action {
                match settings::save(config_path, config) {
                    Ok(()) => info!("设置已保存到 {}", config_path.display()),
                    Err(e) => warn!("保存设置失败：{e}"),
                }
            }
            if let Some(text) = format_action(&action) {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}
