use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use vs_cli::{load_document, logging, AppConfig, Shell};
use vs_editor::View;
use vs_model::{Phase, PhaseId};
use vs_projection::IoFilter;

fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .value_parser(value_parser!(PathBuf))
        .help("Value stream JSON file (default: bundled document)")
}

fn cli() -> Command {
    Command::new("value-stream")
        .version(vs_cli::VERSION)
        .about("View and edit value stream documents")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ./value-stream.toml if present)"),
        )
        .subcommand(
            Command::new("show")
                .about("Render one view and exit")
                .arg(data_arg())
                .arg(
                    Arg::new("view")
                        .long("view")
                        .default_value("editor")
                        .value_parser(value_parser!(View))
                        .help("editor | visualization | illustration"),
                )
                .arg(
                    Arg::new("phase")
                        .long("phase")
                        .value_parser(value_parser!(PhaseId))
                        .help("Phase to edit, or to focus in the visualization"),
                )
                .arg(
                    Arg::new("io")
                        .long("io")
                        .value_parser(value_parser!(IoFilter))
                        .help("Illustration filter: inputs | outputs | both"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a file against the import format")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write a dated export of a document")
                .arg(data_arg())
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_parser(value_parser!(PathBuf))
                        .help("Target directory (default: export_dir from config)"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Interactive editing shell on stdin")
                .arg(data_arg())
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Delete phases without asking"),
                ),
        )
}

fn data_file<'a>(args: &'a ArgMatches, config: &'a AppConfig) -> Option<&'a Path> {
    args.get_one::<PathBuf>("data")
        .or(config.data_file.as_ref())
        .map(PathBuf::as_path)
}

async fn show(args: &ArgMatches, config: AppConfig) -> anyhow::Result<()> {
    let document = load_document(data_file(args, &config)).await?;
    let io = args.get_one::<IoFilter>("io").copied().unwrap_or(config.io_filter);
    let mut shell = Shell::new(document, &config.with_io_filter(io))?;

    let view = args.get_one::<View>("view").copied().unwrap_or_default();
    let phase = args.get_one::<PhaseId>("phase").copied();
    let mut commands = vec![vs_cli::Command::View(view)];
    if let Some(id) = phase.filter(|_| view != View::Illustration) {
        commands.push(vs_cli::Command::Click(id));
    }
    let mut output = String::new();
    for command in commands {
        if let vs_cli::Outcome::Print(text) = shell.execute(command, &mut |_: &Phase| false).await? {
            output = text;
        }
    }
    println!("{output}");
    Ok(())
}

async fn validate(args: &ArgMatches) -> anyhow::Result<()> {
    let path = args
        .get_one::<PathBuf>("file")
        .context("missing file argument")?;
    println!("{}", validate_file(path).await?);
    Ok(())
}

/// One-line summary of a file that passes import checks
async fn validate_file(path: &Path) -> anyhow::Result<String> {
    let document = vs_gateway::read_import(path)
        .await
        .with_context(|| format!("{} is not a valid value stream file", path.display()))?;
    Ok(format!(
        "{}: valid, '{}' with {} phases",
        path.display(),
        document.name,
        document.len()
    ))
}

async fn export(args: &ArgMatches, config: &AppConfig) -> anyhow::Result<()> {
    let document = load_document(data_file(args, config)).await?;
    let dir = args
        .get_one::<PathBuf>("out-dir")
        .unwrap_or(&config.export_dir);
    let artifact = vs_gateway::export_today(&document)?;
    let path = artifact.write_to(dir).await?;
    println!("exported to {}", path.display());
    Ok(())
}

async fn edit(args: &ArgMatches, config: AppConfig) -> anyhow::Result<()> {
    let document = load_document(data_file(args, &config)).await?;
    let confirm = config.confirm_deletes && !args.get_flag("yes");
    let mut shell = Shell::new(document, &config.with_confirm_deletes(confirm))?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock()).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config = AppConfig::load(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        &cwd,
    )?;
    logging::init(&config.log_filter).map_err(|e| anyhow::anyhow!("logging setup: {e}"))?;
    tracing::debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("show", args)) => show(args, config).await,
        Some(("validate", args)) => validate(args).await,
        Some(("export", args)) => export(args, &config).await,
        Some(("edit", args)) => edit(args, config).await,
        _ => Ok(()),
    }
}
