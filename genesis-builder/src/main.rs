use {
    anyhow::Context,
    clap::Parser,
    std::path::PathBuf,
    sysgen_genesis::{DirectoryArtifacts, GenesisConfig, OutputSink},
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(about = "Generate a Parlia genesis document with pre-built system contracts")]
struct Args {
    /// Chain configuration document (JSON).
    config: PathBuf,
    /// Where to write the genesis document: a file path, `stdout` or `stderr`.
    #[arg(default_value = "stdout")]
    output: OutputSink,
    /// Directory holding the compiled contract artifacts as `<Name>.json`.
    #[arg(long, default_value = "build/contracts")]
    artifacts: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = GenesisConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    let artifacts = DirectoryArtifacts::new(&args.artifacts);

    let document = sysgen_genesis::build_and_write(&config, &artifacts, &args.output)
        .context("Failed to generate genesis")?;
    tracing::info!(
        chain_id = config.chain_id,
        accounts = document.alloc.len(),
        "Genesis generated"
    );

    Ok(())
}
