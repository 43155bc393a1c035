use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ast-config-helper")]
#[command(about = "Convert and generate Application Study Tool collector configurations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert the legacy big-ips.json device list to the new receiver format.
    ConvertLegacy(ConvertLegacyArgs),
    /// Generate receiver and pipeline configs from defaults and receiver inputs.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertLegacyArgs {
    /// Path to the legacy big-ips.json file to convert.
    #[arg(long, default_value = "./config/big-ips.json")]
    pub legacy_config_file: PathBuf,
    /// Path to the default settings file to diff against.
    #[arg(long, default_value = "./config/ast_defaults.yaml")]
    pub default_config_file: PathBuf,
    /// Output path for the converted receiver settings.
    #[arg(long, default_value = "./config/bigip_receivers.yaml")]
    pub output_file: PathBuf,
    /// Preview the converted output without writing it.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the default settings file to generate configs from.
    #[arg(long, default_value = "./config/ast_defaults.yaml")]
    pub default_config_file: PathBuf,
    /// Path to the receiver settings input file (BIG-IP configs).
    #[arg(long, default_value = "./config/bigip_receivers.yaml")]
    pub receiver_input_file: PathBuf,
    /// Output path for the receiver settings OTel file.
    #[arg(long, default_value = "./services/otel_collector/receivers.yaml")]
    pub receiver_output_file: PathBuf,
    /// Output path for the pipeline settings OTel file.
    #[arg(long, default_value = "./services/otel_collector/pipelines.yaml")]
    pub pipelines_output_file: PathBuf,
    /// Preview the generated output without writing it.
    #[arg(long)]
    pub dry_run: bool,
}
