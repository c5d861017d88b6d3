//! confgen CLI: generate one output file per table row from a single template.
//!
//! Reads a template containing `${NAME}` / `{{NAME}}` placeholders and a
//! delimited table whose first column names the output file, then writes one
//! substituted copy of the template per data row.

mod generate;
mod output;

use clap::Parser;
use std::path::PathBuf;

const USAGE_EXAMPLE: &str = "\
Placeholders:
  ${VARIABLE_NAME} or {{VARIABLE_NAME}} in the template, case-sensitive.
  Placeholders naming no table column are left unchanged.

Table columns:
  Column 1 is the output filename (.txt appended unless already present).
  Every other column is a substitution variable named by its header.

Example table:
  filename,SERVER_IP,PORT,USERNAME
  config1,192.168.1.10,8080,admin
  config2,192.168.1.20,8443,root
";

#[derive(Parser)]
#[command(
    name = "confgen",
    about = "Generate one output file per table row by filling template placeholders",
    version,
    after_help = USAGE_EXAMPLE
)]
struct Cli {
    /// Path to the template file containing placeholders
    template: PathBuf,

    /// Path to the delimited table file with a header row
    table: PathBuf,

    /// Field delimiter used in the table file
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Directory output files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Resolve filenames and run substitution without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    generate::run(
        &cli.template,
        &cli.table,
        cli.delimiter,
        &cli.out_dir,
        cli.dry_run,
    )
}
