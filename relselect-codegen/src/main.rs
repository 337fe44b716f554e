//! relselect Codegen - typed table generation and selection tooling
//!
//! `generate` writes a Rust module describing every table of a schema for the typed selection
//! layer. `relations` and `compile` inspect a schema and compile selections from the shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use relselect::relation::{available_relations, forward_relations, inverse_relations};
use relselect::{
    load_schema, BuilderConfig, RelationPolicy, RelationSet, Schema, SelectionCompiler,
    SelectionConfig,
};
use relselect_codegen::SchemaWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "relselect-codegen")]
#[command(about = "Generate typed relselect tables and compile selections", long_about = None)]
struct Cli {
    /// Schema description file (defaults to `select.schema_path` from config)
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate typed table code from a schema description
    Generate {
        /// Output file for the generated module
        #[arg(short, long, default_value = "src/schema.rs")]
        output: PathBuf,
    },

    /// Show the relations that may be nested under a table
    Relations {
        #[arg(short, long)]
        table: String,
    },

    /// Compile a JSON selection configuration into a selection expression
    Compile {
        #[arg(short, long)]
        table: String,

        /// Path to a JSON selection file, or an inline JSON object
        #[arg(long)]
        selection: String,

        /// Reject relations and fields the schema does not define
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = BuilderConfig::load().context("Failed to load configuration")?;
    let schema_path = cli
        .schema
        .or_else(|| config.schema_path.clone())
        .context("No schema given. Use --schema or set select.schema_path")?;
    let schema = load_schema(&schema_path)?;

    match cli.command {
        Commands::Generate { output } => generate(&schema, &schema_path, &output),
        Commands::Relations { table } => relations(&schema, &table),
        Commands::Compile {
            table,
            selection,
            strict,
        } => {
            let policy = if strict {
                RelationPolicy::Strict
            } else {
                config.relation_policy
            };
            compile(&schema, &table, &selection, policy)
        }
    }
}

fn generate(schema: &Schema, input: &Path, output: &Path) -> anyhow::Result<()> {
    println!("🔧 relselect Codegen");
    println!("📥 Schema: {}", input.display());
    println!("📤 Output: {}", output.display());

    if schema.is_empty() {
        anyhow::bail!("No tables found in schema");
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let code = SchemaWriter::new().generate_module(schema)?;
    std::fs::write(output, code)?;

    let table_count = schema.len();
    println!(
        "✨ Generated {} table{}",
        table_count,
        if table_count == 1 { "" } else { "s" }
    );

    Ok(())
}

fn relations(schema: &Schema, table: &str) -> anyhow::Result<()> {
    if !schema.contains_table(table) {
        anyhow::bail!("Unknown table '{}'", table);
    }

    println!("forward:   {}", join(forward_relations(schema, table)));
    println!("inverse:   {}", join(inverse_relations(schema, table)));
    println!("available: {}", join(available_relations(schema, table)));

    Ok(())
}

fn join(set: RelationSet<'_>) -> String {
    set.into_iter().collect::<Vec<_>>().join(", ")
}

fn compile(
    schema: &Schema,
    table: &str,
    selection: &str,
    policy: RelationPolicy,
) -> anyhow::Result<()> {
    let json = if selection.trim_start().starts_with('{') {
        selection.to_string()
    } else {
        std::fs::read_to_string(selection)
            .with_context(|| format!("Failed to read selection '{}'", selection))?
    };
    let config = SelectionConfig::from_json_str(&json).context("Invalid selection JSON")?;

    let query = SelectionCompiler::with_policy(schema, policy).compile(table, &config)?;
    println!("{query}");

    Ok(())
}
