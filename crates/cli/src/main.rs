use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vitrin_core::{normalize, score_item, TenantContext};
use vitrin_engine::ChatEngine;
use vitrin_observability::{init_tracing, EngineMetrics};

#[derive(Debug, Parser)]
#[command(name = "vitrin")]
#[command(about = "Vitrin site assistant CLI")]
struct Cli {
    /// Tenant context JSON file
    #[arg(long, env = "VITRIN_TENANT")]
    tenant: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat with the tenant's assistant
    Chat,
    /// Answer a single query and print the reply as JSON
    Ask { query: String },
    /// Score every catalog item against a query
    Match { query: String },
    /// Show the specialist resolved for the tenant
    Specialist,
}

fn main() -> Result<()> {
    init_tracing("vitrin_cli");
    let cli = Cli::parse();

    let tenant = load_tenant(&cli.tenant)?;
    let engine = ChatEngine::new(tenant, EngineMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(&engine)?,
        Command::Ask { query } => {
            let reply = engine.handle_query(&query);
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Match { query } => {
            let expanded = engine.specialist().synonyms().expand(&normalize(&query));
            for item in &engine.tenant().catalog {
                println!("{:>4}  {}  ({})", score_item(&expanded, item), item.name, item.id);
            }
        }
        Command::Specialist => {
            let specialist = engine.specialist();
            let view = serde_json::json!({
                "vertical": specialist.vertical(),
                "greeting": specialist.greeting(),
                "theme": specialist.theme(),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

fn run_chat(engine: &ChatEngine) -> Result<()> {
    println!("{}", engine.specialist().greeting());
    println!("(çıkmak için 'exit')");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = engine.handle_query(message);
        println!("\n{}\n", reply.text);
    }

    Ok(())
}

fn load_tenant(path: &Path) -> Result<TenantContext> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading tenant file: {}", path.display()))?;

    let tenant: TenantContext = serde_json::from_str(&raw)
        .with_context(|| format!("invalid tenant json: {}", path.display()))?;

    tenant
        .validate()
        .with_context(|| format!("tenant context rejected: {}", path.display()))?;

    Ok(tenant)
}
