use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use ethos_contracts::{
    Contract, ContractInfo, ContractLookup, Environment, constants, contracts_for_environment,
    network_by_environment,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Environment to resolve addresses for
    #[arg(
        short,
        long,
        value_name = "ENV",
        env = constants::ETHOS_ENV_VAR,
        default_value = "dev"
    )]
    environment: Environment,

    /// Resolve a single contract instead of the full registry
    #[arg(short, long, value_name = "NAME")]
    contract: Option<Contract>,

    /// Print the resolved registry as JSON
    #[arg(long)]
    json: bool,

    /// Validate the deployment records for every environment
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.check {
        return check_all_environments();
    }

    let lookup = contracts_for_environment(cli.environment)
        .with_context(|| format!("Failed to resolve contracts for {}", cli.environment))?;

    match cli.contract {
        Some(contract) => {
            let info = lookup
                .get(&contract)
                .with_context(|| format!("{contract} missing from the resolved lookup"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entry_json(info))?);
            } else {
                print_header(cli.environment);
                print_entry(contract, info);
            }
        }
        None => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&lookup_json(&lookup))?);
            } else {
                print_header(cli.environment);
                for (contract, info) in &lookup {
                    print_entry(*contract, info);
                }
            }
        }
    }

    Ok(())
}

fn check_all_environments() -> Result<()> {
    println!("---------------------------------------------------------------------------");
    println!("Checking deployment records...");
    println!("---------------------------------------------------------------------------");

    let mut all_ok = true;
    for environment in Environment::ALL {
        match contracts_for_environment(environment) {
            Ok(lookup) => {
                println!(
                    "{:<8} {} contracts resolved on {}",
                    environment.as_str(),
                    lookup.len(),
                    network_by_environment(environment)
                );
            }
            Err(err) => {
                eprintln!("❌ {environment}: {err}");
                all_ok = false;
            }
        }
    }

    if !all_ok {
        eprintln!("\n❌ Deployment records are incomplete.");
        std::process::exit(1);
    }

    println!("\n✅ All deployment records are complete.");
    Ok(())
}

fn print_header(environment: Environment) {
    let network = network_by_environment(environment);
    println!("---------------------------------------------------------------------------");
    println!(
        "Contracts for {environment} ({network}, chain id {})",
        network.chain_id()
    );
    println!("---------------------------------------------------------------------------");
}

fn print_entry(contract: Contract, info: &ContractInfo) {
    println!(
        "{:<24} {:<24} {:<44} {:<7} {}",
        contract.to_string(),
        info.name,
        info.address.to_string(),
        if info.is_proxy { "proxy" } else { "direct" },
        info.alias.unwrap_or("-"),
    );
}

fn entry_json(info: &ContractInfo) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    entry.insert("name".into(), json!(info.name));
    entry.insert("address".into(), json!(info.address.to_string()));
    entry.insert("isProxy".into(), json!(info.is_proxy));
    entry.insert("isUpgradeable".into(), json!(info.is_upgradeable));
    // Only attach the alias key where the contract actually has one.
    if let Some(alias) = info.alias {
        entry.insert("alias".into(), json!(alias));
    }
    serde_json::Value::Object(entry)
}

fn lookup_json(lookup: &ContractLookup) -> serde_json::Value {
    let mut doc = serde_json::Map::new();
    for (contract, info) in lookup {
        doc.insert(contract.to_string(), entry_json(info));
    }
    serde_json::Value::Object(doc)
}
