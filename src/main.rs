//! CLI entry point for cfgschema
//!
//! Builds schemas from annotated reference configs and converts user
//! configs between CFG and JSON.

use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            print_usage();
            process::exit(1);
        }
        Some("--help" | "-h") => {
            print_usage();
            return;
        }
        Some(_) => {}
    }

    let invocation = match cfgschema::cli::parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    match cfgschema::cli::run(&invocation).await {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if !outcome.success {
                process::exit(2);
            }
        }
        Err(err) => {
            eprintln!("Error: '{}' failed", invocation.command);
            eprintln!("Reason: {:#}", err);
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("cfgschema - Configuration schema builder and converter");
    println!();
    println!("USAGE:");
    println!("    cfgschema <command> <file> [options]");
    println!();
    println!("COMMANDS:");
    println!("    schema <reference.cfg>    Print the schema extracted from a reference config");
    println!("    check <reference.cfg>     Report inconsistencies in the extracted schema");
    println!("    to-json <config.cfg>      Convert a CFG file to JSON");
    println!("    to-cfg <config.json>      Convert a JSON config to CFG text");
    println!("    validate <config.json>    Validate a JSON config against the schema");
    println!("    --help, -h                Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    -r, --reference <file>    Reference config (default: reference.cfg)");
    println!("    -s, --symbols <file>      Section symbol mapping file");
    println!("    -c, --config <file>       JSON tool configuration");
    println!("        --app-version <ver>   Version written into generated headers");
    println!();
    println!("ENVIRONMENT:");
    println!("    CFGSCHEMA_REFERENCE, CFGSCHEMA_SYMBOLS, CFGSCHEMA_APP_VERSION");
    println!("    RUST_LOG                  Log filter (default: warn)");
}
