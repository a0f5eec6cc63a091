//! Rings CLI: the `rings` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();
    let manifest = cli.manifest;

    match cli.command {
        Commands::Lookup { name, json } => commands::lookup::run(manifest, name, json),

        Commands::Access {
            name,
            ring,
            layer,
            json,
        } => commands::access::run(manifest, name, ring, layer, json),

        Commands::Visible { ring, layer, json } => {
            commands::visible::run(manifest, ring, layer, json)
        }

        Commands::CheckDep {
            from,
            to,
            policy,
            json,
        } => commands::check_dep::run(commands::check_dep::Args {
            manifest,
            from,
            to,
            policy,
            json,
        }),

        Commands::Closure {
            layer,
            member,
            json,
        } => commands::closure::run(manifest, layer, member, json),

        Commands::Validate { policy, json } => commands::validate::run(manifest, policy, json),

        Commands::Digest { json } => commands::digest::run(manifest, json),
    }
}
