use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rings",
    about = "Rings: query and validate the ring/layer classification of an API surface",
    version
)]
pub struct Cli {
    /// Classification manifest (.toml or .json); defaults to the built-in dataset
    #[arg(long, global = true)]
    pub manifest: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ring and layer recorded for one member
    Lookup {
        /// Member name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a member is reachable from a selected ring and layer
    Access {
        /// Member name
        name: String,

        /// Selected ring: python, cpython, or internal
        #[arg(long)]
        ring: String,

        /// Selected layer: optional_stdlib, required_stdlib, platform_interaction, core, or platform_adaptation
        #[arg(long)]
        layer: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rings, layers, and members visible to an access request
    Visible {
        /// Selected ring (unrestricted when omitted)
        #[arg(long)]
        ring: Option<String>,

        /// Selected layer (unrestricted when omitted)
        #[arg(long)]
        layer: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a single dependency edge FROM -> TO against the layering rules
    CheckDep {
        /// Depending member
        from: String,

        /// Depended-on member
        to: String,

        /// Platform policy override: sanctioned, forbidden, or permitted
        #[arg(long)]
        policy: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the availability closure of a layer or of a member
    Closure {
        /// Layer whose closure to print
        #[arg(required_unless_present = "member", conflicts_with = "member")]
        layer: Option<String>,

        /// Member whose closure to print (includes required components)
        #[arg(long)]
        member: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every member and declared edge of the manifest
    Validate {
        /// Platform policy override: sanctioned, forbidden, or permitted
        #[arg(long)]
        policy: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the content digest of the loaded registry
    Digest {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
