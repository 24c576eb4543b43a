//! CLI argument definitions for mvnbom.
//!
//! Uses `clap` derive macros. Each command corresponds to a handler in the
//! [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mvnbom",
    version,
    about = "Extract a normalized module tree for a Maven project",
    long_about = "mvnbom reconciles a project's pom.xml, the mvn dependency:list output, \
                  and the mvn dependency:tree graph dump into one deduplicated module \
                  tree suitable for inclusion in a software bill-of-materials."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the module tree and emit it as JSON
    Scan {
        /// Project root containing pom.xml
        #[arg(default_value = ".")]
        path: String,
        /// Do not invoke mvn; use manifest-declared modules only
        #[arg(long)]
        manifest_only: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the module tree
    Tree {
        /// Project root containing pom.xml
        #[arg(default_value = ".")]
        path: String,
        /// Do not invoke mvn; use manifest-declared modules only
        #[arg(long)]
        manifest_only: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
