use std::path::PathBuf;

use clap::{ArgGroup, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a principal to its user, creating the user on first sight.
    /// Without --subject the caller is treated as anonymous.
    Resolve {
        /// Provider subject id
        #[arg(long, requires = "email")]
        subject: Option<String>,

        /// Primary email address
        #[arg(long, requires = "subject")]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        avatar_url: Option<String>,

        /// Read provider claims from a JSON file (`null` for anonymous)
        #[arg(
            long,
            conflicts_with_all = ["subject", "email", "first_name", "last_name", "avatar_url"]
        )]
        claims_file: Option<PathBuf>,
    },

    /// Read-only lookup by subject id or email
    #[command(group(ArgGroup::new("key").required(true).args(["subject", "email"])))]
    Lookup {
        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
}
