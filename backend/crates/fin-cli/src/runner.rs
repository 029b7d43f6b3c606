use crate::{Cli, Commands, Result as CliResult};

use fin_auth::{ClaimsPrincipal, FileClaimsPrincipal, PrincipalSource, ProviderClaims};
use fin_config::Config;
use fin_core::UserStore;
use fin_db::{PoolSettings, UserRepository};
use fin_identity::{IdentityResolver, InMemoryUserStore, ResolverSettings};

use std::sync::Arc;

use log::info;
use serde_json::Value;

/// Execute one command and return its JSON result
pub async fn run(cli: &Cli, config: &Config) -> CliResult<Value> {
    let store = open_store(cli.memory, config).await?;
    let resolver = IdentityResolver::new(
        store,
        ResolverSettings {
            store_timeout: config.store_timeout(),
        },
    );

    match &cli.command {
        Commands::Resolve {
            subject,
            email,
            first_name,
            last_name,
            avatar_url,
            claims_file,
        } => {
            let principal: Box<dyn PrincipalSource> = match claims_file {
                Some(path) => Box::new(FileClaimsPrincipal::new(path)),
                None => Box::new(ClaimsPrincipal::new(subject.as_ref().map(|sub| {
                    ProviderClaims {
                        sub: sub.clone(),
                        email_addresses: email.iter().cloned().collect(),
                        first_name: first_name.clone(),
                        last_name: last_name.clone(),
                        image_url: avatar_url.clone(),
                    }
                }))),
            };

            let user = resolver.check_user(&*principal).await?;
            Ok(serde_json::to_value(user)?)
        }
        Commands::Lookup { subject, email } => {
            let user = match (subject, email) {
                (Some(subject), _) => resolver.lookup_by_subject(subject).await?,
                (None, Some(email)) => resolver.lookup_by_email(email).await?,
                (None, None) => None,
            };
            Ok(serde_json::to_value(user)?)
        }
    }
}

pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(output)
}

async fn open_store(memory: bool, config: &Config) -> CliResult<Arc<dyn UserStore>> {
    if memory {
        info!("Using in-memory user store");
        return Ok(Arc::new(InMemoryUserStore::new()));
    }

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = fin_db::connect(
        &database_path,
        &PoolSettings {
            max_connections: config.database.max_connections,
            busy_timeout: config.busy_timeout(),
        },
    )
    .await?;

    Ok(Arc::new(UserRepository::new(pool)))
}
