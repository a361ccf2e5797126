mod cache;
mod cli;
mod config;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notify_admin_client::{ClientRegistry, HttpTransport, NotifyClient};
use notify_admin_core::cache::{is_pattern, CallArgs, KeyTemplate};
use notify_admin_core::models::{CreateFolderRequest, MoveToFolderRequest, UpdateFolderRequest};

use crate::cli::cache::CacheAction;
use crate::cli::folders::FoldersAction;
use crate::cli::templates::TemplatesAction;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{json, pretty, render};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notify_admin=debug,notify_admin_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let registry = build_registry(&cli, &config).await?;
    let client = match cli.actor {
        Some(actor) => registry.for_actor(actor),
        None => registry.client().clone(),
    };

    match cli.command {
        Commands::Folders(ref cmd) => run_folders(&cli, &client, &cmd.action).await,
        Commands::Templates(ref cmd) => run_templates(&cli, &client, &cmd.action).await,
        Commands::Cache(ref cmd) => run_cache(&cli, &registry, &cmd.action).await,
    }
}

async fn build_registry(cli: &Cli, config: &Config) -> Result<ClientRegistry> {
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .context("No API URL configured. Pass --api-url or set NOTIFY_API_URL")?;
    let api_token = cli.api_token.clone().or_else(|| config.api_token.clone());

    let transport = HttpTransport::new(&api_url, api_token)
        .with_context(|| format!("Invalid API URL '{}'", api_url))?;
    let cache = cache::build_cache(config).await?;

    tracing::debug!(api_url = %api_url, "Client registry ready");
    Ok(ClientRegistry::new(
        Arc::new(transport),
        cache,
        config.cache_ttls(),
    ))
}

async fn run_folders(cli: &Cli, client: &NotifyClient, action: &FoldersAction) -> Result<()> {
    match action {
        FoldersAction::List { service_id, user } => {
            let view = client.get_folder_view(*service_id, *user).await?;
            println!("{}", render(view.nodes(), cli.format, pretty::format_folders));
        }
        FoldersAction::Create {
            service_id,
            name,
            parent,
        } => {
            let request = CreateFolderRequest {
                name: name.clone(),
                parent_id: *parent,
            };
            let folder_id = client.create_template_folder(*service_id, &request).await?;
            if !cli.quiet {
                println!("Created folder {}", folder_id);
            }
        }
        FoldersAction::Rename {
            service_id,
            id,
            name,
        } => {
            let request = UpdateFolderRequest {
                name: Some(name.clone()),
                ..UpdateFolderRequest::default()
            };
            client
                .update_template_folder(*service_id, *id, &request)
                .await?;
            if !cli.quiet {
                println!("Renamed folder {}", id);
            }
        }
        FoldersAction::Delete { service_id, id } => {
            client.delete_template_folder(*service_id, *id).await?;
            if !cli.quiet {
                println!("Deleted folder {}", id);
            }
        }
        FoldersAction::Move {
            service_id,
            to,
            templates,
            folders,
        } => {
            let request = MoveToFolderRequest {
                templates: templates.clone(),
                folders: folders.clone(),
            };
            if request.is_empty() {
                anyhow::bail!("Nothing to move. Pass --template or --folder");
            }
            client.move_to_folder(*service_id, *to, &request).await?;
            if !cli.quiet {
                match to {
                    Some(folder_id) => println!("Moved into folder {}", folder_id),
                    None => println!("Moved to the top level"),
                }
            }
        }
    }
    Ok(())
}

async fn run_templates(cli: &Cli, client: &NotifyClient, action: &TemplatesAction) -> Result<()> {
    match action {
        TemplatesAction::List {
            service_id,
            folder,
            user,
        } => {
            let view = client.get_folder_view(*service_id, *user).await?;
            let templates = match folder {
                Some(folder_id) => view.templates_in(Some(*folder_id)),
                None => view.templates().collect(),
            };
            println!(
                "{}",
                render(&templates, cli.format, |t| pretty::format_templates(t.as_slice()))
            );
        }
        TemplatesAction::Get {
            service_id,
            id,
            version,
        } => {
            let template = client
                .get_service_template(*service_id, *id, *version)
                .await?;
            println!("{}", render(&template, cli.format, pretty::format_template));
        }
        TemplatesAction::Versions { service_id, id } => {
            let versions = client
                .get_service_template_versions(*service_id, *id)
                .await?;
            println!(
                "{}",
                render(&versions, cli.format, |v| pretty::format_templates(v.as_slice()))
            );
        }
        TemplatesAction::Usage { service_id, days } => {
            let usage = client.get_template_usage(*service_id, *days).await?;
            println!("{}", render(&usage, cli.format, |u| pretty::format_usage(u)));
        }
    }
    Ok(())
}

async fn run_cache(cli: &Cli, registry: &ClientRegistry, action: &CacheAction) -> Result<()> {
    match action {
        CacheAction::Get { key, args } => {
            let key = resolve_key(key, args)?;
            match registry.cache().get(&key).await? {
                Some(bytes) => println!("{}", json::format_cached_bytes(&bytes)),
                None => {
                    if !cli.quiet {
                        println!("No entry for '{}'", key);
                    }
                }
            }
        }
        CacheAction::Purge { key, args } => {
            let key = resolve_key(key, args)?;
            if key == "*" {
                let removed = registry.reset_all().await?;
                if !cli.quiet {
                    println!("Removed {} entries", removed);
                }
            } else if is_pattern(&key) {
                let removed = registry.cache().delete_pattern(&key).await?;
                tracing::info!(pattern = %key, removed, "Cache entries purged");
                if !cli.quiet {
                    println!("Removed {} entries matching '{}'", removed, key);
                }
            } else {
                registry.cache().delete(&key).await?;
                tracing::info!(key = %key, "Cache entry purged");
                if !cli.quiet {
                    println!("Removed '{}'", key);
                }
            }
        }
    }
    Ok(())
}

/// Resolve a key template against `name=value` arguments.
fn resolve_key(source: &str, args: &[(String, String)]) -> Result<String> {
    let template = KeyTemplate::new(source)?;
    let call = args.iter().fold(
        CallArgs::new(std::iter::empty::<String>()),
        |call, (name, value)| call.kwarg(name.as_str(), value),
    );
    Ok(template.resolve(&call)?)
}
