//! Console front end for the client-record manager.

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use validator::Validate;

use mini_crm::domain::client::{Client, ClientStatus};
use mini_crm::domain::filters::{SavedFilters, StatusFilter};
use mini_crm::forms::client::ClientForm;
use mini_crm::i18n::Locale;
use mini_crm::models::config::AppConfig;
use mini_crm::repository::{
    FilterStore, StorageClientRepository, StorageFilterRepository,
};
use mini_crm::services::{ClientStore, filter_clients};
use mini_crm::storage::{FileStorage, KeyValueStorage};

#[derive(Parser)]
#[command(name = "mini-crm", about = "Manage client contact records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List clients, applying and persisting search/status filters
    List {
        /// Substring to search for in name, email or phone
        #[arg(long)]
        search: Option<String>,
        /// Status to filter by: new, active, blocked or any
        #[arg(long)]
        status: Option<String>,
    },
    /// Create a client
    Add {
        name: String,
        email: String,
        phone: String,
        #[arg(long, default_value = "new")]
        status: String,
    },
    /// Update an existing client
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a client
    Remove { id: i64 },
}

fn parse_status_filter(value: &str) -> Result<StatusFilter, Box<dyn Error>> {
    match value {
        "" | "any" => Ok(StatusFilter::Any),
        other => Ok(StatusFilter::Only(other.parse::<ClientStatus>()?)),
    }
}

fn print_clients(clients: &[Client]) {
    println!(
        "{:<15} {:<22} {:<28} {:<20} {:<8}",
        "ID", "NAME", "EMAIL", "PHONE", "STATUS"
    );
    for c in clients {
        println!(
            "{:<15} {:<22} {:<28} {:<20} {:<8}",
            c.id, c.name, c.email, c.phone, c.status
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let file_storage = match config.storage_quota_bytes {
        Some(bytes) => FileStorage::open_with_quota(&config.data_file, Some(bytes))?,
        None => FileStorage::open(&config.data_file)?,
    };
    let storage: Arc<dyn KeyValueStorage> = Arc::new(file_storage);

    let locale = Locale::from_storage(storage.as_ref());
    let repo = StorageClientRepository::new(storage.clone()).with_latency(config.latency());
    let filter_repo = StorageFilterRepository::new(storage);
    let mut store = ClientStore::new(repo, locale);

    match cli.command {
        Command::List { search, status } => {
            let saved = filter_repo.load_filters();
            let filters = SavedFilters {
                search: search.unwrap_or(saved.search),
                status: match status {
                    Some(raw) => parse_status_filter(&raw)?,
                    None => saved.status,
                },
            };
            filter_repo.save_filters(&filters);

            store.fetch_all().await?;
            print_clients(&filter_clients(store.records(), &filters));
        }
        Command::Add {
            name,
            email,
            phone,
            status,
        } => {
            let form = ClientForm {
                name,
                email,
                phone,
                status: status.parse()?,
            };
            form.validate()?;
            let client = store.create(&(&form).into()).await?;
            println!("created client {}", client.id);
        }
        Command::Edit {
            id,
            name,
            email,
            phone,
            status,
        } => {
            store.fetch_all().await?;
            let Some(current) = store.find_by_id(id).cloned() else {
                return Err(format!("client with id {id} not found").into());
            };
            let form = ClientForm {
                name: name.unwrap_or_else(|| current.name.clone()),
                email: email.unwrap_or_else(|| current.email.clone()),
                phone: phone.unwrap_or_else(|| current.phone.clone()),
                status: match status {
                    Some(raw) => raw.parse()?,
                    None => current.status,
                },
            };
            form.validate()?;
            let client = store.update(id, &(&form).into()).await?;
            println!("updated client {}", client.id);
        }
        Command::Remove { id } => {
            store.delete(id).await?;
            println!("deleted client {id}");
        }
    }

    Ok(())
}
