//! media_library CLI - List and search files in a cloud media library.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use media_library::{Credentials, ListFileOptions, MediaItem, MediaLibraryClient};

/// CLI tool for listing and searching a cloud media library.
#[derive(Parser)]
#[command(name = "media_library")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to JSON credentials file (privateKey, optionally publicKey and
    /// urlEndpoint). Falls back to MEDIA_LIBRARY_PRIVATE_KEY when omitted.
    #[arg(long, env = "MEDIA_LIBRARY_CREDENTIALS")]
    credentials: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List files, with optional filters.
    List {
        /// Folder path to limit the search to, e.g. /sales-banner/.
        #[arg(long)]
        path: Option<String>,

        /// File classification filter: all, image or non-image.
        #[arg(long)]
        file_type: Option<String>,

        /// Tags to match; files matching any tag are included.
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Include folders in the results (the server then ignores tag and
        /// file-type filters).
        #[arg(long)]
        include_folder: bool,

        /// Exact file or folder name.
        #[arg(long)]
        name: Option<String>,

        /// Maximum number of results per request, 1 to 1000.
        #[arg(long)]
        limit: Option<u32>,

        /// Number of results to skip.
        #[arg(long)]
        skip: Option<u32>,

        /// Sort token, e.g. ASC_NAME, DESC_CREATED, ASC_SIZE.
        #[arg(long)]
        sort: Option<String>,

        /// Restrict results to file, folder or all.
        #[arg(long = "type")]
        item_type: Option<String>,

        /// Follow pagination and fetch every matching item.
        #[arg(long)]
        all: bool,
    },

    /// Search files with a query expression.
    Search {
        /// Query string in the service's search language,
        /// e.g. 'createdAt > "7d" AND size > "1mb"'.
        query: String,

        /// Maximum number of results per request, 1 to 1000.
        #[arg(long)]
        limit: Option<u32>,

        /// Number of results to skip.
        #[arg(long)]
        skip: Option<u32>,

        /// Follow pagination and fetch every matching item.
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let credentials = match &cli.credentials {
        Some(path) => Credentials::from_file(path)
            .with_context(|| format!("Failed to load credentials from {:?}", path))?,
        None => Credentials::from_env()
            .context("No credentials file given and MEDIA_LIBRARY_PRIVATE_KEY is not set")?,
    };

    let client = MediaLibraryClient::new(credentials);

    match cli.command {
        Commands::List {
            path,
            file_type,
            tags,
            include_folder,
            name,
            limit,
            skip,
            sort,
            item_type,
            all,
        } => {
            let options = ListFileOptions {
                path,
                file_type: file_type
                    .as_deref()
                    .map(str::parse)
                    .transpose()
                    .context("Invalid --file-type")?,
                tags,
                include_folder: include_folder.then_some(true),
                name,
                limit,
                skip,
                sort: sort
                    .as_deref()
                    .map(str::parse)
                    .transpose()
                    .context("Invalid --sort")?,
                item_type: item_type
                    .as_deref()
                    .map(str::parse)
                    .transpose()
                    .context("Invalid --type")?,
                search_query: None,
            };

            let items = fetch(&client, &options, all).await?;
            print_items(&items);
        }

        Commands::Search {
            query,
            limit,
            skip,
            all,
        } => {
            let options = ListFileOptions {
                search_query: Some(query),
                limit,
                skip,
                ..Default::default()
            };

            let items = fetch(&client, &options, all).await?;
            print_items(&items);
        }
    }

    Ok(())
}

async fn fetch(
    client: &MediaLibraryClient,
    options: &ListFileOptions,
    all: bool,
) -> Result<Vec<MediaItem>> {
    let result = if all {
        client.list_all(options).await
    } else {
        client.list_files(options).await
    };

    result.context("List request failed")
}

fn print_items(items: &[MediaItem]) {
    if items.is_empty() {
        println!("No files found.");
    } else {
        println!("{:<26} {:<8} {:<26} {}", "FILE ID", "TYPE", "CREATED", "PATH");
        println!("{}", "-".repeat(100));
        for item in items {
            println!("{}", item);
        }
    }
}
