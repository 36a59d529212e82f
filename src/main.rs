//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::edit::EditPost;
use folio_rs::commands::new::NewPost;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Content pipeline of a client-rendered personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Add a post to the top of the catalog
    New {
        /// Title of the new post
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Short summary shown on cards
        #[arg(short, long)]
        excerpt: Option<String>,

        /// Reading time label, e.g. "3 min read"
        #[arg(short, long)]
        read_time: Option<String>,

        /// Publication date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Update an existing post, matched by its current slug
    Edit {
        /// Current slug of the post
        slug: String,

        /// Rename the post; its body file moves along
        #[arg(long)]
        new_slug: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New summary shown on cards
        #[arg(short, long)]
        excerpt: Option<String>,

        /// New reading time label
        #[arg(short, long)]
        read_time: Option<String>,

        /// New publication date
        #[arg(long)]
        date: Option<String>,

        /// Markdown file replacing the post body
        #[arg(short, long)]
        body: Option<PathBuf>,
    },

    /// Copy an image into assets/ and print the markdown to embed it
    Asset {
        /// Image file (png, jpg, jpeg, gif, webp)
        file: PathBuf,

        /// Alt text of the image
        #[arg(short, long, default_value = "Alt Text")]
        alt: String,

        /// Overwrite an existing asset with the same name
        #[arg(short, long)]
        force: bool,
    },

    /// List posts through the index engine
    List {
        /// Case-insensitive search in title and excerpt
        #[arg(short, long, default_value = "")]
        query: String,

        /// Oldest posts first
        #[arg(long)]
        oldest: bool,

        /// Group by year and month
        #[arg(short, long)]
        timeline: bool,
    },

    /// Render a location headlessly and print the main container
    Render {
        /// In-app location, e.g. /posts or /post/hello-world
        #[arg(default_value = "/")]
        location: String,

        /// Fetch data from a deployed site instead of the local directory
        #[arg(short, long)]
        remote: Option<String>,
    },

    /// Export static pages with per-page metadata
    #[command(alias = "g")]
    Export,

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip)
        #[arg(short, long)]
        ip: Option<String>,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Show the stored theme preference
    Theme {
        /// Switch between light and dark
        #[arg(short, long)]
        toggle: bool,
    },

    /// Remove exported pages and local storage
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            slug,
            excerpt,
            read_time,
            date,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            folio_rs::commands::new::run(
                &folio,
                NewPost {
                    title,
                    slug,
                    excerpt,
                    read_time,
                    date,
                },
            )?;
        }

        Commands::Edit {
            slug,
            new_slug,
            title,
            excerpt,
            read_time,
            date,
            body,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Editing post: {}", slug);
            folio_rs::commands::edit::run(
                &folio,
                EditPost {
                    slug,
                    new_slug,
                    title,
                    excerpt,
                    read_time,
                    date,
                    body,
                },
            )?;
        }

        Commands::Asset { file, alt, force } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::asset::run(&folio, &file, &alt, force)?;
        }

        Commands::List {
            query,
            oldest,
            timeline,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &query, oldest, timeline)?;
        }

        Commands::Render { location, remote } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::render::run(&folio, &location, remote.as_deref()).await?;
        }

        Commands::Export => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Exporting static pages...");
            let count = folio.export()?;
            println!("Exported {} pages.", count);
        }

        Commands::Server { port, ip, r#static } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let port = port.unwrap_or(folio.config.server.port);
            let ip = ip.unwrap_or_else(|| folio.config.server.ip.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port, !r#static).await?;
        }

        Commands::Theme { toggle } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::theme::run(&folio, toggle)?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning exported pages...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
