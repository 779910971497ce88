use anyhow::Result;
use clap::{Parser, error::ErrorKind};
use console::style;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use s3_obfuscate::{
    Config, DryRunStore, ObjectStore, RootSegment, S3Client, UploadOptions, upload_folder,
};

#[derive(Parser, Debug)]
#[command(
    name = "s3obfuscate",
    version = env!("CARGO_PKG_VERSION"),
    author = "Tyr Chen <tyr.chen@gmail.com>",
    about = "Upload a folder to AWS S3 with hashed folder names",
    long_about = "Uploads every file under a folder to S3. Each directory level of the object key is \
                  replaced by the first 16 hex characters of its SHA-256 hash, so folder names cannot \
                  be read from the bucket. File names are kept. Configure via .env file.",
    after_help = "Examples:\n  \
                  s3obfuscate ./photos                    # Upload the photos folder\n  \
                  s3obfuscate ./photos --dry-run          # Show keys without uploading\n\n\
                  Configuration (.env):\n  \
                  AWS_REGION=us-west-2\n  \
                  S3_BUCKET_NAME=my-bucket\n  \
                  AWS_PROFILE=backup                      # optional\n\n\
                  For more information: https://github.com/tyrchen/swiss-knife"
)]
struct Cli {
    /// Folder to upload
    root: PathBuf,

    /// Print the object keys without uploading anything
    #[arg(long)]
    dry_run: bool,

    /// Prefix files at the top of the folder with the hash of "." like older uploads did
    #[arg(long)]
    legacy_root_segment: bool,
}

#[tokio::main]
async fn main() {
    // Load .env file early to get LOG_LEVEL
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli).await {
        error!("Upload failed: {:#}", e);
        std::process::exit(1);
    }

    println!(
        "{}",
        style("All files uploaded successfully!").green().bold()
    );
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    let options = UploadOptions {
        root_segment: if cli.legacy_root_segment {
            RootSegment::Hashed
        } else {
            RootSegment::Omit
        },
        show_progress: true,
    };

    if cli.dry_run {
        let store = DryRunStore::new(config.bucket.clone());
        upload(&store, &cli.root, &options).await
    } else {
        let store = S3Client::new(config).await;
        upload(&store, &cli.root, &options).await
    }
}

async fn upload<S: ObjectStore>(store: &S, root: &Path, options: &UploadOptions) -> Result<()> {
    info!("S3 Obfuscate v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "{}",
        style(format!("📦 Target: {}", store.location())).cyan().bold()
    );

    let count = upload_folder(store, root, options).await?;
    info!("{} file(s) uploaded from {}", count, root.display());
    Ok(())
}
