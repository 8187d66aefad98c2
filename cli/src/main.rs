use clap::Parser;
use study_core::{ClientConfig, SubjectController, SubjectService, UreqTransport};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Manage study subjects on a remote study planner service.
#[derive(Debug, Parser)]
#[command(name = "study-planner", version)]
struct Args {
    /// API base URL. Falls back to $STUDY_PLANNER_API_URL, then http://localhost:8000.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ClientConfig::from_env(args.api_url);
    info!(base_url = %config.base_url, "starting");

    let mut controller = SubjectController::new(SubjectService::new(&config.base_url, UreqTransport::new()));

    let mut updates = controller.subscribe();
    tokio::spawn(async move {
        let mut was_busy = false;
        while updates.changed().await.is_ok() {
            let busy = updates.borrow_and_update().is_busy;
            if busy && !was_busy {
                println!("Loading...");
            }
            was_busy = busy;
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    study_cli::run_session(&mut controller, stdin, &mut std::io::stdout()).await
}
