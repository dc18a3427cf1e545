#[tokio::main]
async fn main() {
    if let Err(err) = fleet_matcher::cli::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
