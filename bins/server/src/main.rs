use std::process::ExitCode;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    match server::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // config errors happen before the subscriber exists, so stderr gets it too
            error!(err = %e, "vehicle ledger server exited with error");
            eprintln!("vehicle-ledger: {e:#}");
            ExitCode::FAILURE
        }
    }
}
