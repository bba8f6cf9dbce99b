use std::process::ExitCode;

use stockbook_inventory::InventoryService;

fn main() -> ExitCode {
    stockbook_observability::init();

    let mut service = InventoryService::new();
    let stdout = std::io::stdout();

    match stockbook_demo::run(&mut service, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "script aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
