use stockbook_cli::DemoConfig;
use stockbook_inventory::StockLedger;

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(data_path = %config.data_path.display(), "running stock demo");

    let mut ledger = StockLedger::new();
    stockbook_cli::run(&mut ledger, &config)
}
