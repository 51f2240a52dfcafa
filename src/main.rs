use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use payment_allocator::application::allocator::PaymentAllocator;
use payment_allocator::config::{AllocatorConfig, DEFAULT_POINTS_METHOD_ID};
use payment_allocator::interfaces::csv::spend_writer::SpendWriter;
use payment_allocator::interfaces::json::ledger_reader::{OrderReader, PaymentMethodReader};
use payment_allocator::logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders JSON file
    orders: PathBuf,

    /// Payment methods JSON file
    payment_methods: PathBuf,

    /// Id of the loyalty-points payment method
    #[arg(long, default_value = DEFAULT_POINTS_METHOD_ID)]
    points_id: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let file = File::open(&cli.orders)
        .into_diagnostic()
        .wrap_err("Error reading orders file")?;
    let mut orders = OrderReader::new(file)
        .orders()
        .into_diagnostic()
        .wrap_err("Error parsing orders file")?;

    let file = File::open(&cli.payment_methods)
        .into_diagnostic()
        .wrap_err("Error reading payment methods file")?;
    let mut methods = PaymentMethodReader::new(file)
        .payment_methods()
        .into_diagnostic()
        .wrap_err("Error parsing payment methods file")?;

    let allocator =
        PaymentAllocator::new(AllocatorConfig::default().with_points_method_id(cli.points_id));
    let spends = allocator
        .allocate(&mut orders, &mut methods)
        .into_diagnostic()
        .wrap_err("Allocation failed")?;

    let stdout = io::stdout();
    let mut writer = SpendWriter::new(stdout.lock());
    writer.write_spends(&spends).into_diagnostic()?;

    Ok(())
}
