//! Compare two party statements from the command line
//!
//! ```text
//! cargo run --example compare_statements -- ours.pdf theirs.pdf [Given|Received]
//! ```

use statement_recon::{
    compare_statements, AmountColumn, ComparisonStatus, ExtractionResult, Extractor,
    ReconcileOptions, TransactionTable,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: compare_statements <first.pdf> <second.pdf> [Given|Received]");
        std::process::exit(2);
    }

    let column: AmountColumn = args.get(2).map_or("Given", String::as_str).parse()?;
    let first = std::fs::read(&args[0])?;
    let second = std::fs::read(&args[1])?;

    println!("📄 Statement Reconciliation\n");

    let report = compare_statements(
        &Extractor::default(),
        &first,
        &second,
        column,
        &ReconcileOptions::default(),
    );

    print_table(&args[0], &report.first);
    print_table(&args[1], &report.second);

    match &report.status {
        ComparisonStatus::Compared(rows) => {
            println!("🔍 Comparison on {}:", report.column);
            println!("  {:<12} {:>14} {:>14}  Status", "Date", "Statement 1", "Statement 2");
            for row in rows {
                println!(
                    "  {:<12} {:>14} {:>14}  {}",
                    row.date.format("%d/%m/%Y").to_string(),
                    amount(row.first.as_ref()),
                    amount(row.second.as_ref()),
                    row.verdict
                );
            }
            println!();

            if report.all_match() {
                println!("✅ {}", report.summary());
            } else {
                println!("⚠️  {}", report.summary());
                for row in report.mismatches() {
                    println!(
                        "  {}: {} vs {}",
                        row.date.format("%d/%m/%Y"),
                        amount(row.first.as_ref()),
                        amount(row.second.as_ref())
                    );
                }
            }
        }
        ComparisonStatus::Skipped { reason } => {
            println!("❌ {}", reason);
        }
    }

    Ok(())
}

fn print_table(path: &str, table: &ExtractionResult<TransactionTable>) {
    println!("📊 {}", path);
    match table {
        Ok(table) => {
            for record in table {
                println!(
                    "  {:<12} Given: {:>12}  Received: {:>12}",
                    record.date.to_string(),
                    amount(record.given.as_ref()),
                    amount(record.received.as_ref())
                );
            }
        }
        Err(e) => println!("  {}", e),
    }
    println!();
}

fn amount(value: Option<&bigdecimal::BigDecimal>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("₹{}", v))
}
