//! Command runners.
//!
//! Each runner prints human-readable lines to `out`. Domain failures are
//! printed as messages; only writer failures are returned.

use crate::demo;
use log::info;
use recordkit_core::report::{
    account_summary_line, format_cents, inventory_line, stock_line, transaction_line,
};
use recordkit_core::{
    FinanceService, GradingService, InventoryItem, InventoryLogService, PharmacyService,
    ReloadOutcome, StockItem, WarehouseService,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

pub fn run_warehouse(out: &mut impl Write) -> io::Result<()> {
    let mut service = WarehouseService::new();
    for item in demo::stock_items() {
        if let Err(err) = service.add_item(item) {
            writeln!(out, "Could not add item: {err}")?;
        }
    }
    print_stock(&service, out)?;

    writeln!(out, "\nAdding a second item with id 1...")?;
    if let Err(err) = service.add_item(StockItem::new(1, "duplicate shelf", 1, 100)) {
        writeln!(out, "Could not add item: {err}")?;
    }

    writeln!(out, "Setting stock of item 2 to 25...")?;
    match service.update_stock(2, 25) {
        Ok(item) => writeln!(out, "Updated: {}", stock_line(item))?,
        Err(err) => writeln!(out, "Could not update stock: {err}")?,
    }

    writeln!(out, "Setting stock of item 3 to -5...")?;
    if let Err(err) = service.update_stock(3, -5) {
        writeln!(out, "Could not update stock: {err}")?;
    }

    writeln!(out, "Removing item 999...")?;
    if let Err(err) = service.remove_item(999) {
        writeln!(out, "Could not remove item: {err}")?;
    }

    writeln!(out)?;
    print_stock(&service, out)?;
    for item in service.low_stock(5) {
        writeln!(out, "Low stock: {}", item.name)?;
    }
    Ok(())
}

fn print_stock(service: &WarehouseService, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Warehouse stock ({} items):", service.len())?;
    for item in service.items() {
        writeln!(out, "  {}", stock_line(item))?;
    }
    writeln!(
        out,
        "Total value: {}",
        format_cents(service.total_stock_value_cents())
    )
}

/// Looks up one patient. Prompts on `input` when `patient` is `None`.
pub fn run_pharmacy(
    patient: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut service = PharmacyService::new();
    for record in demo::patients() {
        if let Err(err) = service.add_patient(record) {
            writeln!(out, "Could not add patient: {err}")?;
        }
    }
    for rx in demo::prescriptions() {
        if let Err(err) = service.add_prescription(rx) {
            writeln!(out, "Could not add prescription: {err}")?;
        }
    }

    let raw = match patient {
        Some(raw) => raw.to_string(),
        None => {
            write!(out, "Enter patient id: ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    match service.lookup_input(&raw) {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

pub fn run_finance(out: &mut impl Write) -> io::Result<()> {
    let mut service = FinanceService::new();
    for tx in demo::transactions() {
        if let Err(err) = service.record(tx) {
            writeln!(out, "Could not record transaction: {err}")?;
        }
    }

    writeln!(out, "Transactions:")?;
    for tx in service.transactions() {
        writeln!(out, "  {}", transaction_line(tx))?;
    }
    writeln!(out, "Accounts:")?;
    for summary in service.summaries() {
        writeln!(out, "  {}", account_summary_line(&summary))?;
    }
    if let Some(tx) = service.largest_transaction() {
        writeln!(out, "Largest: {}", transaction_line(tx))?;
    }
    Ok(())
}

pub fn run_inventory_add(
    path: &Path,
    id: u32,
    name: &str,
    quantity: i64,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut service = InventoryLogService::new(path);
    if let Err(err) = service.load() {
        writeln!(out, "Could not load inventory log, not saving: {err}")?;
        return Ok(());
    }

    if let Err(err) = service.record(InventoryItem::new(id, name, quantity)) {
        writeln!(out, "Item rejected: {err}")?;
        return Ok(());
    }

    match service.save() {
        Ok(count) => {
            info!("event=inventory_add module=cli status=ok item_id={id}");
            writeln!(out, "Saved {count} items to {}", path.display())
        }
        Err(err) => writeln!(out, "Could not save inventory log: {err}"),
    }
}

pub fn run_inventory_list(path: &Path, out: &mut impl Write) -> io::Result<()> {
    let mut service = InventoryLogService::new(path);
    match service.load() {
        Ok(ReloadOutcome::NoData) => {
            return writeln!(out, "No data found at {}", path.display());
        }
        Ok(ReloadOutcome::Loaded(_)) => {}
        Err(err) => return writeln!(out, "Could not load inventory log: {err}"),
    }

    for item in service.items() {
        writeln!(out, "{}", inventory_line(item))?;
    }
    writeln!(
        out,
        "{} items, total quantity {}",
        service.items().len(),
        service.total_quantity()
    )
}

pub fn run_grades(input: &Path, output: &Path, out: &mut impl Write) -> io::Result<()> {
    let mut service = GradingService::new();
    let summary = match service.grade_file(input, output) {
        Ok(summary) => summary,
        Err(err) => return writeln!(out, "Grading failed: {err}"),
    };

    writeln!(
        out,
        "Graded {} students into {}",
        summary.count,
        output.display()
    )?;
    if let Some(average) = summary.average {
        writeln!(out, "Average score: {average:.1}")?;
    }
    for (grade, count) in summary.distribution() {
        writeln!(out, "  {grade}: {count}")?;
    }
    Ok(())
}
