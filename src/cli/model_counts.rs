//! Operator-facing store diagnostics: per-manufacturer totals and chassis
//! left without any physical model. Purely read-only.

use std::fmt::Write as _;

use anyhow::Result;
use rusqlite::Connection;

/// How many orphan chassis names to spell out before cutting the list off.
const ORPHAN_SAMPLE: usize = 20;

#[derive(Debug, PartialEq, Eq)]
pub struct ManufacturerCount {
    pub manufacturer: String,
    pub total: i64,
    pub in_print: i64,
}

/// Manufacturer → (total rows, in-print rows), largest line first.
pub fn manufacturer_counts(conn: &Connection) -> Result<Vec<ManufacturerCount>> {
    let mut stmt = conn.prepare(
        "SELECT manufacturer, COUNT(*), COALESCE(SUM(in_print), 0)
         FROM physical_models
         GROUP BY manufacturer
         ORDER BY COUNT(*) DESC, manufacturer",
    )?;
    let counts = stmt
        .query_map([], |row| {
            Ok(ManufacturerCount {
                manufacturer: row.get(0)?,
                total: row.get(1)?,
                in_print: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(counts)
}

/// Chassis with no linked physical model at all, in id order.
pub fn orphan_chassis(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT c.name FROM chassis c
         WHERE NOT EXISTS (
             SELECT 1 FROM physical_models pm WHERE pm.chassis_id = c.id
         )
         ORDER BY c.id",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Print the manufacturer table under the given heading.
pub fn print_summary(conn: &Connection, heading: &str) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "{heading}:").ok();
    for row in manufacturer_counts(conn)? {
        writeln!(
            out,
            "  {}: {} total, {} in print",
            row.manufacturer, row.total, row.in_print
        )
        .ok();
    }
    print!("{out}");
    Ok(())
}

/// Print the orphan-chassis count plus a capped name sample.
pub fn print_orphans(conn: &Connection) -> Result<()> {
    let orphans = orphan_chassis(conn)?;
    println!("Chassis with no physical model: {}", orphans.len());
    if !orphans.is_empty() {
        let sample: Vec<&str> = orphans
            .iter()
            .take(ORPHAN_SAMPLE)
            .map(String::as_str)
            .collect();
        println!("  First {}: {:?}", sample.len(), sample);
    }
    Ok(())
}
