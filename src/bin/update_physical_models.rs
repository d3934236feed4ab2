//! One-shot maintenance pass over the miniatures store:
//!
//! 1. normalize print status, material, and source URLs per manufacturer,
//! 2. seed physical models for Catalyst plastic releases transcribed from
//!    the wiki,
//! 3. snapshot Iron Wind Metals coverage (read-only),
//! 4. print before/after manufacturer totals and orphaned chassis.
//!
//! No arguments. The store path defaults to `backend/slic.db`; override with
//! SLIC_DB_PATH. Set DRY_RUN=1 to roll back the mutating stages instead of
//! committing.

use anyhow::{bail, Result};

use slic_minis::cli::model_counts;
use slic_minis::database_ops::{catalyst_seed, iwm_gaps, print_status};
use slic_minis::util::db::Store;
use slic_minis::util::env as env_util;

/// Unresolved release names to spell out before cutting the list off.
const UNRESOLVED_SAMPLE: usize = 20;

fn main() -> Result<()> {
    slic_minis::tracing::init_tracing("info")?;
    env_util::bootstrap_cli("update_physical_models");

    let path = env_util::store_path();
    let mut store = Store::open(&path)?;
    for table in ["chassis", "physical_models"] {
        if !store.table_exists(table)? {
            bail!("store at {path} is missing required table '{table}'");
        }
    }
    let dry_run = env_util::env_flag("DRY_RUN", false);
    if dry_run {
        println!("DRY_RUN set: mutating stages will be rolled back");
    }

    model_counts::print_summary(&store.conn, "Before update")?;

    println!("\n--- Updating source urls and print status ---");
    let status = print_status::run(&mut store.conn, dry_run)?;
    println!(
        "Updated {} models across all manufacturer lines",
        status.ral_partha + status.armorcast + status.iwm + status.catalyst + status.proxy
    );

    println!("\n--- Seeding missing Catalyst models ---");
    let seeded = catalyst_seed::run(&mut store.conn, dry_run)?;
    println!("Added {} new Catalyst models", seeded.added);
    if !seeded.unresolved.is_empty() {
        let sample: Vec<&str> = seeded
            .unresolved
            .iter()
            .take(UNRESOLVED_SAMPLE)
            .map(String::as_str)
            .collect();
        println!(
            "  Skipped (no chassis match, {} total): {:?}",
            seeded.unresolved.len(),
            sample
        );
    }

    println!("\n--- Checking IWM coverage ---");
    let coverage = iwm_gaps::report(&store.conn)?;
    println!(
        "IWM: {} existing SKUs, {} chassis covered",
        coverage.distinct_skus, coverage.distinct_chassis
    );

    println!();
    model_counts::print_summary(&store.conn, "After update")?;
    println!();
    model_counts::print_orphans(&store.conn)?;

    Ok(())
}
