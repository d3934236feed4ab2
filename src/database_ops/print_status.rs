//! Print-status pass: per-manufacturer bulk status/material updates followed
//! by per-row source URL synthesis. One transaction, committed at stage end.

use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::info;

use crate::catalog::{
    ARMORCAST, CATALYST, IWM, MATERIAL_PEWTER, MATERIAL_PLASTIC, MATERIAL_RESIN_PEWTER, PROXY,
    RAL_PARTHA,
};
use crate::normalization::listing;

/// Rows touched per manufacturer by the bulk status updates.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub ral_partha: usize,
    pub armorcast: usize,
    pub iwm: usize,
    pub catalyst: usize,
    pub proxy: usize,
}

struct ModelRow {
    id: i64,
    name: String,
    sku: Option<String>,
    source_url: String,
}

fn rows_for(tx: &Transaction, manufacturer: &str) -> Result<Vec<ModelRow>> {
    let mut stmt = tx.prepare(
        "SELECT id, name, sku, source_url FROM physical_models WHERE manufacturer = ?1",
    )?;
    let rows = stmt
        .query_map([manufacturer], |row| {
            Ok(ModelRow {
                id: row.get(0)?,
                name: row.get(1)?,
                sku: row.get(2)?,
                source_url: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn set_source_url(tx: &Transaction, id: i64, url: &str) -> Result<()> {
    tx.execute(
        "UPDATE physical_models SET source_url = ?1 WHERE id = ?2",
        params![url, id],
    )?;
    Ok(())
}

fn trimmed_sku(row: &ModelRow) -> Option<&str> {
    row.sku
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Run the whole pass. With `dry_run` the transaction is rolled back and the
/// store is left untouched; the summary still reports what would change.
pub fn run(conn: &mut Connection, dry_run: bool) -> Result<StatusSummary> {
    let tx = conn.transaction()?;
    let mut summary = StatusSummary::default();

    // Ral Partha lines are long discontinued; point buyers at the secondary
    // market.
    summary.ral_partha = tx.execute(
        "UPDATE physical_models SET in_print = 0, material = ?1 WHERE manufacturer = ?2",
        params![MATERIAL_PEWTER, RAL_PARTHA],
    )?;
    info!(rows = summary.ral_partha, "ral partha marked out of print");
    for row in rows_for(&tx, RAL_PARTHA)? {
        let phrase = listing::search_phrase(&row.name);
        let url =
            listing::ebay_search_url(&format!("battletech {phrase} miniature ral partha"));
        set_source_url(&tx, row.id, &url)?;
    }

    summary.armorcast = tx.execute(
        "UPDATE physical_models SET in_print = 0, material = ?1 WHERE manufacturer = ?2",
        params![MATERIAL_RESIN_PEWTER, ARMORCAST],
    )?;
    info!(rows = summary.armorcast, "armorcast marked out of print");
    for row in rows_for(&tx, ARMORCAST)? {
        let phrase = listing::strip_parentheticals(&row.name);
        let url = listing::ebay_search_url(&format!("battletech {phrase} armorcast"));
        set_source_url(&tx, row.id, &url)?;
    }

    summary.iwm = tx.execute(
        "UPDATE physical_models SET in_print = 1, material = ?1 WHERE manufacturer = ?2",
        params![MATERIAL_PEWTER, IWM],
    )?;
    info!(rows = summary.iwm, "iwm marked in print");
    for row in rows_for(&tx, IWM)? {
        if let Some(sku) = trimmed_sku(&row) {
            // Hand-curated vendor links stay; only fill empty or off-vendor
            // URLs from the catalog search template.
            if row.source_url.is_empty() || !row.source_url.contains(listing::IWM_DOMAIN) {
                set_source_url(&tx, row.id, &listing::iwm_catalog_url(sku))?;
            }
        }
    }

    summary.catalyst = tx.execute(
        "UPDATE physical_models SET in_print = 1, material = ?1 WHERE manufacturer = ?2",
        params![MATERIAL_PLASTIC, CATALYST],
    )?;
    info!(rows = summary.catalyst, "catalyst marked in print");
    for row in rows_for(&tx, CATALYST)? {
        let url = match trimmed_sku(&row) {
            Some(sku) => listing::catalyst_store_url(sku),
            None => {
                let phrase = listing::strip_variant_suffix(&row.name);
                listing::ebay_search_url(&format!("battletech {phrase} miniature"))
            }
        };
        set_source_url(&tx, row.id, &url)?;
    }

    // Proxy entries are stand-ins with nothing to buy; clear any link.
    summary.proxy = tx.execute(
        "UPDATE physical_models SET source_url = '', in_print = 0 WHERE manufacturer = ?1",
        [PROXY],
    )?;
    info!(rows = summary.proxy, "proxy source urls cleared");

    if dry_run {
        tx.rollback()?;
        info!("dry-run: print-status stage rolled back");
    } else {
        tx.commit()?;
    }
    Ok(summary)
}
