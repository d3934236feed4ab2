//! Catalyst seeding pass: insert a physical model for every transcribed
//! plastic release whose chassis is not yet covered by a Catalyst row.

use std::collections::HashSet;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::{info, warn};

use crate::catalog::{CatalystRelease, CATALYST, CATALYST_RELEASES, MATERIAL_PLASTIC};
use crate::normalization::chassis::ChassisResolver;
use crate::normalization::listing;

/// What the pass did: rows inserted, plus the release names whose chassis
/// could not be resolved (soft skips, reported for operator review).
#[derive(Debug, Default)]
pub struct SeedOutcome {
    pub added: usize,
    pub unresolved: Vec<String>,
}

fn chassis_resolver(tx: &Transaction) -> Result<ChassisResolver> {
    let mut stmt = tx.prepare("SELECT id, name FROM chassis")?;
    let names = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(1)?, row.get::<_, i64>(0)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(ChassisResolver::new(names))
}

fn covered_chassis(tx: &Transaction) -> Result<HashSet<i64>> {
    let mut stmt = tx.prepare(
        "SELECT DISTINCT chassis_id FROM physical_models WHERE manufacturer = ?1",
    )?;
    let ids = stmt
        .query_map([CATALYST], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<HashSet<_>>>()?;
    Ok(ids)
}

/// Seed the store from the embedded release list.
pub fn run(conn: &mut Connection, dry_run: bool) -> Result<SeedOutcome> {
    seed_releases(conn, CATALYST_RELEASES, dry_run)
}

/// Seed from an explicit release list. One transaction; a chassis already
/// carrying a Catalyst model is never given a second one, even when it
/// appears under several release entries.
pub fn seed_releases(
    conn: &mut Connection,
    releases: &[CatalystRelease],
    dry_run: bool,
) -> Result<SeedOutcome> {
    let tx = conn.transaction()?;
    let resolver = chassis_resolver(&tx)?;
    let mut covered = covered_chassis(&tx)?;
    let mut outcome = SeedOutcome::default();

    // Walk in list order; a mech shipping in several boxes keeps its first
    // transcription entry.
    for release in releases {
        let Some(chassis_id) = resolver.resolve(release.mech) else {
            outcome.unresolved.push(release.mech.to_string());
            continue;
        };
        if covered.contains(&chassis_id) {
            continue;
        }
        // The covered set was read once up front; re-check right before the
        // insert in case a row appeared outside it.
        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM physical_models WHERE chassis_id = ?1 AND manufacturer = ?2",
                params![chassis_id, CATALYST],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            covered.insert(chassis_id);
            continue;
        }

        tx.execute(
            "INSERT INTO physical_models
                 (chassis_id, name, manufacturer, sku, source_url, in_print, material, year)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?7)",
            params![
                chassis_id,
                format!("{} (Catalyst)", release.mech),
                CATALYST,
                release.sku,
                listing::catalyst_store_url(release.sku),
                MATERIAL_PLASTIC,
                release.year,
            ],
        )?;
        covered.insert(chassis_id);
        outcome.added += 1;
    }

    if !outcome.unresolved.is_empty() {
        warn!(
            count = outcome.unresolved.len(),
            "release names without a matching chassis"
        );
    }
    if dry_run {
        tx.rollback()?;
        info!(
            would_add = outcome.added,
            "dry-run: catalyst seed stage rolled back"
        );
    } else {
        tx.commit()?;
        info!(added = outcome.added, "catalyst seed stage committed");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalystRelease;
    use crate::util::db::testing::{add_chassis, add_model, seeded_store};

    const fn rel(mech: &'static str, sku: &'static str, year: i32) -> CatalystRelease {
        CatalystRelease { mech, sku, year }
    }

    fn catalyst_rows(conn: &Connection) -> Vec<(i64, String, String, bool, String, Option<i32>)> {
        let mut stmt = conn
            .prepare(
                "SELECT chassis_id, name, sku, in_print, material, year
                 FROM physical_models WHERE manufacturer = 'Catalyst' ORDER BY id",
            )
            .unwrap();
        stmt.query_map([], |r| {
            Ok((
                r.get(0)?,
                r.get(1)?,
                r.get(2)?,
                r.get(3)?,
                r.get(4)?,
                r.get(5)?,
            ))
        })
        .unwrap()
        .map(Result::unwrap)
        .collect()
    }

    #[test]
    fn seeds_one_row_with_store_url_and_year() {
        let mut store = seeded_store();
        let atlas = add_chassis(&store.conn, "Atlas");

        let outcome =
            seed_releases(&mut store.conn, &[rel("Atlas", "35725", 2021)], false).unwrap();
        assert_eq!(outcome.added, 1);
        assert!(outcome.unresolved.is_empty());

        let rows = catalyst_rows(&store.conn);
        assert_eq!(
            rows,
            vec![(
                atlas,
                "Atlas (Catalyst)".to_string(),
                "35725".to_string(),
                true,
                MATERIAL_PLASTIC.to_string(),
                Some(2021)
            )]
        );
        let url: String = store
            .conn
            .query_row(
                "SELECT source_url FROM physical_models WHERE manufacturer = 'Catalyst'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(url, "https://store.catalystgamelabs.com/search?q=35725");
    }

    #[test]
    fn covered_chassis_is_never_seeded_again() {
        let mut store = seeded_store();
        let atlas = add_chassis(&store.conn, "Atlas");
        add_model(&store.conn, atlas, "Atlas (Catalyst)", CATALYST, Some("35725"), "", true, "Plastic");

        let outcome = seed_releases(
            &mut store.conn,
            &[rel("Atlas", "35725", 2021), rel("Atlas", "35780", 2024)],
            false,
        )
        .unwrap();
        assert_eq!(outcome.added, 0);
        assert_eq!(catalyst_rows(&store.conn).len(), 1);
    }

    #[test]
    fn repeated_release_entries_insert_once() {
        let mut store = seeded_store();
        add_chassis(&store.conn, "Timber Wolf");
        add_chassis(&store.conn, "Mad Cat");

        let outcome = seed_releases(
            &mut store.conn,
            &[
                rel("Timber Wolf", "35030", 2020),
                rel("Timber Wolf", "35030", 2020),
            ],
            false,
        )
        .unwrap();
        assert_eq!(outcome.added, 1);
    }

    #[test]
    fn alias_resolution_targets_the_reporting_name_chassis() {
        let mut store = seeded_store();
        let mad_cat = add_chassis(&store.conn, "Mad Cat");

        let outcome =
            seed_releases(&mut store.conn, &[rel("Timber Wolf", "35030", 2020)], false).unwrap();
        assert_eq!(outcome.added, 1);
        let rows = catalyst_rows(&store.conn);
        assert_eq!(rows[0].0, mad_cat);
        // The display name keeps the transcribed proper name.
        assert_eq!(rows[0].1, "Timber Wolf (Catalyst)");
    }

    #[test]
    fn unresolved_names_are_reported_not_fatal() {
        let mut store = seeded_store();
        add_chassis(&store.conn, "Atlas");

        let outcome = seed_releases(
            &mut store.conn,
            &[rel("Zzyzx Mech", "00000", 2099), rel("Atlas", "35725", 2021)],
            false,
        )
        .unwrap();
        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.unresolved, vec!["Zzyzx Mech".to_string()]);
    }

    #[test]
    fn qualifier_fallback_seeds_the_base_chassis() {
        let mut store = seeded_store();
        let hunchback = add_chassis(&store.conn, "Hunchback");

        let outcome = seed_releases(
            &mut store.conn,
            &[rel("Hunchback IIC", "35730", 2021)],
            false,
        )
        .unwrap();
        assert_eq!(outcome.added, 1);
        assert_eq!(catalyst_rows(&store.conn)[0].0, hunchback);
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let mut store = seeded_store();
        add_chassis(&store.conn, "Atlas");

        let outcome =
            seed_releases(&mut store.conn, &[rel("Atlas", "35725", 2021)], true).unwrap();
        assert_eq!(outcome.added, 1);
        assert!(catalyst_rows(&store.conn).is_empty());
    }

    #[test]
    fn full_release_list_seeds_against_reporting_names() {
        let mut store = seeded_store();
        let daishi = add_chassis(&store.conn, "Daishi");
        add_chassis(&store.conn, "Atlas");

        let outcome = run(&mut store.conn, false).unwrap();
        assert_eq!(outcome.added, 2);
        // Dire Wolf lands on the Daishi chassis via the alias registry.
        assert!(catalyst_rows(&store.conn).iter().any(|r| r.0 == daishi));
        // Everything else in the embedded list has no chassis here.
        assert!(outcome.unresolved.contains(&"Timber Wolf".to_string()));
    }
}
