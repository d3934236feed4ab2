//! Iron Wind Metals coverage snapshot. Read-only; this is the anchor point
//! for a future catalog reconciliation pass once the full IWM product range
//! has been transcribed.

use anyhow::Result;
use rusqlite::Connection;

use crate::catalog::IWM;

#[derive(Debug, PartialEq, Eq)]
pub struct IwmCoverage {
    pub distinct_skus: i64,
    pub distinct_chassis: i64,
}

pub fn report(conn: &Connection) -> Result<IwmCoverage> {
    let distinct_skus = conn.query_row(
        "SELECT COUNT(DISTINCT sku) FROM physical_models
         WHERE manufacturer = ?1 AND sku IS NOT NULL",
        [IWM],
        |row| row.get(0),
    )?;
    let distinct_chassis = conn.query_row(
        "SELECT COUNT(DISTINCT chassis_id) FROM physical_models WHERE manufacturer = ?1",
        [IWM],
        |row| row.get(0),
    )?;
    Ok(IwmCoverage {
        distinct_skus,
        distinct_chassis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::db::testing::{add_chassis, add_model, seeded_store};

    #[test]
    fn counts_distinct_skus_and_chassis() {
        let store = seeded_store();
        let a = add_chassis(&store.conn, "Atlas");
        let b = add_chassis(&store.conn, "Marauder");
        add_model(&store.conn, a, "Atlas", "IWM", Some("20-640"), "", true, "");
        add_model(&store.conn, a, "Atlas (Resculpt)", "IWM", Some("20-640"), "", true, "");
        add_model(&store.conn, b, "Marauder", "IWM", None, "", true, "");
        add_model(&store.conn, b, "Marauder (Catalyst)", "Catalyst", Some("35721"), "", true, "");

        let coverage = report(&store.conn).unwrap();
        assert_eq!(
            coverage,
            IwmCoverage {
                distinct_skus: 1,
                distinct_chassis: 2
            }
        );
    }

    #[test]
    fn empty_store_reports_zero() {
        let store = seeded_store();
        let coverage = report(&store.conn).unwrap();
        assert_eq!(coverage.distinct_skus, 0);
        assert_eq!(coverage.distinct_chassis, 0);
    }
}
