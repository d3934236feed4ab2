use std::sync::OnceLock;

use regex::Regex;

/// Substring that marks an Iron Wind Metals URL as already pointing at the
/// vendor; such URLs are treated as curated and never overwritten.
pub const IWM_DOMAIN: &str = "ironwindmetals";

fn parenthetical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(.*?\)").unwrap())
}

fn catalog_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Catalog references look like "20-640" and run to the end of the name.
    RE.get_or_init(|| Regex::new(r"\s+\d+-\d+.*").unwrap())
}

fn variant_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Only a spaced " - " separates a variant suffix; a bare hyphen is part
    // of the mech name (Cauldron-Born, Hatamoto-Chi).
    RE.get_or_init(|| Regex::new(r"\s+-\s+.*").unwrap())
}

/// Remove parenthetical suffixes from a listing name: "Marauder (Resculpt)"
/// becomes "Marauder".
pub fn strip_parentheticals(name: &str) -> String {
    parenthetical_re().replace_all(name, "").trim().to_string()
}

/// Reduce a listing name to a searchable phrase by dropping parentheticals
/// and trailing catalog references ("Atlas 20-640 blister" → "Atlas").
pub fn search_phrase(name: &str) -> String {
    let without_parens = parenthetical_re().replace_all(name, "");
    catalog_ref_re()
        .replace(&without_parens, "")
        .trim()
        .to_string()
}

/// Drop a trailing " - variant" suffix ("Catapult - Alternate Config" →
/// "Catapult").
pub fn strip_variant_suffix(name: &str) -> String {
    variant_suffix_re().replace(name, "").trim().to_string()
}

/// Query-string encoding with spaces as `+`, the form auction-site search
/// URLs expect.
pub fn quote_plus(term: &str) -> String {
    urlencoding::encode(term).replace("%20", "+")
}

/// Auction-site search URL for an arbitrary phrase.
pub fn ebay_search_url(term: &str) -> String {
    format!("https://www.ebay.com/sch/i.html?_nkw={}", quote_plus(term))
}

/// Iron Wind Metals catalog search keyed on the stock code.
pub fn iwm_catalog_url(sku: &str) -> String {
    format!("https://www.ironwindmetals.com/index.php/product-listing?searchword={sku}")
}

/// Catalyst store search keyed on the stock code.
pub fn catalyst_store_url(sku: &str) -> String {
    format!("https://store.catalystgamelabs.com/search?q={sku}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_phrase_drops_parentheticals_and_catalog_refs() {
        assert_eq!(search_phrase("Marauder MAD-3R (Resculpt)"), "Marauder MAD-3R");
        assert_eq!(search_phrase("Atlas 20-640 blister pack"), "Atlas");
        assert_eq!(search_phrase("Shadow Hawk (Hex Base) 20-862 x2"), "Shadow Hawk");
        assert_eq!(search_phrase("Warhammer"), "Warhammer");
    }

    #[test]
    fn parenthetical_strip_leaves_plain_names_alone() {
        assert_eq!(strip_parentheticals("Atlas (Catalyst)"), "Atlas");
        assert_eq!(strip_parentheticals("Atlas"), "Atlas");
    }

    #[test]
    fn variant_suffix_needs_a_spaced_hyphen() {
        assert_eq!(strip_variant_suffix("Catapult - Alternate"), "Catapult");
        assert_eq!(strip_variant_suffix("Cauldron-Born"), "Cauldron-Born");
        assert_eq!(strip_variant_suffix("Hatamoto-Chi"), "Hatamoto-Chi");
    }

    #[test]
    fn quote_plus_uses_plus_for_spaces() {
        assert_eq!(
            quote_plus("battletech Mad Cat miniature"),
            "battletech+Mad+Cat+miniature"
        );
        assert_eq!(quote_plus("man o' war"), "man+o%27+war");
    }

    #[test]
    fn url_templates_embed_their_key() {
        assert_eq!(
            ebay_search_url("battletech Atlas miniature"),
            "https://www.ebay.com/sch/i.html?_nkw=battletech+Atlas+miniature"
        );
        assert_eq!(
            iwm_catalog_url("20-5107"),
            "https://www.ironwindmetals.com/index.php/product-listing?searchword=20-5107"
        );
        assert_eq!(
            catalyst_store_url("35725"),
            "https://store.catalystgamelabs.com/search?q=35725"
        );
    }
}
