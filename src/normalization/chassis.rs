use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Clan mechs carry two names: the faction's proper name and the Inner
/// Sphere reporting name. The store keys its chassis rows on the reporting
/// name, so wiki data arriving under the proper name has to be translated.
/// Entries whose two names coincide are omitted; the exact-match strategy
/// already resolves those.
const REPORTING_NAME_ALIASES: &[(&str, &str)] = &[
    ("timber wolf", "mad cat"),
    ("mad dog", "vulture"),
    ("hellbringer", "loki"),
    ("summoner", "thor"),
    ("dire wolf", "daishi"),
    ("warhawk", "masakari"),
    ("stormcrow", "ryoken"),
    ("ice ferret", "fenris"),
    ("kit fox", "uller"),
    ("mist lynx", "koshi"),
    ("adder", "puma"),
    ("gargoyle", "man o' war"),
    ("viper", "dragonfly"),
    ("fire moth", "dasher"),
    ("nova", "black hawk"),
    ("executioner", "gladiator"),
    ("ebon jaguar", "cauldron-born"),
    ("arctic cheetah", "hankyu"),
    ("mongrel", "grendel"),
    ("horned owl", "peregrine"),
    ("conjurer", "hellhound"),
    ("huntsman", "nobori-nin"),
    ("incubus", "vixen"),
    ("vapor eagle", "goshawk"),
    ("bane", "kraken"),
    ("howler", "baboon"),
    // Apostrophe spelling drift seen in the wiki transcription.
    ("man o'war", "man o' war"),
];

fn qualifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*(iic|omni|\(omni\))\s*$").unwrap())
}

/// Resolves free-form mech names to chassis ids.
///
/// Strategies are tried in order, first hit wins:
/// 1. case-insensitive exact match on the chassis display name,
/// 2. reporting-name alias, then exact match on the alias target,
/// 3. exact match after stripping one trailing qualifier token
///    (`IIC`, `Omni`, `(Omni)`),
/// 4. alias lookup on the stripped base.
///
/// A miss is not an error; callers record the name and move on.
#[derive(Debug, Clone)]
pub struct ChassisResolver {
    canonical: HashMap<String, i64>,
    aliases: HashMap<&'static str, &'static str>,
}

impl ChassisResolver {
    /// Build a resolver over the store's chassis display names, seeded with
    /// the default reporting-name aliases.
    pub fn new(names: impl IntoIterator<Item = (String, i64)>) -> Self {
        let canonical = names
            .into_iter()
            .map(|(name, id)| (name.trim().to_lowercase(), id))
            .collect();
        Self {
            canonical,
            aliases: REPORTING_NAME_ALIASES.iter().copied().collect(),
        }
    }

    pub fn resolve(&self, name: &str) -> Option<i64> {
        let key = name.trim().to_lowercase();
        if let Some(id) = self.lookup(&key) {
            return Some(id);
        }
        let base = strip_qualifier(&key);
        if base != key {
            return self.lookup(&base);
        }
        None
    }

    fn lookup(&self, key: &str) -> Option<i64> {
        if let Some(id) = self.canonical.get(key) {
            return Some(*id);
        }
        self.aliases
            .get(key)
            .and_then(|target| self.canonical.get(*target))
            .copied()
    }
}

/// Drop one trailing qualifier token so e.g. "Hunchback IIC" can fall back
/// to the base "Hunchback" chassis when no dedicated IIC chassis exists.
fn strip_qualifier(name: &str) -> String {
    qualifier_re().replace(name, "").trim().to_string()
}
