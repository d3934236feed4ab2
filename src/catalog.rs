//! Embedded reference data transcribed from the Sarna wiki: manufacturer
//! labels, material strings, and the Catalyst plastic release list from the
//! Clan Invasion line onward.

/// Manufacturer labels exactly as stored in `physical_models.manufacturer`.
pub const RAL_PARTHA: &str = "Ral Partha";
pub const ARMORCAST: &str = "Armorcast";
pub const IWM: &str = "IWM";
pub const CATALYST: &str = "Catalyst";
pub const PROXY: &str = "Proxy";

/// Material strings per manufacturer line.
pub const MATERIAL_PEWTER: &str = "Lead-free pewter";
pub const MATERIAL_RESIN_PEWTER: &str = "Polyurethane resin and lead-free pewter";
pub const MATERIAL_PLASTIC: &str = "Plastic";

/// One Catalyst plastic release: the mech it depicts, the box/pack SKU it
/// ships in, and the release year of that box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalystRelease {
    pub mech: &'static str,
    pub sku: &'static str,
    pub year: i32,
}

const fn release(mech: &'static str, sku: &'static str, year: i32) -> CatalystRelease {
    CatalystRelease { mech, sku, year }
}

/// Catalyst mechs known from the wiki, in transcription order. A mech name
/// may appear more than once when it ships in several boxes; the seeder only
/// ever inserts one row per chassis.
pub const CATALYST_RELEASES: &[CatalystRelease] = &[
    // Clan Invasion box + ForcePacks (2020)
    release("Dire Wolf", "35720", 2020),
    release("Mist Lynx", "35720", 2020),
    release("Shadow Cat", "35720", 2020),
    release("Stormcrow", "35720", 2020),
    release("Summoner", "35720", 2020),
    release("Gargoyle", "35722", 2020),
    release("Hellbringer", "35722", 2020),
    release("Ice Ferret", "35722", 2020),
    release("Mad Dog", "35722", 2020),
    release("Viper", "35722", 2020),
    release("Adder", "35030", 2020),
    release("Mongrel", "35030", 2020),
    release("Nova", "35030", 2020),
    release("Timber Wolf", "35030", 2020),
    release("Executioner", "35030", 2020),
    release("Phoenix Hawk", "35723", 2020),
    release("Rifleman", "35723", 2020),
    release("Warhammer", "35723", 2020),
    release("Wasp", "35723", 2020),
    release("Archer", "35721", 2020),
    release("Marauder", "35721", 2020),
    release("Stinger", "35721", 2020),
    release("Valkyrie", "35721", 2020),
    release("UrbanMech", "36002", 2020),
    // Clan Fire Star (2021)
    release("Cougar", "35724", 2021),
    release("Fire Moth", "35724", 2021),
    release("Kit Fox", "35724", 2021),
    release("Nova Cat", "35724", 2021),
    release("Warhawk", "35724", 2021),
    // Clan Heavy Battle Star (2021)
    release("Crossbow", "35728", 2021),
    release("Ebon Jaguar", "35728", 2021),
    release("Huntsman", "35728", 2021),
    release("Kingfisher", "35728", 2021),
    release("Turkina", "35728", 2021),
    // Clan Heavy Star (2021)
    release("Behemoth", "35730", 2021),
    release("Hunchback IIC", "35730", 2021),
    release("Marauder IIC", "35730", 2021),
    release("Supernova", "35730", 2021),
    release("Warhammer IIC", "35730", 2021),
    // Clan Striker Star (2021)
    release("Conjurer", "35732", 2021),
    release("Horned Owl", "35732", 2021),
    release("Incubus", "35732", 2021),
    release("Piranha", "35732", 2021),
    release("Vapor Eagle", "35732", 2021),
    // Clan Support Star (2021)
    release("Arctic Cheetah", "35726", 2021),
    release("Battle Cobra", "35726", 2021),
    release("Black Lanner", "35726", 2021),
    release("Linebacker", "35726", 2021),
    release("Night Gyr", "35726", 2021),
    // Clan Ad Hoc Star (2021)
    release("Fire Falcon", "35734", 2021),
    release("Hellion", "35734", 2021),
    release("Howler", "35734", 2021),
    release("Kodiak", "35734", 2021),
    release("Pack Hunter", "35734", 2021),
    // Inner Sphere Direct Fire Lance (2021)
    release("Atlas", "35725", 2021),
    release("Crusader", "35725", 2021),
    release("Marauder II", "35725", 2021),
    release("Orion", "35725", 2021),
    // Inner Sphere Fire Lance (2021)
    release("Longbow", "35731", 2021),
    release("Stalker", "35731", 2021),
    release("Trebuchet", "35731", 2021),
    release("Zeus", "35731", 2021),
    // Inner Sphere Heavy Battle Lance (2021)
    release("Axman", "35733", 2021),
    release("Bushwacker", "35733", 2021),
    release("Cataphract", "35733", 2021),
    release("Nightstar", "35733", 2021),
    // Inner Sphere Heavy Lance (2021)
    release("Banshee", "35727", 2021),
    release("Centurion", "35727", 2021),
    release("Grasshopper", "35727", 2021),
    release("Hatchetman", "35727", 2021),
    // Inner Sphere Striker Lance (2021)
    release("Blackjack", "35729", 2021),
    release("Jenner", "35729", 2021),
    release("Panther", "35729", 2021),
    release("Wolfhound", "35729", 2021),
    // Inner Sphere Support Lance (2021)
    release("Cyclops", "35736", 2021),
    release("Dragon", "35736", 2021),
    release("Spider", "35736", 2021),
    release("Thug", "35736", 2021),
    // Inner Sphere Urban Lance (2021)
    release("Enforcer", "35735", 2021),
    release("Hunchback", "35735", 2021),
    release("Raven", "35735", 2021),
    release("Victor", "35735", 2021),
    // ComStar Battle Level II (2021)
    release("Crab", "35738", 2021),
    release("Crockett", "35738", 2021),
    release("Flashman", "35738", 2021),
    release("Guillotine", "35738", 2021),
    release("Lancelot", "35738", 2021),
    release("Mongoose", "35738", 2021),
    // ComStar Command Level II (2021)
    release("Black Knight", "35737", 2021),
    release("Exterminator", "35737", 2021),
    release("Highlander", "35737", 2021),
    release("King Crab", "35737", 2021),
    release("Mercury", "35737", 2021),
    release("Sentinel", "35737", 2021),
    // Wolf's Dragoons (2021)
    release("Annihilator", "35739", 2021),
    // Eridani Light Horse (2023)
    release("Sagittaire", "35763", 2023),
    release("Thunderbolt", "35763", 2023),
    // Hansen's Roughriders (2023)
    release("Penetrator", "35764", 2023),
    // Northwind Highlanders (2023)
    release("Gunslinger", "35767", 2023),
    // Kell Hounds (2023)
    release("Nightsky", "35766", 2023),
    release("Griffin", "35766", 2023),
    // Gray Death Legion (2023)
    release("Regent", "35765", 2023),
    release("Shadow Hawk", "35765", 2023),
    release("Catapult", "35765", 2023),
    // Snord's Irregulars (2023)
    release("Spartan", "35770", 2023),
    // Proliferation Cycle (2023)
    release("BattleAxe", "35775", 2023),
    release("Ymir", "35775", 2023),
    release("Coyotl", "35775", 2023),
    release("Firebee", "35775", 2023),
    release("Gladiator", "35775", 2023),
    release("Icarus II", "35775", 2023),
    release("Mackie", "35775", 2023),
    // Alpha Strike box (2022)
    release("Pouncer", "35690", 2022),
    release("Wraith", "35690", 2022),
    // Mercenaries box (2024)
    release("Devastator", "35050", 2024),
    release("Flea", "35050", 2024),
    release("Firefly", "35050", 2024),
    release("Caesar", "35050", 2024),
    release("Quickdraw", "35050", 2024),
    release("Starslayer", "35050", 2024),
    release("Ostsol", "35050", 2024),
    release("Chameleon", "35050", 2024),
    // Inner Sphere Recon Lance (2024)
    release("Firestarter", "35751", 2024),
    release("Javelin", "35751", 2024),
    release("Ostscout", "35751", 2024),
    release("Spector", "35751", 2024),
    // Inner Sphere Pursuit Lance (2024)
    release("Cicada", "35752", 2024),
    release("Clint", "35752", 2024),
    release("Dervish", "35752", 2024),
    release("Hermes II", "35752", 2024),
    // Inner Sphere Security Lance (2024)
    release("JagerMech", "35754", 2024),
    release("Scorpion", "35754", 2024),
    release("Vulcan", "35754", 2024),
    release("Whitworth", "35754", 2024),
    // Clan Cavalry Star (2024)
    release("Shadow Hawk IIC", "35755", 2024),
    release("Griffin IIC", "35755", 2024),
    release("Jenner IIC", "35755", 2024),
    release("Locust IIC", "35755", 2024),
    // Inner Sphere Assault Lance (2024)
    release("Pillager", "35757", 2024),
    release("Goliath", "35757", 2024),
    release("Shogun", "35757", 2024),
    release("Hoplite", "35757", 2024),
    // Inner Sphere Heavy Recon (2024)
    release("Charger", "35758", 2024),
    release("Ostroc", "35758", 2024),
    release("Merlin", "35758", 2024),
    release("Assassin", "35758", 2024),
    // Clan Direct Fire Star (2024)
    release("Bane", "35760", 2024),
    release("Highlander IIC", "35760", 2024),
    release("Phoenix Hawk IIC", "35760", 2024),
    release("Grizzly", "35760", 2024),
    release("Rifleman IIC", "35760", 2024),
    // Somerset Strikers (2024)
    release("Mauler", "35779", 2024),
    release("Hatamoto-Chi", "35779", 2024),
    // Star League Command (2024)
    release("Atlas II", "35780", 2024),
    release("Thunder Hawk", "35780", 2024),
    // Second Star League (2024)
    release("Helios", "35781", 2024),
    release("Argus", "35781", 2024),
    release("Emperor", "35781", 2024),
    // McCarron's Armored Cavalry (2024)
    release("Awesome", "35771", 2024),
    release("Tian-Zong", "35771", 2024),
    // Blood Asp (2024)
    release("Blood Asp", "36013", 2024),
    // Black Remnant (2024)
    release("Dragon Fire", "35788", 2024),
    // Third Star League Strike Team (2024)
    release("Hammerhead", "35784", 2024),
    release("Havoc", "35784", 2024),
    release("Jackalope", "35784", 2024),
    release("Kintaro", "35784", 2024),
    release("Lament", "35784", 2024),
    // Third Star League Battle Group (2025)
    release("Excalibur", "35787", 2025),
    release("Malice", "35787", 2025),
    release("Peacekeeper", "35787", 2025),
    release("Savage Wolf", "35787", 2025),
    release("Wendigo", "35787", 2025),
    // Aces: Scouring Sands (2025)
    release("Thunderbolt IIC", "35490", 2025),
    // 21st Centauri Lancers (2025)
    release("Shockwave", "35795", 2025),
    release("Jade Hawk", "35795", 2025),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_years_stay_in_the_transcribed_window() {
        assert!(CATALYST_RELEASES
            .iter()
            .all(|r| (2020..=2025).contains(&r.year)));
    }

    #[test]
    fn every_release_carries_a_numeric_sku() {
        for r in CATALYST_RELEASES {
            assert!(
                r.sku.chars().all(|c| c.is_ascii_digit()),
                "non-numeric sku {} for {}",
                r.sku,
                r.mech
            );
        }
    }
}
