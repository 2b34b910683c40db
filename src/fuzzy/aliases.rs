// File: src/fuzzy/aliases.rs
use std::collections::HashSet;

/// Common spelling variants seen across the menu and the photo folder,
/// applied as substring rewrites. Most pairs are mapped in both
/// directions; a few (e.g. "roties" -> "roti") only fold one way.
pub const SPELLING_ALIASES: &[(&str, &str)] = &[
    ("kadhi", "kadi"),
    ("kadi", "kadhi"),
    ("baingan", "baigan"),
    ("baigan", "baingan"),
    ("hyderabadi", "hydrabadi"),
    ("hydrabadi", "hyderabadi"),
    ("makhani", "makhni"),
    ("makhni", "makhani"),
    ("lababdaar", "lababdar"),
    ("lababdar", "lababdaar"),
    ("saalan", "salan"),
    ("salan", "saalan"),
    ("choleychana", "cholechana"),
    ("cholechana", "choleychana"),
    ("choleychicken", "cholechicken"),
    ("cholechicken", "choleychicken"),
    ("cucumbar", "cucumber"),
    ("cucumber", "cucumbar"),
    ("ghotala", "gotala"),
    ("gotala", "ghotala"),
    ("shahipaneer", "sahipaneer"),
    ("sahipaneer", "shahipaneer"),
    ("turvar", "tuvar"),
    ("tuvar", "turvar"),
    ("turia", "turai"),
    ("turai", "turia"),
    ("waali", "wali"),
    ("wali", "waali"),
    ("vegtable", "vegetable"),
    ("vegetable", "vegtable"),
    ("roti", "rotie"),
    ("rotie", "roti"),
    ("roties", "roti"),
    ("chiickencurry", "chickencurry"),
    ("chiickendopyaza", "chickendopyaza"),
    ("poran", "puran"),
    ("puran", "poran"),
    ("gujvar", "guvar"),
    ("guvar", "gujvar"),
    ("mushroom", "mashroom"),
    ("mashroom", "mushroom"),
    ("chili", "chilli"),
    ("chilli", "chili"),
    ("chilimilli", "chillimilli"),
    ("chillimilli", "chilimilli"),
    ("eggplants", "eggplant"),
    ("eggplant", "eggplants"),
    ("sindhikadhi", "sindhikadi"),
    ("sindhikadi", "sindhikadhi"),
    ("stuffedcheezy", "stuffedcheesy"),
    ("stuffedcheesy", "stuffedcheezy"),
    ("farali", "farari"),
    ("farari", "farali"),
    ("ferrari", "farari"),
    ("lasaniya", "lasania"),
    ("lasania", "lasaniya"),
    ("gujrati", "gujarati"),
    ("gujarati", "gujrati"),
    ("dhokli", "dhokri"),
    ("dhokri", "dhokli"),
    ("veg", "vegetable"),
    ("srouted", "sprouted"),
    ("sprouted", "srouted"),
    ("tamarind", "tamrind"),
    ("tamrind", "tamarind"),
    ("bhuna", "bhunna"),
    ("rajasthani", "rajesthani"),
    ("rajesthani", "rajasthani"),
    ("rasavalu", "rasavala"),
    ("rasavala", "rasavalu"),
    ("saak", "shaak"),
    ("shaak", "saak"),
    ("chana", "channa"),
    ("carrot", "gajar"),
    ("gajar", "carrot"),
    ("pav", "paav"),
    ("paav", "pav"),
    ("lado", "laddoo"),
    ("laddo", "laddoo"),
    ("ladoo", "laddoo"),
    ("laddoo", "laddoo"),
    ("srikahand", "shrikhand"),
    ("srikhand", "shrikhand"),
    ("pinapple", "pineapple"),
    ("coriender", "coriander"),
    ("penut", "peanut"),
    ("custered", "custard"),
    ("fruite", "fruit"),
    ("bhartha", "bharta"),
];

/// Direct item-name -> file-stem overrides for pairs no generic rule can
/// bridge: transliteration drift, reordered compounds, informal names.
/// Keys and values are normalized strings.
pub const MANUAL_OVERRIDES: &[(&str, &str)] = &[
    ("gobimatarcarrot", "gobimatarcarrots"),
    ("chickenbhuna", "bhunachicken"),
    ("chickenmalabar", "malabarchicken"),
    ("dahiwalealoo", "dahialoo"),
    ("bainganaloo", "aloobaingan"),
    ("gobialoo", "aloogobi"),
    ("vegjalfrezi", "vegetablejalfrezi"),
    ("vegkolhapuri", "vegetablekolhapuri"),
    ("vegkorma", "vegetablekorma"),
    ("vegmakhni", "vegetablemakhni"),
    ("cholemasala", "cholechana"),
    ("chole", "cholechana"),
    ("potatoonionrasavalushaak", "potatoonionrasavalacurry"),
    ("guttivankayakura", "gutivankayakura"),
    ("hyderabadibaingan", "hydrabadibaiganmasala"),
    ("gujaratilasaniyabatata", "lasaniyabatata"),
    ("gujratidaaldhokli", "daaldhokli"),
    ("besanpakorakadhi", "pakorakadi"),
    ("laukichanadaal", "laukidaal"),
    ("laukimoongdaal", "laukidaal"),
    ("methipakorakadhi", "methipakorakadi"),
    ("palakpakorakadhi", "palakpakorakadi"),
    ("tuvarlilvakadhi", "lilvakadhi"),
    ("sroutedmoongandmathkisabji", "moongandmathkisabji"),
    ("gattacurry", "rajesthanigattacurry"),
    ("mirchikasaalan", "mirchikasalan"),
    ("paneercholemasala", "cholepaneer"),
    ("paneermushroommassa", "mashroompaneer"),
    ("sweetpotatoaloosabji", "sweetpotatocurry"),
    ("sweetpotatosabjidry", "sweetpotatocurry"),
    ("mixveghyderabadi", "mixveghydrabadi"),
    ("madraschickencurry", "madraschiickencurry"),
    ("stuffedeggplants", "stuffedeggplant"),
    ("wholewheatroti", "wholewheatrotie"),
    ("panchporandaal", "panchpurandaal"),
    ("sevtomato", "sevtomatocurry"),
    ("vegjaipurimasala", "vegjaipuri"),
    ("moongandmathsprouted", "moongandmathkisabji"),
    ("tamarindrice", "tamrindchutney"),
    ("tuvarbaigansaak", "tuvarringannushaak"),
    ("vaalnusaak", "vaalnushaak"),
    ("kalachanashaak", "kalachananushaak"),
    ("kalachana", "kalachananushaak"),
    ("afghanchicken", "afghanichickencurry"),
    ("afghanichicken", "afghanichickencurry"),
    ("aloobhajimarathidrypotatocurry", "marathialoobhajisukhi"),
    ("faralialoosabji", "fararialoosabji"),
    ("saltylassi", "saltedlassi"),
    ("paavbhaji", "batatabhaji"),
    ("tamarindchutney", "tamrindchutney"),
    ("poha", "breakfastpoha"),
    ("sabudanakhichdi", "sabudanakhichdi2"),
    ("upma", "upma"),
    ("daalvada", "daalvada2"),
    ("cabbagematarporiyal", "cabbageporiyal"),
    ("moringastickdaal", "drumstickdaal"),
    ("moringadaal", "drumstickdaal"),
    ("plainroties", "roties"),
    ("plainroti", "roties"),
    ("chickenvindaloo", "chickenvindaloo"),
    ("chickenmakhni", "chickenmakhni"),
    ("chickenmakhani", "chickenmakhni"),
    ("wholemasoordaal", "wholemasoordaal"),
    ("matarrice", "matarrice"),
    ("jeerarice", "jeerarice"),
    ("shrikhand", "srikhand"),
    ("dryfruitkheer", "dryfruiterabdi"),
    ("pinapplehalwapineapplehalwav", "pinapplekesari"),
    ("pineapplehalwapineapplehalwav", "pinapplekesari"),
    ("pineapplehalwa", "pinapplekesari"),
    ("pineapplekesari", "pinapplekesari"),
    ("angoorimangorabdi", "angoorrabdi"),
    ("ravaladdoo", "ravaladoo"),
    ("ganeshchurmaladdoojaggeryvvg", "churmaladoo"),
    ("ganeshchurmaladdoo", "churmaladoo"),
    ("boondikeladdoo", "boondikeladoo"),
    ("methikeladdoo", "methikeladoo"),
    ("fruitcustard", "fruitecustered"),
    ("sukhdisweetgolpapdi6piecesvvg", "sukhdi"),
    ("mangoraaswithpuriscombov", "mangoraswithpuricombo"),
    ("mangoraas", "mangoraas"),
    ("dahivada", "daalvada2"),
    ("paneermushroommasala", "mashroompaneer"),
    ("paneercornmasala", "cornpaneer"),
    ("whitepaneerkorma", "paneerkorma"),
    ("guvaraloo", "alooguvar"),
    ("menduvadai", "mehnduvadai"),
    ("menduvadaiqty3piecesvvg", "mehnduvadai"),
    ("medhuvadaiwithsambarandcoconutchutney", "mehnduvadai"),
    ("idliwithsambarandcoconutchutney", "idlichutneys"),
    ("idlischutneysambarqty6piecesvvg", "idlichutneys"),
    ("khamandhokla", "gujaratikhaman"),
    ("ravavegdhokla", "ravadhokla"),
    ("moongdaalvegdhokla", "moondaaldhokla"),
    ("daalvadagujarati10pieceswchutneysvvg", "daalvada2"),
    ("daalvadagujarati", "daalvada2"),
    ("methipakora", "methipakorakadi"),
    ("gujarativegmuthia1215piecesvvg", "papdimuthianushaak"),
    ("gujarativegmuthia", "papdimuthianushaak"),
    ("aloosaag", "saagaloomatar"),
    ("chanasaak", "saagchole"),
    ("rajasthanimoongdaal", "rajesthanidaal"),
    ("methipalakthepla", "methithepla"),
    ("mixfruitsalad", "custardfruitsalad"),
    ("dryfruitsrikhand", "mixedfruitesrikhand2"),
    ("gulabkikheer", "gulabkheer"),
    ("dillaloo", "dillkikadhi"),
    ("karelaaloo", "stuffedkarela"),
    ("kadaibhindi", "bhindimasala"),
    ("bagarebaigangutivankaya", "bagarabaigan"),
    ("dhabastylekajucurry", "kajucurry"),
    ("hydrabadinawabichicken", "hydrabadichicken"),
    ("hyderabadinawabichicken", "hydrabadichicken"),
    ("corianderchickenmasala", "hariyalichicken"),
    ("coriandermintchutney", "coriendermintchutney"),
    ("peanutchutney", "penutchutney"),
    ("mangoricekheer", "mangokheer"),
];

/// Descriptive suffix words that carry no matching signal and may be
/// freely added or removed on either side of a comparison.
pub const IGNORABLE_SUFFIXES: &[&str] = &[
    "curry", "masala", "sabji", "fry", "dry", "gravy", "shaak", "saak", "sukhi", "nu", "ki", "ka",
];

/// Whole-string lookup in the spelling table.
pub fn spelling_alias(norm: &str) -> Option<&'static str> {
    SPELLING_ALIASES
        .iter()
        .find(|&&(from, _)| from == norm)
        .map(|&(_, to)| to)
}

/// Override target for a normalized item name, if one is curated.
pub fn override_target(norm: &str) -> Option<&'static str> {
    MANUAL_OVERRIDES
        .iter()
        .find(|&&(from, _)| from == norm)
        .map(|&(_, to)| to)
}

pub fn is_ignorable_suffix(s: &str) -> bool {
    IGNORABLE_SUFFIXES.contains(&s)
}

/// Generates every normalized variant of `norm` reachable through the
/// spelling table and suffix stripping. The set always contains `norm`
/// itself, so it is never empty.
///
/// Spelling rewrites fire on substring containment, not word boundaries,
/// and replace only the first occurrence. Partial-word hits like "veg"
/// inside "vegkorma" are wanted; they are what bridges abbreviated menu
/// names to fully spelled file names.
pub fn get_aliases(norm: &str) -> HashSet<String> {
    let mut aliases = HashSet::new();
    aliases.insert(norm.to_string());

    if let Some(to) = spelling_alias(norm) {
        aliases.insert(to.to_string());
    }

    for &(from, to) in SPELLING_ALIASES {
        if norm.contains(from) {
            aliases.insert(norm.replacen(from, to, 1));
        }
    }

    // Suffix stripping is skipped when it would leave 3 bytes or fewer,
    // so short names never collapse to near-nothing.
    for &suffix in IGNORABLE_SUFFIXES {
        if let Some(stripped) = norm.strip_suffix(suffix) {
            if stripped.len() > 3 {
                aliases.insert(stripped.to_string());
            }
        }
    }

    aliases
}
