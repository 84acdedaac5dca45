// Keys are lowercase. Values are canonical names.

pub const WEAPON_ALIASES: &[(&str, &str)] = &[
    ("one hand", "1 handed sword"),
    ("1h", "1 handed sword"),
    ("1-h", "1 handed sword"),
    ("ohs", "1 handed sword"),
    ("two hand", "2 handed sword"),
    ("2h", "2 handed sword"),
    ("2-h", "2 handed sword"),
    ("ths", "2 handed sword"),
    ("bow gun", "bowgun"),
    ("bg", "bowgun"),
    ("bwg", "bowgun"),
    ("bow", "bow"),
    ("bw", "bow"),
    ("katana", "katana"),
    ("ktn", "katana"),
    ("staff", "staff"),
    ("stf", "staff"),
    ("magic device", "magic device"),
    ("md", "magic device"),
    ("knuckles", "knuckles"),
    ("knuckle", "knuckles"),
    ("knuck", "knuckles"),
    ("knk", "knuckles"),
    ("add", "additional"),
    ("hat", "additional"),
    ("ad", "additional"),
    ("halberd", "halberd"),
    ("hb", "halberd"),
    ("armor", "armor"),
    ("arm", "armor"),
];

pub const STAT_ALIASES: &[(&str, &str)] = &[
    ("dt", "% stronger against"),
    ("dte", "% stronger against earth"),
    ("dtearth", "% stronger against earth"),
    ("dtf", "% stronger against fire"),
    ("dtfire", "% stronger against fire"),
    ("dtw", "% stronger against wind"),
    ("dtwind", "% stronger against wind"),
    ("dtwa", "% stronger against water"),
    ("dtwater", "% stronger against water"),
    ("dtn", "% stronger against neutral"),
    ("dtneutral", "% stronger against neutral"),
    ("dtd", "% stronger against dark"),
    ("dtdark", "% stronger against dark"),
    ("dtl", "% stronger against light"),
    ("dtlight", "% stronger against light"),
    ("cast speed", "cspd"),
    ("attack speed", "aspd"),
    ("attack spped", "aspd"),
    ("acc", "accuracy"),
    ("defense", "def"),
    ("mag", "magic"),
    ("phys", "physical"),
    ("dmg", "damage"),
    ("anti", "anticipate"),
    ("ampr", "attack mp recovery"),
    ("lrd", "long range damage"),
    ("srd", "short range damage"),
    ("ref", "refine"),
    ("natural hp", "natural hp regen"),
    ("natural mp", "natural mp regen"),
    ("motion", "motion speed %"),
    ("motion %", "motion speed %"),
    ("motion%", "motion speed %"),
    ("cr", "critical rate"),
    ("cd", "critical damage"),
    ("stab", "stability"),
    ("rev", "revive"),
    ("xp", "exp"),
    ("ele", "element"),
    ("resist", "resistance"),
    ("pp", "physical pierce"),
    ("mp", "magical pierce"),
    ("pot", "potential"),
    ("bar", "barrier"),
    ("invi", "invincible"),
    ("gem dust", "gem dust drop amount %"),
    ("gem dust drop amount %", "gem dust drop amount %"),
    ("drop rate %", "drop rate %"),
    ("drop rate", "drop rate %"),
];
