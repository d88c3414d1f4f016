//! Movie filename normalizer
//!
//! Cleans raw release names into "Title (Year)" form:
//! - "Inception.2010.1080p.BluRay.x264-YIFY" -> "Inception (2010)"
//! - "The.Matrix.1999.DVDRip.XviD" -> "The Matrix (1999)"
//!
//! The year scan runs ascending over the configured bounds, so when a name
//! carries several in-range 4-digit numbers the smallest one wins. Everything
//! after the year token is treated as release metadata and discarded.

use time::OffsetDateTime;

/// Default floor for the year scan.
pub const FIRST_YEAR: i32 = 1900;

/// Noise tokens stripped from raw names, in removal order.
///
/// Matched case-sensitively as plain substrings; order matters for
/// overlapping tokens. Mostly release groups, rip sources, codecs, and
/// separator punctuation collected from years of scene names.
pub const DEFAULT_NOISE_TOKENS: &[&str] = &[
    ".avi", "1.4", "5.1", "-", "DVDRip", "BRRip", "XviD", "1CDRip", "aXXo", "18+", "[Phantoms]",
    "+AG", "+YTS", "x264", "720p", "StyLishSaLH (StyLish Release)", "DvDScr", "MP3", "HDRip",
    "WebRip", "ETRG", "YIFY", "StyLishSaLH", "StyLish Release", "TrippleAudio",
    "EngHindiIndonesian", "385MB", "CooL GuY", "a2zRG", "Hindi", "AAC", "AC3", " R6", "H264",
    "ESub", "AQOS", "ALLiANCE", "UNRATED", "ExtraTorrentRG", "BrRip", "mkv", "mpg", "DiAMOND",
    "UsaBitcom", "AMIABLE", "BRRIP", "XVID", "AbSurdiTy", "DVDRiP", "TASTE", "BluRay", "HR",
    "COCAIN", "_", ".", "BestDivX", "MAXSPEED", "Eng", "500MB", "FXG", "Ac3", "Feel", "Subs",
    "S4A", "BDRip", "FTW", "Xvid", "Noir", "1337x", "ReVoTT", "GlowGaze", "mp4", "Unrated",
    "hdrip", "ARCHiViST", "TheWretched", "www", "torrentfive", ".com", "1080p", "1080",
    "SecretMyth", "Kingdom", "Release", "RISES", "DvDrip", "ViP3R", "BiDA", "READNFO",
    "HELLRAZ0R", "tots", "BeStDivX", "UsaBit", "FASM", "NeroZ", "576p", "LiMiTED", "Series",
    "ExtraTorrent", "DVDRIP", "~", "BRRiP", "699MB", "700MB", "greenbud", "B89", "480p", "AMX",
    "007", "DVDrip", "h264", "phrax", "ENG", "TODE", "LiNE", "XVid", "sC0rp", "PTpower",
    "OSCARS", "DXVA", "MXMG", "3LT0N", "TiTAN", "4PlayHD", "HQ", "HDRiP", "MoH", "MP4",
    "BadMeetsEvil", "XViD", "3Li", "PTpOWeR", "3D", "HSBS", "CC", "RiPS", "WEBRip", "R5",
    "PSiG", "'GokU61", "GB", "GokU61", "NL", "EE", "Rel", "PSEUDO", "DVD", "Rip", "NeRoZ",
    "EXTENDED", "DVDScr", "xvid", "WarrLord", "SCREAM", "MERRY", "XMAS", "iMB", "7o9",
    "Exclusive", "171", "DiDee", "v2", "SPRiNTER", "X264", "USABIT", "YTS", "750 MB", "950MB",
    "MkvCage", "iExTV", "MovieMp4", "Net", "[", "]", "(", ")", "{", "}", "{{", "}}", "WEB",
    "HD", "+Team", "+IcTv", "+CAM", "+TuttyFruity", "UNCUT", "Ozlem", "BRrip", "Harshad",
    "Dual", "Audio", "BLiTZCRiEG",
];

/// Normalizes raw media names into clean "Title (Year)" strings.
///
/// The token list and year bounds are fixed at construction; the normalizer
/// itself is immutable and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tokens: Vec<String>,
    first_year: i32,
    last_year: i32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_NOISE_TOKENS.iter().map(|t| t.to_string()).collect(),
            FIRST_YEAR,
            current_year() + 1,
        )
    }
}

impl Normalizer {
    /// Create a normalizer with an explicit token list and inclusive year bounds.
    pub fn new(tokens: Vec<String>, first_year: i32, last_year: i32) -> Self {
        Self { tokens, first_year, last_year }
    }

    /// Default token list with overridden year bounds. Keeps tests independent
    /// of the wall clock.
    pub fn with_year_bounds(first_year: i32, last_year: i32) -> Self {
        Self::new(
            DEFAULT_NOISE_TOKENS.iter().map(|t| t.to_string()).collect(),
            first_year,
            last_year,
        )
    }

    /// Find the detected year: the smallest candidate in `[first_year,
    /// last_year]` whose decimal form appears as a substring of `raw`.
    pub fn detect_year(&self, raw: &str) -> Option<i32> {
        (self.first_year..=self.last_year).find(|year| raw.contains(&year.to_string()))
    }

    /// Normalize a raw file or directory name into "Title (Year)" form.
    ///
    /// Total over any input; never fails. Output carries no double spaces and
    /// no leading/trailing whitespace, except the degenerate case where the
    /// whole name was the year itself, which yields `" (YEAR)"`.
    pub fn normalize(&self, raw: &str) -> String {
        let year = self.detect_year(raw);
        let mut name = raw.to_string();

        if let Some(year) = year {
            let year_str = year.to_string();

            // Everything after the year token is release metadata; drop the
            // whole tail, not just the year.
            if let Some((_, tail)) = name.split_once(&year_str) {
                if !tail.is_empty() {
                    let tail = tail.to_string();
                    name = name.replace(&tail, "");
                }
            }

            name = name.replace(&year_str, " ");
        }

        for token in &self.tokens {
            // An empty pattern would match between every character.
            if token.is_empty() {
                continue;
            }
            name = name.replace(token.as_str(), " ");
        }
        name = name.replace('.', " ");

        let mut name = name.trim().to_string();
        while name.contains("  ") {
            name = name.replace("  ", " ");
        }

        match year {
            Some(year) => format!("{name} ({year})"),
            None => name,
        }
    }
}

fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
