// src/compare/ranking.rs
//
// Curated performance ordinals. Higher = faster; not benchmark data.
//
// Order is behavior: lookup returns the FIRST key that is a substring of the
// normalized name, so a more specific key ("rtx 3060 ti") must precede the
// broader key it contains ("rtx 3060"). Keep families grouped newest-first.

use crate::config::consts::FLOOR_SCORE;

/// Ordered (normalized fragment, score) pairs. No mutation API.
#[derive(Debug)]
pub struct RankingTable {
    entries: &'static [(&'static str, u32)],
}

impl RankingTable {
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }

    /// First entry whose key occurs in `normalized`, in table order.
    pub fn lookup(&self, normalized: &str) -> Option<(&'static str, u32)> {
        self.entries
            .iter()
            .find(|(key, _)| normalized.contains(key))
            .copied()
    }

    /// Score of an already-normalized name; `FLOOR_SCORE` when nothing matches.
    pub fn score(&self, normalized: &str) -> u32 {
        self.lookup(normalized).map(|(_, s)| s).unwrap_or(FLOOR_SCORE)
    }
}

pub static GPU_RANKINGS: RankingTable = RankingTable::new(&[
    // NVIDIA RTX 40 series
    ("rtx 4090", 1000), ("rtx 4080", 950), ("rtx 4070 ti", 900), ("rtx 4070", 850),
    ("rtx 4060 ti", 800), ("rtx 4060", 750),
    // NVIDIA RTX 30 series
    ("rtx 3090 ti", 920), ("rtx 3090", 900), ("rtx 3080 ti", 880), ("rtx 3080", 850),
    ("rtx 3070 ti", 800), ("rtx 3070", 750), ("rtx 3060 ti", 700), ("rtx 3060", 650),
    ("rtx 3050", 550),
    // NVIDIA RTX 20 series
    ("rtx 2080 ti", 800), ("rtx 2080", 750), ("rtx 2070", 700), ("rtx 2060", 650),
    // NVIDIA GTX 16 series
    ("gtx 1660 ti", 550), ("gtx 1660", 520), ("gtx 1650", 450),
    // NVIDIA GTX 10 series
    ("gtx 1080 ti", 750), ("gtx 1080", 700), ("gtx 1070", 650), ("gtx 1060", 550),
    ("gtx 1050 ti", 400), ("gtx 1050", 350),
    // AMD RX 7000 series
    ("rx 7900 xtx", 980), ("rx 7900 xt", 920), ("rx 7800 xt", 850), ("rx 7700 xt", 800),
    ("rx 7600", 650),
    // AMD RX 6000 series
    ("rx 6950 xt", 900), ("rx 6900 xt", 880), ("rx 6800 xt", 850), ("rx 6800", 820),
    ("rx 6700 xt", 750), ("rx 6600 xt", 650), ("rx 6600", 600), ("rx 6500 xt", 450),
    // AMD RX 5000 series
    ("rx 5700 xt", 700), ("rx 5700", 650), ("rx 5600 xt", 600), ("rx 5500 xt", 500),
    // Intel Arc
    ("arc a770", 700), ("arc a750", 650), ("arc a580", 550), ("arc a380", 450),
]);

pub static CPU_RANKINGS: RankingTable = RankingTable::new(&[
    // Intel 13th/14th gen
    ("i9-14900k", 1000), ("i9-13900k", 980), ("i7-14700k", 900), ("i7-13700k", 880),
    ("i5-14600k", 800), ("i5-13600k", 780), ("i5-14400", 700), ("i5-13400", 680),
    ("i3-14100", 550), ("i3-13100", 530),
    // Intel 12th gen
    ("i9-12900k", 950), ("i7-12700k", 850), ("i5-12600k", 750), ("i5-12400", 650),
    ("i3-12100", 500),
    // Intel 11th gen
    ("i9-11900k", 850), ("i7-11700k", 750), ("i5-11600k", 650), ("i5-11400", 550),
    // Intel 10th gen
    ("i9-10900k", 800), ("i7-10700k", 700), ("i5-10600k", 600), ("i5-10400", 500),
    ("i3-10100", 400),
    // Intel 9th gen and older
    ("i9-9900k", 750), ("i7-9700k", 650), ("i7-8700k", 600), ("i5-9600k", 550),
    ("i5-8400", 450), ("i7-7700k", 500), ("i5-7600k", 400), ("i7-6700k", 450),
    ("i5-6600k", 350), ("i3-6100", 250),
    // AMD Ryzen 7000 series
    ("ryzen 9 7950x", 1000), ("ryzen 9 7900x", 950), ("ryzen 7 7700x", 850),
    ("ryzen 5 7600x", 750),
    // AMD Ryzen 5000 series
    ("ryzen 9 5950x", 950), ("ryzen 9 5900x", 900), ("ryzen 7 5800x", 800),
    ("ryzen 7 5700x", 750), ("ryzen 5 5600x", 700), ("ryzen 5 5600", 680),
    ("ryzen 5 5500", 650),
    // AMD Ryzen 3000 series
    ("ryzen 9 3950x", 850), ("ryzen 9 3900x", 800), ("ryzen 7 3700x", 700),
    ("ryzen 5 3600", 600),
    // AMD Ryzen 2000 series
    ("ryzen 7 2700x", 600), ("ryzen 5 2600", 500),
]);
