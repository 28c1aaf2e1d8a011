use serde::Serialize;

use super::ordered_map::OrderedMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionStat {
    #[serde(rename = "Right Answer")]
    pub right: u32,
    #[serde(rename = "Wrong Answer")]
    pub wrong: u32,
    #[serde(rename = "Ignored")]
    pub ignored: u32,
}

impl SectionStat {
    pub fn total(&self) -> u32 {
        self.right + self.wrong + self.ignored
    }
}

impl std::ops::Add for SectionStat {
    type Output = SectionStat;

    fn add(self, rhs: SectionStat) -> SectionStat {
        SectionStat {
            right: self.right + rhs.right,
            wrong: self.wrong + rhs.wrong,
            ignored: self.ignored + rhs.ignored,
        }
    }
}

pub type SectionStats = OrderedMap<SectionStat>;

/// Sum over every section, used for the per-request log summary.
pub fn totals(stats: &SectionStats) -> SectionStat {
    stats
        .values()
        .fold(SectionStat::default(), |acc, stat| acc + *stat)
}
