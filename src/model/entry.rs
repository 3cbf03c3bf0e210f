use super::*;

// 入力1行から得られる1人分の素点
// keyは行頭の1文字でname_mapの引きに使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEntry {
    pub key: char,
    pub score: Score,
}

// 順位調整適用後の1半荘分の結果
// 生成時点で素点の合計がTOTAL_SCOREであったことが保証される
#[derive(Debug, Clone)]
pub struct RoundResult {
    entries: Vec<PlayerEntry>,
}

impl RoundResult {
    pub fn new(entries: Vec<PlayerEntry>) -> Self {
        assert!(entries.len() == SEAT);
        Self { entries }
    }

    pub fn entries(&self) -> &[PlayerEntry] {
        &self.entries
    }

    pub fn get(&self, key: char) -> Option<Score> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.score)
    }

    pub fn total(&self) -> Score {
        self.entries.iter().map(|e| e.score).sum()
    }
}

// 最終得点の降順で並べ直した順位付きの1人分の結果
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry {
    pub rank: usize, // 1~4
    pub key: char,
    pub score: Score,
}
