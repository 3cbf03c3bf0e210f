use crate::model::*;

// 1キー分の通算成績 totalとgamesはroundsから導出され単体では保持しない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTotal {
    pub key: char,
    pub total: Score, // 最終得点の通算
    pub games: usize, // 記録された半荘数
}

// 開始から終了までの複数半荘を貯める記録器
// Botが所有し受信ループ上で逐次更新されるため排他制御は不要
#[derive(Debug, Default)]
pub struct Session {
    active: bool,
    rounds: Vec<RoundResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    // 開始時に前回分の記録は破棄する
    pub fn start(&mut self) {
        self.active = true;
        self.rounds.clear();
    }

    // 通算成績を返して非アクティブに戻る
    pub fn stop(&mut self) -> Vec<SessionTotal> {
        let totals = self.totals();
        self.active = false;
        self.rounds.clear();
        totals
    }

    // アクティブ中のみ記録 精算処理の副作用として毎回呼ばれる
    pub fn record(&mut self, result: RoundResult) {
        if self.active {
            self.rounds.push(result);
        }
    }

    // キーの初出順で通算を集計
    pub fn totals(&self) -> Vec<SessionTotal> {
        let mut totals: Vec<SessionTotal> = vec![];
        for round in &self.rounds {
            for e in round.entries() {
                match totals.iter_mut().find(|t| t.key == e.key) {
                    Some(t) => {
                        t.total += e.score;
                        t.games += 1;
                    }
                    None => totals.push(SessionTotal {
                        key: e.key,
                        total: e.score,
                        games: 1,
                    }),
                }
            }
        }
        totals
    }
}

#[cfg(test)]
fn round(scores: [(char, Score); SEAT]) -> RoundResult {
    RoundResult::new(
        scores
            .iter()
            .map(|&(key, score)| PlayerEntry { key, score })
            .collect(),
    )
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new();
    assert!(!session.is_active());

    session.start();
    assert!(session.is_active());
    assert_eq!(session.round_count(), 0);

    session.record(round([('A', 55000), ('B', 35000), ('C', 15000), ('D', -5000)]));
    session.record(round([('A', 30000), ('B', 60000), ('C', 20000), ('D', -10000)]));
    assert_eq!(session.round_count(), 2);

    let totals = session.stop();
    assert!(!session.is_active());
    assert_eq!(session.round_count(), 0);
    assert_eq!(
        totals[0],
        SessionTotal { key: 'A', total: 85000, games: 2 }
    );
    assert_eq!(
        totals[1],
        SessionTotal { key: 'B', total: 95000, games: 2 }
    );
}

#[test]
fn test_record_while_inactive_is_ignored() {
    let mut session = Session::new();
    session.record(round([('A', 55000), ('B', 35000), ('C', 15000), ('D', -5000)]));
    assert_eq!(session.round_count(), 0);
    assert!(session.totals().is_empty());
}

#[test]
fn test_start_clears_previous_rounds() {
    let mut session = Session::new();
    session.start();
    session.record(round([('A', 55000), ('B', 35000), ('C', 15000), ('D', -5000)]));
    session.start();
    assert_eq!(session.round_count(), 0);
}

#[test]
fn test_totals_with_disjoint_keys() {
    // 半荘ごとに参加者が違ってもキーごとの半荘数で集計される
    let mut session = Session::new();
    session.start();
    session.record(round([('A', 55000), ('B', 35000), ('C', 15000), ('D', -5000)]));
    session.record(round([('A', 40000), ('B', 30000), ('C', 20000), ('E', 10000)]));
    let totals = session.stop();
    assert_eq!(totals.len(), 5);
    assert_eq!(
        totals[0],
        SessionTotal { key: 'A', total: 95000, games: 2 }
    );
    assert_eq!(
        totals[4],
        SessionTotal { key: 'E', total: 10000, games: 1 }
    );
}
