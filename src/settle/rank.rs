use crate::model::*;

// 素点の降順(同点は入力順)に対して順位ごとに加算するウマ・オカのテーブル
// 同点の組み合わせごとに分岐し,最初に一致した規則のみを適用する
// この優先順位は運用で固まったものなので並べ替えてはいけない
fn rank_adjustments(scores: &[Score; SEAT]) -> [Score; SEAT] {
    let (s0, s1, s2, s3) = (scores[0], scores[1], scores[2], scores[3]);
    if s0 == s1 && s2 == s3 {
        [10000, 10000, -10000, -10000]
    } else if s0 == s1 {
        [10000, 10000, -5000, -15000]
    } else if s1 == s2 {
        [15000, 0, 0, -15000]
    } else if s2 == s3 {
        [15000, 5000, -10000, -10000]
    } else {
        [15000, 5000, -5000, -15000]
    }
}

// 検証済みの素点4人分に順位調整を適用して最終結果を生成
pub fn adjust_round(entries: &[PlayerEntry]) -> RoundResult {
    assert!(entries.len() == SEAT);

    // sort_byは安定ソートなので同点は入力順のまま
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let mut scores = [0; SEAT];
    for i in 0..SEAT {
        scores[i] = sorted[i].score;
    }

    let adj = rank_adjustments(&scores);
    for i in 0..SEAT {
        sorted[i].score += adj[i];
    }

    RoundResult::new(sorted)
}

#[cfg(test)]
fn entries(scores: [Score; SEAT]) -> Vec<PlayerEntry> {
    ['A', 'B', 'C', 'D']
        .iter()
        .zip(scores.iter())
        .map(|(&key, &score)| PlayerEntry { key, score })
        .collect()
}

#[test]
fn test_no_tie() {
    let result = adjust_round(&entries([10000, 40000, 20000, 30000]));
    assert_eq!(result.get('B'), Some(55000));
    assert_eq!(result.get('D'), Some(35000));
    assert_eq!(result.get('C'), Some(15000));
    assert_eq!(result.get('A'), Some(-5000));
    assert_eq!(result.total(), TOTAL_SCORE);
}

#[test]
fn test_top_and_bottom_tie() {
    // A50000 B50000 C0 D0 -> [+10000,+10000,-10000,-10000]
    let result = adjust_round(&entries([50000, 50000, 0, 0]));
    let e = result.entries();
    assert_eq!(e[0], PlayerEntry { key: 'A', score: 60000 });
    assert_eq!(e[1], PlayerEntry { key: 'B', score: 60000 });
    assert_eq!(e[2], PlayerEntry { key: 'C', score: -10000 });
    assert_eq!(e[3], PlayerEntry { key: 'D', score: -10000 });
}

#[test]
fn test_top_tie_only() {
    let result = adjust_round(&entries([40000, 40000, 15000, 5000]));
    let e = result.entries();
    assert_eq!(e[0].score, 50000);
    assert_eq!(e[1].score, 50000);
    assert_eq!(e[2].score, 10000);
    assert_eq!(e[3].score, -10000);
}

#[test]
fn test_middle_tie() {
    // [40000,30000,30000,0] -> [+15000,0,0,-15000]
    let result = adjust_round(&entries([40000, 30000, 30000, 0]));
    let e = result.entries();
    assert_eq!(e[0].score, 55000);
    assert_eq!(e[1].score, 30000);
    assert_eq!(e[2].score, 30000);
    assert_eq!(e[3].score, -15000);
}

#[test]
fn test_bottom_tie_only() {
    let result = adjust_round(&entries([50000, 30000, 10000, 10000]));
    let e = result.entries();
    assert_eq!(e[0].score, 65000);
    assert_eq!(e[1].score, 35000);
    assert_eq!(e[2].score, 0);
    assert_eq!(e[3].score, 0);
}

#[test]
fn test_all_adjustments_sum_to_zero() {
    // 5分岐すべてで調整値の合計は0 = 最終得点の合計は常に100000
    let cases = [
        [25000, 25000, 25000, 25000], // s0==s1 && s2==s3
        [30000, 30000, 25000, 15000], // s0==s1
        [40000, 30000, 30000, 0],     // s1==s2
        [50000, 30000, 10000, 10000], // s2==s3
        [40000, 30000, 20000, 10000], // no tie
    ];
    for scores in cases {
        let result = adjust_round(&entries(scores));
        assert_eq!(result.total(), TOTAL_SCORE, "scores: {:?}", scores);
    }
}

#[test]
fn test_adjust_at_score_limit() {
    // parse側の上限いっぱいの素点でも調整の加算があふれない
    let result = adjust_round(&entries([SCORE_LIMIT, -SCORE_LIMIT, 50000, 50000]));
    let e = result.entries();
    assert_eq!(e[0].score, SCORE_LIMIT + 15000);
    assert_eq!(e[3].score, -SCORE_LIMIT - 15000);
    assert_eq!(result.total(), TOTAL_SCORE);
}

#[test]
fn test_tie_keeps_input_order() {
    // 同点(B,D)は入力順のままの並びで順位が付く
    let result = adjust_round(&entries([40000, 25000, 10000, 25000]));
    let e = result.entries();
    assert_eq!(e[1].key, 'B');
    assert_eq!(e[2].key, 'D');
}
