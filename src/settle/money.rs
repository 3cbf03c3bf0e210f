use crate::model::*;

// 最終得点から基準点を引いた分をレート換算して円にする
// 小数点以下は0方向への切り捨て(floorではない)
pub fn score_to_yen(score: Score) -> Yen {
    ((score - RETURN_SCORE) as f64 * RATE) as Yen
}

// 通算精算用 基準点は半荘数に比例して増える
pub fn total_to_yen(total: Score, games: usize) -> Yen {
    ((total - RETURN_SCORE * games as Score) as f64 * RATE) as Yen
}

#[test]
fn test_score_to_yen() {
    assert_eq!(score_to_yen(25000), 0);
    assert_eq!(score_to_yen(40000), 750);
    assert_eq!(score_to_yen(10000), -750);
}

#[test]
fn test_truncation_toward_zero() {
    // (14990 - 25000) * 0.05 = -500.5 -> -500 (floorなら-501)
    assert_eq!(score_to_yen(14990), -500);
    // (35010 - 25000) * 0.05 = 500.5 -> 500
    assert_eq!(score_to_yen(35010), 500);
}

#[test]
fn test_total_to_yen() {
    // 2半荘の通算 基準点は25000*2
    assert_eq!(total_to_yen(110000, 2), 3000);
    assert_eq!(total_to_yen(50000, 2), 0);
    assert_eq!(total_to_yen(35000, 2), -750);
}
