use std::collections::HashMap;

// 型エイリアス
pub type Score = i32; // 得点
pub type Yen = i32; // 精算金額(円)
pub type NameMap = HashMap<char, String>; // キー1文字→表示名の対応表

// Number
pub const SEAT: usize = 4; // プレイヤーの数 (四人麻雀のみ対応)
pub const TOTAL_SCORE: Score = 100000; // 4人の素点の合計
pub const SCORE_LIMIT: Score = 1000000; // 1人の素点として受け付ける絶対値の上限
pub const RETURN_SCORE: Score = 25000; // 精算の基準点 (原点)
pub const RATE: f64 = 0.05; // 点数から円への換算レート
