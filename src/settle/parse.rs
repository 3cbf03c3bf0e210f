use std::fmt;

use crate::model::*;

// 入力の検証エラー 例外ではなく応答文として利用者に返す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateError {
    WrongPlayerCount(usize),
    SumMismatch(Score),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPlayerCount(3) => {
                write!(f, "3人分の点数しかありません。三人麻雀には対応していません。")
            }
            Self::WrongPlayerCount(5) => {
                write!(f, "5人分の点数があります。五人麻雀には対応していません。")
            }
            Self::WrongPlayerCount(_) => {
                write!(f, "プレイヤーが4人分ではありません。正しく入力してください。")
            }
            Self::SumMismatch(_) => {
                write!(f, "点数の合計が100000になっていません。入力を確認してください。")
            }
        }
    }
}

// 1行を「先頭1文字のキー + 符号付き整数の素点」として解釈
// 解釈できない行はエラーにせず黙って読み飛ばす
pub fn parse_round(text: &str) -> Result<Vec<PlayerEntry>, ValidateError> {
    let mut entries: Vec<PlayerEntry> = vec![];
    for line in text.trim().lines() {
        let mut cs = line.chars();
        let key = match cs.next() {
            Some(c) => c,
            None => continue,
        };
        let rest: String = cs.collect();
        if rest.is_empty() {
            continue; // キーのみの行は点数なし
        }
        let score = match rest.parse::<Score>() {
            Ok(s) => s,
            Err(_) => continue,
        };
        if score > SCORE_LIMIT || score < -SCORE_LIMIT {
            continue; // 桁違いの値は解釈できない行と同様に読み飛ばす
        }

        // 同じキーが複数行ある場合は後の行で上書き(位置は最初の行のまま)
        match entries.iter_mut().find(|e| e.key == key) {
            Some(e) => e.score = score,
            None => entries.push(PlayerEntry { key, score }),
        }
    }

    if entries.len() != SEAT {
        return Err(ValidateError::WrongPlayerCount(entries.len()));
    }

    let total: Score = entries.iter().map(|e| e.score).sum();
    if total != TOTAL_SCORE {
        return Err(ValidateError::SumMismatch(total));
    }

    Ok(entries)
}

#[test]
fn test_parse_valid() {
    let text = "し30000\nま25000\nも23000\nお22000";
    let entries = parse_round(text).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], PlayerEntry { key: 'し', score: 30000 });
    assert_eq!(entries[3], PlayerEntry { key: 'お', score: 22000 });
}

#[test]
fn test_parse_negative_and_whitespace() {
    // 全体の前後の空白は除去され,負の点数はそのまま読める
    let text = "\nA52000\nB30000\nC20000\nD-2000  \n";
    let entries = parse_round(text).unwrap();
    assert_eq!(entries[0].key, 'A');
    assert_eq!(entries[3].score, -2000);
}

#[test]
fn test_parse_broken_line_is_dropped() {
    // "C20000点"は整数として読めないので行ごと消え,人数不足になる
    let text = "A40000\nB30000\nC20000点\nD10000";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(3)));
}

#[test]
fn test_parse_short_line_is_dropped() {
    let text = "A\nB40000\nC30000\nD30000";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(3)));
}

#[test]
fn test_parse_duplicate_key_overwrites() {
    let text = "A10000\nB30000\nC20000\nD10000\nA40000";
    let entries = parse_round(text).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], PlayerEntry { key: 'A', score: 40000 });
}

#[test]
fn test_parse_five_players() {
    let text = "A20000\nB20000\nC20000\nD20000\nE20000";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(5)));
}

#[test]
fn test_parse_sum_mismatch() {
    let text = "A40000\nB30000\nC20000\nD9999";
    assert_eq!(parse_round(text), Err(ValidateError::SumMismatch(99999)));
}

#[test]
fn test_parse_huge_scores_are_dropped() {
    // i32の限界付近の値は行ごと読み飛ばされ,合計の計算があふれない
    let text = "A2147483647\nB2147483647\nC1\nD2";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(2)));

    // 足すと丁度100000になる組み合わせでも素点としては受け付けない
    let text = "A2147483647\nB-2147483647\nC0\nD100000";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(2)));
}

#[test]
fn test_parse_score_limit_boundary() {
    let text = "A1000000\nB-1000000\nC50000\nD50000";
    let entries = parse_round(text).unwrap();
    assert_eq!(entries[0].score, SCORE_LIMIT);
    assert_eq!(entries[1].score, -SCORE_LIMIT);

    let text = "A1000001\nB-1000001\nC50000\nD50000";
    assert_eq!(parse_round(text), Err(ValidateError::WrongPlayerCount(2)));
}

#[test]
fn test_error_reply_text() {
    let e = ValidateError::WrongPlayerCount(3);
    assert!(e.to_string().contains("三人麻雀"));
    let e = ValidateError::WrongPlayerCount(5);
    assert!(e.to_string().contains("五人麻雀"));
    let e = ValidateError::WrongPlayerCount(2);
    assert!(e.to_string().contains("4人分ではありません"));
}
