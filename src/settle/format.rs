use crate::model::*;
use crate::settle::money::{score_to_yen, total_to_yen};
use crate::settle::session::SessionTotal;

pub const SESSION_HEADER: &str = "【通算精算】";

// 最終得点の降順(同点は元の並び順)で順位を付け直す
pub fn rank_entries(result: &RoundResult) -> Vec<RankedEntry> {
    let mut entries = result.entries().to_vec();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| RankedEntry {
            rank: i + 1,
            key: e.key,
            score: e.score,
        })
        .collect()
}

fn display_name(names: &NameMap, key: char) -> String {
    match names.get(&key) {
        Some(name) => name.clone(),
        None => key.to_string(), // 対応表にないキーはそのまま表示
    }
}

// 1半荘分の応答 点数ブロックの後に空行を挟んで円換算ブロックが続く
pub fn format_round(result: &RoundResult, names: &NameMap) -> String {
    let ranked = rank_entries(result);

    let mut lines = vec![];
    for r in &ranked {
        lines.push(format!("{}位　{}　{}", r.rank, display_name(names, r.key), r.score));
    }
    lines.push("".to_string());
    for r in &ranked {
        lines.push(format!(
            "{}位　{}　{}円",
            r.rank,
            display_name(names, r.key),
            score_to_yen(r.score)
        ));
    }

    lines.join("\n")
}

// 通算精算の応答 見出し行に続けて円換算ブロックのみを出す
pub fn format_session(totals: &[SessionTotal], names: &NameMap) -> String {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));

    let mut lines = vec![SESSION_HEADER.to_string()];
    for (i, t) in sorted.iter().enumerate() {
        lines.push(format!(
            "{}位　{}　{}円",
            i + 1,
            display_name(names, t.key),
            total_to_yen(t.total, t.games)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
fn test_names() -> NameMap {
    let mut names = NameMap::new();
    names.insert('し', "たくぴぴ".to_string());
    names.insert('ま', "まっすー".to_string());
    names
}

#[test]
fn test_format_round() {
    let result = RoundResult::new(vec![
        PlayerEntry { key: 'し', score: 55000 },
        PlayerEntry { key: 'ま', score: 35000 },
        PlayerEntry { key: 'X', score: 15000 },
        PlayerEntry { key: 'Y', score: -5000 },
    ]);
    let text = format_round(&result, &test_names());
    let expected = "1位　たくぴぴ　55000\n\
                    2位　まっすー　35000\n\
                    3位　X　15000\n\
                    4位　Y　-5000\n\
                    \n\
                    1位　たくぴぴ　1500円\n\
                    2位　まっすー　500円\n\
                    3位　X　-500円\n\
                    4位　Y　-1500円";
    assert_eq!(text, expected);
}

#[test]
fn test_rank_rederived_from_final_score() {
    // 格納順に関わらず最終得点の降順で順位が付く
    let result = RoundResult::new(vec![
        PlayerEntry { key: 'C', score: 15000 },
        PlayerEntry { key: 'A', score: 55000 },
        PlayerEntry { key: 'D', score: -5000 },
        PlayerEntry { key: 'B', score: 35000 },
    ]);
    let ranked = rank_entries(&result);
    assert_eq!(ranked[0].key, 'A');
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[3].key, 'D');
    assert_eq!(ranked[3].rank, 4);
}

#[test]
fn test_format_session() {
    let totals = vec![
        SessionTotal { key: 'ま', total: 35000, games: 2 },
        SessionTotal { key: 'し', total: 110000, games: 2 },
    ];
    let text = format_session(&totals, &test_names());
    let expected = "【通算精算】\n\
                    1位　たくぴぴ　3000円\n\
                    2位　まっすー　-750円";
    assert_eq!(text, expected);
}
