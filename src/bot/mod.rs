// トリガーフレーズの判定と応答文の組み立て
use std::collections::HashMap;
use std::fs;

use crate::model::*;
use crate::settle::*;
use crate::util::misc::Res;

// セッション操作のトリガー 完全一致でのみ反応する
pub const START_TRIGGER: &str = "記録開始";
pub const STOP_TRIGGER: &str = "記録終了";
pub const USAGE_TRIGGER: &str = "使い方";

// 定型文の応答
const CANNED_REPLIES: [(&str, &str); 3] = [
    ("おはよう", "おはようございます！今日も一局どうですか？"),
    ("おやすみ", "おやすみなさい。"),
    ("ありがとう", "どういたしまして！"),
];

const USAGE_TEXT: &str = "\
1行に「キー1文字+点数」の形式で4人分の点数を送ってください。
例:
し30000
ま28000
も22000
お20000

「記録開始」で通算記録を開始し「記録終了」で通算精算を表示します。";

const SESSION_STARTED_TEXT: &str = "記録を開始します。";
const SESSION_EMPTY_TEXT: &str = "まだ対局が記録されていません。";

// 受信テキスト1件に対して必ず応答文1件を返す
// Sessionを所有しているので受信ループ1本で回す限り排他制御は不要
#[derive(Debug)]
pub struct Bot {
    names: NameMap,
    session: Session,
}

impl Bot {
    pub fn new(names: NameMap) -> Self {
        Self {
            names,
            session: Session::new(),
        }
    }

    pub fn handle_text(&mut self, text: &str) -> String {
        let text = text.trim();
        match text {
            START_TRIGGER => return self.start_session(),
            STOP_TRIGGER => return self.end_session(),
            USAGE_TRIGGER => return USAGE_TEXT.to_string(),
            _ => {}
        }
        for (trigger, reply) in CANNED_REPLIES {
            if text == trigger {
                return reply.to_string();
            }
        }

        self.process_round(text)
    }

    // 対局結果の本処理 検証済みの結果は記録中であれば必ずセッションにも入る
    pub fn process_round(&mut self, text: &str) -> String {
        match parse_round(text) {
            Ok(entries) => {
                let result = adjust_round(&entries);
                self.session.record(result.clone());
                format_round(&result, &self.names)
            }
            Err(e) => e.to_string(),
        }
    }

    pub fn start_session(&mut self) -> String {
        self.session.start();
        SESSION_STARTED_TEXT.to_string()
    }

    pub fn end_session(&mut self) -> String {
        if self.session.round_count() == 0 {
            self.session.stop();
            return SESSION_EMPTY_TEXT.to_string();
        }
        let totals = self.session.stop();
        format_session(&totals, &self.names)
    }
}

// 元々固定で持っていた表示名対応表
pub fn default_name_map() -> NameMap {
    let mut names = NameMap::new();
    names.insert('し', "たくぴぴ".to_string());
    names.insert('ま', "まっすー".to_string());
    names.insert('も', "正義超人森永".to_string());
    names.insert('お', "ぱすた".to_string());
    names.insert('い', "しょさん".to_string());
    names
}

// JSONファイル({"し": "たくぴぴ", ...})から対応表を読み込み
// キーは先頭の1文字のみを使用
pub fn load_name_map(path: &str) -> Res<NameMap> {
    let data = fs::read_to_string(path)?;
    let raw: HashMap<String, String> = serde_json::from_str(&data)?;
    let mut names = NameMap::new();
    for (k, v) in raw {
        let key = k.chars().next().ok_or("empty key in name map")?;
        names.insert(key, v);
    }
    Ok(names)
}

#[test]
fn test_canned_replies() {
    let mut bot = Bot::new(default_name_map());
    assert_eq!(bot.handle_text("ありがとう"), "どういたしまして！");
    assert!(bot.handle_text("使い方").contains("記録開始"));
}

#[test]
fn test_round_reply() {
    let mut bot = Bot::new(default_name_map());
    let reply = bot.handle_text("し40000\nま30000\nも20000\nお10000");
    let expected = "1位　たくぴぴ　55000\n\
                    2位　まっすー　35000\n\
                    3位　正義超人森永　15000\n\
                    4位　ぱすた　-5000\n\
                    \n\
                    1位　たくぴぴ　1500円\n\
                    2位　まっすー　500円\n\
                    3位　正義超人森永　-500円\n\
                    4位　ぱすた　-1500円";
    assert_eq!(reply, expected);
}

#[test]
fn test_invalid_round_replies() {
    let mut bot = Bot::new(default_name_map());
    // 3行しか解釈できない入力
    let reply = bot.handle_text("し40000\nま30000\nも30000");
    assert!(reply.contains("三人麻雀"));
    // 合計が99999
    let reply = bot.handle_text("し40000\nま30000\nも20000\nお9999");
    assert!(reply.contains("合計が100000になっていません"));
}

#[test]
fn test_session_flow() {
    let mut bot = Bot::new(default_name_map());
    assert_eq!(bot.handle_text("記録終了"), SESSION_EMPTY_TEXT);

    assert_eq!(bot.handle_text("記録開始"), SESSION_STARTED_TEXT);
    assert_eq!(bot.handle_text("記録終了"), SESSION_EMPTY_TEXT);

    bot.handle_text("記録開始");
    bot.handle_text("し40000\nま30000\nも20000\nお10000");
    bot.handle_text("し40000\nま30000\nも20000\nお10000");
    let reply = bot.handle_text("記録終了");
    // 2半荘分 基準点は25000*2
    let expected = "【通算精算】\n\
                    1位　たくぴぴ　3000円\n\
                    2位　まっすー　1000円\n\
                    3位　正義超人森永　-1000円\n\
                    4位　ぱすた　-3000円";
    assert_eq!(reply, expected);

    // 終了後の対局は記録されない
    bot.handle_text("し40000\nま30000\nも20000\nお10000");
    assert_eq!(bot.handle_text("記録終了"), SESSION_EMPTY_TEXT);
}

#[test]
fn test_rounds_before_start_are_not_recorded() {
    let mut bot = Bot::new(default_name_map());
    bot.handle_text("し40000\nま30000\nも20000\nお10000");
    bot.handle_text("記録開始");
    assert_eq!(bot.handle_text("記録終了"), SESSION_EMPTY_TEXT);
}
