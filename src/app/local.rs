use crate::bot::{self, Bot};
use crate::util::misc::*;

use crate::error;

// [App]
// サーバーを立てずに標準入力から精算を試す対話モード
// 空白区切りのトークンを改行区切りに直してから1件のメッセージとして渡す
//   > し40000 ま30000 も20000 お10000
#[derive(Debug)]
pub struct LocalApp {
    name_file: String,
}

impl LocalApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            name_file: "".to_string(),
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-n" => app.name_file = next_value(&mut it, s),
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(0);
                }
            }
        }

        app
    }

    pub fn run(self) {
        let names = if self.name_file.is_empty() {
            bot::default_name_map()
        } else {
            match bot::load_name_map(&self.name_file) {
                Ok(names) => names,
                Err(e) => error_exit(format!("name map '{}': {}", self.name_file, e)),
            }
        };
        let mut bot = Bot::new(names);

        loop {
            let buf = prompt();
            if buf.is_empty() {
                break; // EOF
            }
            let text = buf.trim();
            if text.is_empty() {
                continue;
            }

            let msg = text.split_whitespace().collect::<Vec<_>>().join("\n");
            println!("{}", bot.handle_text(&msg));
        }
    }
}
