use crate::bot::{self, Bot};
use crate::model::*;
use crate::util::connection::{Connection, Message, TcpConnection, WsConnection};
use crate::util::misc::*;

use crate::{error, info};

// [App]
// websocket(または-t指定でTCP)でメッセージを受けて応答を返すbotサーバー
#[derive(Debug)]
pub struct ServerApp {
    addr: String,
    tcp: bool,
    name_file: String,
}

impl ServerApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            addr: "127.0.0.1:52001".to_string(),
            tcp: false,
            name_file: "".to_string(),
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-a" => app.addr = next_value(&mut it, s),
                "-t" => app.tcp = true,
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

        let mut conn: Box<dyn Connection> = if self.tcp {
            Box::new(TcpConnection::new(&self.addr))
        } else {
            Box::new(WsConnection::new(&self.addr))
        };
        info!("listening on {}", self.addr);

        // メッセージ1件を処理し終えてから次を受信するのでbotの状態更新は逐次
        loop {
            match conn.recv() {
                Message::Open => {}
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Message { reply_token, text }) => {
                        let reply = ServerMessage::Reply {
                            reply_token,
                            text: bot.handle_text(&text),
                        };
                        conn.send(&serde_json::to_string(&reply).unwrap());
                    }
                    Err(e) => error!("{}: {}", e, text),
                },
                Message::NoMessage => sleep(0.01),
                Message::Close => {}
                Message::NoConnection => sleep(0.01),
            }
        }
    }
}
