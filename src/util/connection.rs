use std::fmt;
use std::io::prelude::*;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use crate::{error, info, warn};

// 受信ループに渡すイベント
#[derive(Debug)]
pub enum Message {
    Open,
    Text(String),
    NoMessage,
    Close,
    NoConnection,
}

// botとクライアントの間の送受信の口
// recvはブロックしない(未着ならNoMessage)
pub trait Connection: Send {
    fn send(&mut self, _msg: &str);
    fn recv(&mut self) -> Message;
}

impl fmt::Debug for dyn Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Connection")
    }
}

// 接続の受け入れは専用スレッドで行い,確立したストリームをチャンネルで渡す
fn spawn_acceptor(addr: &str, tag: &'static str) -> mpsc::Receiver<TcpStream> {
    let (tx, rx) = mpsc::channel();
    let listener = TcpListener::bind(addr).unwrap();
    thread::spawn(move || {
        for request in listener.incoming() {
            match request {
                Ok(stream) => tx.send(stream).unwrap(),
                Err(e) => error!("{} error: {}", tag, e),
            }
        }
    });
    rx
}

// 生TCP 1行=1メッセージなので本文に'\n'は含められない
pub struct TcpConnection {
    stream: Option<TcpStream>,
    rx: mpsc::Receiver<TcpStream>,
}

impl TcpConnection {
    pub fn new(addr: &str) -> Self {
        Self {
            stream: None,
            rx: spawn_acceptor(addr, "tcp"),
        }
    }

    // クライアントは同時に1つだけ 2本目以降の接続は捨てる
    fn try_accept(&mut self) -> Option<Message> {
        let stream = self.rx.try_recv().ok()?;
        if self.stream.is_some() {
            error!("tcp duplicated connection");
            return None;
        }

        stream.set_nonblocking(true).unwrap();
        info!(
            "tcp connection opened from: {}",
            stream.peer_addr().unwrap()
        );
        self.stream = Some(stream);
        Some(Message::Open)
    }
}

impl Connection for TcpConnection {
    fn send(&mut self, msg: &str) {
        if let Some(stream) = self.stream.as_mut() {
            stream.write_all((msg.to_string() + "\n").as_bytes()).ok();
        }
    }

    fn recv(&mut self) -> Message {
        if let Some(open) = self.try_accept() {
            return open;
        }
        let stream = match self.stream.as_mut() {
            Some(s) => s,
            None => return Message::NoConnection,
        };

        let mut buf = String::new();
        match std::io::BufReader::new(stream).read_line(&mut buf) {
            Ok(0) => {} // 切断
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                }
                return Message::Text(buf);
            }
            Err(e) => {
                if e.kind() == std::io::ErrorKind::WouldBlock {
                    return Message::NoMessage;
                }
                error!("{}", e);
            }
        }

        self.stream = None;
        info!("tcp connection closed");
        Message::Close
    }
}

// websocket
pub struct WsConnection {
    stream: Option<tungstenite::protocol::WebSocket<TcpStream>>,
    rx: mpsc::Receiver<TcpStream>,
}

impl WsConnection {
    pub fn new(addr: &str) -> Self {
        Self {
            stream: None,
            rx: spawn_acceptor(addr, "ws"),
        }
    }

    fn try_accept(&mut self) -> Option<Message> {
        let stream = self.rx.try_recv().ok()?;
        if self.stream.is_some() {
            error!("ws duplicated connection");
            return None;
        }

        stream.set_nonblocking(true).unwrap();
        info!("ws connection opened from: {}", stream.peer_addr().unwrap());
        match tungstenite::accept(stream) {
            Ok(s) => self.stream = Some(s),
            Err(e) => error!("ws upgrade error: {}", e),
        }
        Some(Message::Open)
    }
}

impl Connection for WsConnection {
    fn send(&mut self, msg: &str) {
        if let Some(stream) = self.stream.as_mut() {
            stream.send(msg.into()).ok();
        }
    }

    fn recv(&mut self) -> Message {
        use tungstenite::error::Error as WsError;
        use tungstenite::protocol::Message as WsMessage;

        if let Some(open) = self.try_accept() {
            return open;
        }
        let stream = match self.stream.as_mut() {
            Some(s) => s,
            None => return Message::NoConnection,
        };

        // 応答文の対象になるのはテキストフレームのみ 制御フレームはここで処理する
        loop {
            match stream.read() {
                Ok(WsMessage::Text(text)) => {
                    return Message::Text(String::from_utf8(text.as_bytes().to_owned()).unwrap());
                }
                Ok(WsMessage::Ping(ping)) => {
                    stream.send(WsMessage::Pong(ping)).ok();
                }
                Ok(WsMessage::Close(_)) => {
                    stream.send(WsMessage::Close(None)).ok();
                    break;
                }
                Ok(msg) => {
                    warn!("ws unhandled message: {:?}", msg);
                }
                Err(WsError::Io(e)) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    return Message::NoMessage;
                }
                Err(e) => {
                    error!("ws error: {:?}", e);
                    break;
                }
            }
        }

        self.stream = None;
        info!("ws connection closed");
        Message::Close
    }
}
