// mainから直接呼び出すアプリケーションの動作モード(S, L)のモジュール

mod local;
mod server;

pub use local::LocalApp;
pub use server::ServerApp;
