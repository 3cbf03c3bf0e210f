// 対局結果と精算のデータモデル
mod define;
mod entry;
mod message;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use entry::*;
pub use message::*;
