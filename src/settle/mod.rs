// 点数入力の解析から順位付け・精算までの中核処理
mod format;
mod money;
mod parse;
mod rank;
mod session;

pub use format::*;
pub use money::*;
pub use parse::*;
pub use rank::*;
pub use session::*;
