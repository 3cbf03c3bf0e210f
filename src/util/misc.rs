use std::fmt;

use crate::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn sleep(sec: f64) {
    std::thread::sleep(std::time::Duration::from_millis((sec * 1000.0) as u64));
}

pub fn prompt() -> String {
    use std::io::{stdin, stdout, Write};
    print!("> ");
    stdout().flush().unwrap();
    let mut buf = String::new();
    stdin().read_line(&mut buf).ok();
    buf
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}
