#![warn(rust_2018_idioms)]

mod app;
mod bot;
mod model;
mod settle;
mod util;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "S" => {
            // Server (botサーバーモード)
            app::ServerApp::new(args2).run();
        }
        "L" => {
            // Local (対話精算モード)
            app::LocalApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
