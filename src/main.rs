//! Pintone - numbered-tone pinyin converter (line-oriented reference host)

use pintone::config::load_config;
use pintone::Engine;
use std::io::{self, BufRead};

fn main() {
    // Logging (error/warn only by default)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let mut engine = Engine::new(config);

    // Each input line is replayed as keystrokes and printed converted.
    // ":toggle" flips conversion, ":quit" exits.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };

        match line.trim() {
            ":quit" => break,
            ":toggle" => {
                let status = if engine.toggle() { "enabled" } else { "disabled" };
                println!("Pinyin input is now {}.", status);
            }
            _ => println!("{}", engine.convert(&line)),
        }
    }
}
