//! Read CSV lines from stdin and print the split fields
//!
//! ```bash
//! printf 'a,"b,c",d\n' | cargo run --example split_lines
//! ```

use csvsplit::split;
use std::io::{self, BufRead};

fn main() {
    let stdin = io::stdin();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("stdin read failed: {}", e);
                std::process::exit(1);
            }
        };

        match split(&line) {
            Ok(fields) => println!("line {}: {:?}", lineno + 1, fields),
            Err(err) => eprintln!("line {}: {}", lineno + 1, err),
        }
    }
}
