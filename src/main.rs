use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use gretl_deps::GretlScanner;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("usage: gretl-deps <script>...");
        process::exit(2);
    }

    for path in &args {
        let file = File::open(path)?;
        let mut scanner = GretlScanner::new();
        scanner.scan(BufReader::new(file).lines())?;

        println!("{path}:");
        println!("{}", serde_json::to_string_pretty(scanner.dependencies())?);
    }

    Ok(())
}
