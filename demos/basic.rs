//! Load a file, read and change values, save it back.
//!
//! Run with: cargo run --example basic -- [input] [output]

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use valtree::{from_reader, from_str, to_writer, Node};

const FALLBACK: &str = "\
// Example file
a 1
b 2.5
c
\td hello
\te
\t\tf 3
g-is-long
\th 42 // the answer
";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = env::args().skip(1);
    let input = args.next();
    let output = args.next().unwrap_or_else(|| "Example-modified.txt".to_string());

    let parsed = match &input {
        Some(path) => from_reader(BufReader::new(File::open(path)?))?,
        None => from_str(FALLBACK),
    };
    let name = input.as_deref().unwrap_or("built-in example");
    let mut tree = parsed.tree;
    log::info!("{name} loaded {}successfully", if tree.is_empty() { "un" } else { "" });

    // Retrieve a value
    let h = tree.child("g-is-long").and_then(|g| g.child("h"));
    println!(
        "The value of 'g-is-long.h' is '{}'",
        h.map(Node::as_str).unwrap_or_default()
    );

    // Store a new value
    tree.add_child(Node::new("l", "90,90"));
    println!("After adding sibling 'l', the tree looks like this:\n{tree}");

    // Save the tree to a new file
    let writer = BufWriter::new(File::create(&output)?);
    to_writer(writer, &tree)?;
    println!("Modified file saved to: {output}");

    Ok(())
}
