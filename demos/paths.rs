//! Dot-path queries, inserts and the flattened view.
//!
//! Run with: cargo run --example paths

use std::error::Error;
use valtree::{from_str, Node};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut tree = from_str(
        "window\n\tsize\n\t\twidth 640\n\t\theight 480\n\ttitle Demo window\n",
    )
    .tree;

    for path in ["window.size.width", "window.title", "window.size.depth", "..window..size."] {
        match tree.query(path) {
            Some(node) => println!("{path:>20} -> '{}' (int {}, float {})", node.as_str(), node.as_i64(), node.as_f64()),
            None => println!("{path:>20} -> not found"),
        }
    }

    // Missing segments are created, existing ones reused
    tree.add_tree("window.position.x", "10");
    tree.add_tree("window.position.y", "20");
    tree.add_tree("window.size.width", "1024");

    let position = tree.query("window.position").map(Node::len).unwrap_or(0);
    println!("window.position has {position} children");

    println!("\nTree:\n{tree}");

    println!("Flattened:");
    for (path, value) in tree.flatten().iter() {
        println!("  {path} = {value}");
    }

    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&tree)?);

    Ok(())
}
