//! Vellum CLI
//!
//! Reads an SVG document and prints what the renderer sees: the built node
//! tree and the draw calls it would issue.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use vellum_common::warning::clear_warnings;
use vellum_dom::{Document, NodeId};
use vellum_raster::{DisplayList, ParamValue, Rasterizer};
use vellum_reader::SvgReader;

/// Vellum — inspect SVG documents as the renderer builds them
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the node tree and the draw list
    vellum drawing.svg

    # Only the node tree
    vellum --tree drawing.svg

    # Draw list as JSON
    vellum --json drawing.svg

    # Inline markup
    vellum --svg '<svg width="10" height="10"><rect width="5" height="5"/></svg>'
"#)]
struct Cli {
    /// Path to an SVG file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Read SVG markup directly instead of a file
    #[arg(long, value_name = "TEXT", conflicts_with = "path")]
    svg: Option<String>,

    /// Print the draw list as JSON
    #[arg(long)]
    json: bool,

    /// Print the node tree
    #[arg(long)]
    tree: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let markup = if let Some(svg) = cli.svg {
        svg
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        bail!("no input: pass a FILE or --svg <TEXT>");
    };

    clear_warnings();
    let document = SvgReader::new().parse_string(&markup)?;
    let list = Rasterizer::new(&document).display_list();

    if cli.json {
        if cli.tree {
            print_tree(&document, document.root(), 0);
        }
        println!("{}", serde_json::to_string_pretty(list.instructions())?);
        return Ok(());
    }

    println!(
        "{} {}x{}",
        "Document".bold(),
        document.width(),
        document.height()
    );
    print_tree(&document, document.root(), 0);
    if !cli.tree {
        println!();
        print_draw_list(&list);
    }
    Ok(())
}

/// Print a node and its subtree, one element per line.
fn print_tree(document: &Document, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    let Some(node) = document.tree().get(id) else {
        return;
    };

    let mut attributes: Vec<_> = node.attributes().iter().collect();
    attributes.sort();
    let mut styles: Vec<_> = node.styles().iter().collect();
    styles.sort();

    let mut line = format!("{prefix}<{}>", node.tag_name().cyan());
    for (name, value) in attributes {
        line.push_str(&format!(" {}=\"{value}\"", name.green()));
    }
    if !styles.is_empty() {
        let declarations: Vec<String> = styles
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        line.push_str(&format!(" {}", format!("{{{}}}", declarations.join("; ")).yellow()));
    }
    println!("{line}");

    for &child in document.tree().children(id) {
        print_tree(document, child, indent + 1);
    }
}

/// Print each draw call on its own line, in painting order.
fn print_draw_list(list: &DisplayList) {
    println!("{} ({})", "Draw list".bold(), list.len());
    for (index, instruction) in list.instructions().iter().enumerate() {
        let params: Vec<String> = instruction
            .params
            .iter()
            .map(|(name, value)| format!("{name}={}", format_param(value)))
            .collect();
        println!(
            "  {index:>3} {} {}",
            instruction.kind.magenta(),
            params.join(" ")
        );
    }
}

fn format_param(value: &ParamValue) -> String {
    match value {
        ParamValue::Number(n) => n.to_string(),
        ParamValue::Text(s) => format!("{s:?}"),
        ParamValue::Points(points) => points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
