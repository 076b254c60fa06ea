//! crucible-refine: normalize raw API payloads into stable entity pages
//!
//! Usage:
//!   # Read one payload from a file, print the normalized page
//!   crucible-refine response.json
//!
//!   # Read from stdin
//!   curl -s https://api.example.com/comments | crucible-refine --entity comments
//!
//!   # Process NDJSON (one payload per line), one page per line out
//!   crucible-refine --ndjson captured_responses.jsonl --entity videos

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crucible::{parse_comments_page, parse_videos_page, refine_stream, EntityKind};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "crucible-refine")]
#[command(about = "Normalize raw API payloads into stable entity pages", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Which entity the payloads contain
    #[arg(long, short = 'e', value_enum, default_value = "comments")]
    entity: Entity,

    /// Process newline-delimited JSON (one payload per line)
    #[arg(long)]
    ndjson: bool,

    /// Pretty-print output pages
    #[arg(long)]
    pretty: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Entity {
    Comments,
    Videos,
}

impl From<Entity> for EntityKind {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Comments => EntityKind::Comments,
            Entity::Videos => EntityKind::Videos,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader: Box<dyn Read> = if let Some(path) = &args.input {
        Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {path}"))?,
        ))
    } else {
        Box::new(std::io::stdin())
    };

    let mut stdout = std::io::stdout();

    if args.ndjson {
        refine_stream(
            BufReader::new(reader),
            &mut stdout,
            EntityKind::from(args.entity),
        )
        .context("failed to process NDJSON input")?;
        return Ok(());
    }

    let mut content = Vec::new();
    BufReader::new(reader)
        .read_to_end(&mut content)
        .context("failed to read input")?;

    // Try SIMD parsing first (faster); fall back to treating the input as
    // NDJSON when it is not a single well-formed document. simd-json
    // mutates its buffer, so parse a scratch copy.
    let mut scratch = content.clone();
    match simd_json::to_owned_value(&mut scratch) {
        Ok(parsed) => {
            let json_str = simd_json::to_string(&parsed)?;
            let payload: Value = serde_json::from_str(&json_str)?;
            write_page(&mut stdout, &payload, args.entity, args.pretty)?;
        }
        Err(_) => {
            let content_str = String::from_utf8_lossy(&content);
            for line in content_str.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let payload: Value =
                    serde_json::from_str(line).context("failed to decode JSON payload")?;
                write_page(&mut stdout, &payload, args.entity, args.pretty)?;
            }
        }
    }

    Ok(())
}

fn write_page<W: Write>(writer: &mut W, payload: &Value, entity: Entity, pretty: bool) -> Result<()> {
    let serialized = match entity {
        Entity::Comments => {
            let page = parse_comments_page(payload);
            if pretty {
                serde_json::to_string_pretty(&page)?
            } else {
                serde_json::to_string(&page)?
            }
        }
        Entity::Videos => {
            let page = parse_videos_page(payload);
            if pretty {
                serde_json::to_string_pretty(&page)?
            } else {
                serde_json::to_string(&page)?
            }
        }
    };

    writeln!(writer, "{serialized}")?;
    Ok(())
}
