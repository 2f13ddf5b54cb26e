//! Codeplug dump utility
//! Decodes an MD-380 family RDT file and prints its contacts and receive groups

use plugger_rs::formats::{load_rdt, write_contacts_csv};
use plugger_rs::{drivers::md380, Plug, PlugResult};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

enum Output {
    Text,
    Json,
    Csv,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <file.rdt> [--json | --csv | --hex <offset> <length>]", program);
    eprintln!("\nExamples:");
    eprintln!("  {} codeplug.rdt               # Contacts and receive groups", program);
    eprintln!("  {} codeplug.rdt --json        # Decoded plug as JSON", program);
    eprintln!("  {} codeplug.rdt --csv         # Contact list as CSV", program);
    eprintln!("  {} codeplug.rdt --hex 0x61a5 72  # Hex dump of a raw region", program);
    std::process::exit(1);
}

fn parse_number(s: &str) -> anyhow::Result<usize> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16)?,
        None => s.parse()?,
    };
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let rdt_file = &args[1];
    let mmap = load_rdt(rdt_file)?;
    tracing::info!("Loaded {} ({} bytes)", rdt_file, mmap.len());

    let output = match args.get(2).map(|s| s.as_str()) {
        None => Output::Text,
        Some("--json") => Output::Json,
        Some("--csv") => Output::Csv,
        Some("--hex") => {
            let (Some(offset), Some(length)) = (args.get(3), args.get(4)) else {
                usage(&args[0]);
            };
            print!("{}", mmap.printable(parse_number(offset)?, parse_number(length)?)?);
            return Ok(());
        }
        Some(_) => usage(&args[0]),
    };

    let decoded = md380::decode_mmap(&mmap)?;
    if let Some(short) = decoded.short_read {
        tracing::warn!("{}: {}; decoded regions are complete", rdt_file, short);
    }

    match output {
        Output::Text => print_plug(&decoded.plug)?,
        Output::Json => println!("{}", serde_json::to_string_pretty(&decoded.plug)?),
        Output::Csv => write_contacts_csv(std::io::stdout().lock(), &decoded.plug.contacts)?,
    }

    Ok(())
}

fn print_plug(plug: &Plug) -> PlugResult<()> {
    for (i, contact) in plug.contacts.iter().enumerate() {
        println!("Contact #{:04}: {}", i + 1, contact);
    }

    println!();

    for (i, group) in plug.rx_groups.iter().enumerate() {
        let members: Vec<String> = plug
            .members(group)?
            .iter()
            .map(|c| format!("\"{}\"", c.name))
            .collect();
        println!("RX Group {}: \"{}\" [{}]", i + 1, group.name, members.join(", "));
    }

    println!();
    println!("Number of contacts: {}", plug.contacts.len());
    println!("Number of rx groups: {}", plug.rx_groups.len());
    Ok(())
}
