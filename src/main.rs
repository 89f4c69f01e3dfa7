use dbpf_reader::DbpfArchive;
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-package-file>", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    println!("Reading DBPF archive: {}", path);
    println!("{}", "=".repeat(60));

    let buf = match fs::read(path) {
        Ok(buf) => buf,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    match DbpfArchive::open(&buf) {
        Ok(archive) => {
            let header = &archive.header;
            println!("\nArchive Information:");
            println!("  File version: {}", header.file_version);
            println!("  User version: {}", header.user_version);
            println!("  Index version: {}", header.index_version);
            println!("  Created: {} (epoch seconds)", header.created);
            println!("  Updated: {} (epoch seconds)", header.modified);
            println!("  Flags: {:#010x}", header.flags);

            let index = header.index_table();
            let holes = header.hole_table();
            println!("\nTables:");
            println!(
                "  Index: {} entries, {} bytes at offset {}",
                index.entry_count, index.size_bytes, index.offset
            );
            println!(
                "  Holes: {} entries, {} bytes at offset {}",
                holes.entry_count, holes.size_bytes, holes.offset
            );

            println!("\nSample Records (first 10):");
            for (i, record) in archive.records().take(10).enumerate() {
                println!(
                    "  {}. {} ({} bytes at offset {})",
                    i + 1,
                    record.key,
                    record.length,
                    record.offset
                );
            }
            let total = archive.entries().len();
            if total > 10 {
                println!("  ... and {} more", total - 10);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read DBPF archive");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}
