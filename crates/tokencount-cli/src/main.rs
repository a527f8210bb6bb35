mod logging;

use std::fs::File;
use std::io::Read;

use clap::Parser;
use tokencount::disk_cache::TokencountDiskCache;
use tokencount::encoders::TokenEncoder;
use tokencount::pretrained::{get_encoding, list_encodings};

/// Count LLM tokens in files or standard input.
///
/// Prints one `\t{count} {name}` line per input source.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Encoding to use.
    #[clap(short, long, default_value = "o200k_base")]
    pub encoding: String,

    /// List the available encodings and exit.
    #[clap(long)]
    pub list_encodings: bool,

    /// Input files; "-" may be used to indicate stdin.
    ///
    /// With no files, stdin is read.
    pub files: Vec<String>,

    #[command(flatten)]
    pub log_args: logging::LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log_args.setup_logging(2)?;

    if args.list_encodings {
        for name in list_encodings(false) {
            println!("{name}");
        }
        return Ok(());
    }

    let mut disk_cache = TokencountDiskCache::default();
    let encoding = get_encoding(&args.encoding, &mut disk_cache)?;
    let encoder = encoding.into_default_encoder();

    let mut files = args.files.clone();
    if files.is_empty() {
        files.push("-".to_string());
    }

    for file in &files {
        let content = read_source(file)?;
        let total = encoder.count(&content);

        log::info!("tokens in {file}: {total}");
        println!("\t{total} {file}");
    }

    Ok(())
}

/// Read an input source fully into memory.
///
/// Invalid UTF-8 is replaced rather than rejected; counting is an
/// estimation tool and should not refuse mostly-text files.
fn read_source(path: &str) -> std::io::Result<String> {
    let mut buf = Vec::new();
    if path == "-" {
        std::io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["tokencount"]);
        assert_eq!(args.encoding, "o200k_base");
        assert!(args.files.is_empty());
        assert!(!args.list_encodings);
    }

    #[test]
    fn test_args_files_and_encoding() {
        let args = Args::parse_from(["tokencount", "-e", "claude", "a.txt", "-"]);
        assert_eq!(args.encoding, "claude");
        assert_eq!(args.files, vec!["a.txt", "-"]);
    }
}
