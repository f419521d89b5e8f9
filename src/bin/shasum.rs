//! Checksum tool built on the `libhash` streaming hashers.
//!
//! Usage:
//!
//! ```text
//! shasum [--algorithm NAME] [FILE ...]
//! shasum [--algorithm NAME] --check MANIFEST
//! ```
//!
//! Without `--check`, prints `<hex>  <path>` for every file argument (or
//! stdin when no files are given, shown as `-`).  With `--check`, reads a
//! manifest in that same format and verifies each entry, reporting `OK` or
//! `FAILED` per line and exiting non-zero if anything failed.

use std::env;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::process::ExitCode;

use libhash::Algorithm;

fn main() -> ExitCode {
    let mut algorithm = Algorithm::Sha256;
    let mut check = false;
    let mut paths = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--algorithm" | "-a" => {
                let Some(name) = args.next() else {
                    eprintln!("shasum: --algorithm requires a value");
                    return ExitCode::from(2);
                };
                algorithm = match name.parse() {
                    Ok(algorithm) => algorithm,
                    Err(err) => {
                        eprintln!("shasum: {err}");
                        return ExitCode::from(2);
                    }
                };
            }
            "--check" | "-c" => check = true,
            "--help" | "-h" => {
                println!("usage: shasum [--algorithm NAME] [--check] [FILE ...]");
                return ExitCode::SUCCESS;
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        paths.push("-".to_string());
    }

    let result = if check {
        check_manifests(algorithm, &paths)
    } else {
        print_digests(algorithm, &paths)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("shasum: {err}");
            ExitCode::from(2)
        }
    }
}

/// Hashes every path and prints one `<hex>  <path>` line per file.
fn print_digests(algorithm: Algorithm, paths: &[String]) -> io::Result<bool> {
    for path in paths {
        let digest = hash_path(algorithm, path)?;
        println!("{digest}  {path}");
    }
    Ok(true)
}

/// Verifies every manifest; returns `Ok(false)` if any entry failed.
fn check_manifests(algorithm: Algorithm, paths: &[String]) -> io::Result<bool> {
    let mut all_ok = true;
    for path in paths {
        let reader: Box<dyn BufRead> = if path == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            Box::new(BufReader::new(File::open(path)?))
        };

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let Some((expected, target)) = split_manifest_line(&line) else {
                eprintln!("shasum: {path}:{}: malformed line", number + 1);
                all_ok = false;
                continue;
            };
            let actual = hash_path(algorithm, target)?;
            if actual == expected.to_ascii_lowercase() {
                println!("{target}: OK");
            } else {
                println!("{target}: FAILED");
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

/// Splits a manifest line into `(hex, path)`.
fn split_manifest_line(line: &str) -> Option<(&str, &str)> {
    let (hex, rest) = line.split_once(char::is_whitespace)?;
    let target = rest.trim_start();
    if hex.is_empty() || target.is_empty() {
        return None;
    }
    Some((hex, target))
}

/// Streams a file (or stdin for `-`) through the selected hasher.
fn hash_path(algorithm: Algorithm, path: &str) -> io::Result<String> {
    if path == "-" {
        hash_reader(algorithm, &mut io::stdin().lock())
    } else {
        hash_reader(algorithm, &mut File::open(path)?)
    }
}

fn hash_reader(algorithm: Algorithm, reader: &mut dyn Read) -> io::Result<String> {
    let mut hasher = algorithm.hasher();
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    let mut hex = String::with_capacity(algorithm.digest_len() * 2);
    for byte in hasher.finalize_bytes() {
        let _ = write!(hex, "{byte:02x}");
    }
    Ok(hex)
}
