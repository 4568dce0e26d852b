//! getopt-style argument scanning and the patch driver.
//!
//! Processing order:
//! 1. Scan flags (any order, last occurrence of a repeated flag wins)
//! 2. Print the version banner (-v)
//! 3. Validate the target file (-f)
//! 4. Encode the payload (-t/-d/-l/-p)
//! 5. Patch in place at the offset (-a)

use std::path::PathBuf;
use std::process::ExitCode;

use bpatch::{
    DataKind, PatchError, decode_escapes, encode_integer, encode_string, parse_decimal,
    patch_in_place,
};

use crate::resolve::resolve_path;

const VERSION_BANNER: &str = "patch tool v0.1 -- Copyright (c) 2019 Tom Hancocks";

/// Flags that take a value; `v` is the only bare flag.
const VALUE_FLAGS: &str = "fatlpd";

#[derive(Debug, Default)]
pub struct Args {
    // Target file: -f, stored after path expansion.
    pub file: Option<PathBuf>,

    // Byte offset from the start of the file: -a. Negative input is
    // reinterpreted as a large unsigned, not rejected.
    pub offset: u64,

    // What -d encodes as: -t.
    pub kind: DataKind,

    // Written length in string mode: -l.
    pub length: u64,
    // Pad byte for short string payloads: -p, low 8 bits.
    pub pad: u8,

    // Escape-decoded payload: -d.
    pub data: Vec<u8>,

    // Print the version banner: -v.
    pub show_version: bool,
}

impl Args {
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1).collect())
    }

    pub fn parse_from(argv: Vec<String>) -> Self {
        let mut args = Args {
            length: 1,
            ..Default::default()
        };

        let mut iter = argv.iter();
        while let Some(token) = iter.next() {
            if token == "--" {
                break;
            }
            let Some(cluster) = token.strip_prefix('-') else {
                continue;
            };

            // A cluster holds bare flags up to the first value flag, which
            // consumes the rest of the token or the next argv element.
            for (pos, flag) in cluster.char_indices() {
                if flag == 'v' {
                    args.show_version = true;
                    continue;
                }
                if !VALUE_FLAGS.contains(flag) {
                    continue;
                }
                let attached = &cluster[pos + flag.len_utf8()..];
                let value = if attached.is_empty() {
                    iter.next().map(String::as_str)
                } else {
                    Some(attached)
                };
                // A value flag at the end of argv has nothing to consume
                // and is dropped like any other ignored argument.
                if let Some(value) = value {
                    args.set(flag, value);
                }
                break;
            }
        }

        args
    }

    fn set(&mut self, flag: char, value: &str) {
        match flag {
            'f' => self.file = Some(resolve_path(value)),
            'a' => self.offset = parse_decimal(value.as_bytes()) as u64,
            't' => self.kind = DataKind::from_token(value),
            'l' => self.length = parse_decimal(value.as_bytes()) as u64,
            'p' => self.pad = parse_decimal(value.as_bytes()) as u8,
            'd' => self.data = decode_escapes(value),
            _ => {}
        }
    }
}

pub fn run() -> ExitCode {
    execute(Args::parse())
}

fn execute(args: Args) -> ExitCode {
    if args.show_version {
        println!("{VERSION_BANNER}");
    }

    let Some(ref path) = args.file else {
        eprintln!("No binary file supplied.");
        return ExitCode::from(1);
    };

    let payload = match args.kind {
        DataKind::Str => encode_string(&args.data, args.length, args.pad),
        kind => encode_integer(parse_decimal(&args.data) as u64, kind),
    };

    match patch_in_place(path, args.offset, &payload) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PatchError::Open { .. }) => {
            eprintln!("Failed to open specified binary file.");
            ExitCode::from(2)
        }
        Err(PatchError::ShortWrite { written, .. }) => {
            eprintln!("Something went wrong when patching file. Wrote {written} bytes.");
            ExitCode::from(3)
        }
    }
}
