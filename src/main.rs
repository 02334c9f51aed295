extern crate mt19937;

use std::env;
use std::process;

use mt19937::MT19937Rng;

const DEFAULT_KEY: [u32; 4] = [0x123, 0x234, 0x345, 0x456];
const DEFAULT_COUNT: usize = 1000;
const USAGE: &'static str = "usage: mt19937 [-n COUNT] [SEED_WORD ...]";

fn parse_word(s: &str) -> Option<u32> {
    if s.starts_with("0x") || s.starts_with("0X") {
        u32::from_str_radix(&s[2..], 16).ok()
    } else {
        s.parse().ok()
    }
}

fn parse_args(args: &[String]) -> Result<(Vec<u32>, usize), String> {
    let mut key = Vec::new();
    let mut count = DEFAULT_COUNT;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" {
            let n = iter.next().ok_or_else(|| "-n needs a count".to_string())?;
            count = n.parse().map_err(|_| format!("bad count: {}", n))?;
        } else {
            key.push(parse_word(arg).ok_or_else(|| format!("bad seed word: {}", arg))?);
        }
    }
    if key.is_empty() {
        key.extend_from_slice(&DEFAULT_KEY);
    }
    Ok((key, count))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (key, count) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            process::exit(2);
        }
    };

    let mut rng = match MT19937Rng::new(&key) {
        Ok(rng) => rng,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    println!("{} outputs of next_u32()", count);
    for i in 0..count {
        print!("{:10} ", rng.next_u32());
        if i % 5 == 4 {
            println!("");
        }
    }
    if count % 5 != 0 {
        println!("");
    }
}

#[test]
fn test_parse_args() {
    let args: Vec<String> = vec!["-n", "10", "0x123", "564"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(Ok((vec![0x123, 564], 10)), parse_args(&args));

    assert_eq!(Ok((DEFAULT_KEY.to_vec(), DEFAULT_COUNT)), parse_args(&[]));
    assert!(parse_args(&["-n".to_string()]).is_err());
    assert!(parse_args(&["0xzz".to_string()]).is_err());
}
