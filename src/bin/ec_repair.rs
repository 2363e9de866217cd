// Repair a codeword sequence from the command line.
//
// Usage: ec_repair <num_ec_codewords> <comma-separated codewords>
// Prints the corrected sequence and the number of corrected codewords.
// Set RUST_LOG=trace to watch the decoder's decision points.

use rust_pdf417::correct_errors;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("usage: ec_repair <num_ec_codewords> <comma-separated codewords>");
        std::process::exit(2);
    }

    let num_ec_codewords: usize = match args[0].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid EC codeword count: {}", args[0]);
            std::process::exit(2);
        }
    };

    let mut codewords: Vec<u16> = Vec::new();
    for part in args[1].split(',') {
        match part.trim().parse::<u16>() {
            Ok(value) if value < 929 => codewords.push(value),
            _ => {
                eprintln!("invalid codeword (expected 0..928): {}", part.trim());
                std::process::exit(2);
            }
        }
    }

    if num_ec_codewords > codewords.len() {
        eprintln!(
            "EC codeword count {} exceeds sequence length {}",
            num_ec_codewords,
            codewords.len()
        );
        std::process::exit(2);
    }

    match correct_errors(&mut codewords, num_ec_codewords, &[]) {
        Ok(corrected) => {
            let rendered: Vec<String> = codewords.iter().map(|c| c.to_string()).collect();
            println!("{}", rendered.join(","));
            println!("corrected {} codewords", corrected);
        }
        Err(err) => {
            eprintln!("uncorrectable: {}", err);
            std::process::exit(1);
        }
    }
}
