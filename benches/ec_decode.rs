use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_pdf417::{EcBlock, correct_errors, correct_errors_batch};

// The all-zero sequence is a valid codeword for any EC count, so clean and
// corrupted inputs can be built without an encoder.

fn bench_clean_accept(c: &mut Criterion) {
    let codewords = vec![0u16; 64];
    c.bench_function("decode_64_clean", |b| {
        b.iter(|| {
            let mut buffer = codewords.clone();
            correct_errors(black_box(&mut buffer), black_box(16), black_box(&[]))
        })
    });
}

fn bench_corrupted(c: &mut Criterion) {
    let mut codewords = vec![0u16; 128];
    codewords[5] = 311;
    codewords[40] = 87;
    codewords[77] = 900;
    codewords[90] = 5;
    c.bench_function("decode_128_4_errors", |b| {
        b.iter(|| {
            let mut buffer = codewords.clone();
            correct_errors(black_box(&mut buffer), black_box(32), black_box(&[])).unwrap()
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut blocks = Vec::new();
    for i in 0..16usize {
        let mut codewords = vec![0u16; 64];
        if i % 2 == 0 {
            codewords[i + 1] = 499;
        }
        blocks.push(EcBlock {
            codewords,
            num_ec_codewords: 16,
            erasures: Vec::new(),
        });
    }
    c.bench_function("decode_batch_16x64", |b| {
        b.iter(|| {
            let mut batch = blocks.clone();
            correct_errors_batch(black_box(&mut batch))
        })
    });
}

criterion_group!(benches, bench_clean_accept, bench_corrupted, bench_batch);
criterion_main!(benches);
