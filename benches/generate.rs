use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entropy_password::{
    alphabet::{builtin, Alphabet, WordList},
    generator::PasswordGenerator,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut generator = PasswordGenerator::new(ChaCha20Rng::from_seed([7; 32]));

    for name in ["alnum62", "classed71", "printable94"] {
        let alphabet = builtin::builtin(name).expect("built-in alphabet");
        for bits in [96u32, 256] {
            c.bench_function(&format!("{name}/{bits}"), |b| {
                b.iter(|| generator.generate(black_box(bits), &alphabet).expect("generate"))
            });
        }
    }

    let words = Alphabet::words(WordList::from_words(
        (0..7776).map(|i| format!("word{i}")).collect(),
    ));
    c.bench_function("words7776/96", |b| {
        b.iter(|| generator.generate(black_box(96), &words).expect("generate"))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
