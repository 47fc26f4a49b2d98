use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xwords_csp::{Crossword, Dictionary, Solver};

const WORDS: &[&str] = &[
    "card", "case", "dose", "edge", "bird", "cold", "zoom", "abcd", "exit", "yard", "cat", "ore",
    "wed", "cow", "are", "ted", "dog", "ear", "toe", "cut", "owe", "new", "tide", "ante", "rode",
    "dare", "ease", "sees", "rest", "tree", "star", "rats", "arts", "tsar",
];

pub fn criterion_benchmark(c: &mut Criterion) {
    let dictionary = Dictionary::new(WORDS.iter().copied());

    let frame = Crossword::new(
        "
____
_##_
_##_
____
",
    )
    .expect("failed to parse frame");

    c.bench_function("solve_frame", |b| {
        b.iter(|| {
            let mut solver = Solver::new(black_box(&frame), &dictionary);
            assert!(solver.solve().unwrap().is_some());
        })
    });

    let square = Crossword::new("___\n___\n___").expect("failed to parse square");

    c.bench_function("solve_word_square", |b| {
        b.iter(|| {
            let mut solver = Solver::new(black_box(&square), &dictionary);
            assert!(solver.solve().unwrap().is_some());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
