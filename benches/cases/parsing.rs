use criterion::Bencher;
use litmark::{tokenize_literals, Template};
use std::hint::black_box;

fn tokenizer_runner(b: &mut Bencher<'_>, literals: &Vec<String>) {
    b.iter(|| {
        tokenize_literals(literals, |event| {
            black_box(event);
        })
    })
}

fn parser_runner(b: &mut Bencher<'_>, literals: &Vec<String>) {
    b.iter(|| black_box(Template::new(literals)))
}

define_group!(
    "Parsing",
    [("Tokenizer", tokenizer_runner), ("Template", parser_runner)]
);
