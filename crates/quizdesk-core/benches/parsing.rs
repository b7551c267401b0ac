use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdesk_core::store::parse_quizzes;

fn quiz_file(categories: usize, questions: usize) -> String {
    let mut s = String::new();
    for c in 0..categories {
        s.push_str(&format!("Category {c}\n"));
        for q in 0..questions {
            s.push_str(&format!("Question {c}.{q}?|right|wrong a|wrong b|wrong c\n"));
        }
        s.push('\n');
    }
    s
}

fn bench_parse_quizzes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quizzes");

    let small = quiz_file(3, 5);
    let large = quiz_file(50, 40);
    let no_trailing_blank = quiz_file(10, 10).trim_end().to_string();

    group.bench_function("small", |b| {
        b.iter(|| parse_quizzes(black_box(&small)).count())
    });
    group.bench_function("large", |b| {
        b.iter(|| parse_quizzes(black_box(&large)).count())
    });
    group.bench_function("no_trailing_blank", |b| {
        b.iter(|| parse_quizzes(black_box(&no_trailing_blank)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_parse_quizzes);
criterion_main!(benches);
