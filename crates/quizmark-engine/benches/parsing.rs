use criterion::{Criterion, criterion_group, criterion_main};
use quizmark_engine::{Answer, Block, Question};

const QUIZ: &str = "Grant was buried in {=Grant's tomb ~a field ~the sea}. \
    When did he die? {#1885:1} Ulysses S. Grant was a president. {TRUE} \
    Pick his initials: {~%50%U ~%50%S ~%-100%X} Write his surname: {=Grant}";

fn bench_question_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("question_from_text", |b| {
        b.iter(|| {
            let question = Question::from_text(std::hint::black_box(QUIZ));
            std::hint::black_box(question);
        });
    });

    group.bench_function("question_mask", |b| {
        let question = Question::from_text(QUIZ);
        b.iter(|| std::hint::black_box(question.mask()));
    });

    group.bench_function("question_grade", |b| {
        let question = Question::from_text(QUIZ);
        let answers = [
            Some(Answer::from("Grant's tomb")),
            Some(Answer::from(1885.0)),
            Some(Answer::from(true)),
            Some(Answer::from(vec!["U", "S"])),
            Some(Answer::from("Grant")),
        ];
        b.iter(|| std::hint::black_box(question.grade(&answers).unwrap()));
    });

    group.bench_function("block_parse", |b| {
        b.iter(|| {
            let block = Block::parse(std::hint::black_box("{~%30%a ~b ~%70%c}")).unwrap();
            std::hint::black_box(block);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_question_pipeline);
criterion_main!(benches);
