//! Benchmarks for motion and text-object resolution.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ropey::Rope;
use std::time::Duration;
use vim_motions::{
    Bracket, CharBuffer, Engine, InputEvent, KeyEvent, MotionEngine, MotionError, MotionKind,
    Query, Quote, Result, Scope, TextView, WordKind,
};

/// Rope-based buffer for benchmarking
struct BenchBuffer {
    rope: Rope,
}

impl BenchBuffer {
    fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl TextView for BenchBuffer {
    fn len(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Result<char> {
        self.rope.get_char(offset).ok_or(MotionError::OutOfRange {
            offset,
            len: self.rope.len_chars(),
        })
    }
}

fn benchmark_word_motions(c: &mut Criterion) {
    let text = generate_sample_text(1000);
    let buffer = CharBuffer::new(&text);
    let rope = BenchBuffer::new(&text);
    let motions = MotionEngine::new();

    c.bench_function("word motions (w/b/e/ge)", |b| {
        b.iter(|| {
            let forward = Query::forward(black_box(500)).count(5);
            let backward = Query::backward(black_box(500)).count(5);
            for kind in [MotionKind::WordBegin, MotionKind::WordEnd] {
                let _ = black_box(motions.motion(&buffer, kind, forward));
                let _ = black_box(motions.motion(&buffer, kind, backward));
            }
        });
    });

    c.bench_function("WORD motions on rope (W/E)", |b| {
        b.iter(|| {
            let query = Query::forward(black_box(500)).count(5);
            let _ = black_box(motions.big_word_begin(&rope, query));
            let _ = black_box(motions.big_word_end(&rope, query));
        });
    });
}

fn benchmark_block_motions(c: &mut Criterion) {
    let text = generate_sample_text(200);
    let buffer = CharBuffer::new(&text);
    let motions = MotionEngine::new();
    let middle = buffer.len() / 2;

    c.bench_function("sentence motions ( and )", |b| {
        b.iter(|| {
            let _ = black_box(motions.sentence(&buffer, Query::forward(black_box(middle))));
            let _ = black_box(motions.sentence(&buffer, Query::backward(black_box(middle))));
        });
    });

    c.bench_function("paragraph motions { and }", |b| {
        b.iter(|| {
            let _ = black_box(motions.paragraph(&buffer, Query::forward(black_box(middle))));
            let _ = black_box(motions.paragraph(&buffer, Query::backward(black_box(middle))));
        });
    });
}

fn benchmark_text_objects(c: &mut Criterion) {
    let text = generate_sample_text(200);
    let buffer = CharBuffer::new(&text);
    let motions = MotionEngine::new();
    let middle = buffer.len() / 2;

    c.bench_function("text objects (i( a\" iw)", |b| {
        b.iter(|| {
            let offset = black_box(middle);
            let _ = black_box(motions.bracket_object(
                &buffer,
                offset,
                Bracket::Paren,
                Scope::Inner,
                1,
            ));
            let _ = black_box(motions.quote_object(&buffer, offset, Quote::Double, Scope::Around));
            let _ = black_box(motions.word_object(
                &buffer,
                offset,
                WordKind::Small,
                Scope::Inner,
                2,
            ));
        });
    });
}

fn benchmark_key_sequence(c: &mut Criterion) {
    let text = generate_sample_text(1000);
    let buffer = BenchBuffer::new(&text);
    let mut engine = Engine::new();

    c.bench_function("key sequence (3w d2e ci( ge)", |b| {
        b.iter(|| {
            let mut cursor = 300;
            for k in "3wd2eci(".chars() {
                if let Ok((next, cmds)) = engine.handle_event(&buffer, cursor, key(k)) {
                    cursor = next;
                    black_box(cmds);
                }
            }
            let _ = engine.handle_event(&buffer, cursor, InputEvent::Key(KeyEvent::esc()));
            for k in "ge".chars() {
                if let Ok((next, _)) = engine.handle_event(&buffer, cursor, key(k)) {
                    cursor = next;
                }
            }
            black_box(cursor);
        });
    });
}

fn generate_sample_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!(
            "Line {} calls run(\"sample\", x.y) for benchmarking. It has two sentences!\n",
            i + 1
        ));
        if i % 10 == 0 {
            text.push('\n'); // Add blank lines for paragraphs
        }
    }
    text
}

fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyEvent::char(c))
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_word_motions,
              benchmark_block_motions,
              benchmark_text_objects,
              benchmark_key_sequence
}
criterion_main!(benches);
