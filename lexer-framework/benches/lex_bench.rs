use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexer_framework::{Config, Kind, Lexer};

const LINE: &str = "func add(a, b) { return a + b * 2.5 <<= \"sum\" }\n";
const CJK_LINE: &str = "变量 := 数值 + 42 // 注释\n";

fn generate(line: &str, size_kb: usize) -> String {
    let target = size_kb * 1024;
    let mut text = String::with_capacity(target + line.len());
    while text.len() < target {
        text.push_str(line);
    }
    text
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    // ~100KB per input for stable throughput numbers.
    let ascii = generate(LINE, 100);
    let cjk = generate(CJK_LINE, 100);

    let lexer = Lexer::new(
        Config::standard()
            .keyword("func", Kind::keyword(0))
            .keyword("return", Kind::keyword(1)),
    );

    group.throughput(Throughput::Bytes(ascii.len() as u64));
    group.bench_function("ascii_100kb", |b| {
        b.iter(|| lexer.lex(black_box(&ascii)))
    });

    group.throughput(Throughput::Bytes(cjk.len() as u64));
    group.bench_function("cjk_100kb", |b| b.iter(|| lexer.lex(black_box(&cjk))));

    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
