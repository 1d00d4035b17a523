//! Benchmarks for tgdoc conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic DOCX packages built in memory.

use std::io::{Cursor, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tgdoc::model::{Document, Paragraph, Run};
use tgdoc::render::{self, RenderOptions};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Creates a minimal DOCX whose body cycles through headings, styled body text and code.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    let mut body = String::new();
    for i in 0..paragraph_count {
        match i % 4 {
            0 => body.push_str(&format!(
                r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Section {}.</w:t></w:r></w:p>"#,
                i
            )),
            3 => body.push_str(
                r#"<w:p><w:pPr><w:pStyle w:val="Code"/></w:pPr><w:r><w:t>fn main() { println!("hi"); }</w:t></w:r></w:p>"#,
            ),
            _ => body.push_str(
                r#"<w:p><w:r><w:t xml:space="preserve">Plain text (with) reserved-chars! </w:t></w:r><w:r><w:rPr><w:b/><w:i/></w:rPr><w:t>styled</w:t></w:r></w:p>"#,
            ),
        }
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

/// Benchmark container detection.
fn bench_format_detection(c: &mut Criterion) {
    let docx_data = create_test_docx(1);
    let other_data = b"Not a document at all, just random text content";

    c.bench_function("detect_docx", |b| {
        b.iter(|| tgdoc::detect_format_from_bytes(black_box(&docx_data)).unwrap());
    });

    c.bench_function("detect_unknown", |b| {
        b.iter(|| tgdoc::detect_format_from_bytes(black_box(other_data)).is_err());
    });
}

/// Benchmark full conversion at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for paragraph_count in [10, 100, 1000].iter() {
        let data = create_test_docx(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| tgdoc::convert_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering alone, without the package reader.
fn bench_rendering(c: &mut Criterion) {
    let paragraphs = (0..500)
        .map(|i| {
            Paragraph::new("Normal")
                .with_run(Run::new(format!("Item {} (draft). ", i)))
                .with_run(Run::bold("Important!"))
        })
        .collect();
    let doc = Document::from_paragraphs(paragraphs);
    let options = RenderOptions::default();

    c.bench_function("render_500_paragraphs", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_conversion,
    bench_rendering,
);
criterion_main!(benches);
