use criterion::{Criterion, black_box, criterion_group, criterion_main};
use encoding_sniffer::{PRESCAN_LIMIT, SniffOptions, scan_for_meta_charset, sniff};

/// A head section with the declaration as late as the prescan allows.
fn make_late_meta() -> Vec<u8> {
    let tag = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=koi8-r\">";
    let mut doc = Vec::with_capacity(PRESCAN_LIMIT);
    doc.extend_from_slice(b"<!DOCTYPE html><html><head>");
    while doc.len() + tag.len() + 40 < PRESCAN_LIMIT {
        doc.extend_from_slice(b"<link rel=\"stylesheet\" href=\"a.css\">");
    }
    doc.extend_from_slice(tag);
    doc
}

/// Markup-dense input with no declaration at all.
fn make_no_meta() -> Vec<u8> {
    let mut doc = Vec::with_capacity(PRESCAN_LIMIT * 4);
    while doc.len() < PRESCAN_LIMIT * 4 {
        doc.extend_from_slice(b"<div class=box><!-- c --><span title='x'>hi</span></div>");
    }
    doc
}

fn bench_prescan_late_meta(c: &mut Criterion) {
    let input = make_late_meta();
    c.bench_function("bench_prescan_late_meta", |b| {
        b.iter(|| black_box(scan_for_meta_charset(black_box(&input))));
    });
}

fn bench_prescan_no_meta(c: &mut Criterion) {
    let input = make_no_meta();
    c.bench_function("bench_prescan_no_meta", |b| {
        b.iter(|| black_box(scan_for_meta_charset(black_box(&input))));
    });
}

fn bench_sniff_bom(c: &mut Criterion) {
    let mut input = b"\xEF\xBB\xBF".to_vec();
    input.extend_from_slice(&make_no_meta());
    let opts = SniffOptions::default();
    c.bench_function("bench_sniff_bom", |b| {
        b.iter(|| black_box(sniff(black_box(&input), &opts)));
    });
}

fn bench_sniff_default(c: &mut Criterion) {
    let input = make_no_meta();
    let opts = SniffOptions::new().with_default_encoding("ISO-8859-16");
    c.bench_function("bench_sniff_default", |b| {
        b.iter(|| black_box(sniff(black_box(&input), &opts)));
    });
}

criterion_group!(
    benches,
    bench_prescan_late_meta,
    bench_prescan_no_meta,
    bench_sniff_bom,
    bench_sniff_default
);
criterion_main!(benches);
