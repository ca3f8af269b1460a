use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_scene::element::{Drawable, Text};
use tui_scene::screen::Screen;
use tui_scene::types::{Attr, Rgb};

fn attrs() -> (Attr, Attr) {
    (
        Attr::new(Rgb::new(220, 220, 220)),
        Attr::new(Rgb::new(0, 0, 0)),
    )
}

fn bench_set_text_ascii(c: &mut Criterion) {
    let (fg, bg) = attrs();
    let mut text = Text::new(0, 0, "", fg, bg);

    c.bench_function("set_text_ascii", |b| {
        b.iter(|| {
            text.set_text(black_box(
                "the quick brown fox jumps over the lazy dog 0123456789",
            ));
        })
    });
}

fn bench_set_text_cjk(c: &mut Criterion) {
    let (fg, bg) = attrs();
    let mut text = Text::new(0, 0, "", fg, bg);

    c.bench_function("set_text_cjk", |b| {
        b.iter(|| {
            text.set_text(black_box("こんにちは世界こんにちは世界"));
        })
    });
}

fn bench_set_color(c: &mut Criterion) {
    let (fg, bg) = attrs();
    let mut text = Text::new(0, 0, "the quick brown fox jumps over the lazy dog", fg, bg);

    c.bench_function("set_color_repaint", |b| {
        b.iter(|| {
            text.set_color(black_box(fg), black_box(bg));
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let (fg, bg) = attrs();
    let text = Text::new(2, 3, "スコア 123456", fg, bg);
    let mut screen = Screen::new(80, 24);

    c.bench_function("draw_80x24", |b| {
        b.iter(|| {
            text.draw(black_box(&mut screen));
        })
    });
}

criterion_group!(
    benches,
    bench_set_text_ascii,
    bench_set_text_cjk,
    bench_set_color,
    bench_draw
);
criterion_main!(benches);
