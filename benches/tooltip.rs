use campaign_dashboard::format::NumberLocale;
use campaign_dashboard::panels::{ChannelsPanel, Panel};
use campaign_dashboard::tooltip::format_tooltip;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tooltip(c: &mut Criterion) {
    let panel = ChannelsPanel::default();
    let locale = NumberLocale::default();
    let payloads: Vec<_> = (0..panel.chart().categories.len())
        .map(|i| panel.chart().payload_at(i))
        .collect();
    c.bench_function("format_channel_tooltips", |b| {
        b.iter(|| {
            for payload in &payloads {
                criterion::black_box(format_tooltip(Some(payload), &locale));
            }
        })
    });
}

fn bench_number_format(c: &mut Criterion) {
    let locale = NumberLocale::default();
    c.bench_function("format_number_grouped", |b| {
        b.iter(|| locale.format_number(criterion::black_box(6_480_000.0)))
    });
}

criterion_group!(benches, bench_tooltip, bench_number_format);
criterion_main!(benches);
