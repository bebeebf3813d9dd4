use campaign_dashboard::cards::{TrendDirection, SUMMARY_CARDS};
use campaign_dashboard::data::{SeriesKey, BRAND_LIFT, CHANNELS, WEEKLY};
use campaign_dashboard::format::NumberLocale;

#[test]
fn datasets_have_fixed_lengths() {
    assert_eq!(CHANNELS.len(), 7);
    assert_eq!(BRAND_LIFT.len(), 3);
    assert_eq!(WEEKLY.len(), 6);
}

#[test]
fn channel_names_are_unique() {
    let mut names: Vec<_> = CHANNELS.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), CHANNELS.len());
}

#[test]
fn color_mapping_matches_palette() {
    let expected = [
        ("ctr", "#ffc658"),
        ("impressions", "#8884d8"),
        ("clicks", "#82ca9d"),
        ("conversions", "#ff7300"),
        ("control", "#8884d8"),
        ("exposed", "#82ca9d"),
        ("lift", "#ff7300"),
    ];
    for (key, hex) in expected {
        let key = SeriesKey::from_key(key).unwrap();
        assert_eq!(key.css_hex(), hex, "color for {key}");
    }
}

#[test]
fn summary_cards_are_fixed() {
    let locale = NumberLocale::default();
    let values: Vec<_> = SUMMARY_CARDS.iter().map(|c| c.value_text(&locale)).collect();
    assert_eq!(values, ["6,480,000", "210,600", "3.25%", "10,530"]);

    let titles: Vec<_> = SUMMARY_CARDS.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Impressions", "Clicks", "CTR", "Conversions"]);

    let directions: Vec<_> = SUMMARY_CARDS.iter().map(|c| c.trend.direction).collect();
    assert_eq!(
        directions,
        [
            TrendDirection::Up,
            TrendDirection::Up,
            TrendDirection::Down,
            TrendDirection::Up
        ]
    );
    assert_eq!(SUMMARY_CARDS[3].trend.label(), "↑ 15.2% vs last month");
}
