use eframe::egui::Color32;

/// Delivery metrics for a single advertising channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRecord {
    pub name: &'static str,
    pub impressions: u64,
    pub clicks: u64,
    /// Click-through rate in percent.
    pub ctr: f64,
    pub conversions: u64,
}

/// Result row of a brand lift study. All values are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandLiftRecord {
    pub metric: &'static str,
    pub control: f64,
    pub exposed: f64,
    pub lift: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyRecord {
    pub week: &'static str,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

pub const CHANNELS: &[ChannelRecord] = &[
    ChannelRecord {
        name: "Native",
        impressions: 1_250_000,
        clicks: 37_500,
        ctr: 3.0,
        conversions: 1_875,
    },
    ChannelRecord {
        name: "Display",
        impressions: 1_850_000,
        clicks: 27_750,
        ctr: 1.5,
        conversions: 1_110,
    },
    ChannelRecord {
        name: "Video",
        impressions: 950_000,
        clicks: 33_250,
        ctr: 3.5,
        conversions: 1_830,
    },
    ChannelRecord {
        name: "CTV",
        impressions: 750_000,
        clicks: 28_500,
        ctr: 3.8,
        conversions: 1_710,
    },
    ChannelRecord {
        name: "Audio",
        impressions: 550_000,
        clicks: 16_500,
        ctr: 3.0,
        conversions: 990,
    },
    ChannelRecord {
        name: "In-Game",
        impressions: 680_000,
        clicks: 23_800,
        ctr: 3.5,
        conversions: 1_428,
    },
    ChannelRecord {
        name: "DOOH",
        impressions: 450_000,
        clicks: 13_500,
        ctr: 3.0,
        conversions: 675,
    },
];

pub const BRAND_LIFT: &[BrandLiftRecord] = &[
    BrandLiftRecord {
        metric: "Brand Awareness",
        control: 32.0,
        exposed: 58.0,
        lift: 81.0,
    },
    BrandLiftRecord {
        metric: "Brand Consideration",
        control: 24.0,
        exposed: 41.0,
        lift: 71.0,
    },
    BrandLiftRecord {
        metric: "Purchase Intent",
        control: 12.0,
        exposed: 29.0,
        lift: 142.0,
    },
];

pub const WEEKLY: &[WeeklyRecord] = &[
    WeeklyRecord {
        week: "Week 1",
        impressions: 850_000,
        clicks: 25_500,
        conversions: 1_275,
    },
    WeeklyRecord {
        week: "Week 2",
        impressions: 920_000,
        clicks: 29_440,
        conversions: 1_472,
    },
    WeeklyRecord {
        week: "Week 3",
        impressions: 1_050_000,
        clicks: 35_700,
        conversions: 1_785,
    },
    WeeklyRecord {
        week: "Week 4",
        impressions: 1_120_000,
        clicks: 39_200,
        conversions: 1_960,
    },
    WeeklyRecord {
        week: "Week 5",
        impressions: 1_180_000,
        clicks: 41_300,
        conversions: 2_065,
    },
    WeeklyRecord {
        week: "Week 6",
        impressions: 1_250_000,
        clicks: 45_000,
        conversions: 2_250,
    },
];

/// Metric keys that can be plotted. Each key owns a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Ctr,
    Impressions,
    Clicks,
    Conversions,
    Control,
    Exposed,
    Lift,
}

impl SeriesKey {
    pub const ALL: [SeriesKey; 7] = [
        SeriesKey::Ctr,
        SeriesKey::Impressions,
        SeriesKey::Clicks,
        SeriesKey::Conversions,
        SeriesKey::Control,
        SeriesKey::Exposed,
        SeriesKey::Lift,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKey::Ctr => "ctr",
            SeriesKey::Impressions => "impressions",
            SeriesKey::Clicks => "clicks",
            SeriesKey::Conversions => "conversions",
            SeriesKey::Control => "control",
            SeriesKey::Exposed => "exposed",
            SeriesKey::Lift => "lift",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub fn color(&self) -> Color32 {
        match self {
            SeriesKey::Ctr => Color32::from_rgb(0xff, 0xc6, 0x58),
            SeriesKey::Impressions | SeriesKey::Control => Color32::from_rgb(0x88, 0x84, 0xd8),
            SeriesKey::Clicks | SeriesKey::Exposed => Color32::from_rgb(0x82, 0xca, 0x9d),
            SeriesKey::Conversions | SeriesKey::Lift => Color32::from_rgb(0xff, 0x73, 0x00),
        }
    }

    /// Color as a lowercase `#rrggbb` string.
    pub fn css_hex(&self) -> String {
        let c = self.color();
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    }
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
