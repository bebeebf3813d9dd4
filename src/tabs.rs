use eframe::egui::{self, Color32, Rect, RichText, Stroke};

pub const ACTIVE_TAB_COLOR: Color32 = Color32::from_rgb(37, 99, 235);

/// Which chart panel is on screen. Always starts at `Overview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Overview,
    Channels,
    Studies,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Overview, ActiveTab::Channels, ActiveTab::Studies];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Overview => "overview",
            ActiveTab::Channels => "channels",
            ActiveTab::Studies => "studies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Overview => "Overview",
            ActiveTab::Channels => "Channels",
            ActiveTab::Studies => "Measurement Studies",
        }
    }
}

impl std::fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one tab strip frame.
#[derive(Debug, Clone, Default)]
pub struct TabStripOutput {
    pub rects: Vec<(ActiveTab, Rect)>,
    pub clicked: Option<ActiveTab>,
}

/// Draw the tab buttons. Does not change `active`; callers apply `clicked`.
pub fn tab_strip_ui(ui: &mut egui::Ui, active: ActiveTab) -> TabStripOutput {
    let mut out = TabStripOutput::default();
    ui.horizontal(|ui| {
        for tab in ActiveTab::ALL {
            let selected = tab == active;
            let text = if selected {
                RichText::new(tab.label()).strong().color(ACTIVE_TAB_COLOR)
            } else {
                RichText::new(tab.label())
            };
            let resp = ui.selectable_label(selected, text);
            if selected {
                let r = resp.rect;
                ui.painter().line_segment(
                    [r.left_bottom(), r.right_bottom()],
                    Stroke::new(2.0, ACTIVE_TAB_COLOR),
                );
            }
            if resp.clicked() && !selected {
                out.clicked = Some(tab);
            }
            out.rects.push((tab, resp.rect));
        }
    });
    out
}
