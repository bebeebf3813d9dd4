use crate::cards::summary_cards_ui;
use crate::format::NumberLocale;
use crate::panels::{default_panels, panel_ui, Panel, PanelContext};
use crate::settings::Settings;
use crate::tabs::{tab_strip_ui, ActiveTab, ACTIVE_TAB_COLOR};
use eframe::egui::{self, Color32, Rect, RichText};

pub const APP_TITLE: &str = "StackAdapt Ad Performance Dashboard";
pub const CAMPAIGN_NAME: &str = "Summer Sale Promotion";
pub const FOOTER_TEXT: &str = "Designed for StackAdapt by Mathio Masood-Luca";

pub struct DashboardApp {
    active_tab: ActiveTab,
    panels: Vec<Box<dyn Panel>>,
    locale: NumberLocale,
    tab_rects: Vec<(ActiveTab, Rect)>,
    rendered_panels: Vec<ActiveTab>,
}

impl DashboardApp {
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        if settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
        Self {
            active_tab: ActiveTab::default(),
            panels: default_panels(),
            locale: settings.number_locale(),
            tab_rects: Vec::new(),
            rendered_panels: Vec::new(),
        }
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        if self.active_tab != tab {
            tracing::debug!(from = %self.active_tab, to = %tab, "switching tab");
            self.active_tab = tab;
        }
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Screen rect of a tab button as laid out in the last frame.
    pub fn tab_rect(&self, tab: ActiveTab) -> Option<Rect> {
        self.tab_rects
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, r)| *r)
    }

    /// Panels drawn during the last frame.
    pub fn rendered_panels(&self) -> &[ActiveTab] {
        &self.rendered_panels
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
            header_ui(ui);
        });
        egui::TopBottomPanel::bottom("dashboard_footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(FOOTER_TEXT).small().weak());
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                summary_cards_ui(ui, &self.locale);
                ui.add_space(16.0);
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        self.tab_content_ui(ui);
                    });
            });
        });
    }

    fn tab_content_ui(&mut self, ui: &mut egui::Ui) {
        let strip = tab_strip_ui(ui, self.active_tab);
        self.tab_rects = strip.rects;
        if let Some(tab) = strip.clicked {
            self.select_tab(tab);
        }
        ui.separator();
        ui.add_space(8.0);

        self.rendered_panels.clear();
        let ctx = PanelContext {
            locale: &self.locale,
        };
        let active = self.active_tab;
        if let Some(panel) = self.panels.iter_mut().find(|p| p.tab() == active) {
            panel_ui(ui, panel.as_mut(), &ctx);
            self.rendered_panels.push(active);
        } else {
            tracing::warn!(tab = %active, "no panel registered for tab");
        }
    }
}

fn header_ui(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        egui::Frame::none()
            .fill(ACTIVE_TAB_COLOR)
            .rounding(6.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.label(RichText::new("SA").strong().color(Color32::WHITE));
            });
        ui.heading(RichText::new(APP_TITLE).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::none()
                .fill(ACTIVE_TAB_COLOR)
                .rounding(12.0)
                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(CAMPAIGN_NAME).small().color(Color32::WHITE));
                });
        });
    });
    ui.add_space(6.0);
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
