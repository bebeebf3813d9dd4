use campaign_dashboard::cards::SUMMARY_CARDS;
use campaign_dashboard::data::{BRAND_LIFT, CHANNELS, WEEKLY};
use campaign_dashboard::gui::DashboardApp;
use campaign_dashboard::settings::Settings;
use campaign_dashboard::tabs::ActiveTab;
use eframe::egui;

fn render(ctx: &egui::Context, app: &mut DashboardApp, input: egui::RawInput) {
    let _ = ctx.run(input, |ctx| app.ui(ctx));
}

fn press(pos: egui::Pos2, pressed: bool) -> egui::RawInput {
    let mut input = egui::RawInput::default();
    input.events.push(egui::Event::PointerMoved(pos));
    input.events.push(egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    });
    input
}

fn click_tab(ctx: &egui::Context, app: &mut DashboardApp, tab: ActiveTab) {
    let pos = app.tab_rect(tab).expect("tab strip rendered").center();
    render(ctx, app, press(pos, true));
    render(ctx, app, press(pos, false));
}

#[test]
fn starts_on_overview() {
    let ctx = egui::Context::default();
    let mut app = DashboardApp::new(&ctx, Settings::default());
    assert_eq!(app.active_tab(), ActiveTab::Overview);
    render(&ctx, &mut app, Default::default());
    assert_eq!(app.rendered_panels(), [ActiveTab::Overview]);
}

#[test]
fn each_tab_shows_exactly_one_panel() {
    let ctx = egui::Context::default();
    let mut app = DashboardApp::new(&ctx, Settings::default());
    for tab in ActiveTab::ALL {
        app.select_tab(tab);
        render(&ctx, &mut app, Default::default());
        assert_eq!(app.rendered_panels(), [tab]);
    }
}

#[test]
fn clicking_tab_switches_panel() {
    let ctx = egui::Context::default();
    let mut app = DashboardApp::new(&ctx, Settings::default());
    render(&ctx, &mut app, Default::default());

    click_tab(&ctx, &mut app, ActiveTab::Channels);
    assert_eq!(app.active_tab(), ActiveTab::Channels);
    assert_eq!(app.rendered_panels(), [ActiveTab::Channels]);

    click_tab(&ctx, &mut app, ActiveTab::Studies);
    assert_eq!(app.active_tab(), ActiveTab::Studies);
    assert_eq!(app.rendered_panels(), [ActiveTab::Studies]);
}

#[test]
fn tab_changes_leave_data_and_cards_alone() {
    let ctx = egui::Context::default();
    let mut app = DashboardApp::new(&ctx, Settings::default());
    let before: Vec<_> = SUMMARY_CARDS
        .iter()
        .map(|c| (c.value_text(app.locale()), c.trend.label()))
        .collect();
    for tab in ActiveTab::ALL {
        app.select_tab(tab);
        render(&ctx, &mut app, Default::default());
        let after: Vec<_> = SUMMARY_CARDS
            .iter()
            .map(|c| (c.value_text(app.locale()), c.trend.label()))
            .collect();
        assert_eq!(before, after);
        assert_eq!(CHANNELS.len(), 7);
        assert_eq!(BRAND_LIFT.len(), 3);
        assert_eq!(WEEKLY.len(), 6);
    }
}

#[test]
fn new_app_ignores_previous_tab() {
    let ctx = egui::Context::default();
    let mut app = DashboardApp::new(&ctx, Settings::default());
    app.select_tab(ActiveTab::Studies);
    let app = DashboardApp::new(&ctx, Settings::default());
    assert_eq!(app.active_tab(), ActiveTab::Overview);
}
