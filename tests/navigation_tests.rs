use pati::core::action::{Action, Effect, update};
use pati::core::catalog::{Catalog, Sex};
use pati::core::presentation::describe;
use pati::core::state::{App, Route};
use pati::tui::TuiState;
use pati::tui::event::TuiEvent;
use pati::tui::theme::Theme;
use pati::tui::{handle_event, ui};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

// ============================================================================
// Helper Functions
// ============================================================================

/// Draws one full frame and flattens the buffer into text, row by row
fn draw_screen(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| ui::draw_ui(f, app, tui, &theme))
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Feeds a terminal event through the adapter and the reducer
fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let frame = Rect::new(0, 0, 100, 50);
    match handle_event(app, tui, &event, frame) {
        Some(action) => update(app, action),
        None => Effect::None,
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_builtin_catalog_has_three_dogs_with_images() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 3);
    for record in &catalog {
        assert!(!record.images.is_empty(), "{} has no images", record.name);
    }
}

#[test]
fn test_every_position_resolves_to_its_record() {
    let catalog = Catalog::builtin();
    let names: Vec<_> = catalog.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Niko", "Lulu", "Ernie"]);
    for position in 0..catalog.len() {
        let (found, _) = catalog.find_by_id(catalog.record(position).id).unwrap();
        assert_eq!(found, position);
    }
    assert!(catalog.get(3).is_none());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_open_each_detail_and_return() {
    let mut app = App::new(Catalog::builtin());
    for position in 0..app.catalog.len() {
        assert_eq!(update(&mut app, Action::OpenDetail(position)), Effect::Navigated);
        assert_eq!(app.route, Route::Detail(position));
        let expected = app.catalog.record(position).name.clone();
        assert_eq!(app.current_record().map(|r| r.name.clone()), Some(expected));
        assert_eq!(update(&mut app, Action::Back), Effect::Navigated);
        assert_eq!(app.route, Route::List);
    }
}

#[test]
fn test_out_of_range_open_stays_on_list() {
    let mut app = App::new(Catalog::builtin());
    assert_eq!(update(&mut app, Action::OpenDetail(7)), Effect::None);
    assert_eq!(app.route, Route::List);
}

#[test]
fn test_keyboard_flow_opens_lulu() {
    let mut app = App::new(Catalog::builtin());
    let mut tui = TuiState::new(app.catalog.len());

    press(&mut app, &mut tui, TuiEvent::CursorDown);
    assert_eq!(press(&mut app, &mut tui, TuiEvent::Submit), Effect::Navigated);
    assert_eq!(app.route, Route::Detail(1));

    let lulu = app.current_record().unwrap();
    assert_eq!(lulu.sex, Sex::Female);
    assert!(describe(lulu).contains("She is a puppy"));

    let screen = draw_screen(&app, &mut tui, 100, 50);
    assert!(screen.contains("Lulu"));
    assert!(screen.contains("Pug"));
    assert!(screen.contains("She is a puppy"));

    press(&mut app, &mut tui, TuiEvent::Back);
    assert_eq!(app.route, Route::List);
    assert_eq!(press(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
}

// ============================================================================
// List Screen
// ============================================================================

#[test]
fn test_list_screen_shows_rows_in_catalog_order() {
    let app = App::new(Catalog::builtin());
    let mut tui = TuiState::new(app.catalog.len());
    let screen = draw_screen(&app, &mut tui, 100, 50);

    for record in &app.catalog {
        assert_eq!(
            screen.matches(record.name.as_str()).count(),
            1,
            "{} should appear on exactly one row",
            record.name
        );
    }
    let niko = screen.find("Niko").expect("Niko row");
    let lulu = screen.find("Lulu").expect("Lulu row");
    let ernie = screen.find("Ernie").expect("Ernie row");
    assert!(niko < lulu && lulu < ernie);

    // Every card shows exactly one sex symbol, on either side of the row
    let cards = screen.matches('♂').count() + screen.matches('♀').count();
    assert_eq!(cards, app.catalog.len());
    assert_eq!(screen.matches("☺ owner").count(), app.catalog.len());
    assert!(screen.contains("Dogs do speak"));
}
