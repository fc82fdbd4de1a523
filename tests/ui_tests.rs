use gridplot::app::App;
use gridplot::ui;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::{backend::TestBackend, Terminal};

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn draws_headers_and_plot_hint() {
    let mut app = App::new(3);
    let screen = render(&mut app);
    assert!(screen.contains("Column 1"));
    assert!(screen.contains("Column 5"));
    assert!(screen.contains("Select two cells"));
}

#[test]
fn draws_plot_title_after_selection() {
    let mut app = App::new(3);
    app.toggle_selection();
    app.cursor_right();
    app.toggle_selection();
    let screen = render(&mut app);
    assert!(screen.contains("Column 2 vs Column 1"));
}

#[test]
fn draws_error_popup() {
    let mut app = App::new(2);
    app.edit_cell(0, 1, "abc".to_string());
    let screen = render(&mut app);
    assert!(screen.contains("Press any key to close"));
}

#[test]
fn draws_unparsable_derived_cell_without_panicking() {
    let mut app = App::new(2);
    app.grid.set(0, 2, "bad").unwrap();
    app.grid.resize(4);
    let screen = render(&mut app);
    assert!(screen.contains("bad"));
}

#[test]
fn draws_resize_prompt() {
    let mut app = App::new(2);
    app.begin_resize();
    let screen = render(&mut app);
    assert!(screen.contains("Number of rows"));
}

fn render_buffer(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for y in 0..buffer.area.height {
        let line: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        if let Some(offset) = line.find(needle) {
            return Some((line[..offset].chars().count() as u16, y));
        }
    }
    None
}

#[test]
fn derived_column_is_colored_by_sign() {
    let mut app = App::new(4);
    app.grid.set(1, 2, "0.5").unwrap();
    app.grid.set(2, 2, "-0.5").unwrap();
    app.grid.set(3, 2, "0").unwrap();
    assert_eq!(app.table.cursor(), (0, 0));

    let buffer = render_buffer(&mut app);
    let (x, header_y) = find(&buffer, "Column 3").unwrap();
    let bg = |row: u16| buffer[(x, header_y + 1 + row)].bg;
    assert_eq!(buffer[(x, header_y + 2)].symbol(), "0");
    assert_eq!(buffer[(x, header_y + 3)].symbol(), "-");
    assert_eq!(bg(1), Color::Rgb(0, 255, 0));
    assert_eq!(bg(2), Color::Rgb(255, 0, 0));
    assert_eq!(bg(3), Color::Rgb(255, 255, 255));
}

#[test]
fn plain_columns_are_not_sign_colored() {
    let mut app = App::new(3);
    app.grid.set(1, 3, "-0.5").unwrap();

    let buffer = render_buffer(&mut app);
    let (x, header_y) = find(&buffer, "Column 4").unwrap();
    assert_eq!(buffer[(x, header_y + 2)].symbol(), "-");
    assert_ne!(buffer[(x, header_y + 2)].bg, Color::Rgb(255, 0, 0));
}
