use gridplot::app::{parse_row_count, App};
use gridplot::grid::MAX_ROWS;
use gridplot::prompt::PromptKind;
use tempfile::tempdir;

#[test]
fn column_zero_edit_uses_choice_picker() {
    let mut app = App::new(3);
    app.begin_edit();
    assert!(app.choice.is_active());
    assert!(!app.prompt.is_active());

    app.choice.down();
    app.choice.down();
    app.confirm_choice();

    assert_eq!(app.grid.get(0, 0), Some("3"));
    assert_eq!(app.grid.get(0, 3), Some("3"));
    assert_eq!(app.grid.get(2, 3), Some("3"));
}

#[test]
fn cancelled_choice_changes_nothing() {
    let mut app = App::new(2);
    let before = app.grid.clone();
    app.begin_edit();
    app.choice.down();
    app.choice.cancel();
    assert_eq!(app.grid, before);
}

#[test]
fn free_column_edit_goes_through_prompt() {
    let mut app = App::new(2);
    app.cursor_right();
    app.begin_edit();
    assert_eq!(app.prompt.kind(), Some(PromptKind::EditCell { row: 0, col: 1 }));
    assert_eq!(app.prompt.buffer(), "0");

    app.prompt.backspace();
    for c in "-1.5".chars() {
        app.prompt.input(c);
    }
    app.submit_prompt();

    assert_eq!(app.grid.get(0, 1), Some("-1.5"));
    assert_eq!(app.grid.get(0, 2), Some((-1.5f64).sin().to_string().as_str()));
    assert!(app.error_message.is_none());
}

#[test]
fn bad_sine_input_surfaces_an_error() {
    let mut app = App::new(2);
    app.edit_cell(0, 1, "oops".to_string());
    assert!(app.error_message.is_some());
    app.dismiss_error();
    assert!(app.error_message.is_none());
}

#[test]
fn resize_prompt_round_trip() {
    let mut app = App::new(5);
    app.begin_resize();
    assert_eq!(app.prompt.buffer(), "5");
    app.prompt.backspace();
    app.prompt.input('8');
    app.submit_prompt();
    assert_eq!(app.grid.rows(), 8);
}

#[test]
fn cancelled_resize_is_silent() {
    let mut app = App::new(5);
    app.begin_resize();
    app.cancel_prompt();
    assert_eq!(app.grid.rows(), 5);
    assert!(app.error_message.is_none());
}

#[test]
fn invalid_row_count_is_reported() {
    let mut app = App::new(5);
    app.resize("-3");
    assert_eq!(app.grid.rows(), 5);
    assert!(app.error_message.is_some());
    assert!(parse_row_count(" 12 ").is_ok());
    assert!(parse_row_count("ten").is_err());
}

#[test]
fn oversized_row_count_is_reported() {
    let mut app = App::new(5);
    app.grid.set(0, 1, "7").unwrap();
    let before = app.grid.clone();

    app.resize("18446744073709551615");
    assert_eq!(app.grid, before);
    assert!(app.error_message.is_some());

    app.dismiss_error();
    app.resize(&(MAX_ROWS + 1).to_string());
    assert_eq!(app.grid, before);
    assert!(app.error_message.is_some());

    assert_eq!(parse_row_count(&MAX_ROWS.to_string()).unwrap(), MAX_ROWS);
}

#[test]
fn shrinking_keeps_cursor_inside() {
    let mut app = App::new(5);
    for _ in 0..4 {
        app.cursor_down();
    }
    app.toggle_selection();
    app.resize("2");
    assert_eq!(app.table.cursor(), (1, 0));
    assert!(app.table.selection().is_empty());
}

#[test]
fn selecting_two_cells_plots_their_columns() {
    let mut app = App::new(4);
    app.fill_random();
    app.toggle_selection();
    assert!(app.plot.series().is_none());

    app.cursor_right();
    app.toggle_selection();

    let series = app.plot.series().unwrap();
    assert_eq!((series.x_col, series.y_col), (0, 1));
    assert_eq!(series.points.len(), 4);
    let xs: Vec<f64> = series.points.iter().map(|p| p.0).collect();
    assert_eq!(xs, app.grid.column_values(0).unwrap());
}

#[test]
fn clearing_selection_keeps_plot() {
    let mut app = App::new(3);
    app.toggle_selection();
    app.cursor_right();
    app.toggle_selection();
    app.clear_selection();
    assert!(app.table.selection().is_empty());
    assert!(app.plot.series().is_some());
}

#[test]
fn fill_random_leaves_derived_column() {
    let mut app = App::new(6);
    app.fill_random();
    assert!(app.grid.column_text(2).all(|t| t == "0"));
}

#[test]
fn save_and_load_through_prompts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.nc");

    let mut app = App::new(3);
    app.fill_random();
    let saved = app.grid.clone();

    app.begin_save();
    assert_eq!(app.prompt.buffer(), "data.nc");
    app.cancel_prompt();
    app.save_file(path.clone());
    assert!(app.error_message.is_none(), "{:?}", app.error_message);
    assert_eq!(app.file_path.as_deref(), Some(path.as_path()));

    let mut other = App::new(1);
    other.load_file(path);
    assert_eq!(other.grid.to_array().unwrap(), saved.to_array().unwrap());
}

#[test]
fn load_through_file_picker() {
    let dir = tempdir().unwrap();
    let mut source = App::new(2);
    source.fill_random();
    source.save_file(dir.path().join("picked.nc"));
    std::fs::write(dir.path().join("readme.txt"), b"skip").unwrap();

    let mut app = App::new(4);
    app.file_browser.dir = dir.path().to_path_buf();
    app.begin_load();
    assert!(app.file_browser.visible);
    assert_eq!(app.file_browser.entries.len(), 2);

    app.file_browser.cursor_down();
    app.browser_select();
    assert!(!app.file_browser.visible);
    assert!(app.error_message.is_none(), "{:?}", app.error_message);
    assert_eq!(app.grid, source.grid);
}

#[test]
fn unreadable_picker_directory_is_reported() {
    let dir = tempdir().unwrap();
    let mut app = App::new(2);
    app.file_browser.dir = dir.path().join("gone");
    app.begin_load();
    assert!(!app.file_browser.visible);
    assert!(app.error_message.is_some());
}

#[test]
fn failed_load_keeps_grid() {
    let dir = tempdir().unwrap();
    let mut app = App::new(2);
    let before = app.grid.clone();
    app.load_file(dir.path().join("missing.nc"));
    assert_eq!(app.grid, before);
    assert!(app.error_message.is_some());
}

#[test]
fn empty_save_path_is_ignored() {
    let mut app = App::new(2);
    app.begin_save();
    while !app.prompt.buffer().is_empty() {
        app.prompt.backspace();
    }
    app.submit_prompt();
    assert!(app.error_message.is_none());
    assert!(app.file_path.is_none());
}

#[test]
fn recalculate_fills_derived_columns() {
    let mut app = App::new(2);
    app.grid.set(0, 1, "1").unwrap();
    app.grid.set(1, 0, "4").unwrap();
    app.recalculate();
    assert_eq!(app.grid.get(0, 2), Some("0.8414709848078965"));
    assert_eq!(app.grid.get(1, 3), Some("4"));
}
