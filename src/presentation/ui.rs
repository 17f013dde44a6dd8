use crate::application::{App, AppMode, StatusLevel, TextInput};
use crate::domain::StudentField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_table(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "roster - Student Records | {} students | Data: {}",
        app.roster.len(),
        app.data_location()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == AppMode::AddForm;
    let border_style = if editing {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Student")
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(inner);

    for (field, row) in StudentField::ALL.into_iter().zip(rows.iter()) {
        let focused = editing && app.form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Black).bg(Color::LightBlue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let label = format!("{:>8}: ", field.label());
        let input = app.form.input(field);
        let line = Line::from(vec![
            Span::styled(label.clone(), label_style),
            Span::raw(input.value().to_string()),
        ]);
        f.render_widget(Paragraph::new(line), *row);

        if focused {
            place_cursor(f, *row, label.chars().count(), input);
        }
    }
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        StudentField::ALL
            .iter()
            .map(|field| Cell::from(field.label()).style(Style::default().fg(Color::Yellow))),
    )
    .height(1);

    let rows = app.visible.iter().filter_map(|&position| {
        app.roster.get(position).map(|student| {
            Row::new(StudentField::ALL.map(|field| Cell::from(student.field(field).to_string())))
        })
    });

    let title = if app.filter.is_empty() {
        "Student List".to_string()
    } else {
        format!("Student List (name contains '{}')", app.filter)
    };

    let table = Table::new(
        rows,
        [Constraint::Percentage(50), Constraint::Percentage(25), Constraint::Percentage(25)],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
    .highlight_symbol("> ")
    .column_spacing(1);

    let mut state = TableState::default().with_selected(app.selected);
    f.render_stateful_widget(table, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.mode {
        AppMode::Browse => match app.status_message {
            Some(ref status) => (status.text.clone(), status_style(status.level)),
            None => (
                "a: add | d: delete | C: clear all | /: search | Ctrl+E: export CSV | F1/?: help | q: quit"
                    .to_string(),
                Style::default(),
            ),
        },
        AppMode::AddForm => match app.status_message {
            Some(ref status) if status.level != StatusLevel::Info => {
                (status.text.clone(), status_style(status.level))
            }
            _ => (
                "Tab/Shift+Tab: next/previous field | Enter: add | Esc: cancel".to_string(),
                Style::default().fg(Color::Green),
            ),
        },
        AppMode::Search => (
            format!("Search by name: {} (Enter to keep, Esc to cancel)", app.search_input.value()),
            Style::default().fg(Color::Yellow),
        ),
        AppMode::ExportCsv => (
            format!("Export CSV as: {} (Enter to export, Esc to cancel)", app.export_input.value()),
            Style::default().fg(Color::Magenta),
        ),
        AppMode::Help => (
            "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
            Style::default().fg(Color::Cyan),
        ),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);

    let prompt = match app.mode {
        AppMode::Search => Some(("Search by name: ", &app.search_input)),
        AppMode::ExportCsv => Some(("Export CSV as: ", &app.export_input)),
        _ => None,
    };
    if let Some((label, input)) = prompt {
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        place_cursor(f, inner, label.chars().count(), input);
    }
}

fn status_style(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default(),
        StatusLevel::Warning => Style::default().fg(Color::Yellow),
        StatusLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn place_cursor(f: &mut Frame, area: Rect, offset: usize, input: &TextInput) {
    let x = area.x.saturating_add((offset + input.cursor()) as u16);
    if x < area.x + area.width {
        f.set_cursor_position(Position::new(x, area.y));
    }
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("roster Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

/// Number of lines in the help popup text.
pub fn help_line_count() -> usize {
    HELP_TEXT.lines().count()
}

const HELP_TEXT: &str = r#"ROSTER - STUDENT RECORDS

=== RECORDS ===
Every student has a name, a roll number and a grade.
All three fields are required; surrounding spaces are removed.
Roll numbers do not have to be unique.

=== TABLE ===
↑↓ or k/j       Move the highlighted row
a               Open the Add Student form
d or Delete     Delete the highlighted student
C               Clear the whole roster (no confirmation)
/               Search by name
Esc             Show all students again
Ctrl+E          Export the roster to a CSV file
F1 or ?         Show this help
q               Save and quit

=== ADD STUDENT FORM ===
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
Enter           Add the student
Esc             Back to the table (the draft is kept)

=== SEARCH ===
Matches names only, ignoring upper/lower case.
The table filters while you type.
Enter           Keep the filter
Esc             Restore the previous filter
Searching never removes students; it only hides rows.

=== SAVING ===
The roster is saved after every add, delete and clear,
and once more when you quit. A failed save is reported
in the status bar; your changes stay in memory."#;
