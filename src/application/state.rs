//! Application state management for the roster terminal front end.
//!
//! `App` owns the roster and the repository it is saved through, keeps
//! track of which records are on screen, and turns every outcome into a
//! status notification. Each mutating action saves the whole roster before
//! returning.

use std::path::PathBuf;

use log::{error, info, warn};

use super::config::Config;
use super::form::{StudentForm, TextInput};
use crate::domain::Roster;
use crate::infrastructure::{CsvExporter, PersistenceResult, RosterRepository};

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which prompt the
/// status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Table navigation, shortcuts available
    Browse,
    /// The add-student form has focus
    AddForm,
    /// User is typing a name filter
    Search,
    /// CSV export prompt is open
    ExportCsv,
    /// Help popup is displayed
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Notification shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

/// Main application state.
///
/// The table shows `visible`, a list of roster positions matching the
/// active name filter. `selected` indexes into that list, so a row picked
/// from a filtered view still deletes the record it displays.
pub struct App {
    /// The record store
    pub roster: Roster,
    repository: Box<dyn RosterRepository>,
    /// Current application mode
    pub mode: AppMode,
    /// Add-student form contents
    pub form: StudentForm,
    /// Search prompt buffer
    pub search_input: TextInput,
    /// Name filter applied to the table
    pub filter: String,
    filter_before_search: String,
    /// Roster positions currently on screen
    pub visible: Vec<usize>,
    /// Highlighted row within `visible`
    pub selected: Option<usize>,
    /// CSV export prompt buffer
    pub export_input: TextInput,
    export_file: PathBuf,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Latest notification
    pub status_message: Option<StatusMessage>,
}

impl App {
    /// Creates an application with an empty roster. Nothing is loaded.
    pub fn new(repository: Box<dyn RosterRepository>, config: &Config) -> Self {
        Self {
            roster: Roster::default(),
            repository,
            mode: AppMode::Browse,
            form: StudentForm::default(),
            search_input: TextInput::default(),
            filter: String::new(),
            filter_before_search: String::new(),
            visible: Vec::new(),
            selected: None,
            export_input: TextInput::default(),
            export_file: config.export_file.clone(),
            help_scroll: 0,
            status_message: None,
        }
    }

    /// Creates an application and loads the stored roster.
    pub fn start(repository: Box<dyn RosterRepository>, config: &Config) -> Self {
        let mut app = Self::new(repository, config);
        app.load_roster();
        app
    }

    /// Replaces the roster with the stored one.
    ///
    /// A load failure is reported and leaves an empty roster.
    pub fn load_roster(&mut self) {
        match self.repository.load() {
            Ok(students) => {
                let count = students.len();
                self.roster = Roster::from(students);
                self.status_message = Some(StatusMessage::info(format!(
                    "Loaded {} student{} from {}",
                    count,
                    plural(count),
                    self.repository.location()
                )));
            }
            Err(e) => {
                error!("loading roster from {} failed: {}", self.repository.location(), e);
                self.roster = Roster::default();
                self.status_message = Some(StatusMessage::error(format!("Error loading data: {}", e)));
            }
        }
        self.selected = None;
        self.refresh_view();
    }

    /// Saves the roster one last time before exit.
    pub fn shutdown(&mut self) -> PersistenceResult<()> {
        let result = self.repository.save(self.roster.students());
        if let Err(ref e) = result {
            error!("saving roster on shutdown failed: {}", e);
            self.status_message = Some(StatusMessage::error(format!("Error saving data: {}", e)));
        }
        result
    }

    /// Adds a record and saves.
    pub fn add_student(&mut self, name: &str, roll_number: &str, grade: &str) -> bool {
        match self.roster.add(name, roll_number, grade) {
            Ok(()) => {
                info!("added student {:?} ({})", name.trim(), roll_number.trim());
                self.refresh_view();
                self.persist(format!("Added {}", name.trim()));
                true
            }
            Err(e) => {
                warn!("rejected student: {}", e);
                self.status_message = Some(StatusMessage::error(e.to_string()));
                false
            }
        }
    }

    /// Gives the add-student form focus. The draft from a cancelled form is kept.
    pub fn start_add(&mut self) {
        self.mode = AppMode::AddForm;
        self.status_message = None;
    }

    /// Submits the add form.
    ///
    /// On success the form is cleared and the table regains focus. A
    /// rejected record keeps the form open with its contents.
    pub fn submit_form(&mut self) {
        let name = self.form.name.value().to_string();
        let roll_number = self.form.roll_number.value().to_string();
        let grade = self.form.grade.value().to_string();

        if self.add_student(&name, &roll_number, &grade) {
            self.form.reset();
            self.mode = AppMode::Browse;
        }
    }

    /// Returns to the table, keeping the form draft.
    pub fn cancel_form(&mut self) {
        self.mode = AppMode::Browse;
    }

    /// Deletes the highlighted record and saves.
    pub fn delete_selected(&mut self) {
        let position = self.selected_position();
        match self.roster.delete_at(position) {
            Ok(student) => {
                info!("deleted student {:?} ({})", student.name(), student.roll_number());
                self.refresh_view();
                self.persist(format!("Deleted {}", student.name()));
            }
            Err(e) => {
                warn!("delete refused: {}", e);
                self.status_message = Some(StatusMessage::warning(e.to_string()));
            }
        }
    }

    /// Empties the roster and saves. There is no confirmation step.
    pub fn clear_all(&mut self) {
        let count = self.roster.len();
        self.roster.clear();
        info!("cleared {} students", count);
        self.selected = None;
        self.refresh_view();
        self.persist(format!("Cleared {} student{}", count, plural(count)));
    }

    /// Shows only records whose name matches `query`. The roster is untouched.
    pub fn apply_search(&mut self, query: &str) {
        self.filter = query.trim().to_string();
        self.reset_view();

        self.status_message = Some(if self.filter.is_empty() {
            StatusMessage::info(format!("Showing all {} students", self.roster.len()))
        } else if self.visible.is_empty() {
            StatusMessage::info(format!("No students found for '{}'", self.filter))
        } else {
            StatusMessage::info(format!(
                "{} of {} students match '{}'",
                self.visible.len(),
                self.roster.len(),
                self.filter
            ))
        });
    }

    /// Opens the search prompt, seeded with the active filter.
    pub fn start_search(&mut self) {
        self.mode = AppMode::Search;
        self.filter_before_search = self.filter.clone();
        self.search_input = TextInput::with_value(&self.filter);
        self.status_message = None;
    }

    /// Re-filters the table while the query is being typed.
    pub fn update_search(&mut self) {
        self.filter = self.search_input.value().trim().to_string();
        self.reset_view();
    }

    /// Keeps the typed query as the table filter.
    pub fn finish_search(&mut self) {
        let query = self.search_input.value().to_string();
        self.apply_search(&query);
        self.mode = AppMode::Browse;
    }

    /// Restores the filter that was active before the prompt opened.
    pub fn cancel_search(&mut self) {
        self.filter = std::mem::take(&mut self.filter_before_search);
        self.reset_view();
        self.mode = AppMode::Browse;
    }

    /// Shows every student again.
    pub fn clear_filter(&mut self) {
        if !self.filter.is_empty() {
            self.apply_search("");
        }
    }

    /// Opens the CSV export prompt with the last used file name.
    pub fn start_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.export_input = TextInput::with_value(&self.export_file.display().to_string());
        self.status_message = None;
    }

    /// Writes the roster to the file named in the export prompt.
    pub fn finish_export(&mut self) {
        let target = self.export_input.value().trim();
        let path = if target.is_empty() {
            self.export_file.clone()
        } else {
            PathBuf::from(target)
        };

        match CsvExporter::export_roster(self.roster.students(), &path) {
            Ok(()) => {
                self.status_message = Some(StatusMessage::info(format!("Exported to {}", path.display())));
                self.export_file = path;
            }
            Err(e) => {
                error!("CSV export to {} failed: {}", path.display(), e);
                self.status_message = Some(StatusMessage::error(format!("Export failed: {}", e)));
            }
        }

        self.export_input.clear();
        self.mode = AppMode::Browse;
    }

    /// Closes the export prompt without writing anything.
    pub fn cancel_export(&mut self) {
        self.export_input.clear();
        self.mode = AppMode::Browse;
    }

    /// Shows the help popup from the top.
    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    /// Hides the help popup.
    pub fn close_help(&mut self) {
        self.mode = AppMode::Browse;
    }

    /// Moves the highlight down one row, or onto the first row if none is highlighted.
    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Moves the highlight up one row, or onto the last row if none is highlighted.
    pub fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.visible.len() - 1,
        });
    }

    /// Roster position of the highlighted row, if any.
    pub fn selected_position(&self) -> Option<usize> {
        self.selected.and_then(|row| self.visible.get(row).copied())
    }

    /// Where the roster is saved, for display.
    pub fn data_location(&self) -> String {
        self.repository.location()
    }

    // Rows change identity when the filter changes, so the highlight goes.
    fn reset_view(&mut self) {
        self.selected = None;
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.visible = self.roster.matching_positions(&self.filter);
        self.selected = match self.selected {
            _ if self.visible.is_empty() => None,
            Some(i) => Some(i.min(self.visible.len() - 1)),
            None => None,
        };
    }

    // A failed save keeps the in-memory change; only the notification differs.
    fn persist(&mut self, done: String) {
        match self.repository.save(self.roster.students()) {
            Ok(()) => {
                self.status_message = Some(StatusMessage::info(done));
            }
            Err(e) => {
                error!("saving roster to {} failed: {}", self.repository.location(), e);
                self.status_message = Some(StatusMessage::error(format!("Error saving data: {}", e)));
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
