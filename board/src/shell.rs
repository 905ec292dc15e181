//! Line-oriented front end for the board.
//!
//! Each input line is one command. Rows are addressed by the number they were
//! painted with; the shell looks the number up on the current [`Screen`] and
//! sends the list position the view enumerated. A row that is not on screen is
//! a typing mistake and is reported back, never sent to the store.

use crate::error::TodoError;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::terminal::Painter;
use crate::types::{BoardState, TodoAction, TodoItem};
use crate::view::{Screen, ViewConfig, render};
use std::io::Write;
use thiserror::Error;
use todo_board_runtime::{Store, StoreError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// The store type the shell drives
pub type BoardStore = Store<BoardState, TodoAction, TodoEnvironment, TodoReducer>;

/// Help text listing every command
pub const HELP: &str = "\
commands:
  theme               switch light/dark
  form                open or close the add-note form
  title <text>        set the form title
  desc <text>         set the form description
  submit              add the form contents as a note
  filter              switch between all and completed notes
  toggle <row>        check or uncheck a note
  edit <row>          start editing a note
  set-title <text>    change the title being edited
  set-desc <text>     change the description being edited
  save                keep the edit
  cancel              drop the edit, or close the form
  delete <row>        delete a note
  dump                print all notes as JSON
  help                show this text
  quit                leave
";

/// Mistakes in a typed command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    /// A command that needs an argument got none
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// A row argument is not a positive number
    #[error("`{0}` is not a row number")]
    InvalidRow(String),

    /// No row with that number is on screen
    #[error("there is no row {0} on screen")]
    NoSuchRow(usize),

    /// An edit command was given while nothing is being edited
    #[error("no note is being edited")]
    NotEditing,

    /// A form command was given while the form is closed
    #[error("the add-note form is closed, type `form` to open it")]
    FormHidden,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch light/dark
    Theme,
    /// Open or close the form
    Form,
    /// Set the form title
    Title(String),
    /// Set the form description
    Desc(String),
    /// Submit the form
    Submit,
    /// Switch the filter
    Filter,
    /// Toggle completion of a row
    Toggle(usize),
    /// Start editing a row
    Edit(usize),
    /// Set the scratch title
    SetTitle(String),
    /// Set the scratch description
    SetDesc(String),
    /// Commit the edit
    Save,
    /// Cancel the edit or close the form
    Cancel,
    /// Delete a row
    Delete(usize),
    /// Print the list as JSON
    Dump,
    /// Print help
    Help,
    /// Leave
    Quit,
}

/// What the shell should do with a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send this action to the store
    Dispatch(TodoAction),
    /// Print the list as JSON
    Dump,
    /// Print help
    Help,
    /// Stop reading input
    Quit,
}

impl ShellCommand {
    /// Parses one input line; blank lines yield `None`
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands, missing arguments and
    /// malformed row numbers.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "theme" => Self::Theme,
            "form" | "add" => Self::Form,
            "title" => Self::Title(text("title", rest)?),
            "desc" => Self::Desc(text("desc", rest)?),
            "submit" => Self::Submit,
            "filter" => Self::Filter,
            "toggle" => Self::Toggle(row("toggle", rest)?),
            "edit" => Self::Edit(row("edit", rest)?),
            "set-title" => Self::SetTitle(text("set-title", rest)?),
            "set-desc" => Self::SetDesc(text("set-desc", rest)?),
            "save" => Self::Save,
            "cancel" => Self::Cancel,
            "delete" | "rm" => Self::Delete(row("delete", rest)?),
            "dump" => Self::Dump,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }

    /// Turns the command into an outcome against what is on screen
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the command refers to a row, edit or form
    /// that the screen does not show.
    pub fn resolve(self, screen: &Screen) -> Result<Outcome, CommandError> {
        let find = |number: usize| screen.row(number).ok_or(CommandError::NoSuchRow(number));
        let form_open = || screen.form.as_ref().ok_or(CommandError::FormHidden);
        let editing = || screen.editing_row().ok_or(CommandError::NotEditing);

        let action = match self {
            Self::Theme => TodoAction::ToggleDisplayMode,
            Self::Form => TodoAction::ToggleForm,
            Self::Title(title) => {
                form_open()?;
                TodoAction::SetDraftTitle { title }
            },
            Self::Desc(description) => {
                form_open()?;
                TodoAction::SetDraftDescription { description }
            },
            Self::Submit => form_open()?.submit_action(),
            Self::Filter => TodoAction::ToggleFilter,
            Self::Toggle(number) => find(number)?.toggle_action(),
            Self::Edit(number) => find(number)?.edit_action(),
            Self::SetTitle(title) => {
                editing()?;
                TodoAction::SetScratchTitle { title }
            },
            Self::SetDesc(description) => {
                editing()?;
                TodoAction::SetScratchDescription { description }
            },
            Self::Save => {
                editing()?;
                TodoAction::CommitEdit
            },
            Self::Cancel => match (screen.editing_row(), &screen.form) {
                (None, Some(form)) => form.cancel_action(),
                _ => TodoAction::CancelEdit,
            },
            Self::Delete(number) => find(number)?.delete_action(),
            Self::Dump => return Ok(Outcome::Dump),
            Self::Help => return Ok(Outcome::Help),
            Self::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Dispatch(action))
    }
}

fn text(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    Ok(rest.to_string())
}

fn row(command: &'static str, rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    match rest.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(CommandError::InvalidRow(rest.to_string())),
    }
}

/// Failures that end a shell session
#[derive(Error, Debug)]
pub enum ShellError {
    /// The store refused an action the shell produced
    #[error(transparent)]
    Store(#[from] StoreError<TodoError>),

    /// Reading input or painting failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The list could not be encoded for `dump`
    #[error("failed to encode notes: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs the shell until input ends or `quit`
///
/// Command mistakes are written to the output and the session continues. A
/// store error ends the session.
///
/// # Errors
///
/// Returns [`ShellError`] if the store rejects an action or I/O fails.
pub async fn run<R, W>(
    store: &BoardStore,
    view: &ViewConfig,
    input: R,
    painter: &mut Painter<W>,
) -> Result<(), ShellError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut screen = store.state(|state| render(state, view)).await;
    painter.paint(&screen)?;

    while let Some(line) = lines.next_line().await? {
        let outcome = match ShellCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => command.resolve(&screen),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(Outcome::Dispatch(action)) => {
                tracing::debug!(action = action.name(), command = action.is_command(), "Dispatching");
                store.send(action).await?;
            },
            Ok(Outcome::Dump) => {
                let items: Vec<TodoItem> = store.state(|state| state.todos.items().to_vec()).await;
                writeln!(painter.get_mut(), "{}", serde_json::to_string_pretty(&items)?)?;
                continue;
            },
            Ok(Outcome::Help) => {
                write!(painter.get_mut(), "{HELP}")?;
                continue;
            },
            Ok(Outcome::Quit) => break,
            Err(error) => {
                writeln!(painter.get_mut(), "error: {error}")?;
                continue;
            },
        }

        screen = store.state(|state| render(state, view)).await;
        writeln!(painter.get_mut())?;
        painter.paint(&screen)?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use crate::types::ViewFilter;
    use todo_board_core::environment::Clock;
    use todo_board_testing::test_clock;

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::parse(line).unwrap().unwrap()
    }

    fn screen_for(state: &BoardState) -> Screen {
        render(state, &ViewConfig::default().with_local_time(false))
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse("theme"), ShellCommand::Theme);
        assert_eq!(parse("form"), ShellCommand::Form);
        assert_eq!(parse("add"), ShellCommand::Form);
        assert_eq!(parse("title Buy milk"), ShellCommand::Title("Buy milk".to_string()));
        assert_eq!(parse("desc  2%  "), ShellCommand::Desc("2%".to_string()));
        assert_eq!(parse("submit"), ShellCommand::Submit);
        assert_eq!(parse("filter"), ShellCommand::Filter);
        assert_eq!(parse("toggle 2"), ShellCommand::Toggle(2));
        assert_eq!(parse("edit 1"), ShellCommand::Edit(1));
        assert_eq!(parse("set-title New"), ShellCommand::SetTitle("New".to_string()));
        assert_eq!(parse("set-desc More text"), ShellCommand::SetDesc("More text".to_string()));
        assert_eq!(parse("save"), ShellCommand::Save);
        assert_eq!(parse("cancel"), ShellCommand::Cancel);
        assert_eq!(parse("delete 3"), ShellCommand::Delete(3));
        assert_eq!(parse("rm 3"), ShellCommand::Delete(3));
        assert_eq!(parse("dump"), ShellCommand::Dump);
        assert_eq!(parse("HELP"), ShellCommand::Help);
        assert_eq!(parse("quit"), ShellCommand::Quit);
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(ShellCommand::parse("   "), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            ShellCommand::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("title"),
            Err(CommandError::MissingArgument("title"))
        );
        assert_eq!(
            ShellCommand::parse("toggle"),
            Err(CommandError::MissingArgument("toggle"))
        );
        assert_eq!(
            ShellCommand::parse("toggle zero"),
            Err(CommandError::InvalidRow("zero".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("delete 0"),
            Err(CommandError::InvalidRow("0".to_string()))
        );
    }

    #[test]
    fn rows_resolve_to_list_positions() {
        let mut state = BoardState::new();
        state.todos.add("a".to_string(), "a".to_string());
        state.todos.add("b".to_string(), "b".to_string());
        state.todos.toggle_complete(1, test_clock().now()).unwrap();
        state.session.filter = ViewFilter::CompletedOnly;
        let screen = screen_for(&state);

        assert_eq!(
            ShellCommand::Toggle(1).resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::ToggleComplete { position: 1 }))
        );
        assert_eq!(
            ShellCommand::Delete(2).resolve(&screen),
            Err(CommandError::NoSuchRow(2))
        );
    }

    #[test]
    fn form_commands_need_open_form() {
        let mut state = BoardState::new();
        let screen = screen_for(&state);
        assert_eq!(ShellCommand::Submit.resolve(&screen), Err(CommandError::FormHidden));
        assert_eq!(
            ShellCommand::Title("t".to_string()).resolve(&screen),
            Err(CommandError::FormHidden)
        );

        state.session.form_visible = true;
        let screen = screen_for(&state);
        assert_eq!(
            ShellCommand::Submit.resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::SubmitForm))
        );
        assert_eq!(
            ShellCommand::Cancel.resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::ToggleForm))
        );
    }

    #[test]
    fn edit_commands_need_open_edit() {
        let mut state = BoardState::new();
        state.todos.add("a".to_string(), "a".to_string());
        let screen = screen_for(&state);
        assert_eq!(ShellCommand::Save.resolve(&screen), Err(CommandError::NotEditing));
        assert_eq!(
            ShellCommand::SetTitle("x".to_string()).resolve(&screen),
            Err(CommandError::NotEditing)
        );
        assert_eq!(
            ShellCommand::Cancel.resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::CancelEdit))
        );

        state.todos.begin_edit(0).unwrap();
        state.session.form_visible = true;
        let screen = screen_for(&state);
        assert_eq!(
            ShellCommand::Save.resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::CommitEdit))
        );
        assert_eq!(
            ShellCommand::Cancel.resolve(&screen),
            Ok(Outcome::Dispatch(TodoAction::CancelEdit))
        );
    }

    #[test]
    fn non_dispatch_outcomes() {
        let screen = screen_for(&BoardState::new());
        assert_eq!(ShellCommand::Dump.resolve(&screen), Ok(Outcome::Dump));
        assert_eq!(ShellCommand::Help.resolve(&screen), Ok(Outcome::Help));
        assert_eq!(ShellCommand::Quit.resolve(&screen), Ok(Outcome::Quit));
    }
}
