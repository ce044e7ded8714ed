//! Interactive browse session: each typed command becomes one view transition
//! followed by a fresh render of the table.

use crate::cli::help::browse_help;
use crate::cli::presentation::{
    format_filters_text, format_products_text, format_view_summary, TableOptions,
};
use crate::dataset::Dataset;
use crate::error::ApiError;
use crate::join::EnrichedProduct;
use crate::views::{compose, SortColumn, ViewAction, ViewConfig, ViewReducer};
use tracing::debug;

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Action(ViewAction),
    ShowFilters,
    Help,
    Render,
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_end()),
        None => (line.trim_end(), ""),
    };

    let command = match (word.to_ascii_lowercase().as_str(), rest) {
        ("", _) => BrowseCommand::Render,
        ("user" | "users", "") => BrowseCommand::Action(ViewAction::SelectAllUsers),
        ("user", name) => BrowseCommand::Action(ViewAction::SelectUser(name.to_string())),
        ("cats", _) => BrowseCommand::Action(ViewAction::SelectAllCategories),
        ("cat", "") => return Err("Usage: cat <title>".to_string()),
        ("cat", title) => BrowseCommand::Action(ViewAction::ToggleCategory(title.to_string())),
        ("q" | "search", "") => BrowseCommand::Action(ViewAction::ClearQuery),
        ("q" | "search", text) => BrowseCommand::Action(ViewAction::SetQuery(text.to_string())),
        ("clear", _) => BrowseCommand::Action(ViewAction::ClearQuery),
        ("sort", key) => match SortColumn::parse(key) {
            SortColumn::None => {
                return Err(format!(
                    "Unknown sort column '{}' (expected id, product, category or user)",
                    key
                ))
            }
            column => BrowseCommand::Action(ViewAction::ActivateSort(column)),
        },
        ("reset", _) => BrowseCommand::Action(ViewAction::ResetFilters),
        ("filters", _) => BrowseCommand::ShowFilters,
        ("help" | "?", _) => BrowseCommand::Help,
        ("quit" | "exit", _) => BrowseCommand::Quit,
        (other, _) => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(command)
}

/// Outcome of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(String),
    Quit,
}

/// State of an interactive session over an already joined product list
pub struct BrowseSession<'a> {
    dataset: &'a Dataset,
    products: &'a [EnrichedProduct],
    reducer: ViewReducer,
    options: TableOptions,
    view: ViewConfig,
}

impl<'a> BrowseSession<'a> {
    pub fn new(
        dataset: &'a Dataset,
        products: &'a [EnrichedProduct],
        reducer: ViewReducer,
        options: TableOptions,
        initial: ViewConfig,
    ) -> Self {
        Self {
            dataset,
            products,
            reducer,
            options,
            view: initial,
        }
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Summary line plus the table for the current view
    pub fn render(&self) -> String {
        let rows = compose(self.products, &self.view);
        format!(
            "{}\n{}",
            format_view_summary(&self.view, rows.len(), self.products.len()),
            format_products_text(&rows, self.view.sort, self.options)
        )
    }

    /// Handle one line of input. Parse errors are reported as output, not failures.
    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_command(line) {
            Ok(BrowseCommand::Action(action)) => {
                debug!(?action, "Browse action");
                self.view = self.reducer.reduce(&self.view, action);
                Step::Output(self.render())
            }
            Ok(BrowseCommand::ShowFilters) => Step::Output(format_filters_text(
                &self.dataset.users,
                &self.dataset.categories,
                &self.view,
                self.options.color,
            )),
            Ok(BrowseCommand::Help) => Step::Output(browse_help().to_string()),
            Ok(BrowseCommand::Render) => Step::Output(self.render()),
            Ok(BrowseCommand::Quit) => Step::Quit,
            Err(message) => Step::Output(message),
        }
    }

    /// Run the prompt loop on the terminal until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), ApiError> {
        use dialoguer::Input;

        println!("{}", self.render());
        println!("Type 'help' for commands.");
        loop {
            let line = match Input::<String>::new()
                .with_prompt("prodtable")
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(e) => match prompt_failure(e) {
                    Some(err) => return Err(err),
                    None => {
                        debug!("Input closed");
                        break;
                    }
                },
            };
            match self.handle_line(&line) {
                Step::Output(text) => println!("{}", text),
                Step::Quit => break,
            }
        }
        Ok(())
    }
}

/// Map a prompt error to a failure. End of input and interrupts end the
/// session cleanly and yield `None`.
fn prompt_failure(err: dialoguer::Error) -> Option<ApiError> {
    match err {
        dialoguer::Error::IO(ref io)
            if matches!(
                io.kind(),
                std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted
            ) =>
        {
            None
        }
        other => Some(ApiError::InvalidInput(format!(
            "Failed to get user input: {}",
            other
        ))),
    }
}
