//! CLI help: command names for logging and the interactive help text.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "list", "browse").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Filters { .. } => "filters",
        Commands::Browse => "browse",
    }
}

/// Help shown inside `prodtable browse`.
pub fn browse_help() -> &'static str {
    "Commands:
  user <name>      show only products of one user
  user | users     show products of all users
  cat <title>      toggle a category filter
  cats             clear the category filter
  q <text>         search product names (also: search <text>)
  clear            clear the search text
  sort <column>    sort by id, product, category or user; again to reverse
  reset            clear search, user and category filters
  filters          show the filter panel
  help             show this help
  quit             leave (also: exit)"
}
