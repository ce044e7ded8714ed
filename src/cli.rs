//! CLI domain: parse, route, help, output, presentation and the interactive session.
//! No domain logic; the route table dispatches to the view composer.

mod browse;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use browse::{parse_command, BrowseCommand, BrowseSession, Step};
pub use help::{browse_help, command_name};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_filters_json, format_filters_text, format_products_json, format_products_text,
    format_view_summary, TableOptions, NO_MATCHING_MESSAGE,
};
pub use route::RunContext;
