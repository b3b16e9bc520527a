pub mod asc;
pub mod cli;
pub mod config;
pub mod deepl;
pub mod locale;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod util;

pub use asc::{AppStoreConnectClient, Credentials};
pub use config::{ConfigError, Settings};
pub use deepl::DeeplClient;
pub use locale::{CHANGELOG_LOCALES, DESCRIPTION_LOCALES, TargetLanguage, lookup};
pub use pipeline::{Pipeline, PipelineKind, RunOutcome, RunReport, StopReason};
pub use prompt::{LinePrompter, Prompter, TerminalPrompter, parse_selection};
pub use util::{attribute, is_resource_type, resource_id, resource_name};
