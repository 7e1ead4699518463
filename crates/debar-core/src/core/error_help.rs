//! Human-oriented hints attached to errors printed by the CLI.

use super::error::DebarError;

/// Suggests what the user can do about an error.
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for DebarError {
    fn help(&self) -> Option<String> {
        match self {
            DebarError::NotFound(name) => Some(format!(
                "'{}' is not in the index or is listed under `exclude` in config.yaml. \
                 Run `debar search {}` to look for similar names, or `debar update` to refresh the index.",
                name, name
            )),
            DebarError::CorruptIndex { .. } => {
                Some("Run `debar update` to rebuild the index.".to_string())
            }
            DebarError::MetadataUnavailable { .. } => Some(
                "The index no longer matches the downloaded Packages files. Run `debar update`."
                    .to_string(),
            ),
            DebarError::Rebuild { .. } => Some(
                "The index is only partially rebuilt. Check the repository settings in config.yaml and run `debar update` again."
                    .to_string(),
            ),
            DebarError::Transfer { .. } | DebarError::Http(_) => {
                Some("Check your network connection and the mirror URL in config.yaml.".to_string())
            }
            DebarError::OversizedKey { .. } => Some(
                "The repository contains a name longer than the index supports; exclude that component."
                    .to_string(),
            ),
            DebarError::Config(_) | DebarError::Yaml(_) => {
                Some("Fix config.yaml or run `debar init` in an empty directory.".to_string())
            }
            DebarError::Io(_) | DebarError::Path(_) => None,
        }
    }
}

/// Format an error for display, followed by a hint when one is known.
pub fn format_error_with_help(error: &DebarError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n  Help: {}", error, help),
        None => format!("Error: {}", error),
    }
}
