mod error;
mod output;
mod parse;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub use crate::error::WizardError;
pub use crate::output::{collect_warnings, output_bird, GenerationConfig, FUNCTION_NAME};
pub use crate::parse::{parse_aspa_document, read_aspa_records, strip_as_prefix, AuthorizationRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
pub type Warnings = Vec<String>;

/// Reads the ASPA export at `input` and renders the BIRD2 validation function.
pub fn generate_bird(input: impl AsRef<Path>, config: &GenerationConfig) -> Result<(String, Warnings), WizardError> {
    let (records, mut warnings) = read_aspa_records(input.as_ref())?;
    info!("loaded {} ASPA records from {}", records.len(), input.as_ref().display());
    warnings.append(&mut collect_warnings(&records));
    Ok((output_bird(&records, config), warnings))
}

/// Writes the generated text to `destination`, or to stdout followed by a newline.
pub fn write_output(output: &str, destination: Option<&Path>) -> Result<(), WizardError> {
    match destination {
        Some(path) => {
            fs::write(path, output).map_err(|source| WizardError::Write {
                path: path.to_owned(),
                source,
            })?;
            info!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            // A closed stdout (e.g. `| head`) is not worth failing over.
            writeln!(io::stdout(), "{}", output).ok();
        }
    }
    Ok(())
}

/// Reports warnings and errors on stdout and writes the output. Returns the process exit code.
pub fn check_and_output(result: Result<(String, Warnings), WizardError>, destination: Option<&Path>, verbose: bool) -> i32 {
    let (output, warnings) = match result {
        Ok(v) => v,
        Err(err) => {
            println!("(error) {}", err);
            return err.exit_code();
        }
    };
    if verbose {
        for warning in warnings {
            println!("(warn) {}", warning);
        }
    }
    match write_output(&output, destination) {
        Ok(()) => 0,
        Err(err) => {
            println!("(error) {}", err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_from_file_and_merges_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aspa.json");
        fs::write(&input, r#"{"aspas":[{"customer":"AS1","providers":[]},{"customer":"AS2"}]}"#).unwrap();

        let (output, warnings) = generate_bird(&input, &GenerationConfig { strict: true }).unwrap();
        assert!(output.starts_with("function is_aspa_valid () {\n"));
        assert!(output.ends_with("   return false;\n}\n"));
        // missing `providers` from the reader, then one empty-provider warning per record
        assert_eq!(warnings.len(), 3, "{:?}", warnings);
    }

    #[test]
    fn writes_output_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("aspa.conf");
        let output = output_bird(&[], &GenerationConfig::default());

        assert_eq!(check_and_output(Ok((output.clone(), Vec::new())), Some(&destination), false), 0);
        assert_eq!(fs::read_to_string(&destination).unwrap(), output);
    }

    #[test]
    fn write_failure_has_its_own_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("no/such/dir/aspa.conf");
        let code = check_and_output(Ok(("x".to_owned(), Vec::new())), Some(&destination), false);
        assert_eq!(code, 4);
        assert!(!destination.exists());
    }

    #[test]
    fn errors_produce_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aspa.json");
        let destination = dir.path().join("aspa.conf");
        fs::write(&input, "{}").unwrap();

        let code = check_and_output(generate_bird(&input, &GenerationConfig::default()), Some(&destination), true);
        assert_eq!(code, 3);
        assert!(!destination.exists());
    }
}
