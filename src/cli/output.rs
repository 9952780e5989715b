//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TransformerArgs};
use crate::error::{Result, TransformError};
use crate::response::MatchDetails;

/// Result structure for highlight extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightResult {
    pub text: String,
    pub spans: Vec<MatchDetails>,
}

/// Result structure for query term tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub terms: Vec<String>,
}

/// Write an already encoded public response to standard output.
pub fn output_bytes(bytes: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    writeln!(stdout)?;
    Ok(())
}

/// Output a highlight result in the selected format.
pub fn output_highlight(result: &HighlightResult, args: &TransformerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("{}", result.text);
            if args.verbosity() > 0 {
                println!();
                println!("Matches: {}", result.spans.len());
            }
            for span in &result.spans {
                println!("  {}..{}", span.start, span.end);
            }
            Ok(())
        }
    }
}

/// Output query terms in the selected format.
pub fn output_terms(result: &TermsResult, args: &TransformerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            for term in &result.terms {
                println!("{term}");
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TransformerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
    .map_err(TransformError::encode)?;

    println!("{json}");
    Ok(())
}
