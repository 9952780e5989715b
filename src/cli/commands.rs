//! Command implementations for the search-transformer CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{HighlightMarkers, TransformerConfig};
use crate::error::Result;
use crate::highlight::MatchExtractor;
use crate::transform::Transformer;
use crate::transform::suggestion::build_additional_suggestions;

/// Execute a CLI command.
pub fn execute_command(args: TransformerArgs) -> Result<()> {
    match &args.command {
        Command::Transform(transform_args) => transform_response(transform_args, &args),
        Command::Highlight(highlight_args) => extract_highlight(highlight_args, &args),
        Command::Terms(terms_args) => show_terms(terms_args, &args),
    }
}

/// Transform a backend response file.
fn transform_response(args: &TransformArgs, cli_args: &TransformerArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            TransformerConfig::from_json_file(path)?
        }
        None => TransformerConfig::default(),
    };
    if cli_args.pretty {
        config = config.pretty(true);
    }
    if args.no_fallback {
        config = config.fallback_suggestions(false);
    }

    let raw = read_payload(&args.response_file)?;
    debug!("Read {} bytes of backend response", raw.len());

    let transformer = Transformer::with_config(config)?;
    let output = transformer.transform(&raw, &args.query)?;

    output_bytes(&output)
}

/// Extract spans from one fragment.
fn extract_highlight(args: &HighlightArgs, cli_args: &TransformerArgs) -> Result<()> {
    let markers = HighlightMarkers::new(args.start_tag.as_str(), args.end_tag.as_str());
    markers.validate()?;

    let extracted = MatchExtractor::new(markers).extract(&args.fragment);

    output_highlight(
        &HighlightResult {
            text: extracted.text,
            spans: extracted.spans,
        },
        cli_args,
    )
}

/// Show fallback terms for a query.
fn show_terms(args: &TermsArgs, cli_args: &TransformerArgs) -> Result<()> {
    output_terms(
        &TermsResult {
            terms: build_additional_suggestions(&args.query),
        },
        cli_args,
    )
}

fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(path)?)
    }
}
