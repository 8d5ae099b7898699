//! One full terminal interaction: menu, request, printed results.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use art_helper_core::config::{Config, mask_key};
use art_helper_core::mock::CannedCompletion;
use art_helper_core::session::submit;
use art_helper_openai::OpenAiBackendBuilder;

use crate::menu::choose_medium;

/// Drive the interaction over the given streams and print the results.
///
/// Returns an error when the request settles with one; the caller decides
/// how to report it.  Mock runs never fail beyond I/O.
pub async fn run(
    mock: bool,
    config: &Config,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let medium = choose_medium(input, output)?;

    writeln!(output)?;
    writeln!(output, "Requesting suggestions for: {medium}")?;
    writeln!(output)?;

    if !mock && config.debug && config.api_key.is_some() {
        print_diagnostics(config, output)?;
    }

    let state = if mock {
        submit(Some(medium), || Ok(CannedCompletion::new())).await
    } else {
        submit(Some(medium), || {
            OpenAiBackendBuilder::from_config(config).build()
        })
        .await
    };

    if !state.error.is_empty() {
        anyhow::bail!("{}", state.error);
    }

    writeln!(output, "=== Art Helper — Results ===")?;
    writeln!(output)?;
    writeln!(output, "{}", state.response)?;
    writeln!(output)?;
    writeln!(output, "=== End ===")?;

    Ok(())
}

/// The `DEBUG_OPENAI` lines.  Only printed when a key is configured; a
/// missing key fails the run before any diagnostic output.
fn print_diagnostics(config: &Config, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "[debug] API base: {}", config.api_base)?;
    writeln!(output, "[debug] model: {}", config.model)?;
    writeln!(
        output,
        "[debug] using api key: {}",
        mask_key(config.api_key.as_deref())
    )
}
