use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codecmap::cli::{self, Commands};
use codecmap::model::{AudioEncoder, Mixdown, OutputFormat};
use codecmap::normalize::{self, ParseLabelError};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::parse();

    match &cli.command {
        Commands::Audio { labels } => emit(
            labels,
            cli.json,
            cli.strict,
            normalize::FALLBACK_AUDIO_ENCODER.short_name(),
            |label| {
                label
                    .parse::<AudioEncoder>()
                    .map(normalize::audio_encoder_token)
            },
        ),
        Commands::Mixdown { labels } => emit(
            labels,
            cli.json,
            cli.strict,
            normalize::FALLBACK_MIXDOWN.short_name(),
            |label| label.parse::<Mixdown>().map(|m| m.short_name()),
        ),
        Commands::Container { labels } => emit(
            labels,
            cli.json,
            cli.strict,
            normalize::output_format_token(normalize::FALLBACK_OUTPUT_FORMAT),
            |label| {
                label
                    .parse::<OutputFormat>()
                    .map(normalize::output_format_token)
            },
        ),
    }
}

/// Resolve each label and print its pipeline token. Without `--strict`,
/// unrecognized labels substitute the domain default, matching what the
/// library resolvers do for legacy callers.
fn emit(
    labels: &[String],
    json: bool,
    strict: bool,
    fallback: &'static str,
    resolve: impl Fn(&str) -> Result<&'static str, ParseLabelError>,
) -> Result<()> {
    for label in labels {
        let token = match resolve(label) {
            Ok(token) => token,
            Err(err) if strict => {
                return Err(
                    anyhow::Error::new(err).context(format!("cannot resolve label {label:?}"))
                );
            }
            Err(_) => {
                debug!(label = %label, token = fallback, "unrecognized label, substituting default");
                fallback
            }
        };

        if json {
            println!("{}", serde_json::json!({ "label": label, "token": token }));
        } else {
            println!("{token}");
        }
    }

    Ok(())
}
