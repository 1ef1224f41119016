// SPDX-License-Identifier: MPL-2.0
use company_analyzer::app::{self, Flags};
use company_analyzer::ui::theming::ThemeMode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const HELP: &str = "\
企業情報アナライザー

USAGE:
  company_analyzer [OPTIONS] [URL]

ARGS:
  [URL]                   Company website to prefill in the input field

OPTIONS:
  --endpoint <URL>        Analysis service base URL (default: http://localhost:8000)
  --config-dir <DIR>      Directory holding settings.toml
  --theme <MODE>          light, dark or system
  --no-health-check       Skip the startup reachability probe
  -h, --help              Print this help
";

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "company_analyzer=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let endpoint = args.opt_value_from_str("--endpoint")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let theme = args.opt_value_from_str::<_, ThemeMode>("--theme")?;
    let no_health_check = args.contains("--no-health-check");

    let mut free = args.finish().into_iter();
    let url = free
        .next()
        .map(|arg| arg.into_string().map_err(|_| pico_args::Error::NonUtf8Argument))
        .transpose()?;

    // Unknown flags and extra positionals are reported together.
    let unused: Vec<String> = url
        .iter()
        .filter(|url| url.starts_with('-'))
        .cloned()
        .chain(free.map(|arg| arg.to_string_lossy().into_owned()))
        .collect();
    if !unused.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(unused));
    }

    Ok(Flags {
        endpoint,
        config_dir,
        theme,
        no_health_check,
        url,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_tracing();

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn positional_url_and_flags_are_read() {
        let flags = parse(&[
            "--endpoint",
            "http://10.0.0.5:9000",
            "--theme",
            "dark",
            "--no-health-check",
            "https://example.com",
        ])
        .expect("valid arguments");

        assert_eq!(flags.endpoint.as_deref(), Some("http://10.0.0.5:9000"));
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert!(flags.no_health_check);
        assert_eq!(flags.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn no_arguments_yield_defaults() {
        let flags = parse(&[]).expect("empty is valid");
        assert!(flags.url.is_none());
        assert!(flags.endpoint.is_none());
        assert!(!flags.no_health_check);
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        let error = parse(&["--no-healthcheck"]).unwrap_err();
        match error {
            pico_args::Error::UnusedArgsLeft(left) => assert_eq!(left, vec!["--no-healthcheck"]),
            other => panic!("expected UnusedArgsLeft, got {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_after_url_is_rejected() {
        let error = parse(&["https://example.com", "-v"]).unwrap_err();
        assert!(matches!(error, pico_args::Error::UnusedArgsLeft(left) if left == vec!["-v"]));
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(parse(&["https://a.example", "https://b.example"]).is_err());
    }

    #[test]
    fn invalid_theme_is_rejected() {
        assert!(parse(&["--theme", "sepia"]).is_err());
    }
}
