use std::{
    error::Error,
    io::{self, BufRead, BufWriter, Write},
    process::ExitCode,
    str::FromStr,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use unicode_confusables::{
    Form, detect_confusables_bytes, normalize::ParseFormError, normalize_confusables,
    normalize_unicode, utf8::validate_utf8,
};

#[derive(Parser, Debug)]
#[command(
    name = "confusables",
    version,
    about = "Normalizes Unicode confusable characters from stdin to stdout.",
    after_help = "Examples:\n  \
        echo 'Hello Wοrld' | confusables\n  \
        echo 'café' | confusables --normalize nfd\n  \
        echo 'ﬁle' | confusables -n nfkc\n  \
        echo 'suspicious text' | confusables --check"
)]
struct Cli {
    /// Only report whether each line contains confusables
    /// (exit code 0 = clean, 1 = confusables found)
    #[arg(short, long)]
    check: bool,

    /// Unicode normalization applied before confusables normalization:
    /// nfc, nfd, nfkc, nfkd or none
    #[arg(short, long, value_name = "TYPE", default_value = "none")]
    normalize: Normalization,

    /// Keep zero-width characters when normalizing
    #[arg(long)]
    keep_zero_width: bool,
}

#[derive(Debug, Clone, Copy)]
struct Normalization(Option<Form>);

impl FromStr for Normalization {
    type Err = ParseFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Normalization(None));
        }
        s.parse().map(|form| Normalization(Some(form)))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "starting");

    let result = run(&cli, io::stdin().lock(), BufWriter::new(io::stdout().lock()));
    if let Err(e) = &result {
        eprintln!("error: {e}");
    }
    ExitCode::from(exit_status(&result))
}

type RunResult = Result<bool, Box<dyn Error + Send + Sync>>;

/// 0 when clean, 1 when `--check` found confusables, 2 on any error.
fn exit_status(result: &RunResult) -> u8 {
    match result {
        Ok(false) => 0,
        Ok(true) => 1,
        Err(_) => 2,
    }
}

/// Processes `input` line by line into `out`. Returns `true` if `--check`
/// found any confusable character.
fn run(cli: &Cli, input: impl BufRead, mut out: impl Write) -> RunResult {
    let mut found_any = false;

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        let line_no = index + 1;

        if cli.check {
            let found =
                detect_confusables_bytes(&line).map_err(|e| format!("line {line_no}: {e}"))?;
            if found.is_empty() {
                writeln!(out, "CLEAN")?;
            } else {
                found_any = true;
                let mut found: Vec<String> = found.into_iter().collect();
                found.sort_unstable();
                let listed: Vec<String> = found.iter().map(|c| format!("'{c}'")).collect();
                writeln!(out, "CONFUSABLES_DETECTED: {}", listed.join(", "))?;
            }
            continue;
        }

        let text = validate_utf8(&line).map_err(|e| format!("line {line_no}: {e}"))?;
        let text = match cli.normalize.0 {
            Some(form) => normalize_unicode(text, form, !cli.keep_zero_width),
            None => text.into(),
        };
        writeln!(out, "{}", normalize_confusables(&text))?;
    }

    out.flush()?;
    Ok(found_any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["confusables", "-c"]).unwrap();
        assert!(cli.check);
        assert!(cli.normalize.0.is_none());
        assert!(!cli.keep_zero_width);

        let cli = Cli::try_parse_from(["confusables", "--normalize", "NFKC", "--keep-zero-width"])
            .unwrap();
        assert_eq!(cli.normalize.0, Some(Form::Nfkc));
        assert!(cli.keep_zero_width);

        let cli = Cli::try_parse_from(["confusables", "-n", "none"]).unwrap();
        assert!(cli.normalize.0.is_none());
    }

    #[test]
    fn rejects_unknown_form() {
        assert!(Cli::try_parse_from(["confusables", "-n", "nfx"]).is_err());
        assert!(Cli::try_parse_from(["confusables", "--bogus"]).is_err());
    }

    fn run_on(args: &[&str], input: &[u8]) -> (RunResult, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(&cli, input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_mode_reports_each_line() {
        let (result, out) = run_on(
            &["confusables", "--check"],
            "hello\np\u{0430}yp\u{0430}l\n\u{0397}ello W\u{03BF}rld\n".as_bytes(),
        );
        assert_eq!(
            out,
            "CLEAN\nCONFUSABLES_DETECTED: '\u{0430}'\nCONFUSABLES_DETECTED: '\u{0397}', '\u{03BF}'\n"
        );
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn check_mode_all_clean_exits_zero() {
        let (result, out) = run_on(&["confusables", "-c"], b"hello\nworld\n");
        assert_eq!(out, "CLEAN\nCLEAN\n");
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn invalid_utf8_exits_two() {
        let (result, out) = run_on(&["confusables", "-c"], b"ok\n\xFFbad\n");
        assert_eq!(out, "CLEAN\n");
        let err = result.as_ref().unwrap_err().to_string();
        assert!(err.starts_with("line 2: input is not valid UTF-8"), "{err}");
        assert_eq!(exit_status(&result), 2);

        let (result, _) = run_on(&["confusables"], b"\xC3");
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn default_mode_folds_confusables_only() {
        let (result, out) = run_on(
            &["confusables"],
            "p\u{0430}yp\u{0430}l\ncafe\u{0301}\npay\u{200B}pal\n".as_bytes(),
        );
        assert_eq!(out, "paypal\ncafe\u{0301}\npay\u{200B}pal\n");
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn normalize_runs_before_confusables() {
        let input = "cafe\u{0301}\npay\u{200B}pal\n\u{0430}\u{0301}\n".as_bytes();

        let (_, out) = run_on(&["confusables", "-n", "nfc"], input);
        assert_eq!(out, "café\npaypal\na\u{0301}\n");

        let (_, out) = run_on(&["confusables", "-n", "nfc", "--keep-zero-width"], input);
        assert_eq!(out, "café\npay\u{200B}pal\na\u{0301}\n");

        let (_, out) = run_on(&["confusables", "-n", "nfd"], "ﬁle café\n".as_bytes());
        assert_eq!(out, "file cafe\u{0301}\n");
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
