use clap::Parser;

/// Terminal front-end: choose an art medium, get materials advice.
#[derive(Parser, Debug)]
#[command(
    name = "art-helper",
    about = "Get practical materials advice for an art medium",
    long_about = None
)]
pub struct Args {
    /// Run using a canned mock response (no network)
    #[arg(long)]
    pub mock: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_real_backend() {
        let args = Args::try_parse_from(["art-helper"]).unwrap();
        assert!(!args.mock);
    }

    #[test]
    fn mock_flag_is_recognised() {
        let args = Args::try_parse_from(["art-helper", "--mock"]).unwrap();
        assert!(args.mock);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["art-helper", "--verbose"]).is_err());
    }
}
