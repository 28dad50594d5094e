// src/cli.rs

use clap::Parser;

/// Pick a text file, echo its contents, and print a line, word and character summary.
///
/// With no arguments a native file dialog opens in ./src (or the current
/// directory when there is no src directory). The file is printed as it is
/// read, followed by a short summary report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ask for the file on the terminal instead of opening a dialog.
    ///
    /// The path is read from stdin; a blank line cancels. This is also the
    /// fallback when no graphical display is available.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub headless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["file-inspector"]).unwrap();
        assert!(!cli.headless);
    }

    #[test]
    fn test_headless_flag() {
        let cli = Cli::try_parse_from(["file-inspector", "--headless"]).unwrap();
        assert!(cli.headless);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["file-inspector", "some.txt"]).is_err());
    }
}
