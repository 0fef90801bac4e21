use crate::input::{parse_assignment, Assignment};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "longview",
    about = "Extract named values from text with template patterns",
    version
)]
pub struct Cli {
    /// Template with {name} placeholders, * and + wildcards
    pub template: String,

    /// Subjects to match; read one per line from --file or stdin when omitted
    pub subjects: Vec<String>,

    /// Validator for a placeholder, as NAME=REGEX (repeatable)
    #[arg(short = 'r', long = "validator", value_name = "NAME=REGEX", value_parser = parse_assignment)]
    pub validators: Vec<Assignment>,

    /// Default value for a placeholder, as NAME=VALUE (repeatable)
    #[arg(short = 'd', long = "default", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub defaults: Vec<Assignment>,

    /// Read subjects from a file, one per line ("-" for stdin)
    #[arg(short, long, conflicts_with = "subjects")]
    pub file: Option<PathBuf>,

    /// Print one JSON object per subject
    #[arg(long)]
    pub json: bool,

    /// Print the compiled expression and exit
    #[arg(long)]
    pub show_regex: bool,

    /// Print nothing; only set the exit status
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "longview",
            "#{foo}#",
            "#1#",
            "#2#",
            "-r",
            r"foo=\d+",
            "--default",
            "foo=0",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.template, "#{foo}#");
        assert_eq!(cli.subjects, vec!["#1#", "#2#"]);
        assert_eq!(cli.validators[0].name, "foo");
        assert_eq!(cli.validators[0].value, r"\d+");
        assert_eq!(cli.defaults[0].value, "0");
        assert!(cli.json);
    }

    #[test]
    fn test_bad_assignment_is_rejected() {
        assert!(Cli::try_parse_from(["longview", "{foo}", "-d", "foo"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_subjects() {
        assert!(Cli::try_parse_from(["longview", "{foo}", "x", "-f", "subjects.txt"]).is_err());
    }
}
