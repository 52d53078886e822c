use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "passage-quiz",
    version,
    about = "Read a passage, answer its questions, mark the words you did not know"
)]
pub struct Cli {
    /// Passage and questions (YAML, or JSON by extension). Omit for an empty quiz.
    #[arg(value_name = "payload")]
    pub payload: Option<PathBuf>,

    /// Start with the timer display hidden
    #[arg(long)]
    pub hide_timer: bool,

    /// Log file [default: <data dir>/passage-quiz.log]
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_optional() {
        let cli = Cli::try_parse_from(["passage-quiz"]).unwrap();
        assert!(cli.payload.is_none());
        assert!(!cli.hide_timer);

        let cli = Cli::try_parse_from(["passage-quiz", "quiz.yaml", "--hide-timer"]).unwrap();
        assert_eq!(cli.payload, Some(PathBuf::from("quiz.yaml")));
        assert!(cli.hide_timer);
    }
}
