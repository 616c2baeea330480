use std::io::{self, Write};

use colored::Colorize;
use questionnaire_engine::{HistoryEntry, Question, QuestionGraph};

pub const UNRESOLVED_NOTICE: &str = "認識できませんでした。もう一度試してください。";
pub const COMPLETED_NOTICE: &str = "問診が完了しました。";
pub const VOICE_DISABLED_NOTICE: &str = "音声入力は無効です。";
pub const HISTORY_HEADING: &str = "問診履歴";

pub fn question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", question.text().bold())?;
    let labels: Vec<String> = question
        .labels()
        .map(|label| format!("[{}]", label))
        .collect();
    writeln!(out, "  {}", labels.join(" "))?;
    Ok(())
}

pub fn history<W: Write>(out: &mut W, entries: &[HistoryEntry]) -> io::Result<()> {
    writeln!(out, "{}", HISTORY_HEADING.underline())?;
    if entries.is_empty() {
        writeln!(out, "  -")?;
    }
    for entry in entries {
        writeln!(out, "  {}: {}", entry.question_text.bold(), entry.answer_label)?;
    }
    Ok(())
}

pub fn notice<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.yellow())
}

pub fn heard<W: Write>(out: &mut W, transcript: &str) -> io::Result<()> {
    writeln!(out, "音声認識: {}", transcript.cyan())
}

pub fn recognition_failed<W: Write>(out: &mut W, reason: &str) -> io::Result<()> {
    writeln!(out, "{} ({})", "音声認識に失敗しました。".red(), reason)
}

pub fn completed<W: Write>(out: &mut W, entries: &[HistoryEntry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", COMPLETED_NOTICE.green().bold())?;
    history(out, entries)
}

/// Every question with its options and where they lead
pub fn graph<W: Write>(out: &mut W, graph: &QuestionGraph) -> io::Result<()> {
    for question in graph.questions() {
        let marker = if question.id() == graph.root() { " (root)" } else { "" };
        writeln!(out, "{}{} {}", format!("Q{}", question.id()).bold(), marker, question.text())?;
        for option in question.options() {
            let target = match option.next() {
                Some(next) => format!("Q{}", next),
                None => "end".to_string(),
            };
            writeln!(out, "    {} -> {}", option.label(), target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_listing() {
        let graph = QuestionGraph::reference().unwrap();
        let mut out = Vec::new();
        super::graph(&mut out, &graph).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(root) 体の痛みはありますか？"));
        assert!(text.contains("発熱 -> Q4"));
        assert!(text.contains("10 -> end"));
    }

    #[test]
    fn test_empty_history() {
        let mut out = Vec::new();
        history(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(HISTORY_HEADING));
        assert!(text.contains("  -"));
    }
}
