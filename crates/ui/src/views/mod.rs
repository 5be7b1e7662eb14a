mod advance;
mod score_summary;
mod shell;

#[cfg(test)]
mod test_harness;

pub use advance::AdvanceControlView;
pub use score_summary::ScoreSummaryView;
pub use shell::QuizShell;
