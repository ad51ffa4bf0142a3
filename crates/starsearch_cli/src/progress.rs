use std::borrow::Cow;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a search is outstanding.
///
/// A queued search can sit silently for the whole cooldown, so interactive
/// users get a spinner. Non-TTY runs get nothing; tracing covers them.
pub(crate) struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub(crate) fn start(message: impl Into<Cow<'static, str>>) -> Self {
        if !Term::stderr().is_term() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    pub(crate) fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}
