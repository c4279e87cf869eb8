use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.green/white} {pos:>3}/{len:3} tournaments {msg}";

pub fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
        bar.set_style(style.progress_chars("##-"));
    }

    bar
}
