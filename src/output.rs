use owo_colors::OwoColorize;

/// 非対話モードのページ要約
pub struct PageSummary {
    pub prefix: String,
    pub message: String,
}

impl PageSummary {
    /// `page` は 1 始まり
    pub fn format(page: usize, page_count: usize, shown: usize, filter: Option<&str>) -> Self {
        let position = format!("Page {} of {}", page.green(), page_count);
        match (shown, filter) {
            (0, Some(label)) => Self {
                prefix: "•".yellow().to_string(),
                message: format!("{position}: no countries on this page match '{label}'"),
            },
            (n, Some(label)) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{position}: {n} country(ies) match '{label}'"),
            },
            (n, None) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{position}: {n} country(ies)"),
            },
        }
    }
}
