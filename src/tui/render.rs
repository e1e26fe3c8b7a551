//! 画面描画
//!
//! 上から順に タイトル / フィルタバー / 国一覧 / ページ番号ストリップ / ヘルプ。
//! データが空の間はページ番号ストリップの代わりに `Loading...` を表示する。

use crate::browser::{page_items, FilterKind, Model, PageItem};
use crate::country::Country;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

const TITLE: &str = "Countries List";
const LOADING: &str = "Loading...";
const PREVIOUS_LABEL: &str = "< previous";
const NEXT_LABEL: &str = "next >";
const BREAK_LABEL: &str = "...";
const HELP: &str = " 1/2: filter · r: reset · ←/→: page · PgUp/PgDn: jump · q: quit";

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    f.render_widget(Clear, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タイトル
            Constraint::Length(1), // フィルタバー
            Constraint::Min(3),    // 国一覧
            Constraint::Length(1), // ページ番号 / Loading
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    f.render_widget(Paragraph::new(filter_bar(model)), chunks[1]);

    render_list(f, &model.visible_items(), chunks[2]);

    let footer = if model.is_loaded() {
        pagination_line(model)
    } else {
        Line::from(LOADING)
    };
    f.render_widget(Paragraph::new(footer), chunks[3]);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

/// フィルタバー（アクティブなボタンを強調）
fn filter_bar(model: &Model) -> Line<'static> {
    let active = model.filter.kind();
    let mut spans = Vec::new();

    for (i, kind) in FilterKind::all().iter().enumerate() {
        let style = if active == Some(*kind) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, kind.label()), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("[r] Reset", Style::default().fg(Color::White)));

    Line::from(spans)
}

/// 国一覧（1 件 1 行、各フィールドにラベル付き）
fn render_list(f: &mut Frame, items: &[&Country], area: Rect) {
    let rows: Vec<Row> = items.iter().map(|country| country_row(country)).collect();

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(17),
    ];
    let table = Table::new(rows, widths)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(table, area);
}

fn country_row(country: &Country) -> Row<'static> {
    Row::new([
        labeled("Name", country.name_str().to_string()),
        labeled("Region", country.region_str().to_string()),
        labeled("Area", country.area_label()),
        labeled("Independent", country.independent_label().to_string()),
    ])
}

fn labeled(key: &'static str, value: String) -> Cell<'static> {
    Cell::from(Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ]))
}

/// ページ番号ストリップ
fn pagination_line(model: &Model) -> Line<'static> {
    let page = &model.page;
    let selected = page.selected();
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        PREVIOUS_LABEL,
        if page.has_previous() { enabled } else { disabled },
    )];

    for item in page_items(selected, page.page_count) {
        spans.push(Span::raw(" "));
        match item {
            PageItem::Page(index) if index == selected => spans.push(Span::styled(
                format!("[{}]", index + 1),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            PageItem::Page(index) => spans.push(Span::styled((index + 1).to_string(), enabled)),
            PageItem::Break => spans.push(Span::styled(BREAK_LABEL, disabled)),
        }
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        NEXT_LABEL,
        if page.has_next() { enabled } else { disabled },
    ));

    Line::from(spans)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
