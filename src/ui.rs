use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, duration_fmt::format_duration, stopwatch::Stopwatch};

const HORIZONTAL_MARGIN: u16 = 5;

impl<W: Stopwatch> Widget for &App<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let completed_style = Style::default().bg(Color::Rgb(0x2E, 0x8B, 0x57)).fg(Color::White);
        let error_style = Style::default().bg(Color::Rgb(0xFF, 0x63, 0x47)).fg(Color::White);
        let cursor_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::UNDERLINED);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt_lines = (view.target.width() as f64 / max_chars_per_line as f64)
            .ceil()
            .max(1.0) as u16;

        let mut info: Vec<Line> = vec![
            Line::from(Span::styled(format_duration(view.elapsed), bold_style)),
            Line::from(Span::styled(format!("{:.0}wpm", view.wpm), bold_style)),
            Line::default(),
        ];
        info.extend(view.history.iter().enumerate().map(|(i, t)| {
            Line::from(format!("Time {}: {}", i + 1, format_duration(*t)))
        }));
        info.push(Line::default());
        info.push(Line::from(format!(
            "Highscore: {}",
            view.highscore.map_or_else(|| "none".to_string(), format_duration)
        )));
        if let Some(status) = view.status {
            info.push(Line::from(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        if view.is_complete {
            info.push(Line::from(Span::styled("Press enter to restart.", italic_style)));
        }
        info.push(Line::from(Span::styled("Press esc to quit.", italic_style)));

        let info_lines = info.len() as u16;
        let padding = area.height.saturating_sub(prompt_lines + 1 + info_lines) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(padding),
                Constraint::Length(prompt_lines),
                Constraint::Length(1),
                Constraint::Min(info_lines),
            ])
            .split(area);

        let segments = view.segments;
        let mut spans = vec![
            Span::styled(segments.matched, completed_style),
            Span::styled(segments.erroneous, error_style),
        ];
        if let Some(cursor) = segments.cursor {
            spans.push(Span::styled(cursor.to_string(), cursor_style));
            spans.push(Span::styled(segments.rest, dim_style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(if prompt_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        Paragraph::new(info)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
