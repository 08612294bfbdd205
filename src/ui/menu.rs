use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::DeathReason;
use crate::theme::Theme;

/// Draws the game-over screen as a centered popup over the play area.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let score_line = format!("Score: {score}");
    let cause_line = match death_reason {
        Some(DeathReason::Wall) => "Cause: hit the wall",
        Some(DeathReason::SelfHit) => "Cause: bit yourself",
        None => "",
    };
    let footer = "[Enter]/[Space] Play Again   [Q] Quit";

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            score_line.clone(),
            Style::default().fg(theme.overlay_text),
        )),
        Line::from(Span::styled(
            cause_line,
            Style::default().fg(theme.overlay_text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            footer,
            Style::default().fg(theme.overlay_footer),
        )),
    ];

    let content_width = [
        UnicodeWidthStr::width("GAME OVER"),
        UnicodeWidthStr::width(score_line.as_str()),
        UnicodeWidthStr::width(cause_line),
        UnicodeWidthStr::width(footer),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    // Border plus one space of padding on each side.
    let popup = centered_rect(
        area,
        (content_width as u16).saturating_add(4),
        lines.len() as u16 + 2,
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.field_bg))
            .block(
                Block::bordered()
                    .title(" game over ")
                    .border_style(Style::default().fg(theme.border)),
            ),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_rect;

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);

        let popup = centered_rect(area, 40, 8);
        assert_eq!(popup, Rect::new(20, 8, 40, 8));

        let oversized = centered_rect(area, 200, 100);
        assert_eq!(oversized, area);
    }
}
