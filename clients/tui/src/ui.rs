use crate::app::{outcome_line, score_line, value_label, App, Screen};
use blackjack::{Hand, Suit, HIDDEN_CARD};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn card_spans(hand: &Hand, hide_first: bool) -> Vec<Span<'static>> {
    hand.cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            if idx == 0 && hide_first {
                return Span::styled(
                    format!("{HIDDEN_CARD} "),
                    Style::default().fg(Color::Blue).bg(Color::Gray),
                );
            }
            let color = match card.suit() {
                Suit::Hearts | Suit::Diamonds => Color::Red,
                Suit::Clubs | Suit::Spades => Color::Black,
            };
            Span::styled(
                format!("{} ", card.to_display()),
                Style::default().fg(color).bg(Color::Gray),
            )
        })
        .collect()
}

fn hand_block<'a>(title: String, hand: &Hand, hide_first: bool) -> Paragraph<'a> {
    let lines = vec![Line::from(""), Line::from(card_spans(hand, hide_first))];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title))
}

pub fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Table
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(format!(
        "BLACKJACK    Shoe: {}/{}",
        app.game.shoe_remaining(),
        app.game.shoe_initial()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    let (table_area, log_area) = if app.log_visible {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(main_chunks[1]);
        (split[0], Some(split[1]))
    } else {
        (main_chunks[1], None)
    };

    let table = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(40),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
            ]
            .as_ref(),
        )
        .split(table_area);

    // Live hands are cleared on settlement, so the final screen draws from the summary
    let (dealer_hand, player_hand) = match &app.screen {
        Screen::RoundOver(summary) => (&summary.dealer_hand, &summary.player_hand),
        _ => (&app.game.dealer().hand, &app.game.player().hand),
    };

    let dealer_title = if app.hide_hole_card() {
        "Dealer shows".to_string()
    } else {
        format!("Dealer ({})", value_label(dealer_hand))
    };
    f.render_widget(
        hand_block(dealer_title, dealer_hand, app.hide_hole_card()),
        table[0],
    );
    f.render_widget(
        hand_block(
            format!("Player shows ({})", value_label(player_hand)),
            player_hand,
            false,
        ),
        table[1],
    );

    let result_lines: Vec<Line> = match &app.screen {
        Screen::RoundOver(summary) => vec![
            Line::from(Span::styled(
                outcome_line(summary),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(score_line(summary)),
        ],
        Screen::SessionOver(message) => vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from("Press any key to exit"),
        ],
        Screen::Round => vec![Line::from(vec![
            Span::styled("↑/h", Style::default().fg(Color::Green)),
            Span::raw(" Hit  "),
            Span::styled("↓/s", Style::default().fg(Color::Green)),
            Span::raw(" Stand  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit  "),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::raw(" Logs"),
        ])],
    };
    let result = Paragraph::new(result_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(result, table[2]);

    if let Some(area) = log_area {
        let log_lines: Vec<Line> = app.logs.iter().map(|l| Line::from(l.as_str())).collect();
        let logs_widget = Paragraph::new(log_lines)
            .block(Block::default().borders(Borders::ALL).title("Log"))
            .wrap(Wrap { trim: true });
        f.render_widget(logs_widget, area);
    }

    let status_text = format!("Last Move: {}    {}", app.game.last_status(), app.prompt);
    let status_bar = Paragraph::new(status_text.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_bar, main_chunks[2]);
}
