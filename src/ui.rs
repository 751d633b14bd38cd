//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the player card and track list
//! using `ratatui`. Rendering is pure: it reads the app and player state and
//! never mutates either.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::media::MediaElement;
use crate::player::{PlaybackState, Player, progress};

/// One line of transport glyphs; the play/pause glyph reflects the flag.
fn transport_line(playing: bool) -> Line<'static> {
    let play_pause = if playing { " ⏸ " } else { " ⏵ " };
    Line::from(vec![
        Span::raw(" ⏮ "),
        Span::raw("  "),
        Span::styled(play_pause, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(" ⏭ "),
    ])
    .alignment(Alignment::Center)
}

/// Text for the artwork pane: a plain placeholder unless the track carries
/// embedded cover art.
fn artwork_text(artwork: Option<&[u8]>) -> String {
    match artwork {
        Some(bytes) => format!("\n♪\n\ncover art: embedded ({} bytes)", bytes.len()),
        None => "\n♪\n\ncover art: default".to_string(),
    }
}

fn state_text(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "Idle",
        PlaybackState::Loaded => "Loaded",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

const CONTROLS_TEXT: &str = "[j/k] cursor | [enter] play selected | [space/p] play/pause | \
[h/l] prev/next | [H/L] seek -/+ | [o] add files | [q] quit";

/// Render the now-playing card into `area`.
fn draw_card<M: MediaElement>(
    frame: &mut Frame,
    area: Rect,
    player: &Player<M>,
    ui: &UiSettings,
) {
    let card = Block::default()
        .borders(Borders::ALL)
        .title(" now playing ")
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // artwork pane
            Constraint::Length(1), // title
            Constraint::Length(1), // artist
            Constraint::Length(1), // transport glyphs
            Constraint::Length(3), // seek gauge
            Constraint::Length(1), // state / error
        ])
        .split(inner);

    let track = player.current_track();

    let artwork = Paragraph::new(artwork_text(track.and_then(|t| t.artwork.as_deref())))
        .alignment(Alignment::Center);
    frame.render_widget(artwork, rows[0]);

    let title = track
        .map(|t| t.title.as_str())
        .unwrap_or(ui.placeholder_title.as_str());
    let artist = track
        .map(|t| t.artist.as_str())
        .unwrap_or(ui.placeholder_artist.as_str());
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(artist).alignment(Alignment::Center),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(transport_line(player.is_playing())),
        rows[3],
    );

    let elapsed = progress::format_time(player.elapsed().as_secs());
    let total = progress::format_time(player.duration().unwrap_or_default().as_secs());
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .ratio((player.progress() / 100.0).clamp(0.0, 1.0))
        .label(format!("{elapsed} / {total}"));
    frame.render_widget(gauge, rows[4]);

    // Per-track load errors take precedence over the state line.
    let status = match track.and_then(|t| t.error.as_deref()) {
        Some(err) => format!("error: {err}"),
        None => state_text(player.state()).to_string(),
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        rows[5],
    );
}

/// Render the track list with the cursor row highlighted and the current
/// track marked.
fn draw_track_list<M: MediaElement>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    player: &Player<M>,
) {
    let items: Vec<ListItem> = player
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let marker = if player.has_tracks() && i == player.current_index() {
                "▶ "
            } else if t.error.is_some() {
                "✗ "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{} - {}", t.artist, t.title))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if player.has_tracks() {
        state.select(Some(app.selected.min(player.tracks().len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame`.
pub fn draw<M: MediaElement>(frame: &mut Frame, app: &App, player: &Player<M>, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tunecard ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    draw_track_list(frame, main[0], app, player);
    draw_card(frame, main[1], player, ui);

    // Status row doubles as the add-files prompt when it is open.
    let (status_title, status_text) = if let Some(buf) = app.prompt.as_deref() {
        (" add files (enter loads, esc cancels) ", format!("> {buf}"))
    } else {
        (" status ", app.status.clone().unwrap_or_default())
    };
    let status = Paragraph::new(status_text)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(status_title),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[2]);

    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
