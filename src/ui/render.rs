use crate::tasks::{AppState, RequestKind};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, GALLERY_ROWS};
use crate::ui::theme::{
    priority_color, ACCENT_BLUE, ACCENT_PURPLE, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER,
    HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const EMPTY_TASKS_TEXT: &str = "No tasks yet. Add some tasks to get started!";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let regions = layout_regions(frame.area(), state.is_authenticated());

    frame.render_widget(Header::new().widget(&state.session), regions.header);

    if let Some(area) = regions.login {
        frame.render_widget(
            input_widget(app, Focus::Login, " Login ", app.username_input(), "Enter username"),
            area,
        );
    }

    let search_title = if state.loading.is_loading(RequestKind::Images) {
        format!(" Search images {} ", spinner(app.spinner_tick()))
    } else {
        " Search images ".to_string()
    };
    frame.render_widget(
        input_widget(
            app,
            Focus::Search,
            &search_title,
            app.query_input(),
            "Search Unsplash images...",
        ),
        regions.search,
    );
    frame.render_widget(gallery_widget(state), regions.gallery);
    frame.render_widget(assistant_widget(app), regions.assistant);

    if let Some(area) = regions.task_input {
        frame.render_widget(task_input_widget(app), area);
    }
    if let Some(area) = regions.task_list {
        frame.render_widget(task_list_widget(app, area.height.saturating_sub(2)), area);
    }

    frame.render_widget(
        Footer::new().widget(regions.footer, state.is_authenticated()),
        regions.footer,
    );
}

fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

fn panel<'a>(app: &App, focus: Focus, title: impl Into<Line<'a>>) -> Block<'a> {
    let border = if app.focus() == focus {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn input_widget<'a>(
    app: &App,
    focus: Focus,
    title: &str,
    value: &'a str,
    placeholder: &'static str,
) -> Paragraph<'a> {
    let focused = app.focus() == focus;
    let mut spans = Vec::new();
    if value.is_empty() {
        spans.push(Span::styled(placeholder, Style::default().fg(MUTED_TEXT)));
    } else {
        spans.push(Span::styled(value, Style::default().fg(HEADER_TEXT)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT_BLUE)));
    }
    Paragraph::new(Line::from(spans)).block(panel(app, focus, title.to_string()))
}

pub fn gallery_lines(state: &AppState) -> Vec<Line<'static>> {
    if state.images.is_empty() {
        return vec![Line::from(Span::styled(
            "No images yet.",
            Style::default().fg(MUTED_TEXT),
        ))];
    }
    state
        .images
        .iter()
        .take(GALLERY_ROWS as usize)
        .map(|image| {
            let mut spans = vec![
                Span::styled(
                    image.attribution().to_string(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
            ];
            if let Some(alt) = image.alt_description.as_deref() {
                spans.push(Span::styled(alt.to_string(), Style::default().fg(MUTED_TEXT)));
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                image.display_url().to_string(),
                Style::default().fg(ACCENT_BLUE),
            ));
            Line::from(spans)
        })
        .collect()
}

pub fn gallery_title(state: &AppState) -> String {
    let total = state.images.len();
    let shown = total.min(GALLERY_ROWS as usize);
    if shown < total {
        format!(" Images ({shown} of {total}) ")
    } else {
        format!(" Images ({total}) ")
    }
}

fn gallery_widget(state: &AppState) -> Paragraph<'static> {
    Paragraph::new(gallery_lines(state)).block(
        Block::default()
            .title(gallery_title(state))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn assistant_widget(app: &App) -> Paragraph<'_> {
    let state = app.state();
    let mut lines = vec![Line::from(vec![
        Span::styled("Ask: ", Style::default().fg(ACCENT_PURPLE)),
        if app.prompt_input().is_empty() {
            Span::styled("Ask me anything...", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(app.prompt_input(), Style::default().fg(HEADER_TEXT))
        },
    ])];
    lines.push(Line::from(""));

    if state.loading.is_loading(RequestKind::Assistant) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner(app.spinner_tick())),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled("Loading...", Style::default().fg(HEADER_TEXT)),
        ]));
    }
    if let Some(reply) = state.assistant_reply.as_deref() {
        lines.extend(
            reply
                .lines()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(HEADER_TEXT)))),
        );
    }
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(notice, Style::default().fg(STATUS_ERROR))));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(app, Focus::Assistant, " AI Assistant "))
}

fn task_input_widget(app: &App) -> Paragraph<'_> {
    let priority = app.task_priority();
    let mut spans = vec![
        Span::styled(
            format!("[{}] ", priority),
            Style::default()
                .fg(priority_color(priority))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.task_input().is_empty() {
        spans.push(Span::styled("Enter a task", Style::default().fg(MUTED_TEXT)));
    } else {
        spans.push(Span::styled(app.task_input(), Style::default().fg(HEADER_TEXT)));
    }
    Paragraph::new(Line::from(spans)).block(panel(app, Focus::TaskInput, " Add New Task "))
}

pub fn task_lines(app: &App) -> Vec<Line<'_>> {
    let state = app.state();
    if state.tasks.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_TASKS_TEXT,
            Style::default().fg(MUTED_TEXT),
        ))];
    }
    let selected = app.selected_task();
    state
        .tasks
        .iter()
        .map(|task| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<8}", task.priority.as_str()),
                    Style::default()
                        .fg(priority_color(task.priority))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(task.description.as_str(), Style::default().fg(HEADER_TEXT)),
            ]);
            if selected == Some(task.id) && app.focus() == Focus::TaskList {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect()
}

/// First visible row so that `selected` stays inside `visible_rows`.
pub fn task_scroll(selected: Option<usize>, visible_rows: u16) -> u16 {
    let visible = usize::from(visible_rows.max(1));
    let top = selected.map_or(0, |index| (index + 1).saturating_sub(visible));
    u16::try_from(top).unwrap_or(u16::MAX)
}

fn task_list_widget(app: &App, visible_rows: u16) -> Paragraph<'_> {
    let title = format!(" Task List ({}) ", app.state().tasks.len());
    Paragraph::new(task_lines(app))
        .scroll((task_scroll(app.selected_index(), visible_rows), 0))
        .block(panel(app, Focus::TaskList, title))
}
