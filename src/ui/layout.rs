use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::MAX_PER_PAGE;

/// Screen areas, top to bottom.
///
/// The login row only exists while logged out; the task panels only while
/// logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub login: Option<Rect>,
    pub search: Rect,
    pub gallery: Rect,
    pub assistant: Rect,
    pub task_input: Option<Rect>,
    pub task_list: Option<Rect>,
    pub footer: Rect,
}

/// One row per image of a full search page.
pub const GALLERY_ROWS: u16 = MAX_PER_PAGE as u16;

pub fn layout_regions(area: Rect, logged_in: bool) -> Regions {
    let mut constraints = vec![Constraint::Length(3)];
    if !logged_in {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(GALLERY_ROWS + 2));
    constraints.push(Constraint::Min(5));
    if logged_in {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(5));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    let header = take();
    let login = (!logged_in).then(&mut take);
    let search = take();
    let gallery = take();
    let assistant = take();
    let task_input = logged_in.then(&mut take);
    let task_list = logged_in.then(&mut take);
    let footer = take();

    Regions {
        header,
        login,
        search,
        gallery,
        assistant,
        task_input,
        task_list,
        footer,
    }
}
