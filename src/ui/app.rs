use crate::effects::Effects;
use crate::store::Store;
use crate::tasks::{AppIntent, AppReducer, AppState, Priority, RequestKind, TaskId, TaskRef};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Login,
    Search,
    Assistant,
    TaskInput,
    TaskList,
}

const LOGGED_OUT_ORDER: &[Focus] = &[Focus::Login, Focus::Search, Focus::Assistant];
const LOGGED_IN_ORDER: &[Focus] = &[
    Focus::Search,
    Focus::Assistant,
    Focus::TaskInput,
    Focus::TaskList,
];

/// View-side state around the store: input buffers, focus, selection.
///
/// Every precondition the reducer does not enforce (blank input, login
/// gating, one request per kind at a time) is checked here.
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: Store<AppReducer>,
    effects: Option<Effects>,
    username_input: String,
    query_input: String,
    prompt_input: String,
    task_input: String,
    task_priority: Priority,
    selected_task: Option<TaskId>,
    notice: Option<String>,
    tick: u8,
}

impl App {
    pub fn new(effects: Option<Effects>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Login,
            store: Store::default(),
            effects,
            username_input: String::new(),
            query_input: String::new(),
            prompt_input: String::new(),
            task_input: String::new(),
            task_priority: Priority::default(),
            selected_task: None,
            notice: None,
            tick: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store<AppReducer> {
        &mut self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn username_input(&self) -> &str {
        &self.username_input
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    pub fn task_priority(&self) -> Priority {
        self.task_priority
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selected_task(&self) -> Option<TaskId> {
        self.selected_task
    }

    /// Position of the selected task in the sorted list.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_task?;
        TaskRef::Id(id).position(&self.state().tasks)
    }

    /// Run an intent through the store and fix up view state that depends on it.
    pub fn dispatch(&mut self, intent: AppIntent) {
        let name = intent.name();
        let changed = self.store.dispatch(intent);
        tracing::debug!(intent = name, changed, "Dispatched intent");
        self.clamp_selection();
        self.clamp_focus();
    }

    /// Advances the spinner while any request is in flight.
    pub fn on_tick(&mut self) {
        if self.state().is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn spinner_tick(&self) -> u8 {
        self.tick
    }

    // ========================================================================
    // Focus
    // ========================================================================

    fn focus_order(&self) -> &'static [Focus] {
        if self.state().is_authenticated() {
            LOGGED_IN_ORDER
        } else {
            LOGGED_OUT_ORDER
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn clamp_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = self.focus_order()[0];
        }
    }

    // ========================================================================
    // Text entry
    // ========================================================================

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Login => Some(&mut self.username_input),
            Focus::Search => Some(&mut self.query_input),
            Focus::Assistant => Some(&mut self.prompt_input),
            Focus::TaskInput => Some(&mut self.task_input),
            Focus::TaskList => None,
        }
    }

    pub fn input_char(&mut self, ch: char) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
    }

    /// Pasted text lands in the focused field with newlines flattened.
    pub fn on_paste(&mut self, text: &str) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        }
    }

    /// Enter on the focused panel.
    pub fn submit(&mut self) {
        match self.focus {
            Focus::Login => self.submit_login(),
            Focus::Search => self.submit_search(),
            Focus::Assistant => self.submit_prompt(),
            Focus::TaskInput => self.submit_task(),
            Focus::TaskList => {}
        }
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn submit_login(&mut self) {
        if self.username_input.trim().is_empty() {
            return;
        }
        let username = std::mem::take(&mut self.username_input);
        tracing::info!(username = %username, "Login");
        self.dispatch(AppIntent::Login { username });
        self.focus = Focus::TaskInput;
        self.notice = None;
    }

    /// Log in without going through the input field (CLI `--user`).
    pub fn login_as(&mut self, username: &str) {
        self.username_input = username.to_string();
        self.submit_login();
    }

    pub fn logout(&mut self) {
        if !self.state().is_authenticated() {
            return;
        }
        tracing::info!("Logout");
        self.dispatch(AppIntent::Logout);
        self.focus = Focus::Login;
    }

    // ========================================================================
    // Integrations
    // ========================================================================

    pub fn submit_search(&mut self) {
        if self.query_input.trim().is_empty()
            || self.state().loading.is_loading(RequestKind::Images)
        {
            return;
        }
        let Some(effects) = &self.effects else {
            self.notice = Some("Image search is unavailable".to_string());
            return;
        };
        // The query stays in the field so it can be refined.
        let intent = effects.search_images(self.query_input.clone());
        self.dispatch(intent);
    }

    pub fn submit_prompt(&mut self) {
        if self.prompt_input.trim().is_empty()
            || self.state().loading.is_loading(RequestKind::Assistant)
        {
            return;
        }
        let Some(effects) = &self.effects else {
            self.notice = Some("Assistant is unavailable".to_string());
            return;
        };
        let prompt = std::mem::take(&mut self.prompt_input);
        let intent = effects.ask_assistant(prompt);
        self.dispatch(intent);
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    pub fn cycle_priority(&mut self, forward: bool) {
        self.task_priority = if forward {
            self.task_priority.next()
        } else {
            self.task_priority.prev()
        };
    }

    pub fn submit_task(&mut self) {
        if !self.state().is_authenticated() {
            self.notice = Some("Log in to add tasks".to_string());
            return;
        }
        if self.task_input.trim().is_empty() {
            return;
        }
        let description = std::mem::take(&mut self.task_input);
        let id = TaskId(self.state().next_task_id);
        self.dispatch(AppIntent::AddTask {
            description,
            priority: self.task_priority,
        });
        self.selected_task = Some(id);
    }

    pub fn move_selection(&mut self, direction: i32) {
        let tasks = &self.state().tasks;
        if tasks.is_empty() {
            self.selected_task = None;
            return;
        }
        let len = tasks.len();
        let current = self.selected_index().unwrap_or(0);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.selected_task = Some(self.state().tasks[next].id);
    }

    pub fn delete_selected(&mut self) {
        if !self.state().is_authenticated() {
            return;
        }
        let Some(id) = self.selected_task else {
            return;
        };
        let index = self.selected_index();
        self.dispatch(AppIntent::DeleteTask {
            target: TaskRef::Id(id),
        });
        // Keep the cursor near where the deleted task was.
        let tasks = &self.state().tasks;
        self.selected_task = index
            .map(|i| i.min(tasks.len().saturating_sub(1)))
            .and_then(|i| tasks.get(i))
            .map(|task| task.id);
    }

    pub fn set_selected_priority(&mut self, priority: Priority) {
        if !self.state().is_authenticated() {
            return;
        }
        let Some(id) = self.selected_task else {
            return;
        };
        self.dispatch(AppIntent::SetPriority {
            target: TaskRef::Id(id),
            priority,
        });
    }

    fn clamp_selection(&mut self) {
        let tasks = &self.state().tasks;
        let still_there = self
            .selected_task
            .is_some_and(|id| tasks.iter().any(|task| task.id == id));
        if !still_there {
            self.selected_task = tasks.first().map(|task| task.id);
        }
    }
}
