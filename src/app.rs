use crate::chat::{ChatWidget, ReplyReceiver};
use crate::config::WidgetConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::ui;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    layout::{Position, Rect, Size},
    DefaultTerminal,
};
use tokio::sync::mpsc;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// The chat widget controller.
    pub widget: ChatWidget,
    /// Construction-time widget options.
    pub config: WidgetConfig,
    /// Lines scrolled up from the bottom of the transcript. Zero keeps the
    /// view pinned to the newest entry.
    pub scroll_up: u16,
    /// Event handler.
    pub events: EventHandler,
    /// Receiver for finished request replies.
    replies: ReplyReceiver,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let widget = ChatWidget::new(&config, reply_tx);

        Ok(Self {
            running: true,
            widget,
            config,
            scroll_up: 0,
            events: EventHandler::new(),
            replies: reply_rx,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event? {
                        Event::Tick => {} // Don't redraw on tick
                        Event::Crossterm(event) => match event {
                            CrosstermEvent::Key(key_event) => {
                                self.handle_key_event(key_event);
                                needs_redraw = true;
                            }
                            CrosstermEvent::Mouse(mouse_event) => {
                                self.handle_mouse_event(mouse_event, terminal.size()?);
                                needs_redraw = true;
                            }
                            CrosstermEvent::Resize(_, _) => needs_redraw = true,
                            _ => {}
                        },
                        Event::App(app_event) => {
                            self.handle_app_event(app_event);
                            needs_redraw = true;
                        }
                    }
                }
                reply = self.replies.recv() => {
                    // Replies are applied in arrival order, which may differ
                    // from send order when requests overlap.
                    if let Some(reply) = reply {
                        self.widget.apply_reply(reply);
                        needs_redraw = true;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Esc => self.events.send(AppEvent::Quit),
            KeyCode::Enter => self.events.send(AppEvent::Submit),
            KeyCode::Backspace => self.events.send(AppEvent::Backspace),
            KeyCode::Tab => self.events.send(AppEvent::CycleLanguage),
            KeyCode::Up | KeyCode::PageUp => self.events.send(AppEvent::ScrollUp),
            KeyCode::Down | KeyCode::PageDown => self.events.send(AppEvent::ScrollDown),
            KeyCode::Char(ch) => self.events.send(AppEvent::Input(ch)),
            _ => {}
        }
    }

    /// Send-button clicks are resolved against the same layout the renderer
    /// uses, so the hit area always matches what is on screen.
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, size: Size) {
        if !self.config.enable_send_button {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            let area = Rect::new(0, 0, size.width, size.height);
            let layout = ui::widget_layout(area, true);
            if let Some(button) = layout.send_button {
                if button.contains(Position::new(mouse_event.column, mouse_event.row)) {
                    self.events.send(AppEvent::Submit);
                }
            }
        }
    }

    fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Input(ch) => self.widget.push_char(ch),
            AppEvent::Backspace => self.widget.backspace(),
            AppEvent::Submit => self.widget.submit(),
            AppEvent::CycleLanguage => self.widget.cycle_language(),
            AppEvent::ScrollUp => self.scroll_up = self.scroll_up.saturating_add(1),
            AppEvent::ScrollDown => self.scroll_up = self.scroll_up.saturating_sub(1),
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
