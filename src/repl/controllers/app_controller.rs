//! # Application Controller
//!
//! The controller owns the event loop. It reads input lines, turns them into
//! `UserCommand`s, forwards them to the ViewModel, dispatches the fetch
//! requests the ViewModel hands back, and redraws when the model says so.
//!
//! Input and fetch completions are raced with `tokio::select!`, so the user
//! can keep typing while requests are in flight.

use crate::cmd_args::CommandLineArgs;
use crate::config::{self, ViewerConfig};
use crate::repl::{
    commands::{CommandRegistry, UserCommand},
    events::{log_model_events, EventBus, SimpleEventBus},
    io::{InputStream, StdinInputStream},
    services::{FetchCompletion, FetchRequest, FetchService, PostsService},
    view_models::ViewModel,
    views::TextRenderer,
};
use anyhow::Result;
use std::io::{Stdout, Write};

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<IS: InputStream, W: Write> {
    view_model: ViewModel,
    fetch_service: FetchService,
    renderer: TextRenderer<W>,
    command_registry: CommandRegistry,
    input: IS,
    should_quit: bool,
    input_closed: bool,
}

impl AppController<StdinInputStream, Stdout> {
    /// Create a controller reading stdin and writing stdout, configured from
    /// the selected profile and the command line
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let config =
            ViewerConfig::load(cmd_args.profile(), &profile_path)?.with_args(&cmd_args)?;
        tracing::debug!("Resolved configuration: {:?}", config);

        Self::with_io_streams(
            &config,
            cmd_args.verbose(),
            StdinInputStream::new(),
            std::io::stdout(),
        )
    }
}

impl<IS: InputStream, W: Write> AppController<IS, W> {
    /// Create a controller with injected I/O streams
    pub fn with_io_streams(config: &ViewerConfig, verbose: bool, input: IS, output: W) -> Result<Self> {
        let posts = PostsService::from_config(config)?;

        let mut view_model = ViewModel::from_config(config);
        let mut event_bus = SimpleEventBus::new();
        event_bus.subscribe_to_model_events(log_model_events());
        view_model.set_event_bus(Box::new(event_bus));

        Ok(Self {
            view_model,
            fetch_service: FetchService::new(posts),
            renderer: TextRenderer::new(output, verbose),
            command_registry: CommandRegistry::new(),
            input,
            should_quit: false,
            input_closed: false,
        })
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn renderer(&self) -> &TextRenderer<W> {
        &self.renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits, or until input ends and every pending
    /// request has settled
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;

        while !self.should_quit {
            if self.input_closed {
                if !self.view_model.has_pending_requests() {
                    break;
                }
                match self.fetch_service.next_completion().await {
                    Some(completion) => self.handle_completion(completion)?,
                    None => break,
                }
                continue;
            }

            tokio::select! {
                line = self.input.next_line() => match line? {
                    Some(line) => self.handle_line(&line)?,
                    None => {
                        tracing::debug!("Input closed, waiting for pending requests");
                        self.input_closed = true;
                    }
                },
                Some(completion) = self.fetch_service.next_completion() => {
                    self.handle_completion(completion)?;
                }
            }
        }

        tracing::debug!("Event loop finished");
        Ok(())
    }

    /// Show the banner, kick off the initial recent posts load and draw the first frame
    pub fn start(&mut self) -> Result<()> {
        self.renderer.render_banner()?;
        let request = self.view_model.initialize();
        self.dispatch(Some(request));
        self.redraw()
    }

    /// Interpret one line of user input
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let command = self.command_registry.parse(line);
        tracing::debug!("Input '{}' parsed as {:?}", line, command);

        match command {
            UserCommand::Search(raw_input) => {
                let request = self.view_model.search(&raw_input);
                self.dispatch(request);
            }
            UserCommand::ShowRecentPosts => {
                let request = self.view_model.show_recent_posts_view();
                self.dispatch(request);
            }
            UserCommand::ClearSearch => {
                let request = self.view_model.clear_search();
                self.dispatch(request);
            }
            UserCommand::ReloadRecentPosts => {
                let request = self.view_model.load_recent_posts();
                self.dispatch(Some(request));
            }
            UserCommand::Help => {
                self.renderer.render_help()?;
                return Ok(());
            }
            UserCommand::Quit => {
                self.should_quit = true;
                return Ok(());
            }
        }

        self.redraw_if_needed()
    }

    /// Apply a finished fetch to the view model
    pub fn handle_completion(&mut self, completion: FetchCompletion) -> Result<()> {
        if !self.view_model.apply_completion(completion) {
            tracing::debug!("Completion was stale, nothing to redraw");
        }
        self.redraw_if_needed()
    }

    /// Wait until no request is pending, applying completions as they arrive
    pub async fn settle(&mut self) -> Result<()> {
        while self.view_model.has_pending_requests() {
            match self.fetch_service.next_completion().await {
                Some(completion) => self.handle_completion(completion)?,
                None => break,
            }
        }
        Ok(())
    }

    /// Apply every completion that has already arrived, without waiting.
    /// Returns how many were taken off the channel.
    pub fn apply_ready_completions(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Some(completion) = self.fetch_service.poll_completion() {
            self.handle_completion(completion)?;
            applied += 1;
        }
        Ok(applied)
    }

    fn dispatch(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            let _ = self.fetch_service.dispatch(request);
        }
    }

    fn redraw_if_needed(&mut self) -> Result<()> {
        let events = self.view_model.collect_pending_events();
        if events.iter().any(|event| event.requires_redraw()) {
            self.renderer.render(self.view_model.state())?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.view_model.collect_pending_events();
        self.renderer.render(self.view_model.state())
    }
}
