use anyhow::{Context, Result};
use cucumber::World;
use std::time::Duration;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postline::config::{PostIdRange, ViewerConfig, DEFAULT_VIEW_RECENT_LIMIT};
use postline::repl::{
    controllers::AppController,
    io::{MockInputStream, MockRenderStream},
    models::ViewState,
};

use super::blog_api::BlogApi;

/// Priority for scenario-specific overrides; wiremock prefers lower numbers
const OVERRIDE_PRIORITY: u8 = 1;

pub type TestController = AppController<MockInputStream, MockRenderStream>;

/// State shared by the steps of one scenario
#[derive(World)]
#[world(init = Self::new)]
pub struct PostlineWorld {
    /// Fake posts API
    pub server: Option<MockServer>,

    /// Controller driven line by line
    pub controller: Option<TestController>,

    /// Everything the controller has rendered
    pub output: MockRenderStream,

    pub recent_limit: usize,
    pub id_range: PostIdRange,
}

impl std::fmt::Debug for PostlineWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostlineWorld")
            .field("server", &self.server.as_ref().map(|s| s.uri()))
            .field("recent_limit", &self.recent_limit)
            .field("id_range", &self.id_range)
            .field("state", &self.controller.as_ref().map(|c| c.view_model().state()))
            .finish()
    }
}

impl PostlineWorld {
    pub fn new() -> Self {
        Self {
            server: None,
            controller: None,
            output: MockRenderStream::new(),
            recent_limit: DEFAULT_VIEW_RECENT_LIMIT,
            id_range: PostIdRange::default(),
        }
    }

    /// Start the fake API serving every post and user
    pub async fn start_blog_api(&mut self) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(BlogApi)
            .mount(&server)
            .await;
        self.server = Some(server);
    }

    pub fn server(&self) -> &MockServer {
        self.server.as_ref().expect("blog API not started")
    }

    /// Make one path answer with `status` instead of the normal response
    pub async fn override_status(&self, url_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status))
            .with_priority(OVERRIDE_PRIORITY)
            .mount(self.server())
            .await;
    }

    /// Make every author lookup fail with a server error
    pub async fn fail_author_lookups(&self) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/users/\d+$"))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(OVERRIDE_PRIORITY)
            .mount(self.server())
            .await;
    }

    /// Delay the response for one post
    pub async fn delay_post(&self, post_id: u64, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{post_id}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(super::blog_api::post_json(post_id))
                    .set_delay(delay),
            )
            .with_priority(OVERRIDE_PRIORITY)
            .mount(self.server())
            .await;
    }

    /// Build the controller against the fake API and run its startup
    pub fn start_viewer(&mut self) -> Result<()> {
        let config = ViewerConfig {
            base_url: self.server().uri(),
            recent_limit: self.recent_limit,
            id_range: self.id_range,
            timeout: Some(Duration::from_secs(5)),
        };
        let mut controller = AppController::with_io_streams(
            &config,
            false,
            MockInputStream::empty(),
            self.output.clone(),
        )?;
        controller.start()?;
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&mut self) -> &mut TestController {
        self.controller.as_mut().expect("viewer not started")
    }

    pub fn state(&self) -> &ViewState {
        self.controller
            .as_ref()
            .expect("viewer not started")
            .view_model()
            .state()
    }

    pub fn enter(&mut self, line: &str) -> Result<()> {
        self.controller().handle_line(line)
    }

    /// Wait for every pending request, bounded so a hung request fails the step
    pub async fn settle(&mut self) -> Result<()> {
        tokio::time::timeout(Duration::from_secs(10), self.controller().settle())
            .await
            .context("requests did not settle in time")?
    }

    /// Number of requests the fake API received for `url_path`
    pub async fn requests_to(&self, url_path: &str) -> usize {
        self.server()
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == url_path)
            .count()
    }
}

impl Default for PostlineWorld {
    fn default() -> Self {
        Self::new()
    }
}
