/// Interactive terminal front end
///
/// Owns the active route and both view states, dispatches network work onto
/// spawned tasks, and applies their completion messages back onto the views.
/// All state mutation happens on the event loop; tasks communicate only
/// through the message channel, tagged with the navigation token that was
/// current when they were dispatched.
use std::sync::Arc;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::clients::{MetadataProvider, RecommendationBackend};
use crate::error::AppResult;
use crate::models::{CatalogEntry, MovieDetail, RecommendationEntry};
use crate::views::{
    CatalogPhase, CatalogViewState, DetailPhase, DetailViewState, NavToken, NoticeLevel, Route,
    UserAction,
};

const TOP_BILLED_CAST: usize = 5;

/// Completion message from a spawned network task
#[derive(Debug)]
pub enum AppMessage {
    CatalogLoaded(AppResult<Vec<CatalogEntry>>),
    DetailLoaded {
        token: NavToken,
        result: AppResult<MovieDetail>,
    },
    ContentLoaded {
        token: NavToken,
        result: AppResult<Vec<RecommendationEntry>>,
    },
    CollaborativeLoaded {
        token: NavToken,
        result: AppResult<Vec<RecommendationEntry>>,
    },
    RatingAcked {
        token: NavToken,
        result: AppResult<()>,
    },
}

/// A parsed user command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Home,
    Open(String),
    Search(String),
    Language(String),
    Retry,
    Content,
    Collaborative,
    User(u32),
    Rate(f32),
    Submit,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; None for unrecognized input
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "home" => Some(Command::Home),
            "open" if !rest.is_empty() => Some(Command::Open(rest.to_string())),
            "search" => Some(Command::Search(rest.to_string())),
            "lang" | "language" if !rest.is_empty() => Some(Command::Language(rest.to_string())),
            "retry" => Some(Command::Retry),
            "content" => Some(Command::Content),
            "collab" | "collaborative" => Some(Command::Collaborative),
            "user" => rest.parse().ok().map(Command::User),
            "rate" => rest.parse().ok().map(Command::Rate),
            "submit" => Some(Command::Submit),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Snap a raw rating onto the 0.5-step scale the star input offers
fn quantize_rating(rating: f32) -> f32 {
    (rating * 2.0).round().clamp(0.0, 10.0) / 2.0
}

pub struct App {
    metadata: Arc<dyn MetadataProvider>,
    recommender: Arc<dyn RecommendationBackend>,
    tx: UnboundedSender<AppMessage>,
    route: Route,
    catalog: CatalogViewState,
    detail: DetailViewState,
    running: bool,
}

impl App {
    pub fn new(
        metadata: Arc<dyn MetadataProvider>,
        recommender: Arc<dyn RecommendationBackend>,
        tx: UnboundedSender<AppMessage>,
        initial_route: Route,
    ) -> Self {
        let mut app = Self {
            metadata,
            recommender,
            tx,
            route: Route::Catalog,
            catalog: CatalogViewState::new(),
            detail: DetailViewState::new(),
            running: true,
        };
        app.navigate(initial_route);
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn catalog(&self) -> &CatalogViewState {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailViewState {
        &self.detail
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drive the event loop until the user quits
    pub async fn run(mut self, mut rx: UnboundedReceiver<AppMessage>) -> anyhow::Result<()> {
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        self.render();

        while self.running {
            tokio::select! {
                line = input.next_line() => {
                    let Some(line) = line? else { break };
                    match Command::parse(&line) {
                        Some(command) => self.execute(command),
                        None => println!("Unrecognized command; type 'help' for the list."),
                    }
                    self.flush_notices();
                    if self.running {
                        self.render();
                    }
                }
                Some(message) = rx.recv() => {
                    self.handle_message(message);
                    self.flush_notices();
                    self.render();
                }
            }
        }

        Ok(())
    }

    /// Change the active route, resetting view state as the target requires
    ///
    /// Entering the catalog remounts the browse screen and refetches;
    /// entering a detail page performs the full synchronous reset before the
    /// fetch is dispatched.
    pub fn navigate(&mut self, route: Route) {
        match &route {
            Route::Catalog => {
                self.catalog = CatalogViewState::new();
                self.spawn_catalog_fetch();
            }
            Route::Detail(movie_id) => {
                let token = self.detail.reset_for(movie_id);
                self.spawn_detail_fetch(movie_id.clone(), token);
            }
        }
        self.route = route;
    }

    /// Apply a single user command to the active view
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::Help => print_help(&self.route),
            Command::Home => self.navigate(Route::Catalog),
            Command::Open(movie_id) => self.navigate(Route::Detail(movie_id)),
            Command::Search(text) => self.catalog.set_search(text),
            Command::Language(language) => self.catalog.toggle_language(&language),
            Command::Retry => {
                if matches!(self.catalog.phase(), CatalogPhase::Failed(_)) {
                    self.catalog.begin_reload();
                    self.spawn_catalog_fetch();
                }
            }
            Command::User(user_id) => self.detail.set_user_id(user_id),
            Command::Rate(rating) => self.detail.set_rating(quantize_rating(rating)),
            Command::Content => {
                if self.detail.begin_action(UserAction::Content) {
                    self.spawn_content_fetch();
                }
            }
            Command::Collaborative => {
                if self.detail.begin_action(UserAction::Collaborative) {
                    self.spawn_collaborative_fetch();
                }
            }
            Command::Submit => {
                if self.detail.begin_action(UserAction::Rate) {
                    self.spawn_rating_submit();
                }
            }
        }
    }

    /// Apply a completion message from a network task
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CatalogLoaded(result) => self.catalog.apply_catalog(result),
            AppMessage::DetailLoaded { token, result } => self.detail.apply_detail(token, result),
            AppMessage::ContentLoaded { token, result } => self.detail.apply_content(token, result),
            AppMessage::CollaborativeLoaded { token, result } => {
                self.detail.apply_collaborative(token, result)
            }
            AppMessage::RatingAcked { token, result } => {
                self.detail.apply_rating_ack(token, result)
            }
        }
    }

    fn spawn_catalog_fetch(&self) {
        let backend = Arc::clone(&self.recommender);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = backend.fetch_catalog().await;
            let _ = tx.send(AppMessage::CatalogLoaded(result));
        });
    }

    fn spawn_detail_fetch(&self, movie_id: String, token: NavToken) {
        let metadata = Arc::clone(&self.metadata);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = metadata.resolve_and_fetch(&movie_id).await;
            let _ = tx.send(AppMessage::DetailLoaded { token, result });
        });
    }

    fn spawn_content_fetch(&self) {
        let backend = Arc::clone(&self.recommender);
        let tx = self.tx.clone();
        let movie_id = self.detail.movie_id().to_string();
        let token = self.detail.token();
        tokio::spawn(async move {
            let result = backend.content_based(&movie_id).await;
            let _ = tx.send(AppMessage::ContentLoaded { token, result });
        });
    }

    fn spawn_collaborative_fetch(&self) {
        let backend = Arc::clone(&self.recommender);
        let tx = self.tx.clone();
        let user_id = self.detail.user_id();
        let token = self.detail.token();
        tokio::spawn(async move {
            let result = backend.collaborative(user_id).await;
            let _ = tx.send(AppMessage::CollaborativeLoaded { token, result });
        });
    }

    fn spawn_rating_submit(&self) {
        let backend = Arc::clone(&self.recommender);
        let tx = self.tx.clone();
        let submission = self.detail.rating_submission();
        let token = self.detail.token();
        tokio::spawn(async move {
            let result = backend.submit_rating(&submission).await;
            let _ = tx.send(AppMessage::RatingAcked { token, result });
        });
    }

    fn flush_notices(&mut self) {
        for notice in self.detail.take_notices() {
            match notice.level {
                NoticeLevel::Success => println!("{} {}", "✔".green(), notice.message),
                NoticeLevel::Error => println!("{} {}", "✖".red(), notice.message),
            }
        }
    }

    fn render(&self) {
        // Redraw from the top of a cleared screen, so navigating always lands
        // at the top of the new view.
        print!("\x1b[2J\x1b[1;1H");
        match &self.route {
            Route::Catalog => render_catalog(&self.catalog),
            Route::Detail(_) => render_detail(&self.detail, self.metadata.as_ref()),
        }
    }
}

fn render_catalog(catalog: &CatalogViewState) {
    println!("{}", "Explore Movies".bold());
    println!();

    match catalog.phase() {
        CatalogPhase::Loading => println!("Loading..."),
        CatalogPhase::Failed(message) => {
            println!("{}", message.red());
            println!("Type 'retry' to reload the catalog.");
        }
        CatalogPhase::Ready(_) => {
            if !catalog.search().is_empty() {
                println!("Search: {}", catalog.search());
            }

            let languages = catalog.available_languages();
            if !languages.is_empty() {
                let boxes: Vec<String> = languages
                    .iter()
                    .map(|language| {
                        let selected = catalog
                            .selected_languages()
                            .iter()
                            .any(|chosen| chosen.to_lowercase() == language.to_lowercase());
                        format!("[{}] {}", if selected { "x" } else { " " }, language)
                    })
                    .collect();
                println!("Languages: {}", boxes.join("  "));
            }
            println!();

            let filtered = catalog.filtered();
            if filtered.is_empty() {
                println!("{}", "No movies found.".red());
            } else {
                for entry in filtered {
                    println!(
                        "{}  {} ({})  {} · {}",
                        entry.movie_id.cyan(),
                        entry.movie_name.bold(),
                        entry.year,
                        entry.genre,
                        entry.language
                    );
                }
            }
        }
    }

    println!();
    println!("Commands: search <text> · lang <name> · open <movie id> · help · quit");
}

fn render_detail(detail: &DetailViewState, metadata: &dyn MetadataProvider) {
    match detail.phase() {
        DetailPhase::Loading => println!("Loading..."),
        DetailPhase::NotFound => println!("{}", "Movie not found.".red()),
        DetailPhase::Failed(message) => println!("{}", message.red()),
        DetailPhase::Ready(movie) => {
            println!("{}", movie.title.bold());
            if let Some(path) = &movie.poster_path {
                println!("Poster: {}", metadata.poster_url(path));
            }
            println!();
            println!("{}", movie.overview);

            if !movie.genres.is_empty() {
                let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
                println!();
                println!("Genres: {}", genres.join(" · "));
            }

            if !movie.cast.is_empty() {
                println!();
                println!("Cast:");
                for member in movie.top_billed(TOP_BILLED_CAST) {
                    println!("  {}", member);
                }
            }

            println!();
            println!(
                "Your rating: {}   User id: {}",
                detail.rating(),
                detail.user_id()
            );

            if let Some(action) = detail.in_flight() {
                let label = match action {
                    UserAction::Content => "content-based recommendations",
                    UserAction::Collaborative => "collaborative recommendations",
                    UserAction::Rate => "rating submission",
                };
                println!("{} {} in flight...", "·".yellow(), label);
            }

            render_recommendations("Content Based", detail.content_recommendations());
            render_recommendations("Collaborative Based", detail.collaborative_recommendations());
        }
    }

    println!();
    println!("Commands: rate <0.5-5> · user <id> · submit · content · collab · open <movie id> · home · quit");
}

fn render_recommendations(heading: &str, entries: &[RecommendationEntry]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("{}", heading.bold());
    for entry in entries {
        println!(
            "  {}  {} ({})  {}",
            entry.movie_id.cyan(),
            entry.movie_name,
            entry.year,
            entry.genre
        );
    }
}

fn print_help(route: &Route) {
    match route {
        Route::Catalog => {
            println!("search <text>     filter movies by name");
            println!("lang <name>       toggle a language filter");
            println!("open <movie id>   open a movie's detail page");
            println!("retry             reload the catalog after a failure");
        }
        Route::Detail(_) => {
            println!("rate <0.5-5>      set your star rating");
            println!("user <id>         set your user id");
            println!("submit            submit the rating");
            println!("content           fetch content-based recommendations");
            println!("collab            fetch collaborative recommendations");
            println!("open <movie id>   jump to another movie");
            println!("home              back to the catalog");
        }
    }
    println!("quit              exit");
}
