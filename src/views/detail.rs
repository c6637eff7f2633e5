use crate::error::{AppError, AppResult};
use crate::models::{MovieDetail, RatingSubmission, RecommendationEntry};
use crate::views::Notice;

/// Primary display state of the detail screen for one movie identifier
///
/// `NotFound` (the identifier resolved to nothing) and `Failed` (any
/// transport or parse failure) are distinct terminal states with no retry
/// affordance.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Ready(MovieDetail),
    NotFound,
    Failed(String),
}

/// A user-triggered asynchronous action on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Content,
    Collaborative,
    Rate,
}

/// Token tying an in-flight request to the navigation that dispatched it
///
/// Bumped on every identifier change; responses carrying an older token are
/// discarded so a stale fetch can never overwrite newer state.
pub type NavToken = u64;

/// View state backing the movie detail screen
///
/// An identifier change resets every piece of locally held state before the
/// fresh detail fetch is dispatched; nothing leaks between different movies'
/// detail pages. The in-flight flag is a single mutually-exclusive slot: a
/// new action overwrites it rather than queuing, and it is presentational
/// only, not a concurrency barrier.
pub struct DetailViewState {
    movie_id: String,
    phase: DetailPhase,
    user_id: u32,
    rating: f32,
    content_recommendations: Vec<RecommendationEntry>,
    collaborative_recommendations: Vec<RecommendationEntry>,
    in_flight: Option<UserAction>,
    token: NavToken,
    notices: Vec<Notice>,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self {
            movie_id: String::new(),
            phase: DetailPhase::Loading,
            user_id: 0,
            rating: 0.0,
            content_recommendations: Vec::new(),
            collaborative_recommendations: Vec::new(),
            in_flight: None,
            token: 0,
            notices: Vec::new(),
        }
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn content_recommendations(&self) -> &[RecommendationEntry] {
        &self.content_recommendations
    }

    pub fn collaborative_recommendations(&self) -> &[RecommendationEntry] {
        &self.collaborative_recommendations
    }

    pub fn in_flight(&self) -> Option<UserAction> {
        self.in_flight
    }

    pub fn token(&self) -> NavToken {
        self.token
    }

    /// Reset for a new subject movie, returning the token its fetch must carry
    ///
    /// Runs synchronously before the caller dispatches the fresh detail
    /// fetch; the token never resets, so responses from a superseded
    /// navigation can be recognized and dropped.
    pub fn reset_for(&mut self, movie_id: &str) -> NavToken {
        self.movie_id = movie_id.to_string();
        self.phase = DetailPhase::Loading;
        self.user_id = 0;
        self.rating = 0.0;
        self.content_recommendations.clear();
        self.collaborative_recommendations.clear();
        self.in_flight = None;
        self.notices.clear();
        self.token += 1;
        self.token
    }

    pub fn set_user_id(&mut self, user_id: u32) {
        self.user_id = user_id;
    }

    pub fn set_rating(&mut self, rating: f32) {
        self.rating = rating;
    }

    /// The payload a rating submission would carry, built from current inputs
    pub fn rating_submission(&self) -> RatingSubmission {
        RatingSubmission {
            user_id: self.user_id,
            movie_id: self.movie_id.clone(),
            rating: self.rating,
        }
    }

    fn is_stale(&self, token: NavToken) -> bool {
        if token != self.token {
            tracing::debug!(
                token = token,
                current = self.token,
                "Discarding response from a superseded navigation"
            );
            return true;
        }
        false
    }

    /// Apply the detail fetch outcome
    pub fn apply_detail(&mut self, token: NavToken, result: AppResult<MovieDetail>) {
        if self.is_stale(token) {
            return;
        }

        self.phase = match result {
            Ok(detail) => DetailPhase::Ready(detail),
            Err(AppError::NotFound(_)) => DetailPhase::NotFound,
            Err(e) => {
                tracing::warn!(movie_id = %self.movie_id, error = %e, "Detail fetch failed");
                DetailPhase::Failed("Error fetching movie details.".to_string())
            }
        };
    }

    /// Validate and mark a user action as in flight
    ///
    /// Collaborative fetches and rating submissions require a positive user
    /// id and a positive rating; a validation failure surfaces a notice and
    /// leaves all state untouched. Returns false when the caller must not
    /// dispatch the request.
    pub fn begin_action(&mut self, action: UserAction) -> bool {
        match action {
            UserAction::Content => {}
            UserAction::Collaborative => {
                if self.user_id == 0 || self.rating == 0.0 {
                    self.notices.push(Notice::error("Enter UserID and Rating"));
                    return false;
                }
            }
            UserAction::Rate => {
                if self.user_id == 0 || self.rating == 0.0 {
                    self.notices
                        .push(Notice::error("User ID and Rating are required!"));
                    return false;
                }
            }
        }

        self.in_flight = Some(action);
        true
    }

    /// Apply a content-based recommendation outcome
    ///
    /// Prior results survive a failure; they are replaced only on success or
    /// by a navigation reset.
    pub fn apply_content(
        &mut self,
        token: NavToken,
        result: AppResult<Vec<RecommendationEntry>>,
    ) {
        if self.is_stale(token) {
            return;
        }
        self.finish_action(UserAction::Content);

        match result {
            Ok(recommendations) => self.content_recommendations = recommendations,
            Err(e) => {
                tracing::warn!(movie_id = %self.movie_id, error = %e, "Content recommendations failed");
                self.notices
                    .push(Notice::error("Error fetching content-based recommendations"));
            }
        }
    }

    /// Apply a collaborative recommendation outcome
    pub fn apply_collaborative(
        &mut self,
        token: NavToken,
        result: AppResult<Vec<RecommendationEntry>>,
    ) {
        if self.is_stale(token) {
            return;
        }
        self.finish_action(UserAction::Collaborative);

        match result {
            Ok(recommendations) => self.collaborative_recommendations = recommendations,
            Err(e) => {
                tracing::warn!(user_id = self.user_id, error = %e, "Collaborative recommendations failed");
                self.notices
                    .push(Notice::error("Error fetching collaborative recommendations"));
            }
        }
    }

    /// Apply the rating submission outcome
    pub fn apply_rating_ack(&mut self, token: NavToken, result: AppResult<()>) {
        if self.is_stale(token) {
            return;
        }
        self.finish_action(UserAction::Rate);

        match result {
            Ok(()) => self.notices.push(Notice::success("Rating Submitted!")),
            Err(e) => {
                tracing::warn!(movie_id = %self.movie_id, error = %e, "Rating submission failed");
                self.notices.push(Notice::error("Failed to submit rating"));
            }
        }
    }

    /// Release the in-flight slot if it still belongs to the finished action
    fn finish_action(&mut self, action: UserAction) {
        if self.in_flight == Some(action) {
            self.in_flight = None;
        }
    }

    /// Drain pending notices for display
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Default for DetailViewState {
    fn default() -> Self {
        Self::new()
    }
}
