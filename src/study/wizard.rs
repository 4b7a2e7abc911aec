//! The three-step study wizard.
//!
//! `JapaneseInput -> EnglishInput -> Review -> (exit)`. Only adjacent moves
//! are representable through [`Step::next`] and [`Step::prev`]; every write to
//! the session goes through [`StudyWizard`].

use crate::app::route::Route;
use crate::config::prefs::Prefs;
use crate::study::api::{ApiError, StudyApi, SubmitResponse};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    JapaneseInput,
    EnglishInput,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::JapaneseInput, Step::EnglishInput, Step::Review];

    pub fn index(self) -> usize {
        match self {
            Step::JapaneseInput => 0,
            Step::EnglishInput => 1,
            Step::Review => 2,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::JapaneseInput => Some(Step::EnglishInput),
            Step::EnglishInput => Some(Step::Review),
            Step::Review => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::JapaneseInput => None,
            Step::EnglishInput => Some(Step::JapaneseInput),
            Step::Review => Some(Step::EnglishInput),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::JapaneseInput => "Japanese",
            Step::EnglishInput => "English",
            Step::Review => "Review",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::JapaneseInput => "日本語で意見を書く",
            Step::EnglishInput => "英語にする",
            Step::Review => "お手本と比べる",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuestion {
    pub topic_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    pub active_question: Option<ActiveQuestion>,
    pub japanese: String,
    pub english: String,
    pub translation: String,
    /// Elapsed seconds in the current session.
    pub age: u32,
    pub step: Step,
    pub error_message: String,
    end_notified: bool,
}

impl StudySession {
    pub fn new() -> Self {
        Self {
            active_question: None,
            japanese: String::new(),
            english: String::new(),
            translation: String::new(),
            age: 0,
            step: Step::JapaneseInput,
            error_message: String::new(),
            end_notified: false,
        }
    }

    pub fn end_notified(&self) -> bool {
        self.end_notified
    }

    fn clear_answers(&mut self) {
        self.japanese.clear();
        self.english.clear();
        self.translation.clear();
        self.age = 0;
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}

/// What a call to [`StudyWizard::advance`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The forward guard is false; nothing was sent.
    Blocked,
    /// The server rejected the answer; `error_message` holds its message.
    Rejected,
    Moved(Step),
    /// The session is over; navigate to the results view.
    Finished(Route),
}

pub struct StudyWizard {
    session: StudySession,
    category_slug: Option<String>,
}

impl StudyWizard {
    pub fn new(category_slug: Option<String>) -> Self {
        Self {
            session: StudySession::new(),
            category_slug,
        }
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step
    }

    #[cfg(test)]
    pub(crate) fn set_step(&mut self, step: Step) {
        self.session.step = step;
    }

    /// Begin a session: remember the category and fetch a topic.
    ///
    /// Returns the route to redirect to when no topic could be fetched.
    /// Failures are logged and never propagated.
    pub async fn mount(&mut self, api: &dyn StudyApi, prefs: &mut Prefs) -> Option<Route> {
        if let Some(slug) = self.category_slug.as_deref() {
            if let Err(e) = prefs.save_prev_category(slug) {
                warn!(slug, error = %e, "failed to save previously studied category");
            }
        }

        match api.get_topic().await {
            Ok(topic) => {
                info!(topic_id = %topic.topic_id, title = %topic.topic_title, "topic loaded");
                self.session.active_question = Some(ActiveQuestion {
                    topic_id: topic.topic_id,
                    title: topic.topic_title,
                    description: topic.topic_description,
                });
                self.session.end_notified = false;
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch topic, leaving study");
                Some(Route::start(self.category_slug.as_deref()))
            }
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.session.step {
            Step::JapaneseInput => !self.session.japanese.is_empty(),
            Step::EnglishInput => !self.session.english.is_empty(),
            Step::Review => true,
        }
    }

    pub fn set_japanese(&mut self, text: String) {
        self.session.japanese = text;
    }

    pub fn set_english(&mut self, text: String) {
        self.session.english = text;
    }

    pub fn tick(&mut self) {
        self.session.age = self.session.age.saturating_add(1);
    }

    /// Run the forward transition for the current step.
    ///
    /// Transport failures from any remote call are returned as-is and leave
    /// the session wherever the transition had got to.
    pub async fn advance(&mut self, api: &dyn StudyApi) -> Result<Advance, ApiError> {
        if !self.can_advance() {
            return Ok(Advance::Blocked);
        }

        let step = self.session.step;
        match step {
            Step::JapaneseInput => {
                let res = api.send_japanese(&self.session.japanese).await?;
                if !self.accept(res) {
                    return Ok(Advance::Rejected);
                }
            }
            Step::EnglishInput => {
                let res = api.send_english(&self.session.english).await?;
                if !self.accept(res) {
                    return Ok(Advance::Rejected);
                }
                let title = self
                    .session
                    .active_question
                    .as_ref()
                    .map(|q| q.title.clone())
                    .unwrap_or_default();
                let translated = api.translate(&self.session.japanese, &title).await?;
                self.session.translation = translated.translation;
                self.notify_end_once(api).await?;
            }
            Step::Review => {
                self.session.clear_answers();
                let route = Route::record(self.category_slug.as_deref());
                info!(route = %route.path(), "study finished");
                return Ok(Advance::Finished(route));
            }
        }

        self.session.error_message.clear();
        // `Review` returned above, so there is always a next step here.
        if let Some(next) = step.next() {
            self.session.step = next;
        }
        debug!(step = self.session.step.index(), "moved forward");
        Ok(Advance::Moved(self.session.step))
    }

    pub fn back(&mut self) {
        match self.session.step {
            Step::JapaneseInput => {}
            Step::EnglishInput => self.session.english.clear(),
            Step::Review => {}
        }
        if let Some(prev) = self.session.step.prev() {
            self.session.step = prev;
        }
    }

    /// Leave the session early. Unsent answers are dropped, but the
    /// end-of-study notification still fires (once per session).
    pub async fn skip(&mut self, api: &dyn StudyApi) -> Result<Route, ApiError> {
        self.session.clear_answers();
        self.notify_end_once(api).await?;
        let route = Route::record(self.category_slug.as_deref());
        info!(route = %route.path(), "study skipped");
        Ok(route)
    }

    async fn notify_end_once(&mut self, api: &dyn StudyApi) -> Result<(), ApiError> {
        if self.session.end_notified {
            return Ok(());
        }
        let Some(question) = self.session.active_question.as_ref() else {
            debug!("no topic loaded, skipping end-of-study notification");
            return Ok(());
        };
        api.end_study(&question.topic_id).await?;
        self.session.end_notified = true;
        Ok(())
    }

    fn accept(&mut self, res: SubmitResponse) -> bool {
        if res.success {
            return true;
        }
        self.session.error_message = res.message.unwrap_or_default();
        false
    }
}
