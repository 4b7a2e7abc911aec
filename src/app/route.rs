/// Category used when a session is started without one.
pub const FREE_CATEGORY: &str = "free";

/// Screens the client can navigate between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Topic-selection entry point for a category.
    Start { slug: String },
    /// The study wizard itself.
    Study { slug: Option<String> },
    /// Results view shown after a session ends.
    Record { slug: String },
    /// Gift-code redemption requests.
    Tokens,
}

impl Route {
    pub fn start(slug: Option<&str>) -> Self {
        Route::Start {
            slug: slug.unwrap_or(FREE_CATEGORY).to_string(),
        }
    }

    pub fn record(slug: Option<&str>) -> Self {
        Route::Record {
            slug: slug.unwrap_or(FREE_CATEGORY).to_string(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Start { slug } => format!("/q/{}/start", slug),
            Route::Study { slug } => format!("/q/{}", slug.as_deref().unwrap_or(FREE_CATEGORY)),
            Route::Record { slug } => format!("/record/{}", slug),
            Route::Tokens => "/token".to_string(),
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Route::Start { slug } | Route::Record { slug } => Some(slug),
            Route::Study { slug } => slug.as_deref(),
            Route::Tokens => None,
        }
    }
}
