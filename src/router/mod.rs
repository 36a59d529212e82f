//! Client-side router.
//!
//! Resolves the document location to a [`Route`], restarts the entrance
//! animation, renders the view into the main container and keeps the index
//! view in sync with search input and sort toggles.
//!
//! Every navigation gets a token. Rendering is split into [`Router::begin`]
//! (synchronous, immediately visible) and [`Router::commit`] (after the async
//! view work); a commit whose token is no longer current is dropped, so the
//! latest navigation always wins.

mod route;

use std::sync::Arc;

pub use route::{Resolved, Route};

use crate::config::{AddressScheme, IndexConfig};
use crate::dom::Document;
use crate::engine::{self, IndexQuery};
use crate::helpers::{in_app_location, same_origin_location};
use crate::views::{self, Views, RESULTS_ID, SEARCH_ID, SORT_TOGGLE_ID};

/// A navigation that has been started but not yet committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub token: u64,
    pub route: Route,
}

/// Live state of the index embedded in the current view
#[derive(Debug, Clone)]
struct IndexSession {
    config: IndexConfig,
    query: IndexQuery,
}

pub struct Router<D: Document> {
    document: D,
    views: Arc<Views>,
    token: u64,
    current: Option<Route>,
    index: Option<IndexSession>,
}

impl<D: Document> Router<D> {
    pub fn new(document: D, views: Arc<Views>) -> Self {
        Self {
            document,
            views,
            token: 0,
            current: None,
            index: None,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn views(&self) -> Arc<Views> {
        self.views.clone()
    }

    /// Route of the last committed navigation
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    fn scheme(&self) -> AddressScheme {
        self.views.config().addressing
    }

    fn container(&self) -> String {
        self.views.config().container_id.clone()
    }

    /// Parse the current location, normalizing the root URL in place
    pub fn resolve(&mut self) -> Route {
        let location = in_app_location(&self.document.location());
        let config = self.views.config();
        let resolved = Route::parse(&location, config.addressing, config.index);

        if let Some(normalized) = resolved.normalize {
            self.document.replace_state(&normalized);
        }
        resolved.route
    }

    /// Start a navigation to the current location.
    ///
    /// Marks the active nav link, clears the container, restarts the
    /// entrance animation and shows the view's loading placeholder.
    pub fn begin(&mut self) -> Navigation {
        let route = self.resolve();
        self.token += 1;
        tracing::debug!("Navigation {} -> {:?}", self.token, route);

        let active = route.nav_href(self.scheme());
        for href in self.document.nav_links() {
            let is_active = href == active;
            self.document.set_nav_active(&href, is_active);
        }

        let container = self.container();
        let animation = self.views.config().animation_class.clone();
        self.document.set_inner_html(&container, "");
        self.document.remove_class(&container, &animation);
        // Reading layout between removal and re-adding restarts the CSS animation
        let _ = self.document.offset_width(&container);
        let placeholder = self.views.placeholder(&route);
        self.document.set_inner_html(&container, &placeholder);
        self.document.add_class(&container, &animation);

        self.index = match &route {
            Route::Index(config) => Some(IndexSession::new(*config)),
            _ if route.has_index() => Some(IndexSession::new(self.views.config().index)),
            _ => None,
        };
        self.current = Some(route.clone());

        Navigation {
            token: self.token,
            route,
        }
    }

    /// Inject a rendered view; `false` when a newer navigation superseded it
    pub fn commit(&mut self, navigation: &Navigation, html: &str) -> bool {
        if navigation.token != self.token {
            tracing::debug!(
                "Dropping stale render of {:?} (token {}, current {})",
                navigation.route,
                navigation.token,
                self.token
            );
            return false;
        }

        let container = self.container();
        self.document.set_inner_html(&container, html);

        // Input that arrived while the view was loading still applies
        if let Some(session) = &self.index {
            if session.query != IndexQuery::new(session.config.grouping) {
                let text = session.query.text.clone();
                self.document.set_input_value(SEARCH_ID, &text);
                self.refresh_index();
            }
        }
        true
    }

    /// Resolve, render and commit the current location
    pub async fn navigate(&mut self) -> Route {
        let navigation = self.begin();
        let html = self.views.render(&navigation.route).await;
        self.commit(&navigation, &html);
        navigation.route
    }

    /// Initial page load
    pub async fn start(&mut self) -> Route {
        self.navigate().await
    }

    /// Back/forward navigation
    pub async fn on_pop_state(&mut self) -> Route {
        self.navigate().await
    }

    /// Handle a click on a link.
    ///
    /// Same-origin links are pushed onto history and rendered in place;
    /// returns `false` when the host should let the browser follow the link.
    pub async fn intercept_link(&mut self, href: &str) -> bool {
        let current = self.document.location();
        let Some(location) = same_origin_location(&current, href) else {
            return false;
        };

        self.document.push_state(&location);
        self.navigate().await;
        true
    }

    /// Search box input; recomputes the results synchronously
    pub fn on_search_input(&mut self, text: &str) {
        let Some(session) = self.index.as_mut() else {
            return;
        };
        session.query.text = text.to_string();
        self.refresh_index();
    }

    /// Sort toggle click
    pub fn on_sort_toggle(&mut self) {
        let Some(session) = self.index.as_mut() else {
            return;
        };
        if !session.config.sort_toggle {
            return;
        }
        session.query.sort = session.query.sort.toggled();
        self.refresh_index();
    }

    fn refresh_index(&mut self) {
        let Some(session) = &self.index else {
            return;
        };

        let catalog = self.views.catalog().cached();
        let outcome = engine::run(catalog.as_deref(), &session.query);
        let html = views::results_html(self.views.config(), &outcome);
        self.document.set_inner_html(RESULTS_ID, &html);

        if session.config.sort_toggle {
            self.document
                .set_inner_html(SORT_TOGGLE_ID, views::toggle_label(session.query.sort));
        }
    }
}

impl IndexSession {
    fn new(config: IndexConfig) -> Self {
        Self {
            config,
            query: IndexQuery::new(config.grouping),
        }
    }
}
