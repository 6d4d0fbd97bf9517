use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::nav_bar::NavBar;
use crate::config::ApiConfig;
use crate::pages::analysis_detail::AnalysisDetailPage;
use crate::pages::analyze::AnalyzePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::HistoryPage;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    tracing::info!("Using analysis backend at {}", config.base_url);
    provide_context(config);

    view! {
        <Router>
            <style>{include_str!("app.css")}</style>
            <div class="app-layout">
                <NavBar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/analyze") view=AnalyzePage />
                        <Route path=path!("/history") view=HistoryPage />
                        <Route path=path!("/analyses/:id") view=AnalysisDetailPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Client configuration provided by [`App`]. Falls back to the defaults when
/// rendered outside it.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

/// A client for the configured backend.
pub fn use_api_client() -> ApiClient {
    ApiClient::new(&use_api_config())
}
