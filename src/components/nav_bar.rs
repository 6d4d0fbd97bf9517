use leptos::prelude::*;

use crate::components::connection_status::ConnectionStatus;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <div class="nav-brand">
                <h1 class="nav-title">"QA Analyzer"</h1>
                <p class="nav-subtitle">"Chat Transcript Quality Scoring"</p>
            </div>
            <nav>
                <ul class="nav-list">
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Dashboard"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/analyze" class="nav-link">"Analyze"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/history" class="nav-link">"History"</a>
                    </li>
                </ul>
            </nav>
            <ConnectionStatus />
        </header>
    }
}
