//! App Root Component
//!
//! Tab routing, global providers and the render guard around the content.

use leptos::*;
use leptos_router::*;

use crate::components::{BlockSection, Nav, PostsSection, RenderGuard, Toast};
use crate::pages::{Chat, Trending};
use crate::state::{provide_dashboard_state, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_dashboard_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
                    <RenderGuard>
                        // Only the tab panel switches with the route
                        <Routes>
                            <Route path="/" view=Trending />
                            <Route path="/chat" view=Chat />
                            <Route path="/*any" view=NotFound />
                        </Routes>

                        <BlockSection />
                        <PostsSection />
                    </RenderGuard>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Trending Topics"
            </A>
        </div>
    }
}
