use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use ui::services::Navigator;
use ui::{PendingVerification, SignUpService};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    SignUp {},
    #[route("/auth/pending-verification")]
    PendingVerificationPage {},
}

/// Maps post-signup paths onto the app's routes
struct RouteNavigator(dioxus::router::prelude::Navigator);

impl Navigator for RouteNavigator {
    fn navigate_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.0.push(route);
            }
            Err(_) => warn!("[Router] No route matches {}, staying on the current page", path),
        }
    }
}

#[component]
fn SignUp() -> Element {
    let navigator = RouteNavigator(use_navigator());

    rsx! {
        SignUpService {
            on_navigate: move |path: String| navigator.navigate_to(&path)
        }
    }
}

#[component]
fn PendingVerificationPage() -> Element {
    rsx! {
        PendingVerification {}
    }
}
