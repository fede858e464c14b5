use dioxus::prelude::*;

use crate::components::forms::SignUpForm;
use crate::features::sign_up::{
    run_federated_placeholder, submit_sign_up, FederatedProvider, SignUpAction, SignUpState,
};
use crate::services::{AuthServiceHandle, HttpAuthService, SignUpConfig};
use crate::{console_info, console_warn};

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

#[derive(Props, PartialEq, Clone)]
pub struct SignUpServiceProps {
    /// Receives the post-signup route once the account exists
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn SignUpService(props: SignUpServiceProps) -> Element {
    let mut state = use_signal(SignUpState::default);
    let config = use_hook(SignUpConfig::load);

    // Host applications may provide their own collaborator through context
    let auth = use_hook(|| {
        try_consume_context::<AuthServiceHandle>()
            .unwrap_or_else(|| AuthServiceHandle::new(HttpAuthService::from_config(&config)))
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SignUpAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_navigate = props.on_navigate;
    let route = config.post_signup_route.clone();
    let on_submit = move |_: ()| {
        let Some(request) = state.with_mut(|s| s.begin_submission()) else {
            return;
        };

        console_info!("[SignUp] Submitting sign up for {}", request.email);
        let auth = auth.clone();
        let route = route.clone();
        spawn(async move {
            if let Err(e) = submit_sign_up(&*auth.0, &on_navigate, &route, request, |action| {
                dispatch.call(action)
            })
            .await
            {
                console_warn!("[SignUp] Sign up failed: {}", e);
            }
        });
    };

    let delay_ms = config.federated_delay_ms;
    let on_federated = move |provider: FederatedProvider| {
        spawn(async move {
            run_federated_placeholder(
                provider,
                gloo_timers::future::TimeoutFuture::new(delay_ms),
                |action| dispatch.call(action),
            )
            .await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }

        div {
            class: "sign-up-container",
            h1 {
                class: "sign-up-title",
                "Sign Up"
            }
            SignUpForm {
                state: state,
                dispatch: dispatch,
                on_submit: on_submit,
                on_federated: on_federated
            }
        }
    }
}

/// Shown after sign-up while the user confirms their email address
#[component]
pub fn PendingVerification() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }

        div {
            class: "sign-up-container",
            h1 {
                class: "sign-up-title",
                "Check your inbox"
            }
            p {
                class: "pending-verification-notice",
                "We sent you a confirmation link. Open it to verify your email address, then sign in."
            }
        }
    }
}
