// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use connect_core::{Category, Role};
use dioxus::prelude::*;

use ui::admin::pages::AdminModerationPage;
use ui::{LoginPage, MemberDashboard, RequireRole, SessionProvider, ToastProvider, use_session};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},

    // Member routes
    #[layout(MemberLayout)]
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]

    // Admin routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminRedirect {},
        #[route("/admin/moderation")]
        AdminModeration {},
        #[route("/admin/moderation/:category")]
        AdminCategory { category: Category },
        #[route("/admin/content")]
        AdminContent {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const MEMBER_ROLES: [Role; 5] = [
    Role::Alumni,
    Role::Student,
    Role::Faculty,
    Role::Employer,
    Role::Institute,
];

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Send `/` to the signed-in user's home, or to the login view.
#[component]
fn Landing() -> Element {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        let target = session
            .current()
            .map(|s| s.role.home_path())
            .unwrap_or("/login");
        nav.replace(target);
    });
    rsx! {}
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}

#[component]
fn MemberLayout() -> Element {
    rsx! {
        RequireRole { allowed: MEMBER_ROLES.to_vec(),
            main { class: "member-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        MemberDashboard {}
    }
}

/// Layout for admin routes with sidebar navigation.
#[component]
fn AdminLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    rsx! {
        RequireRole { allowed: vec![Role::Admin],
            div { class: "admin-layout",
                aside { class: "admin-sidebar",
                    div { class: "sidebar-header",
                        h1 { class: "sidebar-logo", "Alumni Connect" }
                    }
                    nav { class: "sidebar-nav",
                        div { class: "nav-section",
                            span { class: "nav-section-title", "Requests" }
                            Link {
                                to: Route::AdminModeration {},
                                class: "nav-link",
                                active_class: "active",
                                span { "All requests" }
                            }
                            for category in Category::REQUESTS {
                                Link {
                                    key: "{category}",
                                    to: Route::AdminCategory { category },
                                    class: "nav-link nav-link-nested",
                                    active_class: "active",
                                    span { {category.label()} }
                                }
                            }
                        }
                        div { class: "nav-section",
                            span { class: "nav-section-title", "Content" }
                            Link {
                                to: Route::AdminContent {},
                                class: "nav-link",
                                active_class: "active",
                                span { "Jobs, events & campaigns" }
                            }
                        }
                    }
                    div { class: "sidebar-footer",
                        button {
                            class: "nav-link nav-link-muted",
                            onclick: move |_| {
                                session.sign_out();
                                nav.replace(Route::Login {});
                            },
                            "Sign out"
                        }
                    }
                }

                main { class: "admin-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Redirect /admin to /admin/moderation.
#[component]
fn AdminRedirect() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::AdminModeration {});
    });
    rsx! {}
}

#[component]
fn AdminModeration() -> Element {
    rsx! {
        AdminModerationPage {
            title: "Moderation",
            description: "Approve or reject pending verification, group and membership requests",
            categories: Category::REQUESTS.to_vec(),
        }
    }
}

/// Single-category moderation page, remounted when the category changes.
#[component]
fn AdminCategory(category: Category) -> Element {
    rsx! {
        AdminModerationPage {
            key: "{category}",
            title: category.label().to_string(),
            description: "Approve or reject pending requests",
            categories: vec![category],
        }
    }
}

#[component]
fn AdminContent() -> Element {
    rsx! {
        AdminModerationPage {
            title: "Content",
            description: "Review jobs, events and campaigns before they are published",
            categories: Category::CONTENT.to_vec(),
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-description", "Nothing lives at /{path}" }
            Link { to: Route::Landing {}, class: "btn", "Go home" }
        }
    }
}
