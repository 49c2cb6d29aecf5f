//! Moderation page - one queue section per category.

use api::ApiError;
use connect_core::{Category, Outcome, QueueView, RequestKey};
use dioxus::prelude::*;

use crate::admin::QueueSection;
use crate::{use_api, use_session, use_toasts};

/// Props for AdminModerationPage component.
#[derive(Props, Clone, PartialEq)]
pub struct AdminModerationPageProps {
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
}

/// Loads every category concurrently on mount, then lets the admin approve
/// or reject rows. A decided row is removed only after the server accepts it.
#[component]
pub fn AdminModerationPage(props: AdminModerationPageProps) -> Element {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let categories = props.categories.clone();

    let mut views = use_signal(|| {
        categories
            .iter()
            .map(|category| QueueView::new(*category))
            .collect::<Vec<_>>()
    });

    // Initial load
    let load_api = api.clone();
    let load_session = session.clone();
    let _initial = use_resource(move || {
        let api = load_api.clone();
        let session = load_session.clone();
        let categories = categories.clone();
        async move {
            tracing::debug!(count = categories.len(), "loading moderation queues");
            for (category, result) in api.load_all(&categories).await {
                if matches!(result, Err(ApiError::Unauthorized)) {
                    session.expire();
                }
                with_view(&mut views, category, |view| {
                    view.finish_load(result.map_err(|e| e.user_message()))
                });
            }
        }
    });

    let refresh_api = api.clone();
    let refresh_session = session.clone();
    let on_refresh = use_callback(move |category: Category| {
        with_view(&mut views, category, QueueView::start_loading);
        let api = refresh_api.clone();
        let session = refresh_session.clone();
        spawn(async move {
            let result = api.load_pending(category).await;
            if matches!(result, Err(ApiError::Unauthorized)) {
                session.expire();
            }
            with_view(&mut views, category, |view| {
                view.finish_load(result.map_err(|e| e.user_message()))
            });
        });
    });

    let decide_api = api.clone();
    let decide_session = session.clone();
    let on_decide = use_callback(
        move |(category, key, outcome): (Category, RequestKey, Outcome)| {
            let started =
                with_view(&mut views, category, |view| view.begin_decision(&key)).unwrap_or(false);
            if !started {
                return;
            }
            let api = decide_api.clone();
            let session = decide_session.clone();
            spawn(async move {
                let result = api.decide(category, &key, outcome).await;
                if matches!(result, Err(ApiError::Unauthorized)) {
                    session.expire();
                }
                let notice = with_view(&mut views, category, |view| {
                    view.finish_decision(&key, outcome, result.map_err(|e| e.user_message()))
                });
                if let Some(notice) = notice {
                    toasts.push(notice);
                }
            });
        },
    );

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{props.title}" }
                    p { class: "page-description", "{props.description}" }
                }
            }

            for view in views().into_iter() {
                {
                    let category = view.category();
                    rsx! {
                        QueueSection {
                            key: "{category}",
                            view,
                            on_decide: move |(key, outcome): (RequestKey, Outcome)| {
                                on_decide.call((category, key, outcome))
                            },
                            on_refresh: move |_| on_refresh.call(category),
                        }
                    }
                }
            }
        }
    }
}

fn with_view<R>(
    views: &mut Signal<Vec<QueueView>>,
    category: Category,
    f: impl FnOnce(&mut QueueView) -> R,
) -> Option<R> {
    views
        .write()
        .iter_mut()
        .find(|view| view.category() == category)
        .map(f)
}
