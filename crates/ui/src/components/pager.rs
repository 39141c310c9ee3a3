//! Client-side page controls for a fetched list

use dioxus::prelude::*;
use waconsole_core::ClientPager;
use waconsole_core::paging::PAGE_SIZES;

use crate::components::inputs::{Select, SelectOption};
use crate::i18n::{Text, t};
use crate::state::use_app;

#[derive(Props, Clone, PartialEq)]
pub struct ClientPagerBarProps {
    /// Pager state owned by the page
    pub pager: Signal<ClientPager>,
    /// Number of records after search filtering
    pub total: usize,
}

/// "Showing x-y of n", page size select and previous/next buttons
#[component]
pub fn ClientPagerBar(props: ClientPagerBarProps) -> Element {
    let app = use_app();
    let lang = app.language();
    let mut pager = props.pager;
    let total = props.total;

    let mut state = pager.read().clone();
    state.clamp(total);
    let total_pages = state.total_pages(total);
    let summary = match state.visible_range(total) {
        Some((first, last)) => format!(
            "{} {}-{} {} {}",
            t(lang, Text::Showing),
            first,
            last,
            t(lang, Text::Of),
            total
        ),
        None => t(lang, Text::NoRecords).to_string(),
    };

    let page_label = format!(
        "{} {} / {}",
        t(lang, Text::Page),
        state.page(),
        total_pages.max(1)
    );

    let size_options: Vec<SelectOption> = PAGE_SIZES
        .iter()
        .map(|size| SelectOption::new(size.to_string(), size.to_string()))
        .collect();

    rsx! {
        div {
            class: "pager",

            span { class: "pager-summary", "{summary}" }

            div {
                class: "pager-size",
                Select {
                    label: t(lang, Text::PageSize).to_string(),
                    value: state.page_size().to_string(),
                    options: size_options,
                    on_change: move |v: String| {
                        if let Ok(size) = v.parse::<usize>() {
                            pager.write().set_page_size(size);
                        }
                    },
                }
            }

            div {
                class: "pager-buttons",
                button {
                    class: "btn btn-secondary",
                    disabled: !state.has_previous(),
                    onclick: move |_| {
                        let mut pager = pager.write();
                        pager.clamp(total);
                        pager.previous();
                    },
                    {t(lang, Text::Previous)}
                }
                span {
                    class: "pager-page",
                    "{page_label}"
                }
                button {
                    class: "btn btn-secondary",
                    disabled: !state.has_next(total),
                    onclick: move |_| {
                        let mut pager = pager.write();
                        pager.clamp(total);
                        pager.next(total);
                    },
                    {t(lang, Text::Next)}
                }
            }
        }
    }
}
