//! Page navigation for the notes list.
//!
//! DESIGN
//! ======
//! Shows a window of pages around the current one, the first and last page,
//! and an ellipsis for each skipped run. A gap of exactly one page shows that
//! page instead of an ellipsis.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Pages shown around the current page.
pub const PAGE_RANGE: u32 = 5;
/// Pages always shown at each end.
pub const MARGIN_PAGES: u32 = 1;

/// One rendered slot in the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the page strip for `current` out of `total` pages.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= PAGE_RANGE + 2 * MARGIN_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(PAGE_RANGE / 2).clamp(1, total - PAGE_RANGE + 1);
    let end = start + PAGE_RANGE - 1;

    let shown: Vec<u32> = (1..=total)
        .filter(|&p| p <= MARGIN_PAGES || p > total - MARGIN_PAGES || (start..=end).contains(&p))
        .collect();

    let mut items = Vec::with_capacity(shown.len() + 2);
    let mut prev: Option<u32> = None;
    for page in shown {
        if let Some(prev) = prev {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
        }
        items.push(PageItem::Page(page));
        prev = Some(page);
    }
    items
}

/// Previous/next controls with numbered page links.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |target: u32| {
        if target != page.get_untracked() && (1..=total_pages.get_untracked()).contains(&target) {
            on_change.run(target);
        }
    };

    view! {
        <nav class="pagination" aria-label="Notes pages">
            <button
                class="pagination__nav"
                disabled=move || page.get() <= 1
                on:click=move |_| go(page.get_untracked().saturating_sub(1))
                aria-label="Previous page"
            >
                "←"
            </button>
            <ul class="pagination__list">
                {move || {
                    let current = page.get();
                    page_items(current, total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                view! {
                                    <li class="pagination__item" class:pagination__item--active={n == current}>
                                        <button class="pagination__link" on:click=move |_| go(n)>
                                            {n}
                                        </button>
                                    </li>
                                }
                                    .into_any()
                            }
                            PageItem::Ellipsis => {
                                view! { <li class="pagination__item pagination__item--break">"..."</li> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <button
                class="pagination__nav"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| go(page.get_untracked() + 1)
                aria-label="Next page"
            >
                "→"
            </button>
        </nav>
    }
}
