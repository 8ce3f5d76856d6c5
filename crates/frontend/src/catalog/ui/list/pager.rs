use leptos::prelude::*;

/// Items of the windowed pager row.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PagerItem {
    Prev,
    Num(usize),
    Dots,
    Next,
}

/// Pages shown fully up to this count; beyond it the row windows around
/// the current page with ellipses.
const FULL_WINDOW: usize = 7;

fn pager_items(current: usize, pages: usize) -> Vec<PagerItem> {
    let mut items = vec![PagerItem::Prev];

    if pages <= FULL_WINDOW {
        items.extend((1..=pages).map(PagerItem::Num));
    } else {
        items.push(PagerItem::Num(1));

        let window = 2;
        let start = current.saturating_sub(window).max(2);
        let end = (current + window).min(pages - 1);

        if start > 2 {
            items.push(PagerItem::Dots);
        }
        items.extend((start..=end).map(PagerItem::Num));
        if end < pages - 1 {
            items.push(PagerItem::Dots);
        }

        items.push(PagerItem::Num(pages));
    }

    items.push(PagerItem::Next);
    items
}

/// Numbered pagination row with prev/next arrows, windowed around the
/// current page.
#[component]
pub fn Pager(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] pages: Signal<usize>,
    /// Called with the requested (already valid) 1-based page.
    on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pgBtns">
            {move || {
                let cur = current.get();
                let total = pages.get();
                pager_items(cur, total)
                    .into_iter()
                    .map(|item| match item {
                        PagerItem::Prev => {
                            view! {
                                <button
                                    class="pgBtn"
                                    type="button"
                                    disabled={cur <= 1}
                                    on:click=move |_| {
                                        if cur > 1 {
                                            on_page.run(cur - 1);
                                        }
                                    }
                                >
                                    "←"
                                </button>
                            }
                                .into_any()
                        }
                        PagerItem::Next => {
                            view! {
                                <button
                                    class="pgBtn"
                                    type="button"
                                    disabled={cur >= total}
                                    on:click=move |_| {
                                        if cur < total {
                                            on_page.run(cur + 1);
                                        }
                                    }
                                >
                                    "→"
                                </button>
                            }
                                .into_any()
                        }
                        PagerItem::Dots => view! { <span class="dots">"…"</span> }.into_any(),
                        PagerItem::Num(p) => {
                            view! {
                                <button
                                    class="pgBtn num"
                                    type="button"
                                    class:active={p == cur}
                                    on:click=move |_| on_page.run(p)
                                >
                                    {p}
                                </button>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(items: &[PagerItem]) -> Vec<isize> {
        // dots as -1 for compact assertions
        items
            .iter()
            .filter_map(|i| match i {
                PagerItem::Num(p) => Some(*p as isize),
                PagerItem::Dots => Some(-1),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_show_every_number() {
        let items = pager_items(2, 5);
        assert_eq!(nums(&items), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn long_ranges_window_around_the_current_page() {
        let items = pager_items(10, 20);
        assert_eq!(nums(&items), [1, -1, 8, 9, 10, 11, 12, -1, 20]);
    }

    #[test]
    fn edges_drop_the_unneeded_dots() {
        assert_eq!(nums(&pager_items(1, 20)), [1, 2, 3, -1, 20]);
        assert_eq!(nums(&pager_items(20, 20)), [1, -1, 18, 19, 20]);
    }
}
