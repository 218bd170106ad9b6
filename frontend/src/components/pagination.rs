use crate::utils::pagination::{page_items, range_label, total_pages, PageItem};
use leptos::*;

const PAGER_BUTTON: &str = "min-w-[2.25rem] rounded-md border border-border px-2 py-1 text-sm disabled:opacity-40";

/// Page controls for a client-side paginated table. `page` is 1-based and owned by the caller.
#[component]
pub fn Pager(
    page: RwSignal<usize>,
    #[prop(into)] total: Signal<usize>,
    page_size: usize,
    #[prop(optional)] show_range: bool,
) -> impl IntoView {
    let pages = move || total_pages(total.get(), page_size);
    let current = move || page.get().clamp(1, pages());

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 mt-4">
            <div class="text-sm text-fg-muted">
                {move || show_range.then(|| range_label(current(), page_size, total.get()))}
            </div>
            <div class="flex items-center gap-1">
                <button
                    type="button"
                    class=PAGER_BUTTON
                    aria-label="Primera página"
                    disabled=move || current() == 1
                    on:click=move |_| page.set(1)
                >
                    "⏮"
                </button>
                <button
                    type="button"
                    class=PAGER_BUTTON
                    aria-label="Anterior"
                    disabled=move || current() == 1
                    on:click=move |_| page.set(current().saturating_sub(1).max(1))
                >
                    "◀"
                </button>
                {move || {
                    page_items(current(), pages())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Ellipsis => view! { <span class="px-1 text-fg-muted">"…"</span> }.into_view(),
                            PageItem::Page(n) => {
                                let active = n == current();
                                view! {
                                    <button
                                        type="button"
                                        class=PAGER_BUTTON
                                        class:bg-action-primary-bg=active
                                        class:text-action-primary-text=active
                                        aria-current=active.then_some("page")
                                        on:click=move |_| page.set(n)
                                    >
                                        {n}
                                    </button>
                                }
                                .into_view()
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class=PAGER_BUTTON
                    aria-label="Siguiente"
                    disabled=move || current() == pages()
                    on:click=move |_| page.set((current() + 1).min(pages()))
                >
                    "▶"
                </button>
                <button
                    type="button"
                    class=PAGER_BUTTON
                    aria-label="Última página"
                    disabled=move || current() == pages()
                    on:click=move |_| page.set(pages())
                >
                    "⏭"
                </button>
            </div>
        </div>
    }
}
