//! Searchable emoji grid.

use leptos::prelude::*;

use crate::emoji::{self, EmojiSelection};

/// Emoji picker with a search box and a grid of glyph buttons.
///
/// Calls `on_select` with the chosen glyph; the picker never closes itself.
#[component]
pub fn EmojiPicker(on_select: Callback<EmojiSelection>) -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="emoji-picker">
            <input
                class="emoji-picker__search"
                type="search"
                placeholder="Search"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="emoji-picker__grid">
                {move || {
                    let hits = query.with(|q| emoji::search(q));
                    if hits.is_empty() {
                        return view! { <div class="emoji-picker__empty">"No emoji found"</div> }.into_any();
                    }

                    hits.into_iter()
                        .map(|entry: &'static emoji::Emoji| {
                            view! {
                                <button
                                    class="emoji-picker__item"
                                    title=entry.name()
                                    on:click=move |_| on_select.run(EmojiSelection::from(entry))
                                >
                                    {entry.as_str()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
