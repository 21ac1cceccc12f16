//! Preview chip for the staged attachment.

use leptos::prelude::*;

use crate::state::attachment::AttachmentIcon;
use crate::state::composer::ComposerState;

/// Icon plus truncated file name of the staged attachment.
///
/// Hovering the icon swaps it for a remove affordance; clicking that clears
/// the attachment. Renders nothing when no file is staged.
#[component]
pub fn AttachmentChip(state: RwSignal<ComposerState>, name_limit: usize) -> impl IntoView {
    let icon = move || state.with(ComposerState::attachment_icon);
    let name = move || {
        state.with(|s| {
            s.attachment
                .as_ref()
                .map(|a| a.display_name(name_limit))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || icon().is_some()>
            <div class="file-wait-upload-box">
                <span
                    on:mouseenter=move |_| state.update(|s| s.set_attachment_hovered(true))
                    on:mouseleave=move |_| state.update(|s| s.set_attachment_hovered(false))
                >
                    {move || {
                        icon().map(|icon| {
                            let removable = icon == AttachmentIcon::Remove;
                            view! {
                                <em
                                    class=icon.css_class()
                                    on:click=move |_| {
                                        if removable {
                                            state.update(ComposerState::remove_attachment);
                                        }
                                    }
                                ></em>
                            }
                        })
                    }}
                </span>
                <small>" " {name}</small>
            </div>
        </Show>
    }
}
