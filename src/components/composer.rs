//! One-to-one chat message composer.

use leptos::prelude::*;

use crate::components::attachment_chip::AttachmentChip;
use crate::components::emoji_picker::EmojiPicker;
use crate::config::{ComposerConfig, PickerKind};
use crate::emoji::EmojiSelection;
use crate::i18n::{self, Translations};
use crate::net::transport::{ChatChannel, SendOutcome, SharedTransport};
use crate::net::types::Participants;
use crate::state::attachment::Attachment;
use crate::state::composer::{ComposerState, KeyIntent, ToolRow};
use crate::util::outside_click::hit_test;

/// Message composer: text area, attach/emoji tool rows, and attachment chip.
///
/// Sends the draft as a `chat_message` event on the send key (without Shift)
/// or the send button. Without a `transport` sending only clears the draft.
/// The staged attachment is shown and removable but never sent.
#[component]
pub fn ChatComposer(
    participants: Participants,
    #[prop(optional)] transport: Option<SharedTransport>,
    #[prop(optional)] config: ComposerConfig,
    #[prop(optional)] translations: Translations,
) -> impl IntoView {
    let state = RwSignal::new(ComposerState::default());
    let channel = StoredValue::new(ChatChannel::new(participants, transport, &config));
    let send_key = config.send_key.clone();
    let name_limit = config.name_display_limit;
    let rows = config.textarea_rows.to_string();
    let image_accept = config.accept_for(PickerKind::Image).to_owned();
    let file_accept = config.accept_for(PickerKind::File).to_owned();
    let placeholder = translations.text(i18n::SEND_A_MESSAGE).to_owned();
    let send_label = translations.text(i18n::SEND).to_owned();

    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
    let toolbar_ref = NodeRef::<leptos::html::Ul>::new();
    let emoji_ref = NodeRef::<leptos::html::Div>::new();
    let image_input_ref = NodeRef::<leptos::html::Input>::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Only re-render the button row when the row itself changes, not on every
    // keystroke in the draft.
    let tool_row = Memo::new(move |_| state.with(ComposerState::tool_row));

    // One listener for the component's lifetime; removed on unmount.
    let outside_click = window_event_listener(leptos::ev::pointerdown, move |ev| {
        let target = ev.target();
        let toolbar: Option<web_sys::Node> = toolbar_ref.get_untracked().map(Into::into);
        let emoji: Option<web_sys::Node> = emoji_ref.get_untracked().map(Into::into);
        let toolbar_hit = hit_test(toolbar.as_ref(), target.as_ref());
        let emoji_hit = hit_test(emoji.as_ref(), target.as_ref());
        state.update(|s| s.dismiss_outside(toolbar_hit, emoji_hit));
    });
    on_cleanup(move || outside_click.remove());

    let do_send = move || {
        if let Some(outcome) = state.try_update(|s| channel.with_value(|c| s.send(c))) {
            if outcome != SendOutcome::Skipped {
                log::debug!("composer send: {outcome:?}");
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if KeyIntent::classify(&ev.key(), ev.shift_key(), &send_key) == KeyIntent::Send {
            ev.prevent_default();
            do_send();
        }
    };

    let on_emoji = Callback::new(move |selection: EmojiSelection| {
        let live_caret = textarea_ref
            .get_untracked()
            .and_then(|el| el.selection_start().ok().flatten())
            .unwrap_or(0) as usize;
        state.update(|s| {
            s.insert_emoji(&selection.native, live_caret);
        });
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let staged = input.files().and_then(|files| files.get(0)).map(|file| Attachment::from(&file));
        state.update(|s| s.stage_attachment(staged));
    };

    let open_picker = move |picker: PickerKind| {
        let input = match picker {
            PickerKind::Image => image_input_ref.get_untracked(),
            PickerKind::File => file_input_ref.get_untracked(),
        };
        if let Some(input) = input {
            input.click();
        }
    };

    let send_button = move || {
        let label = send_label.clone();
        view! {
            <ul class="nk-chat-editor-tools g-2">
                <li>
                    <button class="btn btn-send-bg" on:click=move |_| do_send()>
                        {label}
                    </button>
                </li>
            </ul>
        }
    };

    let tools = move || match tool_row.get() {
        ToolRow::Attach => view! {
            <ul class="nk-chat-editor-tools g-2" node_ref=toolbar_ref>
                <li>
                    <button
                        class="cursor-pointer hoverable clip-image-attach-file"
                        on:click=move |ev| {
                            ev.prevent_default();
                            open_picker(PickerKind::Image);
                        }
                    >
                        <em class="icon ni ni-img-fill"></em>
                    </button>
                    <input
                        type="file"
                        class="clip-image-input-none"
                        accept=image_accept.clone()
                        node_ref=image_input_ref
                        on:change=on_file_change
                    />
                </li>
                <li>
                    <button
                        class="cursor-pointer hoverable clip-image-attach-file"
                        on:click=move |ev| {
                            ev.prevent_default();
                            open_picker(PickerKind::File);
                        }
                    >
                        <em class="icon ni ni-clip"></em>
                    </button>
                    <input
                        type="file"
                        class="clip-image-input-none"
                        accept=file_accept.clone()
                        node_ref=file_input_ref
                        on:change=on_file_change
                    />
                </li>
                <li>
                    <button class="btn btn-sm" on:click=move |_| state.update(|s| s.set_toolbar_open(false))>
                        <em class="icon ni ni-cross-sm text-danger"></em>
                    </button>
                </li>
            </ul>
            {send_button()}
        }
        .into_any(),
        ToolRow::Emoji => view! {
            <ul class="nk-chat-editor-tools g-2">
                <li>
                    <div class="emoji-mart" node_ref=emoji_ref>
                        <EmojiPicker on_select=on_emoji/>
                    </div>
                    <button class="btn btn-sm" on:click=move |_| state.update(|s| s.set_emoji_open(false))>
                        <em class="icon ni ni-cross-sm text-danger"></em>
                    </button>
                </li>
            </ul>
            {send_button()}
        }
        .into_any(),
        ToolRow::Collapsed => view! {
            <ul class="nk-chat-editor-tools g-2">
                <li>
                    <button class="btn btn-sm" on:click=move |_| state.update(|s| s.set_toolbar_open(true))>
                        <em class="icon ni ni-more-h-alt"></em>
                    </button>
                </li>
                <li>
                    <button class="btn btn-sm" on:click=move |_| state.update(|s| s.set_emoji_open(true))>
                        <em class="icon ni ni-happy"></em>
                    </button>
                </li>
            </ul>
            {send_button()}
        }
        .into_any(),
    };

    view! {
        <div class="chat-composer">
            <div class="nk-chat-editor">
                <div class="chat-editor-fram d-flex flex-column mb-2">
                    <div class="nk-chat-editor-form">
                        <div class="form-control-wrap">
                            <textarea
                                class="form-control form-control-simple no-resize"
                                rows=rows
                                placeholder=placeholder
                                node_ref=textarea_ref
                                prop:value=move || state.with(|s| s.draft.clone())
                                on:input=move |ev| state.update(|s| s.set_draft(event_target_value(&ev)))
                                on:keydown=on_keydown
                            ></textarea>
                        </div>
                    </div>
                    <div class="row">
                        <div class="col-6 d-flex align-items-center">
                            <AttachmentChip state=state name_limit=name_limit/>
                        </div>
                        <div class="col-6">
                            <div class="d-flex justify-content-end">{tools}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
