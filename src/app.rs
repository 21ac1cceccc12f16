//! Browser entry point that mounts a standalone composer.
//!
//! The host page calls `mount_composer` with the two conversation
//! participants, the socket path, and optional JSON for config and
//! translations. Malformed JSON falls back to the defaults with a warning.

#[cfg(feature = "hydrate")]
use std::sync::Arc;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::composer::ChatComposer;
#[cfg(feature = "hydrate")]
use crate::config::ComposerConfig;
#[cfg(feature = "hydrate")]
use crate::i18n::Translations;
#[cfg(feature = "hydrate")]
use crate::net::socket_client::{socket_url, spawn_socket_client};
#[cfg(feature = "hydrate")]
use crate::net::transport::SharedTransport;
#[cfg(feature = "hydrate")]
use crate::net::types::Participants;

/// Install logging, connect the socket, and mount the composer on `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_composer(
    user_id: String,
    partner_id: String,
    socket_path: String,
    config_json: Option<String>,
    translations_json: Option<String>,
) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // A second mount on the same page finds the logger already installed.
        log::debug!("console logger not reinstalled: {e}");
    }

    let config = config_json
        .map(|raw| {
            ComposerConfig::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{e}; using default composer config");
                ComposerConfig::default()
            })
        })
        .unwrap_or_default();
    let translations = translations_json
        .map(|raw| {
            Translations::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{e}; using English");
                Translations::english()
            })
        })
        .unwrap_or_default();

    let participants = Participants::new(user_id, partner_id);
    let transport: SharedTransport = Arc::new(spawn_socket_client(socket_url(&socket_path)));
    log::info!("mounting composer for {} -> {}", participants.user_id, participants.partner_id);

    leptos::mount::mount_to_body(move || {
        view! {
            <ChatComposer
                participants=participants
                transport=transport
                config=config
                translations=translations
            />
        }
    });
}
