use crate::protocol::ClientSettings;
use crate::state::GlobalState;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle "workspace/didChangeConfiguration" notification.
///
/// The client pushes `{ "headlink": { "linkFormat": ... } }`; the new
/// format takes effect immediately and is persisted through the settings
/// store on every change.
pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    let serde_json::Value::Object(map) = params.settings else {
        return;
    };
    let Some(section) = map.get("headlink") else {
        return;
    };

    let settings = match serde_json::from_value::<ClientSettings>(section.clone()) {
        Ok(settings) => settings,
        Err(e) => {
            client
                .log_message(
                    MessageType::ERROR,
                    format!("Failed to parse updated settings: {}", e),
                )
                .await;
            return;
        }
    };

    let Some(link_format) = settings.link_format else {
        return;
    };

    let mut controller_lock = state.controller.write().await;
    let Some(controller) = &mut *controller_lock else {
        return;
    };

    match controller.set_link_format(&link_format) {
        Ok(()) => {
            client
                .log_message(
                    MessageType::INFO,
                    format!("Link format updated: {}", link_format),
                )
                .await;
        }
        Err(e) => {
            client
                .log_message(
                    MessageType::ERROR,
                    format!("Failed to persist settings: {}", e),
                )
                .await;
        }
    }
}
