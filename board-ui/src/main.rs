use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use board_ui::{initial_page_title, read_server_data, set_document_title, ShowPostPage};
use shared_types::{ServerData, Session};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let server_data = use_hook(|| match read_server_data() {
        Ok(data) => Some(data),
        Err(e) => {
            dioxus_logger::tracing::error!("Failed to read server data: {}", e);
            None
        }
    });

    let session = server_data
        .as_ref()
        .map(|data| data.session.clone())
        .unwrap_or_else(Session::anonymous);
    use_context_provider(|| session);

    // once per mount; later titles come from saves
    use_hook(|| {
        if let Some(title) = initial_page_title(server_data.as_ref()) {
            set_document_title(&title);
        }
    });

    let Some(ServerData { props, .. }) = server_data else {
        return rsx! {
            div {
                class: "page container",
                "This post could not be loaded. Please refresh the page."
            }
        };
    };

    rsx! {
        ShowPostPage {
            post: props.post,
            subscribed: props.subscribed,
            comments: props.comments,
            tags: props.tags,
        }
    }
}
