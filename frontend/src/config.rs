use web_sys::window;

pub fn get_api_base_url() -> String {
    // In production the Mini App is served behind the same host as the API,
    // so relative URLs work there; on a dev server talk to the local backend.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.contains("localhost") && !host.contains("127.0.0.1") {
                return String::new();
            }
        }
    }

    // FastAPI dev backend
    "http://localhost:8000".to_string()
}
