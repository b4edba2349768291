// Infinity Property Management — Leptos 0.8 landing page

mod sections;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    boot_log();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Opened from the hero, the call-to-action band, and closed by the
    // modal itself.
    let contact_open = RwSignal::new(false);

    view! {
        <Nav />
        <main>
            <Hero contact_open=contact_open />
            <Services />
            <Story />
            <Reviews />
            <ContactSection open=contact_open />
        </main>
        <Footer />
    }
}

/// One line to the browser console so support can confirm which build a
/// caller is looking at.
fn boot_log() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{COMPANY_NAME} — landing {}", env!("CARGO_PKG_VERSION"))),
        &JsValue::from_str("color: #888; font-family: monospace;"),
    );
}
