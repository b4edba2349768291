use infinity_catalog::ContactRequest;
use infinity_catalog::catalog::BUILTIN_SERVICES;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[component]
pub fn ContactSection(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section id="contact" class="contact-cta">
            <div class="container">
                <h3 class="section-title">"GET IN TOUCH"</h3>
                <p class="contact-cta-copy">
                    "Have questions about our property management services? Want to learn more "
                    "about how we can help you maximize your property's potential? Get in touch "
                    "with us today!"
                </p>
                <button class="btn btn-outline btn-large" on:click=move |_| open.set(true)>
                    "GET IN TOUCH"
                </button>
            </div>
        </section>

        <ContactModal open=open />
    }
}

#[component]
fn ContactModal(open: RwSignal<bool>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (service, set_service) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        attach_escape_listener(open);
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = ContactRequest {
            name: name.get(),
            email: email.get(),
            address: address.get(),
            service: service.get(),
            message: message.get(),
        };

        match request.validate() {
            Ok(()) => {
                deliver(&request);
                set_name.set(String::new());
                set_email.set(String::new());
                set_address.set(String::new());
                set_service.set(String::new());
                set_message.set(String::new());
                set_error.set(None);
                open.set(false);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <button class="modal-close" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                    <h2 class="modal-title">"Get in Touch"</h2>
                    <form class="contact-form" on:submit=submit>
                        <label class="field">
                            <span class="field-label">"Name"</span>
                            <input
                                type="text"
                                placeholder="Your Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Email"</span>
                            <input
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Property Address"</span>
                            <input
                                type="text"
                                placeholder="Street, city"
                                prop:value=move || address.get()
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Service"</span>
                            <select on:change=move |ev| set_service.set(event_target_value(&ev))>
                                <option value="">"General inquiry"</option>
                                {BUILTIN_SERVICES
                                    .iter()
                                    .map(|name| view! { <option value=*name>{*name}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field-label">"Message"</span>
                            <textarea
                                rows="4"
                                placeholder="How can we help you?"
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <Show when=move || error.get().is_some()>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>

                        <button type="submit" class="btn btn-solid">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Hand an accepted request to the delivery collaborator. The site has no
/// backend; the payload goes to the console where the embedding page's
/// submit hook picks it up.
fn deliver(request: &ContactRequest) {
    match request.to_json() {
        Ok(payload) => {
            web_sys::console::info_1(&JsValue::from_str(&format!("contact request: {payload}")));
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "contact request could not be serialized: {err}"
            )));
        }
    }
}

fn attach_escape_listener(open: RwSignal<bool>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                open.set(false);
            }
        }) as Box<dyn FnMut(_)>);

        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());

        closure.forget(); // Keep the closure alive
    }
}
