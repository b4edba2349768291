use super::COMPANY_NAME;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-company">
                    <p>{COMPANY_NAME.to_uppercase()}</p>
                    <p>"386 Eglinton Ave W, Suite 201, Toronto, ON"</p>
                    <p>"info@infinitypropertymanagement.com"</p>
                </div>
                <div class="footer-links">
                    <a href="https://facebook.com" target="_blank" rel="noopener" class="footer-link">
                        "Facebook"
                    </a>
                    <a href="https://instagram.com" target="_blank" rel="noopener" class="footer-link">
                        "Instagram"
                    </a>
                </div>
            </div>
            <p class="footer-copyright">{format!("© {year} {COMPANY_NAME}")}</p>
        </footer>
    }
}
