use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                "Designed & built by "
                <span class="footer-name">"Rachid El Mekkaouy"</span>
                " · Full Stack Developer"
            </p>
        </footer>
    }
}
