//! Browser entry point: panic hook, console logger, CSR mount.

#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;

    use regportal_client::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only does anything when built for the browser.
}
