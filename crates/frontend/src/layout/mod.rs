pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: header bar on top, content below.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-main">
                {children()}
            </div>
        </div>
    }
}
