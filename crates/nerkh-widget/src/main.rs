#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Nerkh widget wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    nerkh_widget::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "nerkh-widget renders inside a browser page; build it with `trunk build` \
and embed it with e.g. `?mode=widget&type=table&assets=usd,eur&theme=dark`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_NOTICE.as_bytes())
}
