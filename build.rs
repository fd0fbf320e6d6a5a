// Emits the revision token for the offline fallback page in the precache list.
// A fresh token per build forces the service worker to refetch the page.
fn main() {
    let revision = uuid::Uuid::new_v4().simple().to_string();
    println!("cargo:rustc-env=WHITEBOARD_BUILD_REVISION={}", revision);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
}
