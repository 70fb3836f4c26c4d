//! Keeps the display awake while the game is up.

/// Request a screen wake lock. Call once at startup; the lock is held for
/// the lifetime of the process. Failure to acquire one is ignored.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn request() {
    use std::sync::OnceLock;

    static WAKE_LOCK: OnceLock<Option<keepawake::KeepAwake>> = OnceLock::new();

    WAKE_LOCK.get_or_init(|| {
        keepawake::Builder::default()
            .display(true)
            .reason("Playing Pup Quest")
            .app_name("Pup Quest")
            .app_reverse_domain("com.pupquest.game")
            .create()
            .ok()
    });
}

/// On the web, defer to the Screen Wake Lock API via miniquad's JS glue.
#[cfg(target_arch = "wasm32")]
pub(crate) fn request() {
    unsafe extern "C" {
        fn sapp_request_wake_lock();
    }

    unsafe { sapp_request_wake_lock() };
}
