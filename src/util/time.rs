/// Current time in seconds: the wall clock natively, page time on the web
#[cfg(not(target_arch = "wasm32"))]
pub fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Current time in seconds: the wall clock natively, page time on the web
#[cfg(target_arch = "wasm32")]
pub fn now_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now() / 1000.0)
        .unwrap_or(0.0)
}

/// A 32-bit seed mixed from the whole and fractional parts of [`now_secs`]
pub fn clock_seed() -> u32 {
    let now = now_secs();
    let whole = now as u64;
    let nanos = (now.fract() * 1e9) as u32;
    (whole as u32).rotate_left(16) ^ (whole >> 32) as u32 ^ nanos
}
