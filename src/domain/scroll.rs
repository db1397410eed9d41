//! Scroll progress indicator arithmetic

/// Percentage of the page scrolled, in `[0, 100]`.
///
/// A page that fits in the viewport (`scroll_height <= client_height`) has
/// nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Inline script that keeps the progress bar element `id` in sync with the
/// page scroll, using the same formula as [`scroll_progress`].
pub fn progress_script(id: &str) -> String {
    format!(
        "(function(){{var bar=document.getElementById('{id}');if(!bar)return;\
        window.addEventListener('scroll',function(){{var d=document.documentElement;\
        var s=d.scrollHeight-d.clientHeight;var p=s>0?d.scrollTop/s*100:0;\
        bar.style.width=Math.min(100,Math.max(0,p))+'%';}});}})();"
    )
}
