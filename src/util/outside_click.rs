//! Region membership test for outside-click dismissal.
//!
//! The composer registers one window-level pointer-down listener and asks,
//! for each tracked region, whether the event target falls inside it. A
//! region whose element is not currently rendered reports `Unmounted` and is
//! left alone.

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

/// Where a pointer-down landed relative to one tracked region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionHit {
    /// The region is not in the DOM.
    Unmounted,
    Inside,
    Outside,
}

/// A tracked region that can tell whether an event target lies within it.
pub trait Region<T: ?Sized> {
    fn contains_target(&self, target: Option<&T>) -> bool;
}

impl Region<web_sys::EventTarget> for web_sys::Node {
    fn contains_target(&self, target: Option<&web_sys::EventTarget>) -> bool {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            self.contains(target.and_then(|t| t.dyn_ref::<web_sys::Node>()))
        }
        // Never reached at runtime: the pointer-down listener only fires in
        // the browser build.
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
            false
        }
    }
}

/// Classify `target` against `region`.
pub fn hit_test<R, T>(region: Option<&R>, target: Option<&T>) -> RegionHit
where
    R: Region<T>,
    T: ?Sized,
{
    match region {
        None => RegionHit::Unmounted,
        Some(region) if region.contains_target(target) => RegionHit::Inside,
        Some(_) => RegionHit::Outside,
    }
}
